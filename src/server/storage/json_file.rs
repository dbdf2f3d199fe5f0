use std::path::{Path, PathBuf};
use async_trait::async_trait;
use log::{error, info, warn};
use tokio::fs;
use tokio::sync::RwLock;
use crate::server::model::order::{Order, StoredOrder};
use crate::server::storage::{OrderStore, Snapshot, StoreError};

const EMPTY_COLLECTION: &[u8] = b"[]";

/// Order collection persisted as one pretty-printed json array.
///
/// Every read parses the whole file and every write replaces it. Records are kept as they were
/// found; only a file that is not a json array counts as corrupt. The lock is shared by readers
/// and held exclusively across the read-modify-write cycle of [`OrderStore::append`], so
/// concurrent placements never overwrite each other.
pub(crate) struct JsonFileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating it (and missing parent directories) as an empty collection.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, StoreError> {
        let path = path.into();
        ensure_exists(&path, EMPTY_COLLECTION).await?;
        Ok(Self {
            path,
            lock: RwLock::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_snapshot(&self) -> Result<Snapshot, StoreError> {
        if ensure_exists(&self.path, EMPTY_COLLECTION).await? {
            return Ok(Snapshot::Created);
        }
        let raw = fs::read(&self.path).await?;
        match serde_json::from_slice::<Vec<StoredOrder>>(&raw) {
            Ok(orders) => Ok(Snapshot::Loaded(orders)),
            Err(e) => {
                error!("failed to parse orders file {}, {}", self.path.display(), e);
                Ok(Snapshot::Corrupt(e))
            }
        }
    }

    async fn write_snapshot(&self, orders: &[StoredOrder]) -> Result<(), StoreError> {
        let data = serde_json::to_vec_pretty(orders)?;
        replace_file(&self.path, &data).await
    }
}

#[async_trait]
impl OrderStore for JsonFileStore {
    async fn load(&self) -> Result<Snapshot, StoreError> {
        let _guard = self.lock.read().await;
        self.read_snapshot().await
    }

    async fn save(&self, orders: &[StoredOrder]) -> Result<(), StoreError> {
        let _guard = self.lock.write().await;
        self.write_snapshot(orders).await
    }

    async fn append(&self, order: Order) -> Result<(), StoreError> {
        let order = StoredOrder::try_from(order)?;
        let _guard = self.lock.write().await;
        let snapshot = self.read_snapshot().await?;
        if let Snapshot::Corrupt(e) = &snapshot {
            warn!("overwriting unreadable orders file {}, {}", self.path.display(), e);
        }
        let mut orders = snapshot.into_orders();
        orders.push(order);
        self.write_snapshot(&orders).await
    }
}

/// Create `path` with `default` as its content unless it already exists.
///
/// Returns whether the file was created.
pub(crate) async fn ensure_exists(path: &Path, default: &[u8]) -> Result<bool, StoreError> {
    if fs::try_exists(path).await? {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    replace_file(path, default).await?;
    info!("created orders file {}", path.display());
    Ok(true)
}

/// Write to a sibling temp file, then rename it over `path`.
async fn replace_file(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    let tmp = temp_sibling(path);
    let written = match fs::write(&tmp, data).await {
        Ok(()) => fs::rename(&tmp, path).await,
        Err(e) => Err(e),
    };
    if let Err(e) = written {
        fs::remove_file(&tmp).await.ok();
        return Err(e.into());
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(format!(".{}.tmp", rand::random::<u32>()));
    path.with_file_name(name)
}
