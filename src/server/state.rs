use std::path::{Path, PathBuf};
use std::sync::Arc;
use crate::server::storage::OrderStore;

#[derive(Clone)]
pub(crate) struct AppState {
    store: Arc<dyn OrderStore>,
    public_dir: PathBuf,
}

impl AppState {
    pub fn new(store: Arc<dyn OrderStore>, public_dir: PathBuf) -> Self {
        Self {
            store,
            public_dir,
        }
    }

    pub fn get_store(&self) -> Arc<dyn OrderStore> {
        self.store.clone()
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }
}
