//! Persistence of the order collection.
//!
//! Handlers only see [`OrderStore`]; the file-backed implementation lives in [`json_file`].

pub(crate) mod json_file;

use async_trait::async_trait;
use derive_more::{Display, Error, From};
use crate::server::model::order::{Order, StoredOrder};

#[derive(Debug, Display, Error, From)]
pub(crate) enum StoreError {
    #[display("orders file io failed, {_0}")]
    Io(std::io::Error),
    #[display("failed to encode orders, {_0}")]
    Encode(serde_json::Error),
}

/// Result of reading the whole collection once.
#[derive(Debug)]
pub(crate) enum Snapshot {
    /// the store did not exist and was created empty
    Created,
    Loaded(Vec<StoredOrder>),
    /// the store exists but is not a json array
    Corrupt(serde_json::Error),
}

impl Snapshot {
    /// Collapse to the externally visible collection; corrupt stores read as empty.
    pub fn into_orders(self) -> Vec<StoredOrder> {
        match self {
            Snapshot::Loaded(orders) => orders,
            Snapshot::Created | Snapshot::Corrupt(_) => Vec::new(),
        }
    }
}

#[async_trait]
pub(crate) trait OrderStore: Send + Sync {
    /// Read the whole collection, creating an empty store when none exists.
    async fn load(&self) -> Result<Snapshot, StoreError>;

    /// Replace the whole collection.
    async fn save(&self, orders: &[StoredOrder]) -> Result<(), StoreError>;

    /// Append one order as a single read-modify-write critical section.
    async fn append(&self, order: Order) -> Result<(), StoreError>;

    async fn list(&self) -> Result<Vec<StoredOrder>, StoreError> {
        Ok(self.load().await?.into_orders())
    }

    async fn find(&self, order_id: &str) -> Result<Option<StoredOrder>, StoreError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|order| order.matches(order_id)))
    }
}
