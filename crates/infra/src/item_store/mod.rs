//! Item persistence boundary.
//!
//! The store trusts its caller: it performs no validation and only reports
//! storage faults.

use std::sync::Arc;

use thiserror::Error;

use barang_core::ItemId;
use barang_inventory::{Item, ItemFields};

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryItemStore;
pub use postgres::PostgresItemStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Item store operation error.
///
/// These are **infrastructure errors** as opposed to domain errors
/// (validation, missing records).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A storage-level uniqueness constraint rejected the write.
    #[error("unique constraint violated: {0}")]
    Conflict(String),

    /// An update targeted an id that no longer exists.
    #[error("no stored item with id {0}")]
    Missing(ItemId),

    /// Any other storage failure (connection loss, malformed row, ...).
    #[error("storage failure: {0}")]
    Backend(String),
}

/// Narrow persistence contract for items.
#[async_trait::async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert when `id` is `None` (the store assigns one), otherwise replace
    /// the fields of the item with that id.
    async fn save(&self, id: Option<ItemId>, fields: ItemFields) -> StoreResult<Item>;

    async fn find_by_id(&self, id: ItemId) -> StoreResult<Option<Item>>;

    /// Exact match.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Item>>;

    /// Exact match.
    async fn find_by_serial_number(&self, serial_number: &str) -> StoreResult<Option<Item>>;

    async fn find_all(&self) -> StoreResult<Vec<Item>>;

    /// Case-sensitive substring match on the name.
    async fn find_by_name_contains(&self, fragment: &str) -> StoreResult<Vec<Item>>;

    async fn delete_by_id(&self, id: ItemId) -> StoreResult<()>;
}

#[async_trait::async_trait]
impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    async fn save(&self, id: Option<ItemId>, fields: ItemFields) -> StoreResult<Item> {
        (**self).save(id, fields).await
    }

    async fn find_by_id(&self, id: ItemId) -> StoreResult<Option<Item>> {
        (**self).find_by_id(id).await
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Item>> {
        (**self).find_by_name(name).await
    }

    async fn find_by_serial_number(&self, serial_number: &str) -> StoreResult<Option<Item>> {
        (**self).find_by_serial_number(serial_number).await
    }

    async fn find_all(&self) -> StoreResult<Vec<Item>> {
        (**self).find_all().await
    }

    async fn find_by_name_contains(&self, fragment: &str) -> StoreResult<Vec<Item>> {
        (**self).find_by_name_contains(fragment).await
    }

    async fn delete_by_id(&self, id: ItemId) -> StoreResult<()> {
        (**self).delete_by_id(id).await
    }
}
