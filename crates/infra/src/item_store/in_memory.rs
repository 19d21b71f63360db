use std::collections::BTreeMap;

use tokio::sync::RwLock;

use barang_core::ItemId;
use barang_inventory::{Item, ItemFields};

use super::{ItemStore, StoreError, StoreResult};

#[derive(Debug)]
struct Inner {
    items: BTreeMap<ItemId, Item>,
    next_id: i64,
}

/// In-memory item store for tests/dev.
///
/// Ids start at 1 and are never reused. Listing returns id order.
#[derive(Debug)]
pub struct InMemoryItemStore {
    inner: RwLock<Inner>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ItemStore for InMemoryItemStore {
    async fn save(&self, id: Option<ItemId>, fields: ItemFields) -> StoreResult<Item> {
        let mut inner = self.inner.write().await;
        match id {
            Some(id) => {
                let item = inner.items.get_mut(&id).ok_or(StoreError::Missing(id))?;
                item.apply(fields);
                Ok(item.clone())
            }
            None => {
                let id = ItemId::new(inner.next_id);
                inner.next_id += 1;
                let item = Item::from_fields(id, fields);
                inner.items.insert(id, item.clone());
                Ok(item)
            }
        }
    }

    async fn find_by_id(&self, id: ItemId) -> StoreResult<Option<Item>> {
        Ok(self.inner.read().await.items.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Item>> {
        let inner = self.inner.read().await;
        Ok(inner.items.values().find(|i| i.name == name).cloned())
    }

    async fn find_by_serial_number(&self, serial_number: &str) -> StoreResult<Option<Item>> {
        let inner = self.inner.read().await;
        Ok(inner
            .items
            .values()
            .find(|i| i.serial_number == serial_number)
            .cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Item>> {
        Ok(self.inner.read().await.items.values().cloned().collect())
    }

    async fn find_by_name_contains(&self, fragment: &str) -> StoreResult<Vec<Item>> {
        let inner = self.inner.read().await;
        Ok(inner
            .items
            .values()
            .filter(|i| i.name.contains(fragment))
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: ItemId) -> StoreResult<()> {
        self.inner.write().await.items.remove(&id);
        Ok(())
    }
}
