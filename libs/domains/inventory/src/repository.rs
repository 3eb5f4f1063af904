use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::InventoryResult;
use crate::models::{CreateItem, Deletion, DeletionFilter, Item};

/// Repository trait for Item persistence
///
/// Every mutation is a lookup followed by a write on the same row. A missing id
/// yields `Ok(None)` and leaves the store untouched. Implementations do not
/// validate their input; that happens in the service and at the HTTP boundary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert a new, active item
    async fn create(&self, input: CreateItem) -> InventoryResult<Item>;

    /// List items by deletion state, ordered by id
    async fn list(&self, filter: DeletionFilter) -> InventoryResult<Vec<Item>>;

    /// List active items with `quantity > 0` (`in_stock`) or `quantity == 0`
    async fn list_by_stock(&self, in_stock: bool) -> InventoryResult<Vec<Item>>;

    /// Get an item by ID
    async fn get_by_id(&self, id: i32) -> InventoryResult<Option<Item>>;

    /// Get the lowest-id item with exactly this name
    async fn get_by_name(&self, name: &str) -> InventoryResult<Option<Item>>;

    /// Overwrite name and quantity
    async fn update(&self, id: i32, input: CreateItem) -> InventoryResult<Option<Item>>;

    /// Overwrite quantity only
    async fn update_quantity(&self, id: i32, quantity: i32) -> InventoryResult<Option<Item>>;

    /// Clear the deleted flag and comments
    async fn restore(&self, id: i32) -> InventoryResult<Option<Item>>;

    /// Soft-delete an active item, or remove an already soft-deleted one
    async fn delete(&self, id: i32, comments: String) -> InventoryResult<Option<Deletion>>;
}

#[derive(Debug, Default)]
struct Store {
    items: BTreeMap<i32, Item>,
    last_id: i32,
}

/// In-memory implementation of ItemRepository (for development/testing)
///
/// Ids are handed out from a counter that never goes back, so a purged id is
/// not reused.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: CreateItem) -> InventoryResult<Item> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let item = Item::new(store.last_id, input);
        store.items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, "Created item");
        Ok(item)
    }

    async fn list(&self, filter: DeletionFilter) -> InventoryResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store
            .items
            .values()
            .filter(|item| filter.matches(item.deleted))
            .cloned()
            .collect())
    }

    async fn list_by_stock(&self, in_stock: bool) -> InventoryResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store
            .items
            .values()
            .filter(|item| !item.deleted && (item.quantity > 0) == in_stock)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> InventoryResult<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.items.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> InventoryResult<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.items.values().find(|item| item.name == name).cloned())
    }

    async fn update(&self, id: i32, input: CreateItem) -> InventoryResult<Option<Item>> {
        let mut store = self.store.write().await;
        let Some(item) = store.items.get_mut(&id) else {
            return Ok(None);
        };

        item.apply_update(input);
        tracing::info!(item_id = id, "Updated item");
        Ok(Some(item.clone()))
    }

    async fn update_quantity(&self, id: i32, quantity: i32) -> InventoryResult<Option<Item>> {
        let mut store = self.store.write().await;
        let Some(item) = store.items.get_mut(&id) else {
            return Ok(None);
        };

        item.quantity = quantity;
        tracing::info!(item_id = id, quantity, "Updated item quantity");
        Ok(Some(item.clone()))
    }

    async fn restore(&self, id: i32) -> InventoryResult<Option<Item>> {
        let mut store = self.store.write().await;
        let Some(item) = store.items.get_mut(&id) else {
            return Ok(None);
        };

        item.restore();
        tracing::info!(item_id = id, "Restored item");
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: i32, comments: String) -> InventoryResult<Option<Deletion>> {
        let mut store = self.store.write().await;
        let Some(already_deleted) = store.items.get(&id).map(|item| item.deleted) else {
            return Ok(None);
        };

        if already_deleted {
            let removed = store.items.remove(&id);
            tracing::info!(item_id = id, "Purged item");
            return Ok(removed.map(Deletion::Purged));
        }

        let Some(item) = store.items.get_mut(&id) else {
            return Ok(None);
        };
        item.mark_deleted(comments);
        tracing::info!(item_id = id, "Soft-deleted item");
        Ok(Some(Deletion::SoftDeleted(item.clone())))
    }
}
