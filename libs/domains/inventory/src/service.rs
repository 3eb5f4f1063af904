use std::sync::Arc;
use validator::Validate;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{CreateItem, DeleteItem, Deletion, DeletionFilter, Item, QuantityUpdate};
use crate::repository::ItemRepository;

/// Service layer for inventory operations
///
/// Validates DTOs again so callers that bypass the HTTP extractors get the same
/// guarantees, and turns `None` from the store into `InventoryError::NotFound`.
#[derive(Clone)]
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

fn validate<T: Validate>(input: &T) -> InventoryResult<()> {
    input
        .validate()
        .map_err(|e| InventoryError::Validation(e.to_string()))
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item
    pub async fn create_item(&self, input: CreateItem) -> InventoryResult<Item> {
        validate(&input)?;
        self.repository.create(input).await
    }

    /// List items by deletion state
    pub async fn list_items(&self, filter: DeletionFilter) -> InventoryResult<Vec<Item>> {
        tracing::debug!(%filter, "Listing items");
        self.repository.list(filter).await
    }

    /// List active items that are in stock (`true`) or out of stock (`false`)
    pub async fn list_by_stock(&self, in_stock: bool) -> InventoryResult<Vec<Item>> {
        self.repository.list_by_stock(in_stock).await
    }

    pub async fn get_item(&self, id: i32) -> InventoryResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(InventoryError::NotFound(id))
    }

    pub async fn get_item_by_name(&self, name: &str) -> InventoryResult<Item> {
        self.repository
            .get_by_name(name)
            .await?
            .ok_or_else(|| InventoryError::NameNotFound(name.to_string()))
    }

    /// Replace an item's name and quantity
    pub async fn update_item(&self, id: i32, input: CreateItem) -> InventoryResult<Item> {
        validate(&input)?;
        self.repository
            .update(id, input)
            .await?
            .ok_or(InventoryError::NotFound(id))
    }

    pub async fn update_quantity(&self, id: i32, input: QuantityUpdate) -> InventoryResult<Item> {
        validate(&input)?;
        self.repository
            .update_quantity(id, input.quantity)
            .await?
            .ok_or(InventoryError::NotFound(id))
    }

    /// Bring a soft-deleted item back; active items are returned unchanged
    pub async fn restore_item(&self, id: i32) -> InventoryResult<Item> {
        self.repository
            .restore(id)
            .await?
            .ok_or(InventoryError::NotFound(id))
    }

    /// Soft-delete an active item, or purge one that is already soft-deleted
    pub async fn delete_item(&self, id: i32, input: DeleteItem) -> InventoryResult<Deletion> {
        validate(&input)?;
        self.repository
            .delete(id, input.comments)
            .await?
            .ok_or(InventoryError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;
    use mockall::predicate::eq;

    fn widget(id: i32) -> Item {
        Item::new(
            id,
            CreateItem {
                name: "Widget".to_string(),
                quantity: 5,
            },
        )
    }

    #[tokio::test]
    async fn test_create_rejects_negative_quantity_before_store() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo.expect_create().never();

        let service = ItemService::new(mock_repo);
        let result = service
            .create_item(CreateItem {
                name: "Widget".to_string(),
                quantity: -1,
            })
            .await;

        assert!(matches!(result, Err(InventoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_quantity_rejects_negative_before_store() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo.expect_update_quantity().never();

        let service = ItemService::new(mock_repo);
        let result = service
            .update_quantity(1, QuantityUpdate { quantity: -3 })
            .await;

        assert!(matches!(result, Err(InventoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_rejects_long_comments_before_store() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo.expect_delete().never();

        let service = ItemService::new(mock_repo);
        let result = service
            .delete_item(
                1,
                DeleteItem {
                    comments: "x".repeat(301),
                },
            )
            .await;

        assert!(matches!(result, Err(InventoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_missing_item_is_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(None));

        let service = ItemService::new(mock_repo);
        let result = service.get_item(7).await;

        assert!(matches!(result, Err(InventoryError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_get_by_name_missing_is_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_get_by_name()
            .withf(|name| name == "Gizmo")
            .returning(|_| Ok(None));

        let service = ItemService::new(mock_repo);
        let result = service.get_item_by_name("Gizmo").await;

        assert!(matches!(result, Err(InventoryError::NameNotFound(name)) if name == "Gizmo"));
    }

    #[tokio::test]
    async fn test_update_quantity_passes_value_through() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_update_quantity()
            .with(eq(2), eq(0))
            .times(1)
            .returning(|id, quantity| {
                let mut item = widget(id);
                item.quantity = quantity;
                Ok(Some(item))
            });

        let service = ItemService::new(mock_repo);
        let item = service
            .update_quantity(2, QuantityUpdate { quantity: 0 })
            .await
            .unwrap();

        assert_eq!(item.quantity, 0);
    }

    #[tokio::test]
    async fn test_delete_forwards_comments() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(4), eq("expired".to_string()))
            .times(1)
            .returning(|id, comments| {
                let mut item = widget(id);
                item.mark_deleted(comments);
                Ok(Some(Deletion::SoftDeleted(item)))
            });

        let service = ItemService::new(mock_repo);
        let outcome = service
            .delete_item(
                4,
                DeleteItem {
                    comments: "expired".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(!outcome.is_purged());
        assert_eq!(outcome.item().deletion_comments, "expired");
    }

    #[tokio::test]
    async fn test_delete_missing_item_is_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo.expect_delete().returning(|_, _| Ok(None));

        let service = ItemService::new(mock_repo);
        let result = service.delete_item(11, DeleteItem::default()).await;

        assert!(matches!(result, Err(InventoryError::NotFound(11))));
    }

    #[tokio::test]
    async fn test_restore_missing_item_is_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo.expect_restore().returning(|_| Ok(None));

        let service = ItemService::new(mock_repo);
        assert!(matches!(
            service.restore_item(5).await,
            Err(InventoryError::NotFound(5))
        ));
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_list()
            .returning(|_| Err(InventoryError::Database("down".to_string())));

        let service = ItemService::new(mock_repo);
        let result = service.list_items(DeletionFilter::All).await;

        assert!(matches!(result, Err(InventoryError::Database(_))));
    }
}
