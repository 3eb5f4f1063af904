use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::InventoryResult,
    models::{CreateItem, Deletion, DeletionFilter, Item},
    repository::ItemRepository,
};

pub struct PgItemRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a modified row. A row that vanished since it was read counts as missing.
    async fn save(&self, active_model: entity::ActiveModel) -> InventoryResult<Option<Item>> {
        match self.base.update(active_model).await {
            Ok(model) => Ok(Some(model.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, input: CreateItem) -> InventoryResult<Item> {
        let active_model: entity::ActiveModel = input.into();
        let model = self.base.insert(active_model).await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn list(&self, filter: DeletionFilter) -> InventoryResult<Vec<Item>> {
        let query = match filter {
            DeletionFilter::ActiveOnly => {
                entity::Entity::find().filter(entity::Column::Deleted.eq(false))
            }
            DeletionFilter::DeletedOnly => {
                entity::Entity::find().filter(entity::Column::Deleted.eq(true))
            }
            DeletionFilter::All => entity::Entity::find(),
        };

        let models = query
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_by_stock(&self, in_stock: bool) -> InventoryResult<Vec<Item>> {
        let quantity = if in_stock {
            entity::Column::Quantity.gt(0)
        } else {
            entity::Column::Quantity.eq(0)
        };

        let models = entity::Entity::find()
            .filter(entity::Column::Deleted.eq(false))
            .filter(quantity)
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_id(&self, id: i32) -> InventoryResult<Option<Item>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn get_by_name(&self, name: &str) -> InventoryResult<Option<Item>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .order_by_asc(entity::Column::Id)
            .one(self.base.db())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, id: i32, input: CreateItem) -> InventoryResult<Option<Item>> {
        let Some(model) = self.base.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        active_model.name = Set(input.name);
        active_model.quantity = Set(input.quantity);

        let updated = self.save(active_model).await?;
        if updated.is_some() {
            tracing::info!(item_id = id, "Updated item");
        }
        Ok(updated)
    }

    async fn update_quantity(&self, id: i32, quantity: i32) -> InventoryResult<Option<Item>> {
        let Some(model) = self.base.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        active_model.quantity = Set(quantity);

        let updated = self.save(active_model).await?;
        if updated.is_some() {
            tracing::info!(item_id = id, quantity, "Updated item quantity");
        }
        Ok(updated)
    }

    async fn restore(&self, id: i32) -> InventoryResult<Option<Item>> {
        let Some(model) = self.base.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        active_model.deleted = Set(false);
        active_model.deletion_comments = Set(String::new());

        let restored = self.save(active_model).await?;
        if restored.is_some() {
            tracing::info!(item_id = id, "Restored item");
        }
        Ok(restored)
    }

    async fn delete(&self, id: i32, comments: String) -> InventoryResult<Option<Deletion>> {
        let Some(model) = self.base.find_by_id(id).await? else {
            return Ok(None);
        };

        if model.deleted {
            let rows_affected = self.base.delete_by_id(id).await?;
            if rows_affected == 0 {
                return Ok(None);
            }

            tracing::info!(item_id = id, "Purged item");
            return Ok(Some(Deletion::Purged(model.into())));
        }

        let mut active_model = model.into_active_model();
        active_model.deleted = Set(true);
        active_model.deletion_comments = Set(comments);

        let deleted = self.save(active_model).await?;
        if deleted.is_some() {
            tracing::info!(item_id = id, "Soft-deleted item");
        }
        Ok(deleted.map(Deletion::SoftDeleted))
    }
}
