use crate::models::{CreateItem, Item};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the inventory table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub deleted: bool,
    pub deletion_comments: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            quantity: model.quantity,
            deleted: model.deleted,
            deletion_comments: model.deletion_comments,
        }
    }
}

// The id is left to the serial column
impl From<CreateItem> for ActiveModel {
    fn from(input: CreateItem) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            quantity: Set(input.quantity),
            deleted: Set(false),
            deletion_comments: Set(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_item_to_active_model() {
        let active: ActiveModel = CreateItem {
            name: "Bolt".to_string(),
            quantity: 3,
        }
        .into();

        assert!(matches!(active.id, NotSet));
        assert_eq!(active.name, Set("Bolt".to_string()));
        assert_eq!(active.quantity, Set(3));
        assert_eq!(active.deleted, Set(false));
        assert_eq!(active.deletion_comments, Set(String::new()));
    }

    #[test]
    fn test_model_to_item() {
        let item: Item = Model {
            id: 4,
            name: "Nut".to_string(),
            quantity: 0,
            deleted: true,
            deletion_comments: "recalled".to_string(),
        }
        .into();

        assert_eq!(item.id, 4);
        assert!(item.deleted);
        assert_eq!(item.deletion_comments, "recalled");
    }
}
