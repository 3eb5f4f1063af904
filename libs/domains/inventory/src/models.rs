use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Item entity - a single inventory record as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned on creation
    pub id: i32,
    /// Item name
    pub name: String,
    /// Units on hand (never negative)
    pub quantity: i32,
    /// Whether the item has been soft-deleted
    pub deleted: bool,
    /// Reason given when the item was soft-deleted
    pub deletion_comments: String,
}

/// DTO carrying the client-editable fields of an item.
///
/// Used both for creation and for full updates (`PUT /{id}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(max = 100))]
    #[schema(max_length = 100)]
    pub name: String,
    #[validate(range(min = 0))]
    #[schema(minimum = 0)]
    pub quantity: i32,
}

/// Query parameters for `PATCH /{id}`
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuantityUpdate {
    /// New quantity for the item
    #[serde(default)]
    #[validate(range(min = 0))]
    #[param(minimum = 0, default = 0)]
    pub quantity: i32,
}

/// Query parameters for `DELETE /{id}`
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteItem {
    /// Why the item is being removed; stored on soft delete
    #[serde(default)]
    #[validate(length(max = 300))]
    #[param(max_length = 300)]
    pub comments: String,
}

/// Which items to return from a listing, keyed on the `deleted` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "snake_case")]
pub enum DeletionFilter {
    /// Items with `deleted = false`
    #[default]
    ActiveOnly,
    /// Items with `deleted = true`
    DeletedOnly,
    /// Every item regardless of state
    All,
}

impl DeletionFilter {
    /// Whether an item with the given `deleted` flag passes this filter
    pub fn matches(self, deleted: bool) -> bool {
        match self {
            DeletionFilter::ActiveOnly => !deleted,
            DeletionFilter::DeletedOnly => deleted,
            DeletionFilter::All => true,
        }
    }
}

/// Outcome of a delete request.
///
/// An active item is soft-deleted; an item that was already soft-deleted is
/// removed for good. Both variants carry the record as the caller last sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion {
    SoftDeleted(Item),
    Purged(Item),
}

impl Deletion {
    pub fn item(&self) -> &Item {
        match self {
            Deletion::SoftDeleted(item) | Deletion::Purged(item) => item,
        }
    }

    pub fn into_item(self) -> Item {
        match self {
            Deletion::SoftDeleted(item) | Deletion::Purged(item) => item,
        }
    }

    pub fn is_purged(&self) -> bool {
        matches!(self, Deletion::Purged(_))
    }
}

impl Item {
    /// Build a freshly created item from its input DTO
    pub fn new(id: i32, input: CreateItem) -> Self {
        Self {
            id,
            name: input.name,
            quantity: input.quantity,
            deleted: false,
            deletion_comments: String::new(),
        }
    }

    /// Whether the item counts as in stock
    pub fn in_stock(&self) -> bool {
        !self.deleted && self.quantity > 0
    }

    /// Overwrite name and quantity; deletion state is left alone
    pub fn apply_update(&mut self, update: CreateItem) {
        self.name = update.name;
        self.quantity = update.quantity;
    }

    pub fn mark_deleted(&mut self, comments: String) {
        self.deleted = true;
        self.deletion_comments = comments;
    }

    pub fn restore(&mut self) {
        self.deleted = false;
        self.deletion_comments.clear();
    }
}
