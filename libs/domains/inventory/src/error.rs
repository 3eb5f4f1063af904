use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Item not found: {0}")]
    NotFound(i32),

    #[error("Item named '{0}' not found")]
    NameNotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Convert InventoryError to AppError for standardized error responses
impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::NotFound(id) => AppError::NotFound(format!("Item {} not found", id)),
            InventoryError::NameNotFound(name) => {
                AppError::NotFound(format!("Item '{}' not found", name))
            }
            InventoryError::Validation(msg) => AppError::UnprocessableEntity(msg),
            InventoryError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for InventoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        InventoryError::Database(err.to_string())
    }
}
