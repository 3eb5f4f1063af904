use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use axum_helpers::{
    IdPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        InternalServerErrorResponse, NotFoundResponse, UnprocessableEntityResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::InventoryResult;
use crate::models::{CreateItem, DeleteItem, DeletionFilter, Item, QuantityUpdate};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for the Inventory API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_active,
        list_deleted,
        list_all,
        list_in_stock,
        list_out_of_stock,
        get_item_by_name,
        get_item,
        create_item,
        update_item,
        restore_item,
        update_quantity,
        delete_item,
    ),
    components(
        schemas(Item, CreateItem),
        responses(
            NotFoundResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Inventory", description = "Inventory item lifecycle: create, list, update, soft delete and restore")
    )
)]
pub struct ApiDoc;

/// Create the inventory router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    routes::<R>().with_state(Arc::new(service))
}

/// Mount the inventory endpoints under `prefix`.
///
/// The collection answers at both `{prefix}` and `{prefix}/`; nesting alone
/// only serves the former.
pub fn mount<R: ItemRepository + 'static>(prefix: &str, service: ItemService<R>) -> Router {
    Router::new()
        .route(
            &format!("{prefix}/"),
            get(list_active::<R>).post(create_item::<R>),
        )
        .nest(prefix, routes::<R>())
        .with_state(Arc::new(service))
}

fn routes<R: ItemRepository + 'static>() -> Router<Arc<ItemService<R>>> {
    Router::new()
        .route("/", get(list_active::<R>).post(create_item::<R>))
        .route("/deleted", get(list_deleted::<R>))
        .route("/all", get(list_all::<R>))
        .route("/in-stock", get(list_in_stock::<R>))
        .route("/out-of-stock", get(list_out_of_stock::<R>))
        .route("/by-name/{name}", get(get_item_by_name::<R>))
        .route("/restore/{id}", put(restore_item::<R>))
        .route(
            "/{id}",
            get(get_item::<R>)
                .put(update_item::<R>)
                .patch(update_quantity::<R>)
                .delete(delete_item::<R>),
        )
}

/// List active items
#[utoipa::path(
    get,
    path = "",
    tag = "Inventory",
    responses(
        (status = 200, description = "Items that are not deleted", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_active<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> InventoryResult<Json<Vec<Item>>> {
    let items = service.list_items(DeletionFilter::ActiveOnly).await?;
    Ok(Json(items))
}

/// List soft-deleted items
#[utoipa::path(
    get,
    path = "/deleted",
    tag = "Inventory",
    responses(
        (status = 200, description = "Items that are soft-deleted", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_deleted<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> InventoryResult<Json<Vec<Item>>> {
    let items = service.list_items(DeletionFilter::DeletedOnly).await?;
    Ok(Json(items))
}

/// List every item regardless of deletion state
#[utoipa::path(
    get,
    path = "/all",
    tag = "Inventory",
    responses(
        (status = 200, description = "All items", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_all<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> InventoryResult<Json<Vec<Item>>> {
    let items = service.list_items(DeletionFilter::All).await?;
    Ok(Json(items))
}

/// List active items with a positive quantity
#[utoipa::path(
    get,
    path = "/in-stock",
    tag = "Inventory",
    responses(
        (status = 200, description = "Active items with quantity > 0", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_in_stock<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> InventoryResult<Json<Vec<Item>>> {
    let items = service.list_by_stock(true).await?;
    Ok(Json(items))
}

/// List active items with zero quantity
#[utoipa::path(
    get,
    path = "/out-of-stock",
    tag = "Inventory",
    responses(
        (status = 200, description = "Active items with quantity = 0", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_out_of_stock<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> InventoryResult<Json<Vec<Item>>> {
    let items = service.list_by_stock(false).await?;
    Ok(Json(items))
}

/// Get an item by exact name
#[utoipa::path(
    get,
    path = "/by-name/{name}",
    tag = "Inventory",
    params(
        ("name" = String, Path, description = "Item name")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item_by_name<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(name): Path<String>,
) -> InventoryResult<Json<Item>> {
    let item = service.get_item_by_name(&name).await?;
    Ok(Json(item))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Inventory",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> InventoryResult<Json<Item>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Inventory",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> InventoryResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace an item's name and quantity
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Inventory",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    request_body = CreateItem,
    responses(
        (status = 200, description = "Item updated successfully", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> InventoryResult<Json<Item>> {
    let item = service.update_item(id, input).await?;
    Ok(Json(item))
}

/// Restore a soft-deleted item
///
/// Clears the deleted flag and the deletion comments. Restoring an active item
/// returns it unchanged.
#[utoipa::path(
    put,
    path = "/restore/{id}",
    tag = "Inventory",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item restored", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn restore_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> InventoryResult<Json<Item>> {
    let item = service.restore_item(id).await?;
    Ok(Json(item))
}

/// Set an item's quantity
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Inventory",
    params(
        ("id" = i32, Path, description = "Item ID"),
        QuantityUpdate
    ),
    responses(
        (status = 200, description = "Quantity updated", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_quantity<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedQuery(input): ValidatedQuery<QuantityUpdate>,
) -> InventoryResult<Json<Item>> {
    let item = service.update_quantity(id, input).await?;
    Ok(Json(item))
}

/// Delete an item
///
/// The first delete on an active item is a soft delete: the item is flagged and
/// the comments are stored. Deleting an item that is already soft-deleted removes
/// it permanently; the response then carries the record as it was before removal.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Inventory",
    params(
        ("id" = i32, Path, description = "Item ID"),
        DeleteItem
    ),
    responses(
        (status = 200, description = "Item soft-deleted, or permanently removed if it was already deleted", body = Item),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    ValidatedQuery(input): ValidatedQuery<DeleteItem>,
) -> InventoryResult<Json<Item>> {
    let outcome = service.delete_item(id, input).await?;
    if outcome.is_purged() {
        tracing::warn!(item_id = id, "Item permanently removed");
    }
    Ok(Json(outcome.into_item()))
}
