use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(axum_helpers::ErrorResponse)),
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "Inventory items with soft delete and restore. \
            Deleting an item that is already soft-deleted removes it permanently."
    ),
    nest(
        (path = "/inventory", api = domain_inventory::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_paths_nested() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/inventory",
            "/inventory/deleted",
            "/inventory/all",
            "/inventory/in-stock",
            "/inventory/out-of-stock",
            "/inventory/by-name/{name}",
            "/inventory/restore/{id}",
            "/inventory/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
    }
}
