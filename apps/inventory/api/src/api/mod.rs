use axum::{Router, routing::get};
use domain_inventory::{ItemService, PgItemRepository, handlers};

pub mod health;

/// API routes with state already applied.
///
/// All inventory operations live under `/inventory`.
pub fn routes(state: &crate::state::AppState) -> Router {
    let repository = PgItemRepository::new(state.db.clone());

    handlers::mount("/inventory", ItemService::new(repository))
}

/// `/ready`, backed by a database ping.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use core_config::{AppInfo, server::ServerConfig};
    use database::postgres::PostgresConfig;
    use domain_inventory::entity;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use tower::ServiceExt;

    fn state(db: DatabaseConnection) -> crate::state::AppState {
        crate::state::AppState {
            config: Config {
                app: AppInfo {
                    name: "inventory_api",
                    version: "0.1.0",
                },
                database: PostgresConfig::new("postgresql://localhost/inventory"),
                server: ServerConfig::default(),
                environment: Environment::Development,
                run_migrations: false,
            },
            db,
        }
    }

    fn row(id: i32, name: &str, quantity: i32) -> entity::Model {
        entity::Model {
            id,
            name: name.to_string(),
            quantity,
            deleted: false,
            deletion_comments: String::new(),
        }
    }

    #[tokio::test]
    async fn test_inventory_listing_through_postgres_repository() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(1, "Bolt", 3), row(2, "Nut", 0)]])
            .into_connection();

        let response = routes(&state(db))
            .oneshot(Request::builder().uri("/inventory").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["name"], "Bolt");
    }

    #[tokio::test]
    async fn test_inventory_listing_with_trailing_slash() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(1, "Bolt", 3)]])
            .into_connection();

        let response = routes(&state(db))
            .oneshot(
                Request::builder()
                    .uri("/inventory/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body[0]["name"], "Bolt");
    }

    #[tokio::test]
    async fn test_missing_item_is_404() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();

        let response = routes(&state(db))
            .oneshot(
                Request::builder()
                    .uri("/inventory/7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_ready_with_reachable_database() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let response = ready_router(state(db))
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
