use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS layer for a list of allowed origins.
///
/// Allows the methods the inventory routes use plus `OPTIONS` and caches
/// preflight responses for an hour.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Allows any origin. Development only.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Build a CORS layer from the comma-separated `CORS_ALLOWED_ORIGIN`.
///
/// `*` selects the permissive layer. Invalid entries are skipped with a
/// warning; an unset or effectively empty list disables CORS.
pub fn cors_from_env() -> Option<CorsLayer> {
    let raw = std::env::var("CORS_ALLOWED_ORIGIN").ok()?;
    if raw.trim() == "*" {
        return Some(create_permissive_cors_layer());
    }

    let origins = parse_origins(&raw);
    if origins.is_empty() {
        return None;
    }
    Some(create_cors_layer(origins))
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}
