//! snipstash-server
//!
//! The HTTP facade over the snippet store: router construction, route
//! handlers, error mapping, and middleware. The binary entrypoint lives in
//! `main.rs`; everything here is a library so tests can drive the real
//! application in-process.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Snippets can be whole source files; cap request bodies at 100 MB.
const MAX_BODY_BYTES: usize = 100 * 1024 * 1024;

/// Build the application router.
pub fn router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(routes::health::root))
        .route("/upload", post(routes::files::upload))
        .route("/files", get(routes::files::list_files))
        .route("/files/{id}", get(routes::files::get_file))
        .layer(axum_mw::from_fn(middleware::no_store::no_store_headers))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors_layer(allowed_origins))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Cross-origin access is restricted to the configured allow-list.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring unparseable allowed origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
