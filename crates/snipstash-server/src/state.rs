use std::sync::Arc;

use snipstash_storage::SnippetStore;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The store handle is constructed once at startup and passed explicitly;
/// handlers never touch ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SnippetStore>,
}
