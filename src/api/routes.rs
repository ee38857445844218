use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::openrouter::CompletionClient;
use crate::store::RoastStore;

/// Shared, read-only handles constructed once at startup.
pub struct AppState {
    pub completion_client: CompletionClient,
    pub store: Arc<dyn RoastStore>,
}

impl AppState {
    pub fn new(completion_client: CompletionClient, store: Arc<dyn RoastStore>) -> Arc<Self> {
        Arc::new(AppState { completion_client, store })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/", get(handlers::root))
        .route("/generate-roast", post(handlers::generate_roast))
        .route("/random-names", get(handlers::random_names))
        .route("/status", get(handlers::list_status_checks).post(handlers::create_status_check))
        .route("/roasts", get(handlers::recent_roasts));

    // Nesting maps the inner "/" to "/api" only; "/api/" needs its own route.
    Router::new()
        .route("/api/", get(handlers::root))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
