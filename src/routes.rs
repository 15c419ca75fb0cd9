use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Form page
        .route("/", get(handlers::index_get).post(handlers::index_post))
        // JSON API
        .route("/api/translate", post(handlers::api_translate))
        .route("/api/invoke", post(handlers::api_invoke))
        .route("/api/health", get(handlers::health_check))
}

/// The complete application with state and middleware attached
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
