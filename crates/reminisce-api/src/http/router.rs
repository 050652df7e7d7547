//! Axum router configuration with middleware.
//!
//! Middleware: permissive CORS and request tracing.

use axum::Router;
use axum::routing::{MethodRouter, get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let store: MethodRouter<AppState> =
        get(handlers::memory::store_memory).post(handlers::memory::store_memory);
    let recall: MethodRouter<AppState> =
        get(handlers::memory::recall_memory).post(handlers::memory::recall_memory);

    Router::new()
        .route("/postMemory", store.clone())
        .route("/store", store)
        .route("/getMemory", recall.clone())
        .route("/query", recall)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
