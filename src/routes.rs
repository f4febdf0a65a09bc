use axum::{
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../static/index.html");

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Planner page
        .route("/", get(index))

        // Health check
        .route("/api/health", get(health_check))

        // REST API routes
        .route("/api/languages", get(handlers::list_languages))
        .route("/api/models", get(handlers::list_models))
        .route("/api/travel-options", post(handlers::find_travel_options))
}

/// Full application with middleware, ready to serve
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
