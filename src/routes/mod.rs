pub mod health;
pub mod metrics;
pub mod pantry;

use axum::routing::{get, post};
use axum::Router;

use crate::app_state::AppState;

/// Application routes, without the metrics endpoint or middleware layers.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/v1/classify", post(pantry::classify_inventory))
        .route("/api/v1/unlocks", post(pantry::recommend_unlocks))
        .route(
            "/api/v1/recipes/{id}/availability",
            post(pantry::recipe_progress),
        )
        .route("/api/v1/shopping-list", post(pantry::build_shopping_list))
        .with_state(state)
}
