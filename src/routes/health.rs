use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;
use crate::models::api::CatalogSummary;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog: CatalogSummary,
}

/// GET /health: Reports catalog size; degraded when no recipes are loaded.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog = CatalogSummary {
        recipes: state.catalog.recipes.len(),
        ingredients: state.catalog.ingredients.len(),
    };

    let healthy = catalog.recipes > 0;
    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if healthy {
            "ok".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog,
    };

    (status_code, Json(response))
}
