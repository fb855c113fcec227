use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use garde::Validate;
use tracing::{debug, info};

use crate::app_state::AppState;
use crate::error::{AppError, AppResult};
use crate::models::api::{
    AvailabilityRequest, ClassifyRequest, ShoppingListRequest, UnlockRequest,
};
use crate::models::{Classification, RecipeAvailability, ShoppingItem, UnlockCandidate};
use crate::services::classifier::{
    classify_with, match_recipe, recipe_availability, shopping_list, sort_matches,
};
use crate::services::recommender::rank_unlocks_with;

/// POST /api/v1/classify: Split the catalog into ready / almost-there / far.
pub async fn classify_inventory(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> AppResult<Json<Classification>> {
    request.validate()?;

    let start = Instant::now();
    let inventory = state.inventory(&request.owned);
    let max_missing = request.max_missing.unwrap_or(state.max_missing_for_almost);

    let mut classification = classify_with(&state.catalog.recipes, &inventory, max_missing);

    let order = request.order.unwrap_or_default();
    sort_matches(&mut classification.ready, order);
    sort_matches(&mut classification.almost_there, order);
    sort_matches(&mut classification.far, order);

    let elapsed = start.elapsed();
    metrics::counter!("pantry_classify_requests_total").increment(1);
    metrics::histogram!("pantry_classify_seconds").record(elapsed.as_secs_f64());

    info!(
        owned = inventory.owned_count(),
        ready = classification.ready.len(),
        almost_there = classification.almost_there.len(),
        far = classification.far.len(),
        %order,
        processing_time_ms = elapsed.as_millis() as u64,
        "Classified inventory"
    );

    Ok(Json(classification))
}

/// POST /api/v1/unlocks: Rank the ingredients worth buying next.
pub async fn recommend_unlocks(
    State(state): State<AppState>,
    Json(request): Json<UnlockRequest>,
) -> AppResult<Json<Vec<UnlockCandidate>>> {
    request.validate()?;

    let inventory = state.inventory(&request.owned);
    let max_missing = request.max_missing.unwrap_or(state.max_missing_for_almost);
    let top_n = request.top_n.unwrap_or(state.unlock_top_n);
    let policy = request.policy.unwrap_or(state.unlock_policy);

    let classification = classify_with(&state.catalog.recipes, &inventory, max_missing);
    let candidates = rank_unlocks_with(
        &classification.almost_there,
        &state.catalog.ingredients,
        top_n,
        policy,
    );

    metrics::counter!("pantry_unlock_requests_total").increment(1);
    info!(
        owned = inventory.owned_count(),
        almost_there = classification.almost_there.len(),
        candidates = candidates.len(),
        %policy,
        "Ranked unlock candidates"
    );

    Ok(Json(candidates))
}

/// POST /api/v1/recipes/{id}/availability: Progress for one recipe.
pub async fn recipe_progress(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
    Json(request): Json<AvailabilityRequest>,
) -> AppResult<Json<RecipeAvailability>> {
    request.validate()?;

    let recipe = state
        .catalog
        .find_recipe(&recipe_id)
        .ok_or_else(|| AppError::NotFound(format!("Recipe '{}' not found", recipe_id)))?;

    let inventory = state.inventory(&request.owned);
    let availability = recipe_availability(recipe, &inventory, state.max_missing_for_almost);

    Ok(Json(availability))
}

/// POST /api/v1/shopping-list: Missing ingredients for the chosen recipes.
pub async fn build_shopping_list(
    State(state): State<AppState>,
    Json(request): Json<ShoppingListRequest>,
) -> AppResult<Json<Vec<ShoppingItem>>> {
    request.validate()?;

    let inventory = state.inventory(&request.owned);

    let results: Vec<_> = request
        .recipe_ids
        .iter()
        .filter_map(|id| {
            let recipe = state.catalog.find_recipe(id);
            if recipe.is_none() {
                debug!(recipe_id = %id, "Unknown recipe in shopping list request, skipping");
            }
            recipe
        })
        .map(|recipe| match_recipe(recipe, &inventory, state.max_missing_for_almost).1)
        .collect();

    let items = shopping_list(&results);

    metrics::counter!("pantry_shopping_list_requests_total").increment(1);
    info!(
        recipes = results.len(),
        items = items.len(),
        "Built shopping list"
    );

    Ok(Json(items))
}
