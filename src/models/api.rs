use garde::Validate;
use serde::{Deserialize, Serialize};

use super::matching::{RecipeOrder, UnlockPolicy};

/// Request to classify the catalog against an inventory.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    #[garde(length(max = 5000))]
    pub owned: Vec<String>,

    #[garde(range(min = 0, max = 10))]
    pub max_missing: Option<usize>,

    #[garde(skip)]
    pub order: Option<RecipeOrder>,
}

/// Request for "what should I buy next" suggestions.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UnlockRequest {
    #[garde(length(max = 5000))]
    pub owned: Vec<String>,

    #[garde(range(min = 0, max = 10))]
    pub max_missing: Option<usize>,

    #[garde(range(min = 1, max = 50))]
    pub top_n: Option<usize>,

    #[garde(skip)]
    pub policy: Option<UnlockPolicy>,
}

/// Inventory-only request body, used by the single-recipe availability view.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    #[garde(length(max = 5000))]
    pub owned: Vec<String>,
}

/// Request to build a shopping list for a set of recipes.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListRequest {
    #[garde(length(max = 5000))]
    pub owned: Vec<String>,

    #[garde(length(min = 1, max = 200))]
    pub recipe_ids: Vec<String>,
}

/// Catalog size summary reported by the health endpoint.
#[derive(Debug, Serialize)]
pub struct CatalogSummary {
    pub recipes: usize,
    pub ingredients: usize,
}
