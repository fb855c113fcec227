use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::recipe::Recipe;

/// Classification tier for a recipe against an inventory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, Display, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tier {
    Ready,
    AlmostThere,
    Far,
}

/// Outcome of matching a single recipe. Missing ids and names are parallel
/// and follow the order ingredients appear on the recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub recipe: Recipe,
    pub missing_ingredient_ids: Vec<String>,
    pub missing_ingredient_names: Vec<String>,
}

impl MatchResult {
    pub fn missing_count(&self) -> usize {
        self.missing_ingredient_ids.len()
    }
}

/// Three disjoint tiers covering the whole input catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub ready: Vec<MatchResult>,
    pub almost_there: Vec<MatchResult>,
    pub far: Vec<MatchResult>,
}

impl Classification {
    pub fn total(&self) -> usize {
        self.ready.len() + self.almost_there.len() + self.far.len()
    }

    pub fn tier_of(&self, recipe_id: &str) -> Option<Tier> {
        let contains = |group: &[MatchResult]| group.iter().any(|m| m.recipe.id == recipe_id);
        if contains(&self.ready) {
            Some(Tier::Ready)
        } else if contains(&self.almost_there) {
            Some(Tier::AlmostThere)
        } else if contains(&self.far) {
            Some(Tier::Far)
        } else {
            None
        }
    }
}

/// Suggested ingredient purchase, ranked by how many recipes it moves toward ready.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UnlockCandidate {
    pub ingredient_id: String,
    pub name: String,
    pub category: Option<String>,
    pub unlock_count: usize,
    pub example_recipe_names: Vec<String>,
}

/// How almost-there recipes contribute to unlock counts.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, EnumString, Display, PartialEq, Eq,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UnlockPolicy {
    /// Every almost-there recipe counts toward its first missing ingredient.
    #[default]
    FirstMissing,
    /// Only recipes missing exactly one ingredient count.
    SoleMissing,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MissingIngredient {
    pub id: String,
    pub name: String,
}

/// Progress of a single recipe, for detail views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeAvailability {
    pub recipe_id: String,
    pub recipe_name: String,
    pub tier: Tier,
    pub required_count: usize,
    pub satisfied_count: usize,
    pub optional_count: usize,
    pub optional_satisfied_count: usize,
    pub percent_complete: u8,
    pub missing: Vec<MissingIngredient>,
}

/// One line of a generated shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub ingredient_id: String,
    pub name: String,
    pub needed_for: Vec<String>,
}

/// Presentation order applied after classification.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, EnumString, Display, PartialEq, Eq,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecipeOrder {
    Alphabetical,
    #[default]
    PopularFirst,
}
