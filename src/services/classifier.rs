//! Recipe classification against an inventory.
//!
//! Partitions a recipe catalog into ready / almost-there / far tiers and
//! derives per-recipe availability and shopping lists from the same matching
//! rules. Everything here is a pure function of its inputs.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::{
    Classification, MatchResult, MissingIngredient, Recipe, RecipeAvailability, RecipeOrder,
    ShoppingItem, Tier,
};
use crate::services::inventory::Inventory;
use crate::services::reconciler::normalize_identifier;

/// Default number of missing required ingredients still counted as "almost there".
pub const DEFAULT_MAX_MISSING_FOR_ALMOST: usize = 2;

/// Classify `recipes` against an owned set and a staple set.
///
/// Owned and staple identifiers may be raw; they are normalized here.
pub fn classify(
    recipes: &[Recipe],
    owned: &HashSet<String>,
    staples: &HashSet<String>,
    max_missing_for_almost: usize,
) -> Classification {
    let inventory = Inventory::new(owned, staples);
    classify_with(recipes, &inventory, max_missing_for_almost)
}

/// Classify `recipes` against a prepared [`Inventory`].
///
/// Every input recipe lands in exactly one tier. Recipes with no required
/// ingredients are unscoreable and go to `far`. Within a tier, input order is
/// kept; presentation ordering is the caller's concern (see [`sort_matches`]).
pub fn classify_with(
    recipes: &[Recipe],
    inventory: &Inventory,
    max_missing_for_almost: usize,
) -> Classification {
    let mut classification = Classification::default();

    for recipe in recipes {
        let (tier, result) = match_recipe(recipe, inventory, max_missing_for_almost);
        match tier {
            Tier::Ready => classification.ready.push(result),
            Tier::AlmostThere => classification.almost_there.push(result),
            Tier::Far => classification.far.push(result),
        }
    }

    debug!(
        recipes = recipes.len(),
        ready = classification.ready.len(),
        almost_there = classification.almost_there.len(),
        far = classification.far.len(),
        max_missing_for_almost,
        "Classified recipe catalog"
    );

    classification
}

/// Match one recipe and decide its tier.
pub fn match_recipe(
    recipe: &Recipe,
    inventory: &Inventory,
    max_missing_for_almost: usize,
) -> (Tier, MatchResult) {
    let mut required_count = 0;
    let mut missing_ingredient_ids = Vec::new();
    let mut missing_ingredient_names = Vec::new();

    for ingredient in recipe.required_ingredients() {
        required_count += 1;
        if !inventory.satisfies(ingredient) {
            missing_ingredient_ids.push(ingredient.id.clone());
            missing_ingredient_names.push(ingredient.name.clone());
        }
    }

    let tier = tier_for(required_count, missing_ingredient_ids.len(), max_missing_for_almost);

    let result = MatchResult {
        recipe: recipe.clone(),
        missing_ingredient_ids,
        missing_ingredient_names,
    };

    (tier, result)
}

fn tier_for(required: usize, missing: usize, max_missing_for_almost: usize) -> Tier {
    if required == 0 {
        Tier::Far
    } else if missing == 0 {
        Tier::Ready
    } else if missing <= max_missing_for_almost {
        Tier::AlmostThere
    } else {
        Tier::Far
    }
}

/// Progress of a single recipe, for detail pages and progress bars.
pub fn recipe_availability(
    recipe: &Recipe,
    inventory: &Inventory,
    max_missing_for_almost: usize,
) -> RecipeAvailability {
    let mut required_count = 0;
    let mut satisfied_count = 0;
    let mut optional_count = 0;
    let mut optional_satisfied_count = 0;
    let mut missing = Vec::new();

    for ingredient in &recipe.ingredients {
        let satisfied = inventory.satisfies(ingredient);
        if ingredient.is_optional {
            optional_count += 1;
            if satisfied {
                optional_satisfied_count += 1;
            }
        } else {
            required_count += 1;
            if satisfied {
                satisfied_count += 1;
            } else {
                missing.push(MissingIngredient {
                    id: ingredient.id.clone(),
                    name: ingredient.name.clone(),
                });
            }
        }
    }

    let percent_complete = if required_count == 0 {
        0
    } else {
        ((satisfied_count as f64 / required_count as f64) * 100.0).round() as u8
    };

    RecipeAvailability {
        recipe_id: recipe.id.clone(),
        recipe_name: recipe.name.clone(),
        tier: tier_for(required_count, missing.len(), max_missing_for_almost),
        required_count,
        satisfied_count,
        optional_count,
        optional_satisfied_count,
        percent_complete,
        missing,
    }
}

/// Aggregate missing ingredients across `results` into a shopping list.
///
/// A missing ingredient joins an existing item when its normalized id or its
/// normalized name matches one already listed, so refs with different ids
/// for the same ingredient collapse into one line. Items keep first-seen
/// order; each carries the recipes that need it.
pub fn shopping_list(results: &[MatchResult]) -> Vec<ShoppingItem> {
    let mut items: Vec<ShoppingItem> = Vec::new();
    let mut by_id: HashMap<String, usize> = HashMap::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();

    for result in results {
        let missing = result
            .missing_ingredient_ids
            .iter()
            .zip(&result.missing_ingredient_names);

        for (id, name) in missing {
            let id_key = normalize_identifier(id);
            let name_key = normalize_identifier(name);
            if id_key.is_empty() && name_key.is_empty() {
                continue;
            }

            let existing = by_id
                .get(&id_key)
                .or_else(|| by_name.get(&name_key))
                .copied();
            let position = existing.unwrap_or_else(|| {
                items.push(ShoppingItem {
                    ingredient_id: id.clone(),
                    name: name.clone(),
                    needed_for: Vec::new(),
                });
                items.len() - 1
            });

            if !id_key.is_empty() {
                by_id.entry(id_key).or_insert(position);
            }
            if !name_key.is_empty() {
                by_name.entry(name_key).or_insert(position);
            }

            let needed_for = &mut items[position].needed_for;
            if !needed_for.contains(&result.recipe.name) {
                needed_for.push(result.recipe.name.clone());
            }
        }
    }

    items
}

/// Sort match results for display. Stable, so equal keys keep input order.
pub fn sort_matches(results: &mut [MatchResult], order: RecipeOrder) {
    match order {
        RecipeOrder::Alphabetical => results.sort_by(|a, b| by_name(&a.recipe, &b.recipe)),
        RecipeOrder::PopularFirst => results.sort_by(|a, b| {
            b.recipe
                .is_popular
                .cmp(&a.recipe.is_popular)
                .then_with(|| by_name(&a.recipe, &b.recipe))
        }),
    }
}

fn by_name(a: &Recipe, b: &Recipe) -> Ordering {
    normalize_identifier(&a.name).cmp(&normalize_identifier(&b.name))
}
