//! "What should I buy next" ranking over the almost-there tier.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Ingredient, MatchResult, UnlockCandidate, UnlockPolicy};
use crate::services::reconciler::normalize_identifier;

/// Default number of suggestions returned.
pub const DEFAULT_TOP_N: usize = 6;

/// Example recipe names kept per candidate.
pub const MAX_EXAMPLE_RECIPES: usize = 3;

/// Running tally for one resolved catalog ingredient, in first-seen order.
struct Tally<'a> {
    ingredient: &'a Ingredient,
    unlock_count: usize,
    example_recipe_names: Vec<String>,
}

/// Rank ingredients by how many almost-there recipes they move toward ready,
/// counting each recipe toward its first missing ingredient.
pub fn rank_unlocks(
    almost_there: &[MatchResult],
    ingredient_catalog: &[Ingredient],
    top_n: usize,
) -> Vec<UnlockCandidate> {
    rank_unlocks_with(almost_there, ingredient_catalog, top_n, UnlockPolicy::FirstMissing)
}

/// Rank unlock candidates under an explicit [`UnlockPolicy`].
///
/// Missing ingredients are resolved against `ingredient_catalog` before they
/// are counted, so refs with different ids that name the same ingredient
/// share one tally. Unresolved ids and unnamed catalog entries are dropped
/// rather than shown as raw identifiers. Ties on `unlock_count` keep
/// first-seen order.
pub fn rank_unlocks_with(
    almost_there: &[MatchResult],
    ingredient_catalog: &[Ingredient],
    top_n: usize,
    policy: UnlockPolicy,
) -> Vec<UnlockCandidate> {
    let lookup = CatalogLookup::new(ingredient_catalog);
    let mut tallies: Vec<Tally> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut unresolved = 0usize;

    for result in almost_there {
        let (Some(id), Some(name)) = (
            result.missing_ingredient_ids.first(),
            result.missing_ingredient_names.first(),
        ) else {
            continue;
        };

        if policy == UnlockPolicy::SoleMissing && result.missing_count() != 1 {
            continue;
        }

        let Some(ingredient) = lookup
            .resolve(id, name)
            .filter(|i| !i.name.trim().is_empty())
        else {
            unresolved += 1;
            continue;
        };

        let key = normalize_identifier(&ingredient.id);
        let position = *index.entry(key).or_insert_with(|| {
            tallies.push(Tally {
                ingredient,
                unlock_count: 0,
                example_recipe_names: Vec::new(),
            });
            tallies.len() - 1
        });

        let tally = &mut tallies[position];
        tally.unlock_count += 1;
        if tally.example_recipe_names.len() < MAX_EXAMPLE_RECIPES {
            tally.example_recipe_names.push(result.recipe.name.clone());
        }
    }

    let tallied = tallies.len();

    let mut candidates: Vec<UnlockCandidate> = tallies
        .into_iter()
        .map(|tally| UnlockCandidate {
            ingredient_id: tally.ingredient.id.clone(),
            name: tally.ingredient.name.clone(),
            category: tally.ingredient.category.clone(),
            unlock_count: tally.unlock_count,
            example_recipe_names: tally.example_recipe_names,
        })
        .collect();

    // Stable: equal counts stay in first-seen order.
    candidates.sort_by(|a, b| b.unlock_count.cmp(&a.unlock_count));
    candidates.truncate(top_n);

    debug!(
        almost_there = almost_there.len(),
        tallied,
        unresolved,
        returned = candidates.len(),
        %policy,
        "Ranked unlock candidates"
    );

    candidates
}

/// Normalized id and name index over the ingredient catalog.
struct CatalogLookup<'a> {
    by_id: HashMap<String, &'a Ingredient>,
    by_name: HashMap<String, &'a Ingredient>,
}

impl<'a> CatalogLookup<'a> {
    fn new(catalog: &'a [Ingredient]) -> Self {
        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();
        // First entry wins on collisions.
        for ingredient in catalog {
            by_id
                .entry(normalize_identifier(&ingredient.id))
                .or_insert(ingredient);
            by_name
                .entry(normalize_identifier(&ingredient.name))
                .or_insert(ingredient);
        }
        by_id.remove("");
        by_name.remove("");
        Self { by_id, by_name }
    }

    fn resolve(&self, id: &str, name: &str) -> Option<&'a Ingredient> {
        self.by_id
            .get(&normalize_identifier(id))
            .or_else(|| self.by_name.get(&normalize_identifier(name)))
            .copied()
    }
}
