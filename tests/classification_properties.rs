mod fixtures;
mod helpers;

use std::collections::HashSet;

use proptest::prelude::*;

use mixwise::models::{Recipe, RecipeIngredientRef, Tier};
use mixwise::services::classifier::{classify, classify_with, match_recipe};
use mixwise::services::inventory::Inventory;
use mixwise::services::recommender::rank_unlocks;
use mixwise::{is_satisfied, rank_unlocks as reexported_rank_unlocks};

use fixtures::{test_catalog, test_recipes, HOME_BAR};
use helpers::set;

const UNIVERSE: &[&str] = &["a", "b", "c", "d", "e", "f", "g", "h"];

fn ingredient_ref(index: usize, optional: bool) -> RecipeIngredientRef {
    let id = UNIVERSE[index];
    let name = format!("Ingredient {}", id.to_uppercase());
    if optional {
        RecipeIngredientRef::optional(id, name)
    } else {
        RecipeIngredientRef::required(id, name)
    }
}

fn arb_recipes() -> impl Strategy<Value = Vec<Recipe>> {
    prop::collection::vec(
        prop::collection::vec((0..UNIVERSE.len(), any::<bool>()), 0..6),
        0..12,
    )
    .prop_map(|recipes| {
        recipes
            .into_iter()
            .enumerate()
            .map(|(i, refs)| {
                let ingredients = refs
                    .into_iter()
                    .map(|(index, optional)| ingredient_ref(index, optional))
                    .collect();
                Recipe::new(format!("r{}", i), format!("Recipe {}", i), ingredients)
            })
            .collect()
    })
}

fn arb_subset() -> impl Strategy<Value = HashSet<String>> {
    prop::collection::hash_set(prop::sample::select(UNIVERSE), 0..UNIVERSE.len())
        .prop_map(|items| items.into_iter().map(str::to_string).collect())
}

fn rank(tier: Tier) -> u8 {
    match tier {
        Tier::Ready => 0,
        Tier::AlmostThere => 1,
        Tier::Far => 2,
    }
}

proptest! {
    #[test]
    fn tiers_are_disjoint_and_cover_input(
        recipes in arb_recipes(),
        owned in arb_subset(),
        staples in arb_subset(),
        max_missing in 0usize..4,
    ) {
        let classification = classify(&recipes, &owned, &staples, max_missing);
        prop_assert_eq!(classification.total(), recipes.len());

        let mut seen = HashSet::new();
        for result in classification
            .ready
            .iter()
            .chain(&classification.almost_there)
            .chain(&classification.far)
        {
            prop_assert!(seen.insert(result.recipe.id.clone()), "recipe classified twice");
        }
    }

    #[test]
    fn adding_an_ingredient_never_regresses(
        recipes in arb_recipes(),
        owned in arb_subset(),
        extra in prop::sample::select(UNIVERSE),
        max_missing in 0usize..4,
    ) {
        let before = Inventory::new(&owned, &HashSet::<String>::new());
        let after = before.with_added(extra);

        for recipe in &recipes {
            let (tier_before, result_before) = match_recipe(recipe, &before, max_missing);
            let (tier_after, result_after) = match_recipe(recipe, &after, max_missing);
            prop_assert!(result_after.missing_count() <= result_before.missing_count());
            prop_assert!(rank(tier_after) <= rank(tier_before));
        }
    }

    #[test]
    fn classification_is_idempotent(
        recipes in arb_recipes(),
        owned in arb_subset(),
        staples in arb_subset(),
    ) {
        let first = classify(&recipes, &owned, &staples, 2);
        let second = classify(&recipes, &owned, &staples, 2);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn staples_never_appear_as_missing(
        recipes in arb_recipes(),
        owned in arb_subset(),
        staples in arb_subset(),
    ) {
        let classification = classify(&recipes, &owned, &staples, 2);
        for result in classification
            .ready
            .iter()
            .chain(&classification.almost_there)
            .chain(&classification.far)
        {
            for id in &result.missing_ingredient_ids {
                prop_assert!(!staples.contains(id), "staple {} reported missing", id);
            }
        }
    }

    #[test]
    fn empty_inventory_only_reaches_small_recipes(
        recipes in arb_recipes(),
        max_missing in 0usize..4,
    ) {
        let empty = HashSet::new();
        let classification = classify(&recipes, &empty, &empty, max_missing);
        prop_assert!(classification.ready.is_empty());
        for result in &classification.almost_there {
            prop_assert!(result.missing_count() <= max_missing);
        }
        for recipe in &recipes {
            let required = recipe.required_ingredients().count();
            if required == 0 || required > max_missing {
                prop_assert_eq!(classification.tier_of(&recipe.id), Some(Tier::Far));
            }
        }
    }

    #[test]
    fn unlock_counts_never_exceed_almost_there(
        recipes in arb_recipes(),
        owned in arb_subset(),
        top_n in 1usize..10,
    ) {
        let catalog: Vec<_> = UNIVERSE
            .iter()
            .map(|id| mixwise::models::Ingredient::new(*id, format!("Ingredient {}", id.to_uppercase())))
            .collect();
        let classification = classify(&recipes, &owned, &HashSet::new(), 2);
        let candidates = rank_unlocks(&classification.almost_there, &catalog, top_n);

        prop_assert!(candidates.len() <= top_n);
        let total: usize = candidates.iter().map(|c| c.unlock_count).sum();
        prop_assert!(total <= classification.almost_there.len());
        for pair in candidates.windows(2) {
            prop_assert!(pair[0].unlock_count >= pair[1].unlock_count);
        }
        for candidate in &candidates {
            prop_assert!(candidate.example_recipe_names.len() <= 3);
        }
    }
}

#[test]
fn home_bar_tiers() {
    let catalog = test_catalog();
    let staples = catalog.staples(&[]);
    let owned: Vec<String> = HOME_BAR.iter().map(|s| s.to_string()).collect();
    let inventory = Inventory::with_catalog(&owned, &staples, &catalog.ingredients);

    let classification = classify_with(&catalog.recipes, &inventory, 2);
    let ids = |group: &[mixwise::models::MatchResult]| -> Vec<String> {
        group.iter().map(|m| m.recipe.id.clone()).collect()
    };

    assert_eq!(ids(&classification.ready), vec!["r-negroni"]);
    assert_eq!(
        ids(&classification.almost_there),
        vec![
            "r-boulevardier",
            "r-americano",
            "r-daiquiri",
            "r-margarita",
            "r-old-fashioned"
        ]
    );
    assert_eq!(
        ids(&classification.far),
        vec!["r-mojito", "r-blue-lagoon", "r-broken"]
    );

    let old_fashioned = &classification.almost_there[4];
    assert_eq!(
        old_fashioned.missing_ingredient_ids,
        vec!["bourbon", "angostura-bitters"]
    );
}

#[test]
fn home_bar_unlocks_favor_bourbon() {
    let catalog = test_catalog();
    let staples = catalog.staples(&[]);
    let owned: Vec<String> = HOME_BAR.iter().map(|s| s.to_string()).collect();
    let inventory = Inventory::with_catalog(&owned, &staples, &catalog.ingredients);
    let classification = classify_with(&catalog.recipes, &inventory, 2);

    let candidates = reexported_rank_unlocks(&classification.almost_there, &catalog.ingredients, 6);
    let ids: Vec<&str> = candidates.iter().map(|c| c.ingredient_id.as_str()).collect();
    assert_eq!(ids, vec!["bourbon", "soda-water", "simple-syrup", "tequila"]);
    assert_eq!(candidates[0].unlock_count, 2);
    assert_eq!(
        candidates[0].example_recipe_names,
        vec!["Boulevardier", "Old Fashioned"]
    );
}

#[test]
fn accented_name_matches_owned_slug() {
    let blue_lagoon = test_recipes()
        .into_iter()
        .find(|r| r.id == "r-blue-lagoon")
        .expect("fixture recipe");
    let curacao = &blue_lagoon.ingredients[1];

    let empty = HashSet::new();
    assert!(is_satisfied(curacao, &set(&["blue-curacao"]), &empty, &empty));
    assert!(is_satisfied(curacao, &empty, &set(&["blue curacao"]), &empty));
    assert!(!is_satisfied(curacao, &set(&["curacao"]), &empty, &empty));
}

#[test]
fn ice_is_always_available() {
    let catalog = test_catalog();
    let owned = set(&["white-rum", "lime-juice", "simple-syrup", "mint", "soda-water"]);
    let classification = classify(&catalog.recipes, &owned, &HashSet::new(), 2);
    assert_eq!(classification.tier_of("r-mojito"), Some(Tier::Ready));
}
