use std::collections::HashSet;

use crate::models::{Ingredient, RecipeIngredientRef};
use crate::services::reconciler::{is_satisfied, normalize_identifier};

/// Staples supplied regardless of what the catalog flags.
pub const DEFAULT_STAPLES: &[&str] = &["ice", "water"];

/// What a user has on hand, in normalized form.
///
/// Owned identifiers are matched both as ids and as names, so a caller that
/// only knows free-text names ("blue curacao") still reconciles against
/// recipes that carry a different id for the same ingredient.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    owned_ids: HashSet<String>,
    owned_names: HashSet<String>,
    staples: HashSet<String>,
}

impl Inventory {
    pub fn new<O, S>(owned: O, staples: S) -> Self
    where
        O: IntoIterator,
        O::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let mut inventory = Self {
            staples: normalized_set(staples),
            ..Self::default()
        };
        for id in owned {
            inventory.insert(id.as_ref());
        }
        inventory
    }

    /// Like [`Inventory::new`], also registering the catalog names of owned ids.
    pub fn with_catalog<O, S>(owned: O, staples: S, catalog: &[Ingredient]) -> Self
    where
        O: IntoIterator,
        O::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        let mut inventory = Self::new(owned, staples);
        for ingredient in catalog {
            if inventory.owned_ids.contains(&normalize_identifier(&ingredient.id)) {
                let name = normalize_identifier(&ingredient.name);
                if !name.is_empty() {
                    inventory.owned_names.insert(name);
                }
            }
        }
        inventory
    }

    /// Copy of this inventory with one more owned ingredient.
    pub fn with_added(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.insert(id);
        next
    }

    pub fn satisfies(&self, reference: &RecipeIngredientRef) -> bool {
        is_satisfied(reference, &self.owned_ids, &self.owned_names, &self.staples)
    }

    pub fn owned_count(&self) -> usize {
        self.owned_ids.len()
    }

    pub fn staples(&self) -> &HashSet<String> {
        &self.staples
    }

    fn insert(&mut self, raw: &str) {
        let normalized = normalize_identifier(raw);
        if normalized.is_empty() {
            return;
        }
        self.owned_names.insert(normalized.clone());
        self.owned_ids.insert(normalized);
    }
}

/// Staple identifiers: catalog-flagged staples (id and name), the built-in
/// defaults, and any caller-supplied extras.
pub fn staples_from_catalog(catalog: &[Ingredient], extra: &[String]) -> HashSet<String> {
    let mut staples: HashSet<String> = DEFAULT_STAPLES
        .iter()
        .map(|s| s.to_string())
        .chain(extra.iter().map(|s| normalize_identifier(s)))
        .filter(|s| !s.is_empty())
        .collect();

    for ingredient in catalog.iter().filter(|i| i.is_staple) {
        for key in [&ingredient.id, &ingredient.name] {
            let normalized = normalize_identifier(key);
            if !normalized.is_empty() {
                staples.insert(normalized);
            }
        }
    }

    staples
}

fn normalized_set<I>(items: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| normalize_identifier(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}
