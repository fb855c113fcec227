//! Ingredient identity reconciliation.
//!
//! Recipe data and ingredient data can come from independent backends that
//! assign incompatible identifiers (legacy numeric ids, UUIDs, name-derived
//! slugs) to the same ingredient. A reference is matched by normalized id
//! first, then by normalized free-text name, then by the name's slug.

use std::collections::HashSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::RecipeIngredientRef;

/// Ingredients every user is assumed to have, independent of the staple set.
pub const ALWAYS_AVAILABLE: &[&str] = &["ice", "ice cubes", "crushed ice", "ice cube"];

/// Canonical comparison form: trimmed, diacritics stripped, lowercase.
///
/// "Curaçao" and "Curacao" normalize to the same string.
pub fn normalize_identifier(raw: &str) -> String {
    raw.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// URL-safe slug derived from a name: "Crème de Mûre" -> "creme-de-mure".
pub fn create_slug(name: &str) -> String {
    let normalized = normalize_identifier(name);

    let mut slug = String::with_capacity(normalized.len());
    let mut pending_separator = false;

    for ch in normalized.chars() {
        if ch.is_alphanumeric() || ch == '-' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '_' {
            pending_separator = true;
        }
        // Any other punctuation is dropped.
    }

    slug.trim_matches('-').to_string()
}

/// Whether `candidate` is one of the ice forms exempt from ownership.
pub fn is_always_available(candidate: &str) -> bool {
    ALWAYS_AVAILABLE.contains(&candidate)
}

/// Decide whether a recipe ingredient reference is satisfied.
///
/// `owned`, `owned_names` and `staples` must already hold normalized strings
/// (see [`normalize_identifier`]); [`crate::services::inventory::Inventory`]
/// builds them that way. Unmatched or malformed references simply return
/// `false`.
pub fn is_satisfied(
    reference: &RecipeIngredientRef,
    owned: &HashSet<String>,
    owned_names: &HashSet<String>,
    staples: &HashSet<String>,
) -> bool {
    let id = normalize_identifier(&reference.id);
    let name = normalize_identifier(&reference.name);

    if is_always_available(&id) || is_always_available(&name) {
        return true;
    }

    if !id.is_empty() && (owned.contains(&id) || staples.contains(&id)) {
        return true;
    }

    if !name.is_empty() && (owned_names.contains(&name) || staples.contains(&name)) {
        return true;
    }

    let slug = create_slug(&name);
    !slug.is_empty() && slug != id && (owned.contains(&slug) || staples.contains(&slug))
}
