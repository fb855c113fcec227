//! Catalog consistency checks.
//!
//! Flags records the matching core would silently degrade on: bad or
//! duplicate slugs, unnamed ingredients, unscoreable recipes, and recipe
//! ingredients that resolve to nothing in the ingredient catalog.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use strsim::jaro_winkler;
use strum::Display;

use crate::services::catalog::{recipe_slug, Catalog};
use crate::services::reconciler::normalize_identifier;

/// Minimum similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.90;

/// Recipes with fewer ingredients than this are flagged.
const MIN_EXPECTED_INGREDIENTS: usize = 2;

/// Recipes with more ingredients than this are flagged.
const MAX_EXPECTED_INGREDIENTS: usize = 15;

#[derive(Debug, Clone, Copy, Serialize, Display, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuditFinding {
    pub severity: Severity,
    pub recipe_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub recipes_checked: usize,
    pub ingredients_checked: usize,
    pub findings: Vec<AuditFinding>,
}

impl AuditReport {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }

    fn push(&mut self, severity: Severity, recipe_id: &str, message: String) {
        self.findings.push(AuditFinding {
            severity,
            recipe_id: recipe_id.to_string(),
            message,
        });
    }
}

/// Audit every recipe in `catalog`.
pub fn audit_catalog(catalog: &Catalog) -> AuditReport {
    let mut report = AuditReport {
        recipes_checked: catalog.recipes.len(),
        ..AuditReport::default()
    };

    let known_ids: HashSet<String> = catalog
        .ingredients
        .iter()
        .map(|i| normalize_identifier(&i.id))
        .collect();
    let known_names: HashSet<String> = catalog
        .ingredients
        .iter()
        .map(|i| normalize_identifier(&i.name))
        .filter(|n| !n.is_empty())
        .collect();

    let mut slug_owners: HashMap<String, Vec<String>> = HashMap::new();

    for recipe in &catalog.recipes {
        let slug = recipe_slug(recipe);
        check_slug(&mut report, &recipe.id, &recipe.name, &slug);
        if !slug.is_empty() {
            slug_owners.entry(slug).or_default().push(recipe.id.clone());
        }

        let total = recipe.ingredients.len();
        if recipe.required_ingredients().next().is_none() {
            report.push(
                Severity::Warning,
                &recipe.id,
                "No required ingredients; recipe is unscoreable".to_string(),
            );
        } else if total < MIN_EXPECTED_INGREDIENTS {
            report.push(
                Severity::Warning,
                &recipe.id,
                format!("Only {} ingredient(s) listed", total),
            );
        }
        if total > MAX_EXPECTED_INGREDIENTS {
            report.push(
                Severity::Warning,
                &recipe.id,
                format!("{} ingredients listed (very complex cocktail)", total),
            );
        }

        for (position, ingredient) in recipe.ingredients.iter().enumerate() {
            report.ingredients_checked += 1;
            let name = normalize_identifier(&ingredient.name);

            if name.is_empty() {
                report.push(
                    Severity::Error,
                    &recipe.id,
                    format!("Ingredient #{} has no name", position + 1),
                );
                continue;
            }

            if known_ids.contains(&normalize_identifier(&ingredient.id))
                || known_names.contains(&name)
            {
                continue;
            }

            let message = match suggest_ingredient(&name, catalog) {
                Some(suggestion) => format!(
                    "Ingredient '{}' is not in the ingredient catalog (did you mean '{}'?)",
                    ingredient.name, suggestion
                ),
                None => format!(
                    "Ingredient '{}' is not in the ingredient catalog",
                    ingredient.name
                ),
            };
            report.push(Severity::Warning, &recipe.id, message);
        }
    }

    let mut duplicates: Vec<(String, Vec<String>)> = slug_owners
        .into_iter()
        .filter(|(_, owners)| owners.len() > 1)
        .collect();
    duplicates.sort();
    for (slug, owners) in duplicates {
        for owner in &owners {
            report.push(
                Severity::Error,
                owner,
                format!("Slug '{}' is shared by {} recipes", slug, owners.len()),
            );
        }
    }

    report
}

fn check_slug(report: &mut AuditReport, recipe_id: &str, recipe_name: &str, slug: &str) {
    if slug.is_empty() {
        report.push(
            Severity::Error,
            recipe_id,
            format!("Empty slug for recipe '{}'", recipe_name),
        );
        return;
    }

    if !is_url_safe(slug) {
        report.push(
            Severity::Error,
            recipe_id,
            format!(
                "Slug '{}' is not URL-safe (use only lowercase letters, numbers, and hyphens)",
                slug
            ),
        );
    }

    if slug.starts_with('-') || slug.ends_with('-') {
        report.push(
            Severity::Error,
            recipe_id,
            format!("Slug '{}' has leading or trailing hyphens", slug),
        );
    }

    if slug.contains("--") {
        report.push(
            Severity::Warning,
            recipe_id,
            format!("Slug '{}' contains consecutive hyphens", slug),
        );
    }
}

fn is_url_safe(slug: &str) -> bool {
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Closest catalog ingredient name to `normalized_name`, if close enough.
pub fn suggest_ingredient(normalized_name: &str, catalog: &Catalog) -> Option<String> {
    let mut best: Option<(&str, f64)> = None;

    for ingredient in &catalog.ingredients {
        let score = jaro_winkler(normalized_name, &normalize_identifier(&ingredient.name));
        if score >= SUGGESTION_THRESHOLD && best.map_or(true, |(_, s)| score > s) {
            best = Some((ingredient.name.as_str(), score));
        }
    }

    best.map(|(name, _)| name.to_string())
}
