use mixwise::{
    config::AppConfig,
    services::{
        catalog::Catalog,
        catalog_audit::{audit_catalog, Severity},
    },
};
use tracing_subscriber::EnvFilter;

/// Lint the configured catalog file. Exits 1 when any error-level finding
/// is reported, 2 when the catalog cannot be loaded at all.
fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = AppConfig::from_env().expect("Failed to load configuration");

    // A path argument overrides CATALOG_PATH.
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.catalog_path.clone());

    tracing::info!(path = %path, "Auditing recipe catalog");

    let catalog = match Catalog::load(&path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "Catalog could not be loaded");
            std::process::exit(2);
        }
    };

    let report = audit_catalog(&catalog);

    for finding in &report.findings {
        match finding.severity {
            Severity::Error => tracing::error!(
                recipe_id = %finding.recipe_id,
                "{}", finding.message
            ),
            Severity::Warning => tracing::warn!(
                recipe_id = %finding.recipe_id,
                "{}", finding.message
            ),
        }
    }

    tracing::info!(
        recipes = report.recipes_checked,
        ingredients = report.ingredients_checked,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "Catalog audit complete"
    );

    if report.has_errors() {
        std::process::exit(1);
    }
}
