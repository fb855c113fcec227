use std::collections::HashSet;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::UnlockPolicy;
use crate::services::catalog::Catalog;
use crate::services::inventory::Inventory;

/// Shared application state passed to all route handlers.
///
/// The catalog is loaded once and read-only afterwards; every request builds
/// its own [`Inventory`], so handlers share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub staples: Arc<HashSet<String>>,
    pub max_missing_for_almost: usize,
    pub unlock_top_n: usize,
    pub unlock_policy: UnlockPolicy,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &AppConfig) -> Self {
        let staples = catalog.staples(&config.extra_staples);
        Self {
            catalog: Arc::new(catalog),
            staples: Arc::new(staples),
            max_missing_for_almost: config.max_missing_for_almost,
            unlock_top_n: config.unlock_top_n,
            unlock_policy: config.unlock_policy,
        }
    }

    /// Inventory for one request, with catalog names registered for owned ids.
    pub fn inventory(&self, owned: &[String]) -> Inventory {
        Inventory::with_catalog(owned, self.staples.iter(), &self.catalog.ingredients)
    }
}
