use serde::Deserialize;

use crate::models::UnlockPolicy;
use crate::services::classifier::DEFAULT_MAX_MISSING_FOR_ALMOST;
use crate::services::recommender::DEFAULT_TOP_N;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// JSON catalog file with `ingredients` and `recipes` arrays.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Missing required ingredients still counted as "almost there".
    #[serde(default = "default_max_missing_for_almost")]
    pub max_missing_for_almost: usize,

    /// Number of unlock suggestions returned by default.
    #[serde(default = "default_unlock_top_n")]
    pub unlock_top_n: usize,

    /// `first_missing` or `sole_missing`.
    #[serde(default)]
    pub unlock_policy: UnlockPolicy,

    /// Comma-separated staples added on top of catalog-flagged ones.
    #[serde(default)]
    pub extra_staples: Vec<String>,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_catalog_path() -> String {
    "data/catalog.json".to_string()
}

fn default_max_missing_for_almost() -> usize {
    DEFAULT_MAX_MISSING_FOR_ALMOST
}

fn default_unlock_top_n() -> usize {
    DEFAULT_TOP_N
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            catalog_path: default_catalog_path(),
            max_missing_for_almost: default_max_missing_for_almost(),
            unlock_top_n: default_unlock_top_n(),
            unlock_policy: UnlockPolicy::default(),
            extra_staples: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_environment() {
        let config: AppConfig = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.max_missing_for_almost, 2);
        assert_eq!(config.unlock_top_n, 6);
        assert_eq!(config.unlock_policy, UnlockPolicy::FirstMissing);
        assert!(config.extra_staples.is_empty());
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("CATALOG_PATH".to_string(), "/srv/catalog.json".to_string()),
            ("MAX_MISSING_FOR_ALMOST".to_string(), "1".to_string()),
            ("UNLOCK_POLICY".to_string(), "sole_missing".to_string()),
            ("EXTRA_STAPLES".to_string(), "salt,sugar".to_string()),
        ];
        let config: AppConfig = envy::from_iter(vars).unwrap();
        assert_eq!(config.catalog_path, "/srv/catalog.json");
        assert_eq!(config.max_missing_for_almost, 1);
        assert_eq!(config.unlock_policy, UnlockPolicy::SoleMissing);
        assert_eq!(config.extra_staples, vec!["salt", "sugar"]);
    }
}
