use serde::{Deserialize, Serialize};

/// Ingredient from the catalog, already mapped out of whichever backend served it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(alias = "_id")]
    pub id: String,

    /// Free-text label, also used as a fallback identity when ids disagree.
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default, alias = "is_staple")]
    pub is_staple: bool,
}

impl Ingredient {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            is_staple: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn staple(mut self) -> Self {
        self.is_staple = true;
        self
    }
}
