use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Ingredient reference embedded in a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientRef {
    pub id: String,
    pub name: String,

    /// Garnishes and embellishments never block the "ready" determination.
    #[serde(default)]
    pub is_optional: bool,
}

impl RecipeIngredientRef {
    pub fn required(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_optional: false,
        }
    }

    pub fn optional(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_optional: true,
        }
    }
}

/// A cocktail recipe in the normalized internal shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_spirit: Option<String>,

    #[serde(default)]
    pub is_popular: bool,
}

impl Recipe {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        ingredients: Vec<RecipeIngredientRef>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: None,
            ingredients,
            primary_spirit: None,
            is_popular: false,
        }
    }

    pub fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    /// Ingredients that must be on hand for the recipe to be makeable.
    pub fn required_ingredients(&self) -> impl Iterator<Item = &RecipeIngredientRef> {
        self.ingredients.iter().filter(|i| !i.is_optional)
    }
}

/// Base spirit families used to fill in a missing `primary_spirit`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, EnumString, Display, PartialEq, Eq)]
pub enum BaseSpirit {
    Vodka,
    Gin,
    Rum,
    Whiskey,
    Tequila,
    Brandy,
    Champagne,
    Aperitif,
    Spirit,
}
