pub mod api;
pub mod ingredient;
pub mod matching;
pub mod recipe;

pub use ingredient::Ingredient;
pub use matching::{
    Classification, MatchResult, MissingIngredient, RecipeAvailability, RecipeOrder,
    ShoppingItem, Tier, UnlockCandidate, UnlockPolicy,
};
pub use recipe::{BaseSpirit, Recipe, RecipeIngredientRef};
