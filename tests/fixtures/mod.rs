//! Shared cocktail catalog used across integration tests

use mixwise::models::{Ingredient, Recipe, RecipeIngredientRef};
use mixwise::services::catalog::Catalog;

/// Ingredient catalog: (id, name, category, is_staple)
pub const TEST_INGREDIENTS: &[(&str, &str, &str, bool)] = &[
    ("gin", "Gin", "Spirit", false),
    ("campari", "Campari", "Amaro", false),
    ("sweet-vermouth", "Sweet Vermouth", "Fortified Wine", false),
    ("bourbon", "Bourbon", "Spirit", false),
    ("lime-juice", "Lime Juice", "Citrus", false),
    ("simple-syrup", "Simple Syrup", "Sweetener", false),
    ("white-rum", "White Rum", "Spirit", false),
    ("mint", "Mint", "Herb", false),
    ("soda-water", "Soda Water", "Mixer", false),
    ("tequila", "Tequila", "Spirit", false),
    ("orange-liqueur", "Orange Liqueur", "Liqueur", false),
    ("angostura-bitters", "Angostura Bitters", "Bitters", false),
    ("sugar", "Sugar", "Sweetener", true),
    ("water", "Water", "Mixer", true),
    ("blue-curacao", "Blue Curaçao", "Liqueur", false),
    ("vodka", "Vodka", "Spirit", false),
    ("lemonade", "Lemonade", "Mixer", false),
];

fn req(id: &str) -> RecipeIngredientRef {
    let name = TEST_INGREDIENTS
        .iter()
        .find(|(i, ..)| *i == id)
        .map(|(_, n, ..)| *n)
        .unwrap_or(id);
    RecipeIngredientRef::required(id, name)
}

pub fn test_ingredients() -> Vec<Ingredient> {
    TEST_INGREDIENTS
        .iter()
        .map(|(id, name, category, staple)| {
            let ingredient = Ingredient::new(*id, *name).with_category(*category);
            if *staple {
                ingredient.staple()
            } else {
                ingredient
            }
        })
        .collect()
}

/// Recipes in catalog order. Tier expectations for the "home bar" inventory
/// (see [`HOME_BAR`]) are noted per recipe.
pub fn test_recipes() -> Vec<Recipe> {
    vec![
        // ready
        Recipe::new(
            "r-negroni",
            "Negroni",
            vec![
                req("gin"),
                req("campari"),
                req("sweet-vermouth"),
                RecipeIngredientRef::optional("orange-peel", "Orange peel"),
            ],
        )
        .popular(),
        // almost there: bourbon
        Recipe::new(
            "r-boulevardier",
            "Boulevardier",
            vec![req("bourbon"), req("campari"), req("sweet-vermouth")],
        ),
        // almost there: soda water
        Recipe::new(
            "r-americano",
            "Americano",
            vec![req("campari"), req("sweet-vermouth"), req("soda-water")],
        ),
        // almost there: simple syrup
        Recipe::new(
            "r-daiquiri",
            "Daiquiri",
            vec![req("white-rum"), req("lime-juice"), req("simple-syrup")],
        )
        .popular(),
        // far: simple syrup, mint, soda water
        Recipe::new(
            "r-mojito",
            "Mojito",
            vec![
                req("white-rum"),
                req("lime-juice"),
                req("simple-syrup"),
                req("mint"),
                req("soda-water"),
                RecipeIngredientRef::required("ice-1", "Crushed Ice"),
            ],
        ),
        // almost there: tequila, orange liqueur
        Recipe::new(
            "r-margarita",
            "Margarita",
            vec![
                req("tequila"),
                req("lime-juice"),
                req("orange-liqueur"),
                RecipeIngredientRef::optional("salt-rim", "Salt for rim"),
            ],
        )
        .popular(),
        // almost there: bourbon, angostura bitters
        Recipe::new(
            "r-old-fashioned",
            "Old Fashioned",
            vec![
                req("bourbon"),
                req("sugar"),
                req("angostura-bitters"),
                req("water"),
            ],
        ),
        // far: vodka, blue curaçao, lemonade
        Recipe::new(
            "r-blue-lagoon",
            "Blue Lagoon",
            vec![
                req("vodka"),
                RecipeIngredientRef::required("uuid-blue-123", "Blue Curaçao"),
                req("lemonade"),
            ],
        ),
        // far: no ingredients at all
        Recipe::new("r-broken", "Broken Record", vec![]),
    ]
}

pub fn test_catalog() -> Catalog {
    Catalog::new(test_recipes(), test_ingredients())
}

/// Owned ingredients mixing ids and free-text names.
pub const HOME_BAR: &[&str] = &["gin", "campari", "sweet-vermouth", "White Rum", "lime juice"];
