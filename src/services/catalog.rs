//! Catalog loading and backend-shape adapters.
//!
//! Recipes arrive either as CMS documents or as relational rows; both are
//! mapped into the strict internal [`Recipe`] shape here so the matching core
//! never sees loosely-typed records. Each record is decoded on its own and a
//! bad record is skipped, never failing the whole load.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::CatalogError;
use crate::models::{BaseSpirit, Ingredient, Recipe, RecipeIngredientRef};
use crate::services::inventory::staples_from_catalog;
use crate::services::reconciler::{create_slug, normalize_identifier};

/// Separator between ingredient lines in relational rows.
const ROW_LINE_SEPARATOR: char = '|';

/// Leading measure words stripped from row ingredient lines.
const MEASURE_WORDS: &[&str] = &[
    "oz", "ounce", "ounces", "fl", "ml", "cl", "l", "tsp", "teaspoon", "teaspoons", "tbsp",
    "tablespoon", "tablespoons", "barspoon", "barspoons", "dash", "dashes", "splash",
    "splashes", "drop", "drops", "part", "parts", "cup", "cups", "pinch", "shot", "shots",
    "of",
];

/// Line fragments that mark a garnish or rim treatment.
const GARNISH_MARKERS: &[&str] = &[
    "for rim", " rim", "twist", "wedge", "slice", "peel", "wheel", "garnish", "sprig",
];

/// Values that mean an upstream export wrote a placeholder instead of a line.
const PLACEHOLDER_LINES: &[&str] = &["null", "none", "???"];

/// Keyword table for base spirit detection, checked in order.
const BASE_SPIRIT_KEYWORDS: &[(BaseSpirit, &[&str])] = &[
    (
        BaseSpirit::Vodka,
        &["vodka", "russian", "moscow", "bloody mary", "espresso martini", "cosmopolitan"],
    ),
    (
        BaseSpirit::Gin,
        &["gin", "martini", "negroni", "tom collins", "aviation", "gimlet"],
    ),
    (
        BaseSpirit::Rum,
        &["rum", "mojito", "daiquiri", "mai tai", "pina colada", "cuba"],
    ),
    (
        BaseSpirit::Whiskey,
        &["whiskey", "whisky", "bourbon", "rye", "scotch", "manhattan", "old fashioned", "mint julep"],
    ),
    (BaseSpirit::Tequila, &["tequila", "mezcal", "margarita", "paloma"]),
    (BaseSpirit::Brandy, &["brandy", "cognac", "sidecar"]),
    (
        BaseSpirit::Champagne,
        &["champagne", "prosecco", "bellini", "mimosa", "french 75"],
    ),
    (BaseSpirit::Aperitif, &["aperol", "campari", "americano"]),
];

/// Recipe and ingredient catalog in normalized form.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub recipes: Vec<Recipe>,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    ingredients: Vec<serde_json::Value>,
    #[serde(default)]
    recipes: Vec<serde_json::Value>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            recipes,
            ingredients,
        }
    }

    /// Load a catalog JSON file: `{ "ingredients": [...], "recipes": [...] }`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;

        info!(
            path = %path.display(),
            recipes = catalog.recipes.len(),
            ingredients = catalog.ingredients.len(),
            "Loaded catalog"
        );

        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;

        let ingredients: Vec<Ingredient> = file
            .ingredients
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| {
                match serde_json::from_value::<RawIngredient>(value) {
                    Ok(raw) => Some(raw.into()),
                    Err(e) => {
                        warn!(index, error = %e, "Skipping undecodable ingredient record");
                        None
                    }
                }
            })
            .collect();

        let recipes: Vec<Recipe> = file
            .recipes
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<RawRecipe>(value) {
                Ok(raw) => Some(raw.into_recipe()),
                Err(e) => {
                    warn!(index, error = %e, "Skipping undecodable recipe record");
                    None
                }
            })
            .collect();

        Ok(Self {
            recipes,
            ingredients,
        })
    }

    /// Find a recipe by id, falling back to its slug.
    pub fn find_recipe(&self, id_or_slug: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id_or_slug).or_else(|| {
            let wanted = create_slug(id_or_slug);
            self.recipes.iter().find(|r| recipe_slug(r) == wanted)
        })
    }

    /// Staple identifiers declared by this catalog plus built-in and extra staples.
    pub fn staples(&self, extra: &[String]) -> HashSet<String> {
        staples_from_catalog(&self.ingredients, extra)
    }
}

/// Slug for a recipe: its own slug when present, else derived from the name.
pub fn recipe_slug(recipe: &Recipe) -> String {
    match &recipe.slug {
        Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
        _ => create_slug(&recipe.name),
    }
}

// ── Raw record shapes ───────────────────────────────────────────────────

/// Record id that may be stored as text or as a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Text(id) => write!(f, "{}", id),
            RecordId::Number(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIngredient {
    #[serde(alias = "_id")]
    id: RecordId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default, alias = "is_staple")]
    is_staple: Option<bool>,
}

impl From<RawIngredient> for Ingredient {
    fn from(raw: RawIngredient) -> Self {
        Ingredient {
            id: raw.id.to_string(),
            name: raw.name.unwrap_or_default().trim().to_string(),
            category: raw.category.filter(|c| !c.trim().is_empty()),
            is_staple: raw.is_staple.unwrap_or(false),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRecipe {
    Document(CmsRecipeDocument),
    Row(RecipeRow),
}

impl RawRecipe {
    fn into_recipe(self) -> Recipe {
        let mut recipe: Recipe = match self {
            RawRecipe::Document(doc) => doc.into(),
            RawRecipe::Row(row) => row.into(),
        };

        if recipe.primary_spirit.is_none() {
            let names: Vec<&str> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
            recipe.primary_spirit = Some(detect_base_spirit(&recipe.name, &names).to_string());
        }

        recipe
    }
}

/// Recipe document as served by the content CMS.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsRecipeDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// Expected to be an array of entries; anything else is treated as malformed.
    #[serde(default)]
    pub ingredients: Option<serde_json::Value>,
    #[serde(default)]
    pub primary_spirit: Option<String>,
    #[serde(default)]
    pub is_popular: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsIngredientEntry {
    #[serde(default)]
    pub ingredient: Option<CmsIngredientRef>,
    #[serde(default)]
    pub is_optional: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct CmsIngredientRef {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<CmsRecipeDocument> for Recipe {
    fn from(doc: CmsRecipeDocument) -> Self {
        let ingredients = match doc.ingredients {
            Some(serde_json::Value::Array(entries)) => map_cms_entries(&doc.id, entries),
            _ => {
                warn!(recipe_id = %doc.id, "Recipe document has no ingredients array");
                Vec::new()
            }
        };

        Recipe {
            id: doc.id,
            name: doc.name.trim().to_string(),
            slug: doc.slug,
            ingredients,
            primary_spirit: doc.primary_spirit.filter(|s| !s.trim().is_empty()),
            is_popular: doc.is_popular.unwrap_or(false),
        }
    }
}

/// A null or undecodable entry makes the whole list untrustworthy, so the
/// recipe gets no ingredients and classifies as far.
fn map_cms_entries(recipe_id: &str, entries: Vec<serde_json::Value>) -> Vec<RecipeIngredientRef> {
    let mut refs = Vec::with_capacity(entries.len());

    for entry in entries {
        let Ok(CmsIngredientEntry {
            ingredient: Some(ingredient),
            is_optional,
        }) = serde_json::from_value::<CmsIngredientEntry>(entry)
        else {
            warn!(recipe_id, "Recipe document has a null or malformed ingredient entry");
            return Vec::new();
        };

        let name = ingredient.name.unwrap_or_default().trim().to_string();
        let id = match ingredient.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => create_slug(&name),
        };

        refs.push(RecipeIngredientRef {
            id,
            name,
            is_optional: is_optional.unwrap_or(false),
        });
    }

    refs
}

/// Recipe row as exported by the relational store.
#[derive(Debug, Deserialize)]
pub struct RecipeRow {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub base_spirit: Option<String>,
    /// Pipe-separated lines such as `"2 oz gin|0.75 oz fresh lime juice"`,
    /// or an array of such lines.
    #[serde(default)]
    pub ingredients: Option<serde_json::Value>,
    #[serde(default)]
    pub is_popular: Option<bool>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        let id = row.id.to_string();
        let ingredients = match row.ingredients {
            Some(serde_json::Value::String(lines)) => {
                map_row_lines(&id, lines.split(ROW_LINE_SEPARATOR))
            }
            Some(serde_json::Value::Array(values)) => {
                let lines: Option<Vec<String>> = values
                    .into_iter()
                    .map(|v| match v {
                        serde_json::Value::String(line) => Some(line),
                        _ => None,
                    })
                    .collect();
                match lines {
                    Some(lines) => map_row_lines(&id, lines.iter().map(String::as_str)),
                    None => {
                        warn!(recipe_id = %id, "Recipe row has a non-text ingredient line");
                        Vec::new()
                    }
                }
            }
            _ => Vec::new(),
        };

        Recipe {
            id,
            name: row.name.trim().to_string(),
            slug: row.slug,
            ingredients,
            primary_spirit: row.base_spirit.filter(|s| !s.trim().is_empty()),
            is_popular: row.is_popular.unwrap_or(false),
        }
    }
}

fn map_row_lines<'a>(
    recipe_id: &str,
    lines: impl Iterator<Item = &'a str>,
) -> Vec<RecipeIngredientRef> {
    let mut refs = Vec::new();

    for line in lines.map(str::trim) {
        if line.is_empty() {
            continue;
        }
        if is_placeholder_line(line) {
            warn!(recipe_id, line, "Recipe row has a placeholder ingredient line");
            return Vec::new();
        }
        match parse_ingredient_line(line) {
            Some(parsed) => refs.push(parsed),
            None => warn!(recipe_id, line, "Skipping ingredient line with no name"),
        }
    }

    refs
}

fn is_placeholder_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    PLACEHOLDER_LINES.iter().any(|p| lower == *p) || lower.contains("???")
}

/// Parse a free-text ingredient line into a reference.
///
/// Leading amounts and measure words are dropped ("0.75 oz fresh lime juice"
/// becomes "fresh lime juice"); garnish and rim lines are optional. The id is
/// the slug of the remaining name. Returns `None` when no name remains.
pub fn parse_ingredient_line(line: &str) -> Option<RecipeIngredientRef> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let start = tokens
        .iter()
        .position(|token| !is_amount(token) && !is_measure_word(token))
        .unwrap_or(tokens.len());

    let name = tokens[start..].join(" ");
    if !name.chars().any(char::is_alphabetic) {
        return None;
    }

    let lower = format!(" {}", normalize_identifier(&name));
    let is_optional = GARNISH_MARKERS.iter().any(|marker| lower.contains(marker));

    Some(RecipeIngredientRef {
        id: create_slug(&name),
        name,
        is_optional,
    })
}

fn is_amount(token: &str) -> bool {
    token
        .chars()
        .any(|c| c.is_ascii_digit() || matches!(c, '½' | '¼' | '¾'))
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '/' | '-' | '½' | '¼' | '¾'))
}

fn is_measure_word(token: &str) -> bool {
    let word = token.trim_end_matches('.').to_lowercase();
    MEASURE_WORDS.contains(&word.as_str())
}

/// Guess a recipe's base spirit from its name and ingredient names.
///
/// Keywords match whole words only, so "ginger beer" never reads as gin.
pub fn detect_base_spirit(name: &str, ingredient_names: &[&str]) -> BaseSpirit {
    let texts: Vec<String> = std::iter::once(name)
        .chain(ingredient_names.iter().copied())
        .map(padded_words)
        .collect();

    BASE_SPIRIT_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords.iter().any(|k| {
                let phrase = format!(" {} ", k);
                texts.iter().any(|text| text.contains(&phrase))
            })
        })
        .map(|(spirit, _)| *spirit)
        .unwrap_or(BaseSpirit::Spirit)
}

/// Normalized words joined by single spaces, with a space at each end.
fn padded_words(text: &str) -> String {
    let normalized = normalize_identifier(text);
    let words: Vec<&str> = normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    format!(" {} ", words.join(" "))
}
