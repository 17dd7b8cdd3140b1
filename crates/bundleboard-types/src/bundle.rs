use serde::{Deserialize, Serialize};
use serde_json::Value;

use std::fmt;
use std::str::FromStr;

use crate::error::PromptIndexError;

/// The root persisted object: the whole bundle collection as stored on disk.
///
/// The document is read fresh from storage at the start of every operation
/// and either discarded (reads) or rewritten in full (writes). Deserialization
/// fails if the top-level `bundles` key is missing or mis-shaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub bundles: Vec<Bundle>,
}

/// Top-level grouping: a named collection of recipes with an aggregate score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub name: String,
    pub percentage: f64,
    pub recipes: Vec<Recipe>,
}

/// Mid-level grouping within a bundle.
///
/// Stored under the source field name `recipe_name`; the API response renames
/// it to `name` (see [`RecipeView`]) but the on-disk name never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub recipe_name: String,
    pub percentage: f64,
    pub ci_minimum_band: f64,
    pub ci_maximum_band: f64,
    pub prompts: Vec<Prompt>,
}

/// Leaf record with a mutable score and notes field.
///
/// Prompts are an open record: `score` and `notes` are required, everything
/// else is collected into `extra` and round-trips through load/save untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub score: i64,
    pub notes: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Document {
    /// Resolve a composite index to the prompt it addresses.
    ///
    /// Returns `None` when any component is negative or past the end of its
    /// sequence. Indices are positional only -- reordering the document
    /// invalidates previously issued indices.
    pub fn prompt_mut(&mut self, index: &PromptIndex) -> Option<&mut Prompt> {
        let bundle = usize::try_from(index.bundle).ok()?;
        let recipe = usize::try_from(index.recipe).ok()?;
        let prompt = usize::try_from(index.prompt).ok()?;
        self.bundles
            .get_mut(bundle)?
            .recipes
            .get_mut(recipe)?
            .prompts
            .get_mut(prompt)
    }
}

/// Composite positional address of a single prompt: `"<bundle>-<recipe>-<prompt>"`.
///
/// Parsing only validates the format (exactly three hyphen-separated
/// integers). Bounds are checked against a concrete document at lookup time,
/// so a negative or too-large component surfaces as "not found" rather than
/// a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PromptIndex {
    pub bundle: i64,
    pub recipe: i64,
    pub prompt: i64,
}

impl FromStr for PromptIndex {
    type Err = PromptIndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        let [bundle, recipe, prompt] = parts.as_slice() else {
            return Err(PromptIndexError::InvalidFormat(s.to_string()));
        };
        let parse = |part: &str| match part.parse::<i64>() {
            Ok(value) => Ok(value),
            // All-digit components too large for i64 are well-formed
            // positions that can never be in bounds; saturate so the
            // lookup reports them as not found.
            Err(_) if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(i64::MAX)
            }
            Err(_) => Err(PromptIndexError::InvalidFormat(s.to_string())),
        };
        Ok(Self {
            bundle: parse(bundle)?,
            recipe: parse(recipe)?,
            prompt: parse(prompt)?,
        })
    }
}

impl fmt::Display for PromptIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.bundle, self.recipe, self.prompt)
    }
}

/// Client-facing shape of a bundle as returned by `GET /api/bundles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleView {
    pub name: String,
    pub percentage: f64,
    pub recipes: Vec<RecipeView>,
}

/// Client-facing shape of a recipe: `recipe_name` renamed to `name`,
/// prompts passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeView {
    pub name: String,
    pub percentage: f64,
    pub ci_minimum_band: f64,
    pub ci_maximum_band: f64,
    pub prompts: Vec<Prompt>,
}

impl From<&Bundle> for BundleView {
    fn from(bundle: &Bundle) -> Self {
        Self {
            name: bundle.name.clone(),
            percentage: bundle.percentage,
            recipes: bundle.recipes.iter().map(RecipeView::from).collect(),
        }
    }
}

impl From<&Recipe> for RecipeView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.recipe_name.clone(),
            percentage: recipe.percentage,
            ci_minimum_band: recipe.ci_minimum_band,
            ci_maximum_band: recipe.ci_maximum_band,
            prompts: recipe.prompts.clone(),
        }
    }
}

/// Request body for `POST /api/bundles/update_prompt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePromptRequest {
    pub prompt_id: String,
    pub score: i64,
    pub notes: String,
}
