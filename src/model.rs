use serde::{Deserialize, Serialize};

/// One positional entry in an ingredient or instruction list.
///
/// Ids mirror the entry's index and are re-assigned on every structural
/// change, so downstream editors can rely on a contiguous 0..n sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeEntry {
    pub id: usize,
    pub item: String,
}

impl RecipeEntry {
    /// Rewrite every id to match its current position.
    pub fn renumber(entries: &mut [RecipeEntry]) {
        for (id, entry) in entries.iter_mut().enumerate() {
            entry.id = id;
        }
    }
}

/// The canonical recipe shape every strategy converges to.
///
/// Field names on the wire follow the schema.org vocabulary
/// (`recipeIngredients`, `prepTime`, ...). A `Recipe` is only produced by
/// the validator; strategies accumulate into a [`RecipeDraft`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub recipe_ingredients: Vec<RecipeEntry>,
    pub recipe_instructions: Vec<RecipeEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_yield: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Mutable staging record local to one extraction call.
///
/// Strategies push fields in whatever order the page yields them; the
/// draft is handed to the validator, which decides usability and converts
/// it into an immutable [`Recipe`]. A draft never crosses a dispatcher
/// invocation boundary.
#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub recipe_yield: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub total_time: Option<String>,
}

impl RecipeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ingredient(&mut self, item: impl Into<String>) {
        self.ingredients.push(item.into());
    }

    pub fn push_instruction(&mut self, item: impl Into<String>) {
        self.instructions.push(item.into());
    }

    /// True when nothing usable was found at all: no name, no ingredients,
    /// no instructions.
    pub fn is_empty(&self) -> bool {
        self.name.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.ingredients.is_empty()
            && self.instructions.is_empty()
    }
}

/// The envelope returned by every scrape, success or failure.
///
/// `status: false` with an absent `results` field signals extraction
/// failure without raising past the engine boundary. `method` names the
/// strategy that ran: `"generic"`, a registry domain, or `"none"` when
/// classification failed before routing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResponse {
    pub message: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Recipe>,
    pub status: bool,
}

impl ScrapeResponse {
    pub fn success(method: impl Into<String>, recipe: Recipe) -> Self {
        Self {
            message: "success".to_string(),
            method: method.into(),
            results: Some(recipe),
            status: true,
        }
    }

    pub fn failure(method: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            method: method.into(),
            results: None,
            status: false,
        }
    }
}
