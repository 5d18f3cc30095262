//! Generic extractor for schema.org recipe markup embedded as JSON-LD.
//!
//! Handles the common real-world shapes: a single top-level recipe
//! object, an array of objects, and `@graph` wrappers, plus the usual
//! polymorphism in the `image`, `description`, `recipeYield` and
//! `recipeInstructions` fields. Falls back to the selector library for
//! title/description/image when the markup is absent or partial.

use html_escape::decode_html_entities;
use log::debug;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ScrapeError;
use crate::model::RecipeDraft;
use crate::selectors;

#[derive(Debug, Deserialize)]
struct JsonLdRecipe {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<DescriptionType>,
    #[serde(default)]
    image: Option<ImageType>,
    #[serde(rename = "recipeIngredient", default)]
    recipe_ingredient: Vec<String>,
    #[serde(rename = "recipeInstructions", default)]
    recipe_instructions: Option<RecipeInstructions>,
    #[serde(rename = "recipeYield", default)]
    recipe_yield: Option<YieldType>,
    #[serde(rename = "prepTime", default)]
    prep_time: Option<String>,
    #[serde(rename = "cookTime", default)]
    cook_time: Option<String>,
    #[serde(rename = "totalTime", default)]
    total_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageObject {
    url: String,
}

#[derive(Debug, Deserialize)]
struct TextObject {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DescriptionType {
    String(String),
    Object(TextObject),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImageType {
    String(String),
    Object(ImageObject),
    // potentially multiple images, as strings or objects
    MultipleStrings(Vec<String>),
    MultipleObjects(Vec<ImageObject>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum YieldType {
    String(String),
    Number(u64),
    Float(f64),
    Multiple(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct RecipeInstructionObject {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecipeInstructions {
    String(String),
    Multiple(Vec<String>),
    MultipleObject(Vec<RecipeInstructionObject>),
    HowTo(Vec<HowTo>),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "@type")]
enum HowTo {
    HowToStep(HowToStep),
    HowToSection(HowToSection),
}

#[derive(Debug, Deserialize)]
struct HowToStep {
    text: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HowToSection {
    #[serde(rename = "itemListElement")]
    item_list_element: Vec<HowToStep>,
}

fn decode_html_symbols(text: &str) -> String {
    // Sites stack entity encoding to arbitrary depth, and serializing
    // the script body adds one more level; decode until stable.
    let mut current = text.to_string();
    for _ in 0..4 {
        let decoded = decode_html_entities(&current).into_owned();
        if decoded == current {
            break;
        }
        current = decoded;
    }
    selectors::squash_whitespace(&current)
}

impl HowToStep {
    fn texts(self) -> Vec<String> {
        let mut texts = Vec::new();
        if let Some(text) = self.text {
            texts.push(text);
        }
        if let Some(desc) = self.description {
            texts.push(desc);
        }
        texts
    }
}

impl RecipeInstructions {
    /// Flatten into one ordered list of steps, sections included.
    fn into_steps(self) -> Vec<String> {
        match self {
            RecipeInstructions::String(text) => vec![text],
            RecipeInstructions::Multiple(steps) => steps,
            RecipeInstructions::MultipleObject(steps) => {
                steps.into_iter().map(|obj| obj.text).collect()
            }
            RecipeInstructions::HowTo(sections) => sections
                .into_iter()
                .flat_map(|how_to| match how_to {
                    HowTo::HowToStep(step) => step.texts(),
                    HowTo::HowToSection(section) => section
                        .item_list_element
                        .into_iter()
                        .flat_map(HowToStep::texts)
                        .collect(),
                })
                .collect(),
        }
    }
}

impl JsonLdRecipe {
    fn into_draft(self) -> RecipeDraft {
        let mut draft = RecipeDraft::new();
        draft.name = self.name.map(|n| decode_html_symbols(&n));
        draft.description = self.description.map(|desc| match desc {
            DescriptionType::String(text) => decode_html_symbols(&text),
            DescriptionType::Object(obj) => decode_html_symbols(&obj.text),
        });
        draft.image = self.image.and_then(|image| match image {
            ImageType::String(url) => Some(url),
            ImageType::Object(obj) => Some(obj.url),
            ImageType::MultipleStrings(urls) => urls.into_iter().next(),
            ImageType::MultipleObjects(objs) => objs.into_iter().next().map(|obj| obj.url),
        });

        for ingredient in self.recipe_ingredient {
            draft.push_ingredient(decode_html_symbols(&ingredient));
        }
        if let Some(instructions) = self.recipe_instructions {
            for step in instructions.into_steps() {
                draft.push_instruction(decode_html_symbols(&step));
            }
        }

        draft.recipe_yield = self.recipe_yield.and_then(|y| match y {
            YieldType::String(text) => Some(text),
            YieldType::Number(n) => Some(n.to_string()),
            YieldType::Float(n) => Some(n.to_string()),
            YieldType::Multiple(texts) => texts.into_iter().next(),
        });
        draft.prep_time = self.prep_time;
        draft.cook_time = self.cook_time;
        draft.total_time = self.total_time;
        draft
    }
}

/// Clean up a JSON-LD script body before parsing. Real pages wrap the
/// payload in HTML comments, leave trailing commas, or prepend junk.
fn sanitize_json(json_str: &str) -> String {
    let mut cleaned = json_str.trim().to_string();

    if !cleaned.starts_with('{') && !cleaned.starts_with('[') {
        if let Some(start) = cleaned.find('{') {
            cleaned = cleaned[start..].to_string();
        }
    }

    cleaned = cleaned.replace(",]", "]").replace(",}", "}");
    cleaned = cleaned.replace("<!--", "").replace("-->", "");

    cleaned
}

fn is_recipe_node(node: &Value) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t.eq_ignore_ascii_case("recipe"),
        Some(Value::Array(types)) => types
            .iter()
            .any(|t| t.as_str().is_some_and(|t| t.eq_ignore_ascii_case("recipe"))),
        _ => node.get("recipeIngredient").is_some() || node.get("recipeInstructions").is_some(),
    }
}

/// Pull the first recipe node out of a parsed JSON-LD value, looking
/// through top-level arrays and `@graph` wrappers.
fn find_recipe_node(json_ld: &Value) -> Option<&Value> {
    if json_ld.is_array() {
        return json_ld
            .as_array()
            .and_then(|arr| arr.iter().find(|item| is_recipe_node(item)));
    }
    if is_recipe_node(json_ld) {
        return Some(json_ld);
    }
    json_ld
        .get("@graph")
        .and_then(Value::as_array)
        .and_then(|arr| arr.iter().find(|item| is_recipe_node(item)))
}

/// Extract a recipe draft from structured markup anywhere in the page.
///
/// Fails with [`ScrapeError::EmptyExtraction`] only when neither
/// structured markup nor the selector fallbacks yield a name, an
/// ingredient or an instruction.
pub fn extract_generic(document: &Html) -> Result<RecipeDraft, ScrapeError> {
    let selector = Selector::parse("script[type='application/ld+json']")
        .expect("static selector must parse");

    let mut draft = RecipeDraft::new();
    for script in document.select(&selector) {
        let cleaned_json = sanitize_json(&script.inner_html());
        let Ok(json_ld) = serde_json::from_str::<Value>(&cleaned_json) else {
            continue;
        };
        let Some(node) = find_recipe_node(&json_ld) else {
            continue;
        };
        match serde_json::from_value::<JsonLdRecipe>(node.clone()) {
            Ok(recipe) => {
                debug!("Found recipe JSON-LD node");
                draft = recipe.into_draft();
                break;
            }
            Err(err) => {
                debug!("Skipping unparseable recipe node: {err}");
            }
        }
    }

    // Partial or missing markup: fill the headline fields from the
    // standard page metadata.
    if draft.name.is_none() {
        draft.name = selectors::title(document);
    }
    if draft.description.is_none() {
        draft.description = selectors::description(document);
    }
    if draft.image.is_none() {
        draft.image = selectors::image(document);
    }

    if draft.is_empty() {
        return Err(ScrapeError::EmptyExtraction);
    }
    Ok(draft)
}
