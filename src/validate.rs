//! Validation and normalization.
//!
//! The single authority on whether an extraction produced a usable
//! recipe. Every strategy's draft passes through here; no other
//! component may short-circuit the decision.

use crate::error::ScrapeError;
use crate::model::{Recipe, RecipeDraft, RecipeEntry};
use crate::selectors::squash_whitespace;

fn normalize_opt(value: Option<String>) -> Option<String> {
    value
        .map(|s| squash_whitespace(&s))
        .filter(|s| !s.is_empty())
}

fn normalize_entries(items: Vec<String>) -> Vec<RecipeEntry> {
    let mut entries: Vec<RecipeEntry> = items
        .into_iter()
        .map(|item| squash_whitespace(&item))
        .filter(|item| !item.is_empty())
        .map(|item| RecipeEntry { id: 0, item })
        .collect();
    RecipeEntry::renumber(&mut entries);
    entries
}

/// Convert a draft into a canonical [`Recipe`].
///
/// Re-normalizes every string field (idempotent even when the strategy
/// already did), drops empty fields and empty list entries, and assigns
/// contiguous positional ids. Fails with [`ScrapeError::InvalidRecipe`]
/// when the name is missing or both lists end up empty.
pub fn validate(draft: RecipeDraft) -> Result<Recipe, ScrapeError> {
    let name = normalize_opt(draft.name)
        .ok_or_else(|| ScrapeError::InvalidRecipe("recipe has no name".to_string()))?;

    let recipe_ingredients = normalize_entries(draft.ingredients);
    let recipe_instructions = normalize_entries(draft.instructions);
    if recipe_ingredients.is_empty() && recipe_instructions.is_empty() {
        return Err(ScrapeError::InvalidRecipe(
            "recipe has no ingredients or instructions".to_string(),
        ));
    }

    Ok(Recipe {
        name,
        description: normalize_opt(draft.description),
        image: normalize_opt(draft.image),
        recipe_ingredients,
        recipe_instructions,
        recipe_yield: normalize_opt(draft.recipe_yield),
        prep_time: normalize_opt(draft.prep_time),
        cook_time: normalize_opt(draft.cook_time),
        total_time: normalize_opt(draft.total_time),
        url: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(name: &str, ingredients: &[&str], instructions: &[&str]) -> RecipeDraft {
        let mut draft = RecipeDraft::new();
        draft.name = Some(name.to_string());
        for item in ingredients {
            draft.push_ingredient(*item);
        }
        for item in instructions {
            draft.push_instruction(*item);
        }
        draft
    }

    #[test]
    fn test_normalizes_whitespace_everywhere() {
        let mut draft = draft_with("  Potato   Salad ", &["  2   potatoes "], &[" Boil  them "]);
        draft.description = Some("  A   classic. ".to_string());

        let recipe = validate(draft).unwrap();

        assert_eq!(recipe.name, "Potato Salad");
        assert_eq!(recipe.description.as_deref(), Some("A classic."));
        assert_eq!(recipe.recipe_ingredients[0].item, "2 potatoes");
        assert_eq!(recipe.recipe_instructions[0].item, "Boil them");
    }

    #[test]
    fn test_ids_are_positional() {
        let draft = draft_with("Soup", &["a", "", "b", "   ", "c"], &["stir"]);

        let recipe = validate(draft).unwrap();

        let ids: Vec<usize> = recipe.recipe_ingredients.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        let items: Vec<&str> = recipe
            .recipe_ingredients
            .iter()
            .map(|e| e.item.as_str())
            .collect();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rejects_missing_name() {
        let draft = draft_with("   ", &["flour"], &[]);
        assert!(matches!(
            validate(draft),
            Err(ScrapeError::InvalidRecipe(_))
        ));
    }

    #[test]
    fn test_rejects_empty_recipe() {
        let draft = draft_with("Empty", &[], &[]);
        assert!(matches!(
            validate(draft),
            Err(ScrapeError::InvalidRecipe(_))
        ));
    }

    #[test]
    fn test_instructions_alone_are_enough() {
        let draft = draft_with("Toast", &[], &["Toast the bread"]);
        assert!(validate(draft).is_ok());
    }

    #[test]
    fn test_idempotent_on_valid_recipe() {
        let mut draft = draft_with("Stew", &["beef", "onion"], &["simmer"]);
        draft.recipe_yield = Some("4".to_string());
        let first = validate(draft).unwrap();

        let mut round_trip = RecipeDraft::new();
        round_trip.name = Some(first.name.clone());
        round_trip.recipe_yield = first.recipe_yield.clone();
        for entry in &first.recipe_ingredients {
            round_trip.push_ingredient(entry.item.clone());
        }
        for entry in &first.recipe_instructions {
            round_trip.push_instruction(entry.item.clone());
        }

        let second = validate(round_trip).unwrap();
        assert_eq!(first, second);
    }
}
