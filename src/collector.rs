//! # Ingredient Occurrence Collector
//!
//! First stage of the aggregation pipeline. Walks the input recipes in
//! order, attaches each recipe's serving multiplier, and flattens every
//! ingredient line into a standalone occurrence record carrying its
//! provenance. The merge key (trimmed, lowercased name) is derived here so
//! later stages never touch raw names.

use crate::errors::AggregationError;
use crate::recipe::RecipeRef;
use log::debug;
use std::collections::HashMap;

/// Normalize an ingredient name into its merge key.
///
/// Two ingredient lines whose names differ only in surrounding whitespace
/// or letter case normalize to the same key and merge into one item.
///
/// # Examples
///
/// ```rust
/// use mealcart::collector::normalize_name;
///
/// assert_eq!(normalize_name(" Tomato "), "tomato");
/// assert_eq!(normalize_name("tomato"), "tomato");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// One ingredient contribution, flattened out of its recipe
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientOccurrence {
    /// Merge key derived from the name via [`normalize_name`]
    pub normalized_name: String,
    /// The name as written in the recipe
    pub display_name: String,
    /// Quantity text as written in the recipe, unscaled
    pub raw_amount: String,
    /// Measurement unit, possibly empty
    pub unit: String,
    /// Raw recipe line the ingredient was parsed from
    pub recipe_original: String,
    /// Id of the contributing recipe
    pub recipe_id: String,
    /// Name of the contributing recipe
    pub recipe_name: String,
    /// Serving multiplier in effect for the contributing recipe
    pub multiplier: f64,
}

/// Flatten recipes into an ordered sequence of ingredient occurrences.
///
/// Recipes are visited in input order and ingredients in recipe order, so
/// the output order is deterministic. A recipe's multiplier comes from the
/// `multipliers` map and defaults to 1.0 when its id is absent.
///
/// # Arguments
///
/// * `recipes` - resolved recipes, must be non-empty
/// * `multipliers` - per-recipe-id serving multipliers
pub fn collect_occurrences(
    recipes: &[RecipeRef],
    multipliers: &HashMap<String, f64>,
) -> Result<Vec<IngredientOccurrence>, AggregationError> {
    if recipes.is_empty() {
        return Err(AggregationError::InvalidInput(
            "recipe set is empty".to_string(),
        ));
    }

    let mut occurrences = Vec::new();

    for recipe in recipes {
        let multiplier = multipliers.get(&recipe.id).copied().unwrap_or(1.0);
        debug!(
            "Collecting {} ingredient(s) from recipe '{}' with multiplier {}",
            recipe.ingredients.len(),
            recipe.name,
            multiplier
        );

        for ingredient in &recipe.ingredients {
            occurrences.push(IngredientOccurrence {
                normalized_name: normalize_name(&ingredient.name),
                display_name: ingredient.name.clone(),
                raw_amount: ingredient.amount.clone(),
                unit: ingredient.unit.clone(),
                recipe_original: ingredient.original.clone(),
                recipe_id: recipe.id.clone(),
                recipe_name: recipe.name.clone(),
                multiplier,
            });
        }
    }

    debug!(
        "Collected {} occurrence(s) from {} recipe(s)",
        occurrences.len(),
        recipes.len()
    );
    Ok(occurrences)
}
