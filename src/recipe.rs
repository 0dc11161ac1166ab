//! # Recipe Input Model
//!
//! This module defines the input side of the aggregation pipeline: recipes
//! with structured ingredient lines, as handed over by the recipe store.
//! Free-text parsing happens upstream; by the time data reaches this crate
//! every ingredient is already split into name, amount, and unit.
//!
//! ## Usage
//!
//! ```rust
//! use mealcart::recipe::{IngredientLine, RecipeRef};
//!
//! let pasta_night = RecipeRef::new("r1", "Pasta Night", 4)
//!     .with_ingredient(IngredientLine::new("spaghetti", "500", "g"))
//!     .with_ingredient(IngredientLine::new("garlic", "3", "cloves"));
//! assert_eq!(pasta_night.ingredients.len(), 2);
//! ```

use crate::errors::PartialResultWarning;
use log::warn;
use serde::{Deserialize, Serialize};

/// One structured ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Ingredient name as written in the recipe (e.g. "Roma tomatoes")
    pub name: String,

    /// Quantity as a string, either decimal-like ("2", "0.5") or free text
    /// ("to taste")
    pub amount: String,

    /// Measurement unit, possibly empty (e.g. "cup", "g", "")
    pub unit: String,

    /// The raw recipe line the structured fields were extracted from
    pub original: String,
}

impl IngredientLine {
    /// Create an ingredient line. The raw text defaults to the non-empty
    /// fields joined with spaces; use `with_original` when the upstream
    /// line is available.
    pub fn new(name: &str, amount: &str, unit: &str) -> Self {
        let original = [amount, unit, name]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            name: name.to_string(),
            amount: amount.to_string(),
            unit: unit.to_string(),
            original,
        }
    }

    /// Replace the raw text with the actual upstream recipe line
    pub fn with_original(mut self, original: &str) -> Self {
        self.original = original.to_string();
        self
    }
}

/// A recipe as fetched from the recipe store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRef {
    /// Unique recipe id issued by the store
    pub id: String,

    /// Recipe display name
    pub name: String,

    /// Number of servings the ingredient quantities are written for
    pub servings: u32,

    /// Structured ingredient lines
    pub ingredients: Vec<IngredientLine>,
}

impl RecipeRef {
    /// Create a recipe with no ingredients yet
    pub fn new(id: &str, name: &str, servings: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            servings,
            ingredients: Vec::new(),
        }
    }

    /// Append one ingredient line
    pub fn with_ingredient(mut self, ingredient: IngredientLine) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Replace the ingredient list wholesale
    pub fn with_ingredients(mut self, ingredients: Vec<IngredientLine>) -> Self {
        self.ingredients = ingredients;
        self
    }
}

/// Result of resolving requested recipe ids against the recipes the store
/// actually returned.
///
/// Missing ids are not an error: aggregation proceeds with whatever was
/// found, and the caller surfaces the gap via [`RecipeSelection::warning`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSelection {
    /// Recipes found, in request order
    pub recipes: Vec<RecipeRef>,

    /// Requested ids with no matching recipe, in request order
    pub missing_ids: Vec<String>,
}

impl RecipeSelection {
    /// Match requested ids against available recipes.
    ///
    /// Each requested id is looked up by exact match; order (and repeats)
    /// of the request are preserved in the result.
    pub fn resolve(requested_ids: &[String], available: &[RecipeRef]) -> Self {
        let mut recipes = Vec::new();
        let mut missing_ids = Vec::new();

        for id in requested_ids {
            match available.iter().find(|recipe| recipe.id == *id) {
                Some(recipe) => recipes.push(recipe.clone()),
                None => missing_ids.push(id.clone()),
            }
        }

        if !missing_ids.is_empty() {
            warn!("Some recipes not found: {}", missing_ids.join(", "));
        }

        Self {
            recipes,
            missing_ids,
        }
    }

    /// Whether every requested id was resolved
    pub fn is_complete(&self) -> bool {
        self.missing_ids.is_empty()
    }

    /// Warning describing the unresolved ids, if any
    pub fn warning(&self) -> Option<PartialResultWarning> {
        if self.missing_ids.is_empty() {
            None
        } else {
            Some(PartialResultWarning {
                missing_ids: self.missing_ids.clone(),
            })
        }
    }
}
