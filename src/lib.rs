//! # MealCart Grocery Aggregation
//!
//! Core grocery-list engine for a recipe and meal-planning backend. Given a
//! set of recipes with structured ingredient lines and per-recipe serving
//! multipliers, it merges ingredient occurrences into a single deduplicated,
//! quantity-combined, categorized shopping list and derives summary
//! statistics and heuristic shopping tips from the result.

pub mod aggregate;
pub mod amount;
pub mod category;
pub mod collector;
pub mod errors;
pub mod list;
pub mod merger;
pub mod recipe;
pub mod report;

pub use aggregate::{
    format_report_for_display, generate_grocery_report, generate_grocery_report_with_taxonomy,
};
pub use amount::Amount;
pub use category::{Category, CategoryTaxonomy};
pub use errors::{AggregationError, ListError, PartialResultWarning};
pub use list::{ListItem, ListItemUpdate, NewListItem, UserGroceryList};
pub use merger::{AggregatedItem, AlternativeAmount, IngredientMerger, ProvenanceRecord};
pub use recipe::{IngredientLine, RecipeRef, RecipeSelection};
pub use report::{CategorizedReport, RecipeSummary, ShoppingSummary};
