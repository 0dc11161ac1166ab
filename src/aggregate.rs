//! # Grocery Aggregation Pipeline
//!
//! Front door of the crate. Wires the pipeline stages together: collect
//! ingredient occurrences from the recipes, merge them into deduplicated
//! items, and build the categorized shopping report.
//!
//! ## Usage
//!
//! ```rust
//! use mealcart::aggregate::generate_grocery_report;
//! use mealcart::recipe::{IngredientLine, RecipeRef};
//! use std::collections::HashMap;
//!
//! let recipes = vec![RecipeRef::new("r1", "Omelette", 2)
//!     .with_ingredient(IngredientLine::new("egg", "3", ""))];
//!
//! let report = generate_grocery_report(&recipes, &HashMap::new()).unwrap();
//! assert_eq!(report.summary.total_items, 1);
//! ```

use crate::category::CategoryTaxonomy;
use crate::collector::collect_occurrences;
use crate::errors::AggregationError;
use crate::merger::merge_occurrences;
use crate::recipe::RecipeRef;
use crate::report::{build_report, CategorizedReport};
use log::info;
use std::collections::HashMap;

/// Run the full aggregation pipeline with the standard category taxonomy
pub fn generate_grocery_report(
    recipes: &[RecipeRef],
    multipliers: &HashMap<String, f64>,
) -> Result<CategorizedReport, AggregationError> {
    generate_grocery_report_with_taxonomy(recipes, multipliers, &CategoryTaxonomy::standard())
}

/// Run the full aggregation pipeline with a caller-supplied taxonomy.
///
/// The computation is pure and synchronous; every call works on its own
/// fresh state, so concurrent callers need no coordination.
pub fn generate_grocery_report_with_taxonomy(
    recipes: &[RecipeRef],
    multipliers: &HashMap<String, f64>,
    taxonomy: &CategoryTaxonomy,
) -> Result<CategorizedReport, AggregationError> {
    info!("Generating grocery report from {} recipe(s)", recipes.len());

    // Flatten recipes into provenance-tagged occurrences
    let occurrences = collect_occurrences(recipes, multipliers)?;

    // Fold occurrences into deduplicated, categorized items
    let items = merge_occurrences(occurrences, taxonomy);

    let report = build_report(items, recipes, multipliers);

    info!(
        "Grocery report ready: {} item(s), {} recipe(s) used, ~{} min of shopping",
        report.summary.total_items,
        report.summary.recipes_used,
        report.summary.estimated_shopping_time_minutes
    );

    Ok(report)
}

/// Format a report as human-readable text for display
pub fn format_report_for_display(report: &CategorizedReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "🛒 **Grocery List** ({} items, ~{} min)\n",
        report.summary.total_items, report.summary.estimated_shopping_time_minutes
    ));

    for (category, items) in &report.categorized_list {
        output.push_str(&format!("\n**{}**\n", category));
        for item in items {
            if item.unit.is_empty() {
                output.push_str(&format!("• {} {}\n", item.amount, item.name));
            } else {
                output.push_str(&format!("• {} {} {}\n", item.amount, item.unit, item.name));
            }
            for alternative in &item.alternative_amounts {
                if alternative.unit.is_empty() {
                    output.push_str(&format!("  plus {}\n", alternative.amount));
                } else {
                    output.push_str(&format!(
                        "  plus {} {}\n",
                        alternative.amount, alternative.unit
                    ));
                }
            }
        }
    }

    if !report.shopping_tips.is_empty() {
        output.push_str("\n💡 **Shopping Tips**\n");
        for tip in &report.shopping_tips {
            output.push_str(&format!("• {}\n", tip));
        }
    }

    output
}
