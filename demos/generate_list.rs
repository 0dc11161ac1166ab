//! # Grocery List Generation Example
//!
//! This example walks through the full aggregation pipeline: resolving
//! requested recipe ids, applying serving multipliers, merging shared
//! ingredients across recipes, and printing the categorized report with
//! shopping tips. Run with `RUST_LOG=debug` to watch the pipeline stages.

use anyhow::Result;
use mealcart::aggregate::{format_report_for_display, generate_grocery_report};
use mealcart::recipe::{IngredientLine, RecipeRef, RecipeSelection};
use std::collections::HashMap;

fn main() -> Result<()> {
    env_logger::init();

    println!("🛒 Grocery List Generation Example");
    println!("===================================\n");

    // Example 1: Resolve the requested recipes
    println!("📖 Example 1: Recipe Selection");
    println!("-------------------------------");

    let cookbook = vec![
        RecipeRef::new("taco-night", "Taco Night", 4)
            .with_ingredient(IngredientLine::new("ground beef", "500", "g"))
            .with_ingredient(IngredientLine::new("onion", "1", ""))
            .with_ingredient(IngredientLine::new("tomato", "2", ""))
            .with_ingredient(IngredientLine::new("cheddar cheese", "150", "g"))
            .with_ingredient(IngredientLine::new("salt", "to taste", "")),
        RecipeRef::new("pasta-bake", "Pasta Bake", 6)
            .with_ingredient(IngredientLine::new("pasta", "400", "g"))
            .with_ingredient(IngredientLine::new("Onion", "1", ""))
            .with_ingredient(IngredientLine::new("tomato", "3", ""))
            .with_ingredient(IngredientLine::new("milk", "1", "cup"))
            .with_ingredient(IngredientLine::new("salt", "1", "tsp")),
        RecipeRef::new("pancakes", "Sunday Pancakes", 2)
            .with_ingredient(IngredientLine::new("flour", "2", "cups"))
            .with_ingredient(IngredientLine::new("milk", "300", "ml"))
            .with_ingredient(IngredientLine::new("egg", "2", "")),
    ];

    let requested = vec![
        "taco-night".to_string(),
        "pasta-bake".to_string(),
        "pancakes".to_string(),
        "mystery-stew".to_string(),
    ];
    let selection = RecipeSelection::resolve(&requested, &cookbook);

    println!("Requested {} recipe(s), found {}", requested.len(), selection.recipes.len());
    if let Some(warning) = selection.warning() {
        println!("⚠️  {}", warning);
    }

    println!();

    // Example 2: Aggregate with serving multipliers
    println!("⚖️  Example 2: Serving Multipliers");
    println!("----------------------------------");

    // Pancakes for four instead of two
    let mut multipliers = HashMap::new();
    multipliers.insert("pancakes".to_string(), 2.0);

    let report = generate_grocery_report(&selection.recipes, &multipliers)?;

    println!("Doubled the pancake recipe before merging:");
    for recipe in &report.recipes {
        println!(
            "  - {} (serves {}) x{}",
            recipe.name, recipe.servings, recipe.multiplier
        );
    }

    println!();

    // Example 3: The categorized shopping list
    println!("🥕 Example 3: Categorized Shopping List");
    println!("---------------------------------------");

    println!("{}", format_report_for_display(&report));

    // Example 4: Provenance of a merged item
    println!("🔍 Example 4: Where did the onions come from?");
    println!("---------------------------------------------");

    if let Some(onion) = report.grocery_list.iter().find(|item| item.name == "onion") {
        println!(
            "'{}' combines {} contribution(s) into {} {}:",
            onion.name,
            onion.recipes.len(),
            onion.amount,
            if onion.unit.is_empty() {
                "(no unit)"
            } else {
                onion.unit.as_str()
            }
        );
        for record in &onion.recipes {
            println!(
                "  - {} from '{}' (x{})",
                record.original_amount, record.recipe_name, record.multiplier
            );
        }
    }

    println!();

    // Example 5: Summary counters
    println!("📊 Example 5: Summary");
    println!("---------------------");

    println!("Total items:    {}", report.summary.total_items);
    println!("Recipes used:   {}", report.summary.recipes_used);
    println!(
        "Shopping time:  ~{} minutes",
        report.summary.estimated_shopping_time_minutes
    );
    println!(
        "Categories:     {}",
        report
            .summary
            .categories
            .iter()
            .map(|category| category.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    println!("\n✨ Grocery list generation completed!");

    Ok(())
}
