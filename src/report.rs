//! # Grocery Report Builder
//!
//! Final stage of the aggregation pipeline. Takes the merged items and
//! produces the categorized shopping report:
//!
//! - the flat grocery list sorted by (category, name)
//! - the same items grouped per category
//! - heuristic shopping tips derived from category counts
//! - summary counters (item total, recipes used, estimated shopping time)
//!
//! The report is a plain value; serialization and delivery are the
//! caller's concern.

use crate::category::Category;
use crate::merger::AggregatedItem;
use crate::recipe::RecipeRef;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Suggested when the list has more produce items than this
const MANY_PRODUCE_THRESHOLD: usize = 5;
/// Suggested when the list has more dairy items than this
const MANY_DAIRY_THRESHOLD: usize = 3;
/// Shopping time is estimated in 5 minute blocks per 10 items
const ITEMS_PER_TIME_BLOCK: usize = 10;
const MINUTES_PER_TIME_BLOCK: usize = 5;

const PRODUCE_TIP: &str =
    "You have many fresh produce items. Shop for these last to keep them fresh.";
const COOLER_BAG_TIP: &str = "Don't forget to bring a cooler bag for meat and seafood items.";
const DAIRY_TIP: &str = "Check expiration dates on dairy products before purchasing.";
const STORE_LAYOUT_TIP: &str = "Organize your list by store layout to save time.";
const PANTRY_CHECK_TIP: &str = "Check your pantry before shopping to avoid duplicate purchases.";

/// One input recipe as echoed back in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Recipe id
    pub id: String,
    /// Recipe display name
    pub name: String,
    /// Servings the recipe is written for
    pub servings: u32,
    /// Serving multiplier that was applied during aggregation
    pub multiplier: f64,
}

/// Summary counters over the finished grocery list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingSummary {
    /// Number of deduplicated items on the list
    pub total_items: usize,
    /// Number of distinct recipes that contributed at least one ingredient
    pub recipes_used: usize,
    /// Categories present on the list, in display-name order
    pub categories: BTreeSet<Category>,
    /// Rough shopping time estimate derived from the item count
    pub estimated_shopping_time_minutes: u32,
}

/// The complete categorized shopping report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedReport {
    /// All items, sorted ascending by (category, name)
    pub grocery_list: Vec<AggregatedItem>,
    /// The sorted items grouped per category
    pub categorized_list: BTreeMap<Category, Vec<AggregatedItem>>,
    /// Heuristic shopping tips, most specific first
    pub shopping_tips: Vec<String>,
    /// Summary counters
    pub summary: ShoppingSummary,
    /// The recipes the list was generated from
    pub recipes: Vec<RecipeSummary>,
}

/// Assemble the report from merged items and the recipes they came from.
///
/// # Arguments
///
/// * `items` - merged items from the
///   [`IngredientMerger`](crate::merger::IngredientMerger)
/// * `recipes` - the resolved input recipes, echoed into `recipes`
/// * `multipliers` - the per-recipe multipliers used during collection
pub fn build_report(
    items: Vec<AggregatedItem>,
    recipes: &[RecipeRef],
    multipliers: &HashMap<String, f64>,
) -> CategorizedReport {
    let mut grocery_list = items;
    grocery_list.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));

    let categorized_list = group_by_category(&grocery_list);
    let shopping_tips = shopping_tips(&grocery_list);
    let summary = ShoppingSummary {
        total_items: grocery_list.len(),
        recipes_used: count_recipes_used(&grocery_list),
        categories: categorized_list.keys().copied().collect(),
        estimated_shopping_time_minutes: estimated_shopping_time_minutes(grocery_list.len()),
    };
    let recipes = recipes
        .iter()
        .map(|recipe| RecipeSummary {
            id: recipe.id.clone(),
            name: recipe.name.clone(),
            servings: recipe.servings,
            multiplier: multipliers.get(&recipe.id).copied().unwrap_or(1.0),
        })
        .collect();

    debug!(
        "Report built: {} item(s) in {} categorie(s), {} tip(s)",
        summary.total_items,
        summary.categories.len(),
        shopping_tips.len()
    );

    CategorizedReport {
        grocery_list,
        categorized_list,
        shopping_tips,
        summary,
        recipes,
    }
}

/// Derive shopping tips from the finished list.
///
/// Category-specific tips come first, then the two general tips, always in
/// the same order. Deterministic for identical input.
pub fn shopping_tips(grocery_list: &[AggregatedItem]) -> Vec<String> {
    let mut tips = Vec::new();

    let produce_items = count_category(grocery_list, Category::Produce);
    if produce_items > MANY_PRODUCE_THRESHOLD {
        tips.push(PRODUCE_TIP.to_string());
    }

    let protein_items = count_category(grocery_list, Category::MeatSeafood);
    if protein_items > 0 {
        tips.push(COOLER_BAG_TIP.to_string());
    }

    let dairy_items = count_category(grocery_list, Category::DairyEggs);
    if dairy_items > MANY_DAIRY_THRESHOLD {
        tips.push(DAIRY_TIP.to_string());
    }

    tips.push(STORE_LAYOUT_TIP.to_string());
    tips.push(PANTRY_CHECK_TIP.to_string());

    tips
}

/// Estimate shopping time: 5 minutes for every started block of 10 items
pub fn estimated_shopping_time_minutes(total_items: usize) -> u32 {
    let blocks = (total_items + ITEMS_PER_TIME_BLOCK - 1) / ITEMS_PER_TIME_BLOCK;
    (blocks * MINUTES_PER_TIME_BLOCK) as u32
}

fn group_by_category(grocery_list: &[AggregatedItem]) -> BTreeMap<Category, Vec<AggregatedItem>> {
    let mut groups: BTreeMap<Category, Vec<AggregatedItem>> = BTreeMap::new();
    for item in grocery_list {
        groups.entry(item.category).or_default().push(item.clone());
    }
    groups
}

fn count_category(grocery_list: &[AggregatedItem], category: Category) -> usize {
    grocery_list
        .iter()
        .filter(|item| item.category == category)
        .count()
}

fn count_recipes_used(grocery_list: &[AggregatedItem]) -> usize {
    let mut ids = HashSet::new();
    for item in grocery_list {
        for record in &item.recipes {
            ids.insert(record.recipe_id.as_str());
        }
        for alternative in &item.alternative_amounts {
            ids.insert(alternative.recipe_id.as_str());
        }
    }
    ids.len()
}
