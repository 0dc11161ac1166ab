//! # User Grocery List Example
//!
//! This example manages a standing grocery list by hand: adding items with
//! auto-assigned categories, checking items off during a shopping trip,
//! clearing what was bought, and persisting the list as JSON.

use anyhow::Result;
use mealcart::category::{Category, CategoryTaxonomy};
use mealcart::list::{ListItemUpdate, NewListItem, UserGroceryList};

fn main() -> Result<()> {
    env_logger::init();

    println!("📝 User Grocery List Example");
    println!("=============================\n");

    let taxonomy = CategoryTaxonomy::standard();
    let mut list = UserGroceryList::new();

    // Example 1: Add items, letting the taxonomy pick categories
    println!("➕ Example 1: Adding Items");
    println!("--------------------------");

    list.add_item(NewListItem::new("milk").with_amount("2").with_unit("l"), &taxonomy)?;
    list.add_item(NewListItem::new("sourdough bread"), &taxonomy)?;
    list.add_item(
        NewListItem::new("frozen berries").with_amount("500").with_unit("g"),
        &taxonomy,
    )?;
    let snacks = list.add_item(
        NewListItem::new("trail mix").with_category(Category::PantryDryGoods),
        &taxonomy,
    )?;

    for item in list.items() {
        println!(
            "  [{}] {} {} {} ({})",
            item.id, item.amount, item.unit, item.name, item.category
        );
    }

    println!();

    // Example 2: A blank name is rejected
    println!("🚫 Example 2: Validation");
    println!("------------------------");

    match list.add_item(NewListItem::new("   "), &taxonomy) {
        Ok(_) => println!("Unexpected success with a blank name"),
        Err(e) => println!("Expected error: {}", e),
    }

    println!();

    // Example 3: Check items off during the trip
    println!("✅ Example 3: Checking Items Off");
    println!("--------------------------------");

    let item_ids: Vec<String> = list.items().iter().map(|item| item.id.clone()).collect();
    list.update_item(&item_ids[0], ListItemUpdate::new().with_checked(true))?;
    list.update_item(&item_ids[1], ListItemUpdate::new().with_checked(true))?;
    list.update_item(&snacks.id, ListItemUpdate::new().with_amount("2"))?;

    for item in list.items() {
        let mark = if item.checked { "x" } else { " " };
        println!("  [{}] {} {}", mark, item.amount, item.name);
    }

    let removed = list.clear_checked();
    println!("Cleared {} checked item(s), {} remaining", removed, list.len());

    println!();

    // Example 4: Persist and restore
    println!("💾 Example 4: Persistence");
    println!("-------------------------");

    let json = serde_json::to_string_pretty(&list)?;
    println!("{}", json);

    let restored: UserGroceryList = serde_json::from_str(&json)?;
    println!("Restored {} item(s) from JSON", restored.len());

    println!("\n✨ Grocery list management completed!");

    Ok(())
}
