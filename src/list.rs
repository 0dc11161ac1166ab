//! # User Grocery List
//!
//! This module manages a user's standing grocery list: standalone items the
//! user curates by hand, independent from the reports the aggregation
//! pipeline generates. The only thing the two share is the category
//! taxonomy, so hand-added items land in the same store sections as
//! generated ones.
//!
//! ## Features
//!
//! - Add items with sensible defaults (amount "1", auto-assigned category)
//! - Field-wise updates, check-off tracking, and removal by id
//! - Bulk clearing of checked items or the whole list
//!
//! Persistence is the caller's concern; the list is a plain serializable
//! value.

use crate::category::{Category, CategoryTaxonomy};
use crate::errors::ListError;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// One item on a user's grocery list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// List-local item id
    pub id: String,
    /// Item name, trimmed
    pub name: String,
    /// Quantity as entered by the user
    pub amount: String,
    /// Measurement unit, possibly empty
    pub unit: String,
    /// Store category
    pub category: Category,
    /// Whether the user checked the item off
    pub checked: bool,
    /// When the item was added
    pub added_at: DateTime<Utc>,
}

/// Fields for a new list item; unset fields fall back to defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewListItem {
    /// Item name, required
    pub name: String,
    /// Quantity, defaults to "1" when unset or blank
    pub amount: Option<String>,
    /// Unit, defaults to empty
    pub unit: Option<String>,
    /// Category, defaults to the taxonomy's assignment for the name
    pub category: Option<Category>,
    /// Initial checked state, defaults to unchecked
    pub checked: bool,
}

impl NewListItem {
    /// Start a new item with just a name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Set the quantity
    pub fn with_amount(mut self, amount: &str) -> Self {
        self.amount = Some(amount.to_string());
        self
    }

    /// Set the unit
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    /// Pin the category instead of letting the taxonomy assign one
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the initial checked state
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// Field-wise update for an existing item; unset fields stay untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItemUpdate {
    /// New name, trimmed before applying
    pub name: Option<String>,
    /// New quantity
    pub amount: Option<String>,
    /// New unit
    pub unit: Option<String>,
    /// New category
    pub category: Option<Category>,
    /// New checked state
    pub checked: Option<bool>,
}

impl ListItemUpdate {
    /// Start an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename the item
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Change the quantity
    pub fn with_amount(mut self, amount: &str) -> Self {
        self.amount = Some(amount.to_string());
        self
    }

    /// Change the unit
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    /// Move the item to another category
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Check the item off or un-check it
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }
}

/// A user's standing grocery list.
///
/// Item ids are sequential within one list, so add/update/remove stay
/// deterministic and testable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroceryList {
    items: Vec<ListItem>,
    next_id: u64,
}

impl UserGroceryList {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Add an item to the list.
    ///
    /// The name is trimmed and must not end up empty. When no category is
    /// pinned, the taxonomy assigns one from the name.
    pub fn add_item(
        &mut self,
        new_item: NewListItem,
        taxonomy: &CategoryTaxonomy,
    ) -> Result<ListItem, ListError> {
        let name = new_item.name.trim();
        if name.is_empty() {
            return Err(ListError::EmptyName);
        }

        let category = new_item
            .category
            .unwrap_or_else(|| taxonomy.categorize(name));
        let id = self.next_id.to_string();
        self.next_id += 1;

        let item = ListItem {
            id,
            name: name.to_string(),
            amount: new_item
                .amount
                .filter(|amount| !amount.trim().is_empty())
                .unwrap_or_else(|| "1".to_string()),
            unit: new_item.unit.unwrap_or_default(),
            category,
            checked: new_item.checked,
            added_at: Utc::now(),
        };

        debug!("Added '{}' to grocery list as item {}", item.name, item.id);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Apply a field-wise update to the item with the given id
    pub fn update_item(
        &mut self,
        item_id: &str,
        update: ListItemUpdate,
    ) -> Result<ListItem, ListError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| ListError::ItemNotFound(item_id.to_string()))?;

        if let Some(name) = update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ListError::EmptyName);
            }
            item.name = name.to_string();
        }
        if let Some(amount) = update.amount {
            item.amount = amount;
        }
        if let Some(unit) = update.unit {
            item.unit = unit;
        }
        if let Some(category) = update.category {
            item.category = category;
        }
        if let Some(checked) = update.checked {
            item.checked = checked;
        }

        debug!("Updated grocery list item {}", item.id);
        Ok(item.clone())
    }

    /// Remove the item with the given id and hand it back
    pub fn remove_item(&mut self, item_id: &str) -> Result<ListItem, ListError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| ListError::ItemNotFound(item_id.to_string()))?;

        let removed = self.items.remove(index);
        debug!("Removed '{}' from grocery list", removed.name);
        Ok(removed)
    }

    /// Drop every checked item, returning how many were removed
    pub fn clear_checked(&mut self) -> usize {
        let initial_count = self.items.len();
        self.items.retain(|item| !item.checked);

        let removed = initial_count - self.items.len();
        if removed > 0 {
            debug!("Removed {} checked item(s) from grocery list", removed);
        }
        removed
    }

    /// Empty the list, returning how many items it held
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        debug!("Cleared grocery list ({} item(s))", removed);
        removed
    }

    /// All items in insertion order
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Look up one item by id
    pub fn get_item(&self, item_id: &str) -> Option<&ListItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Number of items on the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for UserGroceryList {
    fn default() -> Self {
        Self::new()
    }
}
