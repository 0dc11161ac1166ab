//! # Ingredient Merger
//!
//! Second stage of the aggregation pipeline. Consumes the collector's
//! occurrence sequence in order and folds occurrences that share a
//! normalized name into a single [`AggregatedItem`].
//!
//! ## Merge Rules
//!
//! - The first occurrence of a name creates the item and fixes its display
//!   name, unit, raw text, and category
//! - A later occurrence with the same unit is summed into the running
//!   amount when both sides are numeric, and recorded in `recipes`
//! - Everything else (unit mismatch, non-numeric amount on either side)
//!   lands in `alternative_amounts` in arrival order
//! - Once the running amount starts out freeform it stays freeform; later
//!   numeric contributions never restart the sum
//!
//! Items come back out in first-seen order.

use crate::amount::Amount;
use crate::category::{Category, CategoryTaxonomy};
use crate::collector::IngredientOccurrence;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Provenance of one combined contribution to an aggregated item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceRecord {
    /// Id of the contributing recipe
    pub recipe_id: String,
    /// Name of the contributing recipe
    pub recipe_name: String,
    /// Amount exactly as written in the recipe, before scaling
    pub original_amount: String,
    /// Serving multiplier that was applied
    pub multiplier: f64,
}

/// A contribution that could not be merged into the running total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeAmount {
    /// The contribution's amount, scaled when numeric
    pub amount: Amount,
    /// Unit of this contribution
    pub unit: String,
    /// Raw recipe line of this contribution
    pub original: String,
    /// Id of the contributing recipe
    pub recipe_id: String,
    /// Name of the contributing recipe
    pub recipe_name: String,
    /// Serving multiplier in effect for the contributing recipe
    pub multiplier: f64,
}

/// One deduplicated grocery item, merged across recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedItem {
    /// Display name, fixed by the first occurrence
    pub name: String,
    /// Running combined amount, or the first occurrence's free text
    pub amount: Amount,
    /// Unit of the running amount, fixed by the first occurrence
    pub unit: String,
    /// Raw recipe line of the first occurrence
    pub original: String,
    /// Store category assigned from the name
    pub category: Category,
    /// Provenance of every contribution combined into `amount`
    pub recipes: Vec<ProvenanceRecord>,
    /// Contributions kept separate from the running amount
    pub alternative_amounts: Vec<AlternativeAmount>,
}

impl AggregatedItem {
    /// Total number of recipe contributions, combined or not
    pub fn contribution_count(&self) -> usize {
        self.recipes.len() + self.alternative_amounts.len()
    }
}

/// Accumulates occurrences into aggregated items keyed by normalized name.
///
/// Insertion order is preserved: items come back in the order their names
/// were first seen, which keeps report output deterministic.
pub struct IngredientMerger<'a> {
    taxonomy: &'a CategoryTaxonomy,
    items: Vec<AggregatedItem>,
    index: HashMap<String, usize>,
}

impl<'a> IngredientMerger<'a> {
    /// Create an empty merger using the given category taxonomy
    pub fn new(taxonomy: &'a CategoryTaxonomy) -> Self {
        Self {
            taxonomy,
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Fold one occurrence into the accumulated items
    pub fn merge(&mut self, occurrence: IngredientOccurrence) {
        match self.index.get(&occurrence.normalized_name) {
            Some(&slot) => self.fold_into_existing(slot, occurrence),
            None => self.insert_new(occurrence),
        }
    }

    /// Number of distinct items accumulated so far
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no occurrence has been merged yet
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finish merging and hand back the items in first-seen order
    pub fn into_items(self) -> Vec<AggregatedItem> {
        self.items
    }

    fn insert_new(&mut self, occurrence: IngredientOccurrence) {
        let IngredientOccurrence {
            normalized_name,
            display_name,
            raw_amount,
            unit,
            recipe_original,
            recipe_id,
            recipe_name,
            multiplier,
        } = occurrence;

        let category = self.taxonomy.categorize(&display_name);
        let amount = Amount::scaled(&raw_amount, multiplier);
        trace!(
            "New item '{}' ({}) with amount {}",
            display_name,
            category,
            amount
        );

        self.index.insert(normalized_name, self.items.len());
        self.items.push(AggregatedItem {
            name: display_name,
            amount,
            unit,
            original: recipe_original,
            category,
            recipes: vec![ProvenanceRecord {
                recipe_id,
                recipe_name,
                original_amount: raw_amount,
                multiplier,
            }],
            alternative_amounts: Vec::new(),
        });
    }

    fn fold_into_existing(&mut self, slot: usize, occurrence: IngredientOccurrence) {
        let IngredientOccurrence {
            normalized_name: _,
            display_name: _,
            raw_amount,
            unit,
            recipe_original,
            recipe_id,
            recipe_name,
            multiplier,
        } = occurrence;

        let item = &mut self.items[slot];
        let incoming = Amount::scaled(&raw_amount, multiplier);
        let units_match = item.unit == unit;

        match (&mut item.amount, incoming) {
            // Combinable only when the unit agrees and both sides are numeric
            (Amount::Numeric(total), Amount::Numeric(addition)) if units_match => {
                *total += addition;
                trace!("Combined '{}' into running total {}", item.name, total);
                item.recipes.push(ProvenanceRecord {
                    recipe_id,
                    recipe_name,
                    original_amount: raw_amount,
                    multiplier,
                });
            }
            (_, alternative) => {
                trace!(
                    "Keeping '{}' contribution separate ({} {})",
                    item.name,
                    alternative,
                    unit
                );
                item.alternative_amounts.push(AlternativeAmount {
                    amount: alternative,
                    unit,
                    original: recipe_original,
                    recipe_id,
                    recipe_name,
                    multiplier,
                });
            }
        }
    }
}

/// Merge an occurrence sequence into aggregated items in one call
pub fn merge_occurrences(
    occurrences: Vec<IngredientOccurrence>,
    taxonomy: &CategoryTaxonomy,
) -> Vec<AggregatedItem> {
    let mut merger = IngredientMerger::new(taxonomy);
    for occurrence in occurrences {
        merger.merge(occurrence);
    }
    merger.into_items()
}
