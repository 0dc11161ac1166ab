//! # Grocery Category Taxonomy
//!
//! This module defines the fixed set of store categories and the keyword
//! taxonomy that assigns ingredient names to them.
//!
//! ## Features
//!
//! - Fixed category set matching common grocery store sections
//! - Keyword-based categorization with substring matching
//! - First-match-wins over a fixed category testing order
//! - `"Other"` fallback for names no keyword covers
//!
//! ## Usage
//!
//! ```rust
//! use mealcart::category::{Category, CategoryTaxonomy};
//!
//! let taxonomy = CategoryTaxonomy::standard();
//! assert_eq!(taxonomy.categorize("chicken breast"), Category::MeatSeafood);
//! assert_eq!(taxonomy.categorize("xylophone"), Category::Other);
//! ```

use log::trace;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A grocery store section an ingredient belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Fresh fruits, vegetables, and herbs
    Produce,
    /// Meat, poultry, and seafood
    #[serde(rename = "Meat & Seafood")]
    MeatSeafood,
    /// Milk products and eggs
    #[serde(rename = "Dairy & Eggs")]
    DairyEggs,
    /// Shelf-stable staples
    #[serde(rename = "Pantry & Dry Goods")]
    PantryDryGoods,
    /// Dried spices and seasonings
    #[serde(rename = "Spices & Seasonings")]
    SpicesSeasonings,
    /// Condiments, sauces, and sweet syrups
    #[serde(rename = "Condiments & Sauces")]
    CondimentsSauces,
    /// Frozen foods
    Frozen,
    /// Drinks
    Beverages,
    /// Baking supplies
    Baking,
    /// Canned and jarred goods
    #[serde(rename = "Canned Goods")]
    CannedGoods,
    /// Fallback for anything the taxonomy does not recognize
    Other,
}

impl Category {
    /// Get the display name of the category as it appears in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::MeatSeafood => "Meat & Seafood",
            Category::DairyEggs => "Dairy & Eggs",
            Category::PantryDryGoods => "Pantry & Dry Goods",
            Category::SpicesSeasonings => "Spices & Seasonings",
            Category::CondimentsSauces => "Condiments & Sauces",
            Category::Frozen => "Frozen",
            Category::Beverages => "Beverages",
            Category::Baking => "Baking",
            Category::CannedGoods => "Canned Goods",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Categories order by display name, so ordered collections keyed by
// Category iterate in the same lexicographic order report sorting uses.
impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// The standard keyword table. Categories are tested top to bottom and the
// first keyword hit wins, so "pepper" files under Produce even though it
// also appears under Pantry & Dry Goods. Matching is substring based, not
// whole word.
const STANDARD_TAXONOMY: &[(Category, &[&str])] = &[
    (
        Category::Produce,
        &[
            "tomato",
            "onion",
            "garlic",
            "carrot",
            "celery",
            "pepper",
            "lettuce",
            "spinach",
            "potato",
            "apple",
            "banana",
            "lemon",
            "lime",
            "orange",
            "cucumber",
            "mushroom",
            "broccoli",
            "cauliflower",
            "zucchini",
            "herbs",
            "cilantro",
            "parsley",
            "basil",
            "thyme",
            "rosemary",
        ],
    ),
    (
        Category::MeatSeafood,
        &[
            "chicken", "beef", "pork", "turkey", "fish", "salmon", "tuna", "shrimp", "crab",
            "lobster", "bacon", "ham", "sausage", "ground",
        ],
    ),
    (
        Category::DairyEggs,
        &[
            "milk",
            "cheese",
            "butter",
            "yogurt",
            "cream",
            "egg",
            "sour cream",
            "cottage cheese",
            "mozzarella",
            "cheddar",
            "parmesan",
        ],
    ),
    (
        Category::PantryDryGoods,
        &[
            "flour", "sugar", "salt", "pepper", "oil", "vinegar", "rice", "pasta", "bread",
            "oats", "quinoa", "beans", "lentils", "nuts", "seeds",
        ],
    ),
    (
        Category::SpicesSeasonings,
        &[
            "cumin",
            "paprika",
            "oregano",
            "bay leaves",
            "cinnamon",
            "nutmeg",
            "ginger",
            "turmeric",
            "curry",
            "chili",
            "cayenne",
        ],
    ),
    (
        Category::CondimentsSauces,
        &[
            "ketchup",
            "mustard",
            "mayo",
            "soy sauce",
            "hot sauce",
            "bbq sauce",
            "worcestershire",
            "honey",
            "maple syrup",
        ],
    ),
    (Category::Frozen, &["frozen", "ice cream"]),
    (
        Category::Beverages,
        &["water", "juice", "soda", "beer", "wine", "coffee", "tea"],
    ),
    (
        Category::Baking,
        &[
            "baking powder",
            "baking soda",
            "vanilla",
            "extract",
            "cocoa",
            "chocolate",
        ],
    ),
    (
        Category::CannedGoods,
        &[
            "canned",
            "can",
            "tomato sauce",
            "tomato paste",
            "broth",
            "stock",
        ],
    ),
];

/// Ordered list of (category, keyword) pairs used to assign ingredient
/// names to store categories.
///
/// The taxonomy is an immutable value constructed once and passed to the
/// aggregation pipeline, so callers can substitute their own keyword table
/// without touching global state.
#[derive(Debug, Clone)]
pub struct CategoryTaxonomy {
    entries: Vec<(Category, Vec<String>)>,
}

impl CategoryTaxonomy {
    /// Create the standard taxonomy with the built-in keyword table
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_TAXONOMY
                .iter()
                .map(|(category, keywords)| {
                    (
                        *category,
                        keywords.iter().map(|keyword| keyword.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Create a taxonomy from a custom ordered keyword table
    ///
    /// # Arguments
    ///
    /// * `entries` - (category, keywords) pairs, tested in the given order.
    ///   Keywords must be lowercase to match anything.
    pub fn new(entries: Vec<(Category, Vec<String>)>) -> Self {
        Self { entries }
    }

    /// Assign a category to an ingredient name.
    ///
    /// The name is lowercased and each category's keywords are checked for
    /// a substring hit, in table order. The first match wins; names with no
    /// match fall through to `Category::Other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mealcart::category::{Category, CategoryTaxonomy};
    ///
    /// let taxonomy = CategoryTaxonomy::standard();
    /// assert_eq!(taxonomy.categorize("Cheddar Cheese"), Category::DairyEggs);
    /// ```
    pub fn categorize(&self, name: &str) -> Category {
        let normalized = name.to_lowercase();

        for (category, keywords) in &self.entries {
            if let Some(keyword) = keywords
                .iter()
                .find(|keyword| normalized.contains(keyword.as_str()))
            {
                trace!("Categorized '{}' as {} via keyword '{}'", name, category, keyword);
                return *category;
            }
        }

        trace!("No keyword matched '{}', falling back to Other", name);
        Category::Other
    }

    /// Access the underlying (category, keywords) table
    pub fn entries(&self) -> &[(Category, Vec<String>)] {
        &self.entries
    }
}

impl Default for CategoryTaxonomy {
    fn default() -> Self {
        Self::standard()
    }
}
