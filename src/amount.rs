//! # Ingredient Amount Model
//!
//! This module defines the `Amount` type used for ingredient quantities
//! throughout the aggregation pipeline. Upstream parsing produces amounts as
//! strings, and those strings are either clean decimal numbers ("2", "0.5")
//! or free text ("to taste", "a pinch"). `Amount` makes that split explicit
//! so the merge logic can branch on a tag instead of re-parsing strings.
//!
//! ## Core Concepts
//!
//! - **Numeric**: a finite decimal value that can be scaled and summed
//! - **Freeform**: any other text, preserved exactly as written
//!
//! ## Usage
//!
//! ```rust
//! use mealcart::amount::Amount;
//!
//! let numeric = Amount::parse("2.5");
//! assert_eq!(numeric, Amount::Numeric(2.5));
//!
//! let freeform = Amount::parse("to taste");
//! assert_eq!(freeform.to_string(), "to taste");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ingredient quantity, either a summable number or preserved free text
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    /// A finite decimal amount (e.g. "2", "0.5", "1.25")
    Numeric(f64),

    /// Free text that does not represent a single finite number
    /// (e.g. "to taste", "a handful"), kept exactly as written
    Freeform(String),
}

impl Amount {
    /// Interpret a raw amount string.
    ///
    /// The string is numeric when its trimmed form parses as a finite
    /// decimal number. Anything else, including "inf" and "NaN", stays
    /// freeform with the original text untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mealcart::amount::Amount;
    ///
    /// assert_eq!(Amount::parse(" 3 "), Amount::Numeric(3.0));
    /// assert_eq!(Amount::parse("a few"), Amount::Freeform("a few".to_string()));
    /// ```
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Amount::Numeric(value),
            _ => Amount::Freeform(raw.to_string()),
        }
    }

    /// Interpret a raw amount string and scale it by a serving multiplier.
    ///
    /// Numeric amounts are multiplied; freeform text ignores the multiplier
    /// because there is nothing meaningful to scale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mealcart::amount::Amount;
    ///
    /// assert_eq!(Amount::scaled("2", 1.5), Amount::Numeric(3.0));
    /// assert_eq!(Amount::scaled("to taste", 2.0).to_string(), "to taste");
    /// ```
    pub fn scaled(raw: &str, multiplier: f64) -> Self {
        match Amount::parse(raw) {
            Amount::Numeric(value) => Amount::Numeric(value * multiplier),
            freeform => freeform,
        }
    }

    /// Get the numeric value, if this amount is numeric
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Amount::Numeric(value) => Some(*value),
            Amount::Freeform(_) => None,
        }
    }

    /// Check whether this amount can participate in quantity sums
    pub fn is_numeric(&self) -> bool {
        matches!(self, Amount::Numeric(_))
    }
}

impl fmt::Display for Amount {
    /// Numeric amounts render as their shortest round-trip decimal form
    /// ("3", "2.5"), freeform amounts render verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Numeric(value) => write!(f, "{}", value),
            Amount::Freeform(text) => f.write_str(text),
        }
    }
}

// Amounts cross the wire as plain strings, so the serde forms go through
// the same string representation as Display/parse.
impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Amount::parse(&raw))
    }
}
