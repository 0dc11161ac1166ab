//! # Error Types Module
//!
//! This module defines the error and warning types used by the grocery
//! aggregation pipeline and the user grocery list operations.

/// Errors raised by the aggregation pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum AggregationError {
    /// The recipe set handed to the pipeline was empty or unusable
    InvalidInput(String),
}

impl std::fmt::Display for AggregationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AggregationError {}

/// Non-fatal notice that some requested recipe ids could not be resolved.
///
/// Aggregation proceeds with the recipes that were found; the caller decides
/// how to surface the missing ids.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialResultWarning {
    /// Requested recipe ids with no matching recipe, in request order
    pub missing_ids: Vec<String>,
}

impl std::fmt::Display for PartialResultWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} requested recipe(s) not found: {}",
            self.missing_ids.len(),
            self.missing_ids.join(", ")
        )
    }
}

/// Errors raised by user grocery list operations
#[derive(Debug, Clone, PartialEq)]
pub enum ListError {
    /// An item name was empty after trimming
    EmptyName,
    /// No list item carries the given id
    ItemNotFound(String),
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::EmptyName => write!(f, "Item name is required"),
            ListError::ItemNotFound(id) => write!(f, "Item not found in grocery list: {id}"),
        }
    }
}

impl std::error::Error for ListError {}
