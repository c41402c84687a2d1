//! Expense metadata

use serde::{Deserialize, Serialize};

/// Descriptive labels attached to an expense row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExpenseMeta {
    /// Budget category (rubric) the expense belongs to
    #[serde(default)]
    pub category: String,

    /// Free-form description of the expense
    #[serde(default)]
    pub description: String,
}

impl ExpenseMeta {
    pub fn new(category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
        }
    }
}
