//! Cell model
//!
//! One (expense, period) entry of the ledger grid.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::variance::Variance;

/// Predicted and executed amounts for one expense in one period
///
/// `rearranged` is derived from the other two fields and the ledger's
/// normalization factor; it is only ever written through [`Cell::recompute`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Cell {
    pub predicted: Money,
    pub executed: Money,
    #[serde(default)]
    pub rearranged: f64,
}

impl Cell {
    /// A zero-valued cell
    pub const fn zero() -> Self {
        Self {
            predicted: Money::zero(),
            executed: Money::zero(),
            rearranged: 0.0,
        }
    }

    /// Create a cell and derive its rearranged value
    pub fn new(predicted: Money, executed: Money, factor: f64) -> Self {
        Self {
            predicted,
            executed,
            rearranged: rearranged_for(predicted, executed, factor),
        }
    }

    /// Re-derive `rearranged` against a normalization factor
    pub fn recompute(&mut self, factor: f64) {
        self.rearranged = rearranged_for(self.predicted, self.executed, factor);
    }

    /// Compare executed against predicted
    pub fn variance(&self) -> Variance {
        Variance::classify(self.predicted, self.executed)
    }

    /// Read one field as a report value
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Predicted => FieldValue::Money(self.predicted),
            Field::Executed => FieldValue::Money(self.executed),
            Field::Rearranged => FieldValue::Ratio(self.rearranged),
        }
    }
}

/// Overage of executed over predicted, in major units, divided by the factor
///
/// Zero unless executed exceeds predicted.
pub fn rearranged_for(predicted: Money, executed: Money, factor: f64) -> f64 {
    if executed > predicted {
        (executed - predicted).to_major() / factor
    } else {
        0.0
    }
}

/// Selects one of the three values a cell carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Predicted,
    Executed,
    Rearranged,
}

impl Field {
    /// All fields in report order
    pub const ALL: [Field; 3] = [Field::Predicted, Field::Executed, Field::Rearranged];

    /// Whether values of this field are currency amounts
    pub fn is_money(&self) -> bool {
        !matches!(self, Field::Rearranged)
    }

    /// Title used for report pages
    pub fn title(&self) -> &'static str {
        match self {
            Field::Predicted => "Predicted Expenses",
            Field::Executed => "Executed Expenses",
            Field::Rearranged => "Percentage Rearrangement",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Predicted => write!(f, "predicted"),
            Field::Executed => write!(f, "executed"),
            Field::Rearranged => write!(f, "rearranged"),
        }
    }
}

/// A single field's value: a currency amount or a rearranged ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Money(Money),
    Ratio(f64),
}

impl FieldValue {
    /// The value in major units
    pub fn as_f64(&self) -> f64 {
        match self {
            FieldValue::Money(m) => m.to_major(),
            FieldValue::Ratio(r) => *r,
        }
    }
}
