//! Core data models for budget-grid
//!
//! Value types the ledger is built from: money amounts, cells, expense
//! metadata and the variance classification.

pub mod cell;
pub mod expense;
pub mod money;
pub mod variance;

pub use cell::{Cell, Field, FieldValue};
pub use expense::ExpenseMeta;
pub use money::{Money, MoneyFormat, RawAmount};
pub use variance::Variance;
