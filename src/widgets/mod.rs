//! Input widgets
//!
//! Editing state for interactive front-ends. Rendering is left to the caller.

pub mod money_input;

pub use money_input::{KeyOutcome, MoneyInput};
