//! budget-grid - predicted vs executed budget grid
//!
//! This library tracks budget line items ("expenses") across a set of
//! periods. Every (expense, period) cell records a predicted and an executed
//! amount and derives a rearranged value relative to a normalization factor.
//! The ledger can be snapshotted, persisted, rendered as paginated reports and
//! round-tripped through an exported document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, cells, expense metadata and variance
//! - `ledger`: The expense x period grid and its snapshots
//! - `widgets`: Digit-by-digit money input
//! - `reports`: Report tables and pagination
//! - `export`: Report documents, JSON, YAML and CSV
//! - `storage`: Project files with atomic writes
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `budget-grid` binary
//!
//! # Example
//!
//! ```rust
//! use budget_grid::ledger::Ledger;
//! use budget_grid::models::Money;
//!
//! let mut ledger = Ledger::new();
//! ledger.set_periods(["2025-01", "2025-02"]);
//! ledger.add_expense("rent", "Housing", "Office rent");
//! ledger.set_predicted("rent", "2025-01", Money::from_cents(100_000)).unwrap();
//! ledger.set_executed("rent", "2025-01", Money::from_cents(120_000)).unwrap();
//!
//! assert_eq!(ledger.rearranged("rent", "2025-01"), Some(200.0));
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;
pub mod widgets;

pub use error::{GridError, GridResult};
pub use ledger::{Ledger, LedgerSnapshot};
pub use models::{Money, MoneyFormat};

static LOGGING_INIT: Once = Once::new();

/// Install the global tracing subscriber once
///
/// `RUST_LOG` wins when set. Otherwise only warnings from this crate are
/// shown, or debug events when `verbose` is true. Output goes to stderr.
pub fn init_logging(verbose: bool) {
    LOGGING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let default_directive = if verbose {
            "budget_grid=debug"
        } else {
            "budget_grid=warn"
        };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
