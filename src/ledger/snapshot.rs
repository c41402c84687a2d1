//! Snapshot, restore and clear
//!
//! A [`LedgerSnapshot`] is a plain, serializable deep copy of the whole
//! ledger. It is the shape persisted to project files and embedded in
//! exported documents.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::Ledger;
use crate::models::{Cell, ExpenseMeta, Money};

/// Factor used by a fresh ledger and whenever no positive total exists
pub const DEFAULT_NORMALIZATION_FACTOR: f64 = 1.0;

fn default_factor() -> f64 {
    DEFAULT_NORMALIZATION_FACTOR
}

/// Full-state copy of a [`Ledger`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    /// expense id -> period id -> cell
    #[serde(default)]
    pub cells: BTreeMap<String, BTreeMap<String, Cell>>,

    #[serde(default)]
    pub expenses: BTreeMap<String, ExpenseMeta>,

    #[serde(default = "default_factor")]
    pub normalization_factor: f64,

    #[serde(default)]
    pub start_date: String,

    #[serde(default)]
    pub end_date: String,

    #[serde(default)]
    pub initial_value: Money,

    #[serde(default)]
    pub yield_returns: Money,

    #[serde(default)]
    pub org_name: String,

    #[serde(default)]
    pub project_name: String,

    #[serde(default)]
    pub project_term: String,

    /// Period axis order; also carries the axis while there are no rows
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub periods: Vec<String>,

    /// Expense row order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expense_order: Vec<String>,
}

impl Default for LedgerSnapshot {
    fn default() -> Self {
        Ledger::new().snapshot()
    }
}

impl Ledger {
    /// Deep copy of the table, metadata and scalars
    pub fn snapshot(&self) -> LedgerSnapshot {
        let cells = self
            .cells
            .iter()
            .map(|(id, row)| {
                let row = row
                    .iter()
                    .map(|(period, cell)| (period.clone(), *cell))
                    .collect();
                (id.clone(), row)
            })
            .collect();

        let expenses = self
            .expenses
            .iter()
            .map(|(id, meta)| (id.clone(), meta.clone()))
            .collect();

        LedgerSnapshot {
            cells,
            expenses,
            normalization_factor: self.normalization_factor,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            initial_value: self.initial_value,
            yield_returns: self.yield_returns,
            org_name: self.org_name.clone(),
            project_name: self.project_name.clone(),
            project_term: self.project_term.clone(),
            periods: self.periods.clone(),
            expense_order: self.order.clone(),
        }
    }

    /// Replace all state with a snapshot
    ///
    /// Existing tables are discarded, never merged. Rows are zero-filled to
    /// the restored axis, a zero or non-finite factor restores as the default
    /// factor, and rearranged values are recomputed from the restored
    /// operands.
    pub fn restore(&mut self, snapshot: LedgerSnapshot) {
        let LedgerSnapshot {
            cells,
            expenses,
            normalization_factor,
            start_date,
            end_date,
            initial_value,
            yield_returns,
            org_name,
            project_name,
            project_term,
            periods,
            expense_order,
        } = snapshot;

        let mut order: Vec<String> = Vec::with_capacity(cells.len());
        let mut seen_rows = HashSet::new();
        for id in expense_order.into_iter().chain(cells.keys().cloned()) {
            if cells.contains_key(&id) && seen_rows.insert(id.clone()) {
                order.push(id);
            }
        }

        let mut axis: Vec<String> = Vec::with_capacity(periods.len());
        let mut seen_periods = HashSet::new();
        let row_periods = order
            .iter()
            .filter_map(|id| cells.get(id))
            .flat_map(|row| row.keys().cloned());
        for period in periods.into_iter().chain(row_periods) {
            if seen_periods.insert(period.clone()) {
                axis.push(period);
            }
        }

        let factor = if normalization_factor.is_finite() && normalization_factor != 0.0 {
            normalization_factor
        } else {
            tracing::warn!(
                factor = normalization_factor,
                "invalid normalization factor in snapshot, using default"
            );
            DEFAULT_NORMALIZATION_FACTOR
        };

        let restored: HashMap<String, HashMap<String, Cell>> = order
            .iter()
            .map(|id| {
                let source = cells.get(id);
                let row = axis
                    .iter()
                    .map(|period| {
                        let stored = source.and_then(|r| r.get(period)).copied();
                        let cell = stored.map_or_else(Cell::zero, |c| {
                            Cell::new(c.predicted, c.executed, factor)
                        });
                        (period.clone(), cell)
                    })
                    .collect();
                (id.clone(), row)
            })
            .collect();

        self.cells = restored;
        self.expenses = expenses.into_iter().collect();
        self.order = order;
        self.periods = axis;
        self.normalization_factor = factor;
        self.start_date = start_date;
        self.end_date = end_date;
        self.initial_value = initial_value;
        self.yield_returns = yield_returns;
        self.org_name = org_name;
        self.project_name = project_name;
        self.project_term = project_term;
        self.touch();

        tracing::info!(
            expenses = self.order.len(),
            periods = self.periods.len(),
            "ledger restored"
        );
    }

    /// Reset tables and value scalars
    ///
    /// Organization name, project name and project term are kept.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.expenses.clear();
        self.order.clear();
        self.periods.clear();
        self.normalization_factor = DEFAULT_NORMALIZATION_FACTOR;
        self.start_date.clear();
        self.end_date.clear();
        self.initial_value = Money::zero();
        self.yield_returns = Money::zero();
        self.touch();

        tracing::info!("ledger cleared");
    }
}
