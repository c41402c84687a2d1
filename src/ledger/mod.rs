//! The ledger grid
//!
//! A two-axis table keyed by expense id and period id. Each cell stores a
//! predicted and an executed amount plus a derived rearranged value, and the
//! ledger carries a handful of project-level scalars.
//!
//! # Invariants
//!
//! - Every expense row holds exactly the cells of the current period axis.
//! - The period axis survives while there are no rows, so a later
//!   [`Ledger::add_expense`] inherits it.
//! - Every cell's `rearranged` value matches its operands and the current
//!   normalization factor.
//!
//! Every successful mutation bumps [`Ledger::revision`], which lets readers
//! holding derived views detect that they are stale.

mod aggregate;
mod snapshot;

pub use aggregate::Totals;
pub use snapshot::{LedgerSnapshot, DEFAULT_NORMALIZATION_FACTOR};

use std::collections::{HashMap, HashSet};

use crate::error::{GridError, GridResult};
use crate::models::{Cell, ExpenseMeta, Money};

/// Expense x period grid with project scalars
#[derive(Debug, Clone)]
pub struct Ledger {
    cells: HashMap<String, HashMap<String, Cell>>,
    expenses: HashMap<String, ExpenseMeta>,
    /// Row ids in insertion order
    order: Vec<String>,
    /// Ordered period axis
    periods: Vec<String>,
    normalization_factor: f64,
    start_date: String,
    end_date: String,
    initial_value: Money,
    yield_returns: Money,
    org_name: String,
    project_name: String,
    project_term: String,
    revision: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger: no expenses, no periods
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
            expenses: HashMap::new(),
            order: Vec::new(),
            periods: Vec::new(),
            normalization_factor: DEFAULT_NORMALIZATION_FACTOR,
            start_date: String::new(),
            end_date: String::new(),
            initial_value: Money::zero(),
            yield_returns: Money::zero(),
            org_name: String::new(),
            project_name: String::new(),
            project_term: String::new(),
            revision: 0,
        }
    }

    /// Mutation counter; changes whenever the ledger changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn zero_row(&self) -> HashMap<String, Cell> {
        self.periods
            .iter()
            .map(|period| (period.clone(), Cell::zero()))
            .collect()
    }

    // ----------------------------------------------------------------------
    // Structural operations
    // ----------------------------------------------------------------------

    /// Add an expense row of zero cells across the current period axis
    ///
    /// Returns `false`, leaving the ledger untouched, if the row exists.
    pub fn add_expense(
        &mut self,
        id: &str,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> bool {
        if self.has_expense(id) {
            tracing::debug!(expense = id, "expense already present");
            return false;
        }

        self.expenses
            .insert(id.to_string(), ExpenseMeta::new(category, description));
        let row = self.zero_row();
        self.cells.insert(id.to_string(), row);
        self.order.push(id.to_string());
        self.touch();

        tracing::info!(expense = id, periods = self.periods.len(), "expense added");
        true
    }

    /// Remove an expense row and its metadata
    pub fn remove_expense(&mut self, id: &str) -> bool {
        if self.cells.remove(id).is_none() {
            return false;
        }

        self.expenses.remove(id);
        self.order.retain(|existing| existing != id);
        self.touch();

        tracing::info!(expense = id, "expense removed");
        true
    }

    /// Replace the period axis
    ///
    /// Cells of periods kept by the new axis carry over unchanged, new periods
    /// are zero-filled and dropped periods disappear from every row. With no
    /// rows the axis is still remembered. Repeated ids keep their first
    /// position.
    pub fn set_periods<I, S>(&mut self, new_periods: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let periods: Vec<String> = new_periods
            .into_iter()
            .map(Into::into)
            .filter(|period| seen.insert(period.clone()))
            .collect();

        // Build the complete replacement from the old rows before swapping it in
        let rebuilt: HashMap<String, HashMap<String, Cell>> = self
            .order
            .iter()
            .map(|id| {
                let old_row = self.cells.get(id);
                let row = periods
                    .iter()
                    .map(|period| {
                        let cell = old_row
                            .and_then(|r| r.get(period))
                            .copied()
                            .unwrap_or_else(Cell::zero);
                        (period.clone(), cell)
                    })
                    .collect();
                (id.clone(), row)
            })
            .collect();

        self.cells = rebuilt;
        self.periods = periods;
        self.touch();

        tracing::info!(
            periods = self.periods.len(),
            expenses = self.order.len(),
            "period axis replaced"
        );
    }

    /// Upsert expense metadata, creating a zero row if the expense has none
    pub fn set_category_and_description(
        &mut self,
        id: &str,
        category: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.expenses
            .insert(id.to_string(), ExpenseMeta::new(category, description));

        if !self.cells.contains_key(id) {
            let row = self.zero_row();
            self.cells.insert(id.to_string(), row);
            self.order.push(id.to_string());
            tracing::debug!(expense = id, "row created from metadata");
        }
        self.touch();
    }

    // ----------------------------------------------------------------------
    // Cell operations
    // ----------------------------------------------------------------------

    fn cell_mut(&mut self, expense_id: &str, period_id: &str) -> GridResult<&mut Cell> {
        self.cells
            .get_mut(expense_id)
            .and_then(|row| row.get_mut(period_id))
            .ok_or_else(|| GridError::cell_not_found(expense_id, period_id))
    }

    /// Store a predicted amount in an existing cell
    pub fn set_predicted(
        &mut self,
        expense_id: &str,
        period_id: &str,
        value: Money,
    ) -> GridResult<()> {
        let factor = self.normalization_factor;
        let cell = self.cell_mut(expense_id, period_id)?;
        cell.predicted = value;
        cell.recompute(factor);
        self.touch();

        tracing::debug!(
            expense = expense_id,
            period = period_id,
            cents = value.cents(),
            "predicted set"
        );
        Ok(())
    }

    /// Store an executed amount in an existing cell
    pub fn set_executed(
        &mut self,
        expense_id: &str,
        period_id: &str,
        value: Money,
    ) -> GridResult<()> {
        let factor = self.normalization_factor;
        let cell = self.cell_mut(expense_id, period_id)?;
        cell.executed = value;
        cell.recompute(factor);
        self.touch();

        tracing::debug!(
            expense = expense_id,
            period = period_id,
            cents = value.cents(),
            "executed set"
        );
        Ok(())
    }

    /// Set both amounts of a cell, creating its row and period as needed
    ///
    /// A new period joins the end of the axis and is zero-filled in every
    /// other row; a new row is zero-filled across the axis.
    pub fn set_cell_pair(
        &mut self,
        expense_id: &str,
        period_id: &str,
        predicted: Money,
        executed: Money,
    ) {
        if !self.has_period(period_id) {
            self.periods.push(period_id.to_string());
            for row in self.cells.values_mut() {
                row.insert(period_id.to_string(), Cell::zero());
            }
        }

        if !self.cells.contains_key(expense_id) {
            let row = self.zero_row();
            self.cells.insert(expense_id.to_string(), row);
            self.order.push(expense_id.to_string());
        }

        let cell = Cell::new(predicted, executed, self.normalization_factor);
        if let Some(row) = self.cells.get_mut(expense_id) {
            row.insert(period_id.to_string(), cell);
        }
        self.touch();
    }

    // ----------------------------------------------------------------------
    // Reads
    // ----------------------------------------------------------------------

    /// Copy of one cell
    pub fn cell(&self, expense_id: &str, period_id: &str) -> Option<Cell> {
        self.cells.get(expense_id)?.get(period_id).copied()
    }

    pub fn predicted(&self, expense_id: &str, period_id: &str) -> Option<Money> {
        self.cell(expense_id, period_id).map(|c| c.predicted)
    }

    pub fn executed(&self, expense_id: &str, period_id: &str) -> Option<Money> {
        self.cell(expense_id, period_id).map(|c| c.executed)
    }

    pub fn rearranged(&self, expense_id: &str, period_id: &str) -> Option<f64> {
        self.cell(expense_id, period_id).map(|c| c.rearranged)
    }

    /// Copy of one expense row, in period-axis order
    pub fn expense_row(&self, expense_id: &str) -> Option<Vec<(String, Cell)>> {
        let row = self.cells.get(expense_id)?;
        Some(
            self.periods
                .iter()
                .filter_map(|period| row.get(period).map(|cell| (period.clone(), *cell)))
                .collect(),
        )
    }

    /// Copy of one period column, in expense order
    pub fn period_column(&self, period_id: &str) -> Vec<(String, Cell)> {
        self.order
            .iter()
            .filter_map(|id| {
                let cell = self.cells.get(id)?.get(period_id)?;
                Some((id.clone(), *cell))
            })
            .collect()
    }

    /// Copy of one expense's metadata
    pub fn expense_meta(&self, expense_id: &str) -> Option<ExpenseMeta> {
        self.expenses.get(expense_id).cloned()
    }

    /// Category of an expense, empty if unknown
    pub fn category(&self, expense_id: &str) -> &str {
        self.expenses
            .get(expense_id)
            .map_or("", |meta| meta.category.as_str())
    }

    /// Description of an expense, empty if unknown
    pub fn description(&self, expense_id: &str) -> &str {
        self.expenses
            .get(expense_id)
            .map_or("", |meta| meta.description.as_str())
    }

    /// Expense row ids in insertion order
    pub fn expense_ids(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Period ids in axis order
    pub fn period_ids(&self) -> Vec<String> {
        self.periods.clone()
    }

    pub fn has_expense(&self, expense_id: &str) -> bool {
        self.cells.contains_key(expense_id)
    }

    pub fn has_period(&self, period_id: &str) -> bool {
        self.periods.iter().any(|p| p == period_id)
    }

    pub fn expense_count(&self) -> usize {
        self.order.len()
    }

    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    /// True when there are no rows and no period axis
    pub fn is_empty(&self) -> bool {
        self.order.is_empty() && self.periods.is_empty()
    }

    // ----------------------------------------------------------------------
    // Normalization factor
    // ----------------------------------------------------------------------

    pub fn normalization_factor(&self) -> f64 {
        self.normalization_factor
    }

    /// Set the divisor used for rearranged values and recompute every cell
    ///
    /// Zero (and non-finite values) are rejected before anything changes.
    pub fn set_normalization_factor(&mut self, value: f64) -> GridResult<()> {
        if value == 0.0 {
            return Err(GridError::InvalidArgument(
                "normalization factor cannot be zero".into(),
            ));
        }
        if !value.is_finite() {
            return Err(GridError::InvalidArgument(format!(
                "normalization factor must be finite, got {}",
                value
            )));
        }

        self.apply_factor(value);
        Ok(())
    }

    fn apply_factor(&mut self, factor: f64) {
        self.normalization_factor = factor;
        self.recompute_all();
        self.touch();
        tracing::debug!(factor, "normalization factor applied");
    }

    fn recompute_all(&mut self) {
        let factor = self.normalization_factor;
        for cell in self.cells.values_mut().flat_map(|row| row.values_mut()) {
            cell.recompute(factor);
        }
    }

    /// Derive the factor from initial value plus yield returns, or 1
    fn update_factor(&mut self) {
        let total = (self.initial_value + self.yield_returns).to_major();
        let factor = if total > 0.0 {
            total
        } else {
            DEFAULT_NORMALIZATION_FACTOR
        };
        self.apply_factor(factor);
    }

    pub fn initial_value(&self) -> Money {
        self.initial_value
    }

    /// Set the initial value and re-derive the normalization factor
    pub fn set_initial_value(&mut self, value: Money) {
        self.initial_value = value;
        self.update_factor();
    }

    pub fn yield_returns(&self) -> Money {
        self.yield_returns
    }

    /// Set the yield returns and re-derive the normalization factor
    pub fn set_yield_returns(&mut self, value: Money) {
        self.yield_returns = value;
        self.update_factor();
    }

    // ----------------------------------------------------------------------
    // Project scalars
    // ----------------------------------------------------------------------

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn set_start_date(&mut self, value: impl Into<String>) {
        self.start_date = value.into();
        self.touch();
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn set_end_date(&mut self, value: impl Into<String>) {
        self.end_date = value.into();
        self.touch();
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    pub fn set_org_name(&mut self, value: impl Into<String>) {
        self.org_name = value.into();
        self.touch();
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn set_project_name(&mut self, value: impl Into<String>) {
        self.project_name = value.into();
        self.touch();
    }

    pub fn project_term(&self) -> &str {
        &self.project_term
    }

    pub fn set_project_term(&mut self, value: impl Into<String>) {
        self.project_term = value.into();
        self.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Variance;

    fn cents(value: i64) -> Money {
        Money::from_cents(value)
    }

    fn expected_rearranged(predicted: Money, executed: Money, factor: f64) -> f64 {
        if executed > predicted {
            (executed - predicted).to_major() / factor
        } else {
            0.0
        }
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.set_periods(["Jan", "Feb"]);
        assert!(ledger.add_expense("rent", "Housing", "Office rent"));
        assert!(ledger.add_expense("fuel", "Transport", "Vehicle fuel"));
        ledger
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.expense_count(), 0);
        assert_eq!(ledger.period_count(), 0);
        assert_eq!(ledger.normalization_factor(), 1.0);
        assert_eq!(ledger.revision(), 0);
    }

    #[test]
    fn test_add_expense_inherits_pending_axis() {
        let mut ledger = Ledger::new();
        ledger.set_periods(["Jan", "Feb"]);
        assert_eq!(ledger.expense_count(), 0);

        assert!(ledger.add_expense("rent", "", ""));
        assert_eq!(ledger.period_ids(), vec!["Jan", "Feb"]);
        assert_eq!(ledger.cell("rent", "Jan"), Some(Cell::zero()));
        assert_eq!(ledger.cell("rent", "Feb"), Some(Cell::zero()));
    }

    #[test]
    fn test_add_duplicate_expense_fails_unchanged() {
        let mut ledger = sample_ledger();
        ledger.set_predicted("rent", "Jan", cents(5000)).unwrap();
        let before = ledger.snapshot();
        let revision = ledger.revision();

        assert!(!ledger.add_expense("rent", "Other", "Changed"));
        assert_eq!(ledger.snapshot(), before);
        assert_eq!(ledger.revision(), revision);
        assert_eq!(ledger.category("rent"), "Housing");
    }

    #[test]
    fn test_remove_expense() {
        let mut ledger = sample_ledger();
        assert!(ledger.remove_expense("rent"));
        assert!(!ledger.has_expense("rent"));
        assert!(ledger.expense_meta("rent").is_none());
        assert_eq!(ledger.expense_ids(), vec!["fuel"]);
        assert!(!ledger.remove_expense("rent"));
    }

    #[test]
    fn test_expense_order_is_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.add_expense("zeta", "", "");
        ledger.add_expense("alpha", "", "");
        ledger.add_expense("mid", "", "");
        assert_eq!(ledger.expense_ids(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_set_periods_carries_and_zero_fills() {
        let mut ledger = sample_ledger();
        ledger.set_predicted("rent", "Jan", cents(1000)).unwrap();
        ledger.set_executed("rent", "Jan", cents(1500)).unwrap();
        ledger.set_predicted("fuel", "Feb", cents(700)).unwrap();
        let jan_rent = ledger.cell("rent", "Jan").unwrap();

        ledger.set_periods(["Jan", "Mar"]);

        assert_eq!(ledger.period_ids(), vec!["Jan", "Mar"]);
        assert_eq!(ledger.cell("rent", "Jan"), Some(jan_rent));
        assert_eq!(ledger.cell("rent", "Mar"), Some(Cell::zero()));
        assert_eq!(ledger.cell("fuel", "Feb"), None);
        assert!(!ledger.has_period("Feb"));

        for id in ledger.expense_ids() {
            let keys: Vec<String> = ledger
                .expense_row(&id)
                .unwrap()
                .into_iter()
                .map(|(period, _)| period)
                .collect();
            assert_eq!(keys, vec!["Jan", "Mar"]);
        }
    }

    #[test]
    fn test_set_periods_deduplicates() {
        let mut ledger = sample_ledger();
        ledger.set_periods(["Jan", "Feb", "Jan"]);
        assert_eq!(ledger.period_ids(), vec!["Jan", "Feb"]);
        assert_eq!(ledger.expense_row("rent").unwrap().len(), 2);
    }

    #[test]
    fn test_set_periods_to_empty_axis() {
        let mut ledger = sample_ledger();
        ledger.set_periods(Vec::<String>::new());
        assert_eq!(ledger.period_count(), 0);
        assert_eq!(ledger.expense_row("rent"), Some(Vec::new()));
        assert_eq!(ledger.expense_count(), 2);
    }

    #[test]
    fn test_set_category_and_description_creates_row() {
        let mut ledger = Ledger::new();
        ledger.set_periods(["Q1", "Q2"]);
        ledger.set_category_and_description("staff", "Payroll", "Salaries");

        assert!(ledger.has_expense("staff"));
        assert_eq!(ledger.expense_row("staff").unwrap().len(), 2);
        assert_eq!(
            ledger.expense_meta("staff"),
            Some(ExpenseMeta::new("Payroll", "Salaries"))
        );

        ledger.set_category_and_description("staff", "Payroll", "Wages");
        assert_eq!(ledger.description("staff"), "Wages");
        assert_eq!(ledger.expense_count(), 1);
    }

    #[test]
    fn test_set_predicted_missing_cell_is_not_found() {
        let mut ledger = sample_ledger();
        let revision = ledger.revision();

        let err = ledger.set_predicted("rent", "Dec", cents(100)).unwrap_err();
        assert!(err.is_not_found());
        let err = ledger.set_executed("ghost", "Jan", cents(100)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(ledger.revision(), revision);
    }

    #[test]
    fn test_rearranged_law_after_cell_updates() {
        let mut ledger = sample_ledger();
        ledger.set_normalization_factor(250.0).unwrap();

        let updates = [
            (cents(10000), cents(12500)),
            (cents(12500), cents(10000)),
            (cents(3000), cents(3000)),
            (cents(0), cents(99)),
        ];

        for (predicted, executed) in updates {
            ledger.set_predicted("rent", "Feb", predicted).unwrap();
            ledger.set_executed("rent", "Feb", executed).unwrap();
            let cell = ledger.cell("rent", "Feb").unwrap();
            assert_eq!(
                cell.rearranged,
                expected_rearranged(predicted, executed, 250.0)
            );
        }
    }

    #[test]
    fn test_set_predicted_uses_stored_executed() {
        let mut ledger = sample_ledger();
        ledger.set_executed("rent", "Jan", cents(20000)).unwrap();
        assert_eq!(ledger.rearranged("rent", "Jan"), Some(200.0));

        ledger.set_predicted("rent", "Jan", cents(15000)).unwrap();
        assert_eq!(ledger.rearranged("rent", "Jan"), Some(50.0));

        ledger.set_predicted("rent", "Jan", cents(25000)).unwrap();
        assert_eq!(ledger.rearranged("rent", "Jan"), Some(0.0));
    }

    #[test]
    fn test_set_cell_pair_keeps_table_rectangular() {
        let mut ledger = sample_ledger();
        ledger.set_cell_pair("rent", "Mar", cents(100), cents(300));

        assert_eq!(ledger.period_ids(), vec!["Jan", "Feb", "Mar"]);
        assert_eq!(ledger.cell("fuel", "Mar"), Some(Cell::zero()));
        assert_eq!(ledger.rearranged("rent", "Mar"), Some(2.0));

        ledger.set_cell_pair("staff", "Jan", cents(50), cents(10));
        assert_eq!(ledger.expense_row("staff").unwrap().len(), 3);
        assert_eq!(ledger.predicted("staff", "Jan"), Some(cents(50)));
        assert_eq!(ledger.executed("staff", "Feb"), Some(Money::zero()));
    }

    #[test]
    fn test_getters_absent() {
        let ledger = sample_ledger();
        assert_eq!(ledger.cell("rent", "Dec"), None);
        assert_eq!(ledger.predicted("ghost", "Jan"), None);
        assert_eq!(ledger.executed("ghost", "Jan"), None);
        assert_eq!(ledger.rearranged("ghost", "Jan"), None);
        assert_eq!(ledger.expense_row("ghost"), None);
        assert!(ledger.period_column("Dec").is_empty());
        assert_eq!(ledger.category("ghost"), "");
    }

    #[test]
    fn test_period_column() {
        let mut ledger = sample_ledger();
        ledger.set_predicted("fuel", "Feb", cents(400)).unwrap();
        let column = ledger.period_column("Feb");
        assert_eq!(column.len(), 2);
        assert_eq!(column[0].0, "rent");
        assert_eq!(column[1].1.predicted, cents(400));
    }

    #[test]
    fn test_factor_change_recomputes_every_cell() {
        let mut ledger = sample_ledger();
        ledger.set_cell_pair("rent", "Jan", cents(1000), cents(5000));
        ledger.set_cell_pair("rent", "Feb", cents(0), cents(2000));
        ledger.set_cell_pair("fuel", "Feb", cents(100), cents(900));

        ledger.set_normalization_factor(8.0).unwrap();

        for id in ledger.expense_ids() {
            for (_, cell) in ledger.expense_row(&id).unwrap() {
                assert_eq!(
                    cell.rearranged,
                    expected_rearranged(cell.predicted, cell.executed, 8.0)
                );
            }
        }
        assert_eq!(ledger.rearranged("rent", "Jan"), Some(5.0));
    }

    #[test]
    fn test_zero_factor_rejected_without_change() {
        let mut ledger = sample_ledger();
        ledger.set_cell_pair("rent", "Jan", cents(1000), cents(5000));
        let before = ledger.snapshot();
        let revision = ledger.revision();

        let err = ledger.set_normalization_factor(0.0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(ledger.set_normalization_factor(f64::NAN).is_err());

        assert_eq!(ledger.snapshot(), before);
        assert_eq!(
            serde_json::to_string(&ledger.snapshot()).unwrap(),
            serde_json::to_string(&before).unwrap()
        );
        assert_eq!(ledger.revision(), revision);
    }

    #[test]
    fn test_initial_value_and_yield_derive_factor() {
        let mut ledger = sample_ledger();
        ledger.set_cell_pair("rent", "Jan", cents(0), cents(10000));

        ledger.set_initial_value(cents(90000));
        assert_eq!(ledger.normalization_factor(), 900.0);

        ledger.set_yield_returns(cents(10000));
        assert_eq!(ledger.normalization_factor(), 1000.0);
        assert_eq!(ledger.rearranged("rent", "Jan"), Some(0.1));

        ledger.set_initial_value(cents(-50000));
        assert_eq!(ledger.normalization_factor(), 1.0);
        assert_eq!(ledger.rearranged("rent", "Jan"), Some(100.0));
    }

    #[test]
    fn test_clamped_amounts_saturate() {
        let huge = Money::parse_lenient("99999999999999999999999");
        assert_eq!(huge.cents(), i64::MAX);

        let mut ledger = Ledger::new();
        ledger.set_initial_value(huge);
        ledger.set_yield_returns(cents(100));
        assert_eq!(ledger.normalization_factor(), Money::from_cents(i64::MAX).to_major());

        let mut ledger = Ledger::new();
        ledger.set_cell_pair("rent", "Jan", huge, cents(0));
        ledger.set_cell_pair("fuel", "Jan", huge, cents(0));
        let totals = ledger.grand_totals_all();
        assert_eq!(totals.predicted.cents(), i64::MAX);
        assert_eq!(totals.variance(), Variance::Under);

        ledger.set_cell_pair("tax", "Jan", cents(i64::MIN + 1), cents(i64::MAX));
        let cell = ledger.cell("tax", "Jan").unwrap();
        assert_eq!(cell.rearranged, Money::from_cents(i64::MAX).to_major());
        assert_eq!(cell.variance(), Variance::Over);
    }

    #[test]
    fn test_scalar_fields() {
        let mut ledger = Ledger::new();
        ledger.set_start_date("2025-01-01");
        ledger.set_end_date("2025-12-31");
        ledger.set_org_name("Acme Foundation");
        ledger.set_project_name("Reading Rooms");
        ledger.set_project_term("TF-042");

        assert_eq!(ledger.start_date(), "2025-01-01");
        assert_eq!(ledger.end_date(), "2025-12-31");
        assert_eq!(ledger.org_name(), "Acme Foundation");
        assert_eq!(ledger.project_name(), "Reading Rooms");
        assert_eq!(ledger.project_term(), "TF-042");
        assert_eq!(ledger.revision(), 5);
    }
}
