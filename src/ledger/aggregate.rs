//! Row, column and grand totals
//!
//! Pure reads over the grid. Missing cells count as zero.

use super::Ledger;
use crate::models::{Cell, Field, FieldValue, Money, Variance};

/// Sums of all three cell fields over some set of cells
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub predicted: Money,
    pub executed: Money,
    pub rearranged: f64,
}

impl Totals {
    fn add_cell(&mut self, cell: &Cell) {
        self.predicted += cell.predicted;
        self.executed += cell.executed;
        self.rearranged += cell.rearranged;
    }

    /// Variance of the summed amounts
    pub fn variance(&self) -> Variance {
        Variance::classify(self.predicted, self.executed)
    }

    /// One summed field
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Predicted => FieldValue::Money(self.predicted),
            Field::Executed => FieldValue::Money(self.executed),
            Field::Rearranged => FieldValue::Ratio(self.rearranged),
        }
    }
}

impl Ledger {
    /// Totals of one expense over a subset of periods
    pub fn row_totals<S: AsRef<str>>(&self, expense_id: &str, periods: &[S]) -> Totals {
        let mut totals = Totals::default();
        if let Some(row) = self.cells.get(expense_id) {
            for period in periods {
                if let Some(cell) = row.get(period.as_ref()) {
                    totals.add_cell(cell);
                }
            }
        }
        totals
    }

    /// Totals of one period over a subset of expenses
    pub fn column_totals<S: AsRef<str>>(&self, period_id: &str, expenses: &[S]) -> Totals {
        let mut totals = Totals::default();
        for expense in expenses {
            if let Some(cell) = self
                .cells
                .get(expense.as_ref())
                .and_then(|row| row.get(period_id))
            {
                totals.add_cell(cell);
            }
        }
        totals
    }

    /// Totals over both axes
    pub fn grand_totals<E: AsRef<str>, P: AsRef<str>>(
        &self,
        expenses: &[E],
        periods: &[P],
    ) -> Totals {
        let mut totals = Totals::default();
        for expense in expenses {
            let row = self.row_totals(expense.as_ref(), periods);
            totals.predicted += row.predicted;
            totals.executed += row.executed;
            totals.rearranged += row.rearranged;
        }
        totals
    }

    /// Row totals over the whole period axis
    pub fn row_totals_all(&self, expense_id: &str) -> Totals {
        self.row_totals(expense_id, &self.periods)
    }

    /// Column totals over every expense row
    pub fn column_totals_all(&self, period_id: &str) -> Totals {
        self.column_totals(period_id, &self.order)
    }

    /// Totals of the whole grid
    pub fn grand_totals_all(&self) -> Totals {
        self.grand_totals(&self.order, &self.periods)
    }

    /// Variance of one cell, if it exists
    pub fn cell_variance(&self, expense_id: &str, period_id: &str) -> Option<Variance> {
        self.cell(expense_id, period_id).map(|cell| cell.variance())
    }
}
