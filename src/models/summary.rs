//! Derived summary rows
//!
//! Nothing here is persisted; summaries are recomputed from the ledger on
//! every query.

use serde::Serialize;

use super::money::Money;

/// Total of one category within one period bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Bucket key: ISO week, month number or year
    pub period: i32,
    pub category: String,
    pub amount: Money,
}

impl SummaryRow {
    pub fn new(period: i32, category: impl Into<String>, amount: Money) -> Self {
        Self {
            period,
            category: category.into(),
            amount,
        }
    }
}

/// Expense and income rows for one grouping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub expenses: Vec<SummaryRow>,
    pub income: Vec<SummaryRow>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.income.is_empty()
    }
}

/// Income set against expenses for a single period bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodComparison {
    pub period: i32,
    pub income: Money,
    pub expenses: Money,
}

impl PeriodComparison {
    /// Income minus expenses
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}
