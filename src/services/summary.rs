//! Period/category aggregation
//!
//! Turns a flat list of transactions into summary rows. Pure functions, no
//! storage access.

use std::collections::BTreeMap;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Period, PeriodComparison, Summary, SummaryRow, Transaction};

fn accumulate<K: Ord>(
    totals: &mut BTreeMap<K, Money>,
    key: K,
    amount: Money,
) -> TrackerResult<()> {
    let total = totals.entry(key).or_default();
    *total = total.checked_add(amount).ok_or_else(|| {
        TrackerError::Validation(format!("Total overflows when adding {}", amount))
    })?;
    Ok(())
}

/// Group transactions by (period bucket, category), expenses and income apart
///
/// Only pairs with at least one transaction produce a row. Rows come out
/// ordered by period, then category. A group whose total does not fit in
/// [`Money`] is a validation error.
pub fn summarize(transactions: &[Transaction], period: Period) -> TrackerResult<Summary> {
    let mut expenses: BTreeMap<(i32, &str), Money> = BTreeMap::new();
    let mut income: BTreeMap<(i32, &str), Money> = BTreeMap::new();

    for txn in transactions {
        let key = (period.bucket(txn.date), txn.category.as_str());
        let target = if txn.is_income() { &mut income } else { &mut expenses };
        accumulate(target, key, txn.amount)?;
    }

    Ok(Summary {
        expenses: into_rows(expenses),
        income: into_rows(income),
    })
}

fn into_rows(groups: BTreeMap<(i32, &str), Money>) -> Vec<SummaryRow> {
    groups
        .into_iter()
        .map(|((period, category), amount)| SummaryRow::new(period, category, amount))
        .collect()
}

/// Collapse category rows into one total per period
pub fn totals_by_period(rows: &[SummaryRow]) -> TrackerResult<BTreeMap<i32, Money>> {
    let mut totals = BTreeMap::new();
    for row in rows {
        accumulate(&mut totals, row.period, row.amount)?;
    }
    Ok(totals)
}

/// Per-period income against expenses
///
/// A period present on only one side gets zero on the other.
pub fn income_vs_expenses(summary: &Summary) -> TrackerResult<Vec<PeriodComparison>> {
    let income = totals_by_period(&summary.income)?;
    let expenses = totals_by_period(&summary.expenses)?;

    let mut periods: Vec<i32> = income.keys().chain(expenses.keys()).copied().collect();
    periods.sort_unstable();
    periods.dedup();

    Ok(periods
        .into_iter()
        .map(|period| PeriodComparison {
            period,
            income: income.get(&period).copied().unwrap_or_default(),
            expenses: expenses.get(&period).copied().unwrap_or_default(),
        })
        .collect())
}
