//! Summary display formatting
//!
//! Renders period/category summaries as tables with a text bar chart, plus
//! an income-versus-expenses comparison per period.

use std::collections::BTreeMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::category::category_label;
use crate::models::{CategoryStyle, Money, Period, PeriodComparison, Summary, SummaryRow};

/// Width of the longest bar in the chart column
const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "")]
    bar: String,
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Net")]
    net: String,
}

/// Scale `amount` against `max` into a bar of at most [`BAR_WIDTH`] blocks
///
/// Any non-zero amount gets at least one block.
pub fn bar(amount: Money, max: Money, width: usize) -> String {
    if max.cents() <= 0 || amount.cents() <= 0 {
        return String::new();
    }

    let scaled = (amount.cents() as f64 / max.cents() as f64 * width as f64).round() as usize;
    "█".repeat(scaled.clamp(1, width))
}

fn category_table(
    rows: &[SummaryRow],
    styles: &BTreeMap<String, CategoryStyle>,
    currency_symbol: &str,
) -> String {
    let max = rows.iter().map(|r| r.amount).max().unwrap_or_default();

    let table_rows: Vec<CategoryRow> = rows
        .iter()
        .map(|row| CategoryRow {
            period: row.period.to_string(),
            category: category_label(&row.category, styles),
            amount: row.amount.format_with_symbol(currency_symbol),
            bar: bar(row.amount, max, BAR_WIDTH),
        })
        .collect();

    Table::new(table_rows).with(Style::rounded()).to_string()
}

fn comparison_table(comparison: &[PeriodComparison], currency_symbol: &str) -> String {
    let table_rows: Vec<ComparisonRow> = comparison
        .iter()
        .map(|c| ComparisonRow {
            period: c.period.to_string(),
            income: c.income.format_with_symbol(currency_symbol),
            expenses: c.expenses.format_with_symbol(currency_symbol),
            net: c.net().format_with_symbol(currency_symbol),
        })
        .collect();

    Table::new(table_rows).with(Style::rounded()).to_string()
}

/// Format the full summary report for one period granularity
///
/// `comparison` is the per-period income/expense split of `summary`.
pub fn format_summary(
    summary: &Summary,
    comparison: &[PeriodComparison],
    styles: &BTreeMap<String, CategoryStyle>,
    period: Period,
    currency_symbol: &str,
) -> String {
    if summary.is_empty() {
        return "No transactions to summarize yet.\n".to_string();
    }

    let mut output = String::new();

    output.push_str(&format!("Expenses by Category per {}\n", period.label()));
    if summary.expenses.is_empty() {
        output.push_str("  (no expenses)\n");
    } else {
        output.push_str(&category_table(&summary.expenses, styles, currency_symbol));
        output.push('\n');
    }
    output.push('\n');

    output.push_str(&format!("Income by Category per {}\n", period.label()));
    if summary.income.is_empty() {
        output.push_str("  (no income)\n");
    } else {
        output.push_str(&category_table(&summary.income, styles, currency_symbol));
        output.push('\n');
    }
    output.push('\n');

    output.push_str(&format!("Income vs Expenses per {}\n", period.label()));
    output.push_str(&comparison_table(comparison, currency_symbol));
    output.push('\n');

    output
}
