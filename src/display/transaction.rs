//! Transaction display formatting
//!
//! Renders transaction history as a table.

use std::collections::BTreeMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::category::category_label;
use crate::models::{CategoryStyle, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a transaction history table
///
/// `transactions` is rendered in the order given; `limit` caps the number
/// of rows shown. `date_format` must already be a valid strftime string.
pub fn format_transaction_list(
    transactions: &[Transaction],
    styles: &BTreeMap<String, CategoryStyle>,
    currency_symbol: &str,
    date_format: &str,
    limit: Option<usize>,
) -> String {
    if transactions.is_empty() {
        return "No transactions yet. Add one with 'fintrack transaction add'.\n".to_string();
    }

    let shown = limit.unwrap_or(transactions.len()).min(transactions.len());
    let rows: Vec<TransactionRow> = transactions[..shown]
        .iter()
        .map(|txn| TransactionRow {
            date: txn.date.format(date_format).to_string(),
            kind: txn.kind.to_string(),
            category: category_label(&txn.category, styles),
            amount: txn.amount.format_with_symbol(currency_symbol),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');

    if shown < transactions.len() {
        output.push_str(&format!(
            "Showing {} of {} transactions\n",
            shown,
            transactions.len()
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BuiltinCategory, Money};
    use chrono::NaiveDate;

    fn styles() -> BTreeMap<String, CategoryStyle> {
        let mut styles = BTreeMap::new();
        styles.insert("Food".to_string(), BuiltinCategory::Food.style());
        styles.insert("Salary".to_string(), BuiltinCategory::Salary.style());
        styles
    }

    fn ledger() -> Vec<Transaction> {
        vec![
            Transaction::expense(
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                Money::from_cents(20000),
                "Food",
            ),
            Transaction::income(
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                Money::from_cents(100000),
                "Salary",
            ),
        ]
    }

    #[test]
    fn test_empty_list() {
        let output = format_transaction_list(&[], &styles(), "$", "%Y-%m-%d", None);
        assert!(output.contains("No transactions yet"));
    }

    #[test]
    fn test_table_contents() {
        let output = format_transaction_list(&ledger(), &styles(), "$", "%Y-%m-%d", None);

        assert!(output.contains("Date"));
        assert!(output.contains("2024-02-01"));
        assert!(output.contains("$200.00"));
        assert!(output.contains("💰 Salary"));
        assert!(output.contains("🍔 Food"));
        assert!(output.contains("income"));
        assert!(!output.contains("Showing"));
    }

    #[test]
    fn test_limit_and_formats() {
        let output = format_transaction_list(&ledger(), &styles(), "€", "%d/%m/%Y", Some(1));

        assert!(output.contains("01/02/2024"));
        assert!(output.contains("€200.00"));
        assert!(!output.contains("Salary"));
        assert!(output.contains("Showing 1 of 2 transactions"));
    }

    #[test]
    fn test_unknown_category_gets_fallback_icon() {
        let txn = Transaction::expense(
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            Money::from_cents(100),
            "Uncatalogued",
        );

        let output = format_transaction_list(&[txn], &BTreeMap::new(), "$", "%Y-%m-%d", None);
        assert!(output.contains(&format!("{} Uncatalogued", CategoryStyle::fallback().icon)));
    }
}
