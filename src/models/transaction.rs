//! Transaction model
//!
//! A transaction is one immutable row of the ledger: a date, a non-negative
//! amount, a free-form category name and whether it was income or an expense.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!(
                "Invalid transaction type '{}' (expected income or expense)",
                other
            )),
        }
    }
}

/// A single ledger entry
///
/// Field order matches the column order of `transactions.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date of the transaction
    pub date: NaiveDate,

    /// Amount, never negative once it has passed the service layer
    pub amount: Money,

    /// Category name; not checked against any registry
    pub category: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        kind: TransactionType,
    ) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            kind,
        }
    }

    /// Shorthand for an expense
    pub fn expense(date: NaiveDate, amount: Money, category: impl Into<String>) -> Self {
        Self::new(date, amount, category, TransactionType::Expense)
    }

    /// Shorthand for an income entry
    pub fn income(date: NaiveDate, amount: Money, category: impl Into<String>) -> Self {
        Self::new(date, amount, category, TransactionType::Income)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.kind, self.amount, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let txn = Transaction::expense(date, Money::from_cents(10000), "Food");

        assert_eq!(txn.date, date);
        assert_eq!(txn.amount.cents(), 10000);
        assert_eq!(txn.category, "Food");
        assert!(txn.is_expense());
        assert!(!txn.is_income());
    }

    #[test]
    fn test_type_parse() {
        assert_eq!("income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!("Expense".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert!("transfer".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_json_field_names() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let txn = Transaction::income(date, Money::from_cents(100000), "Salary");
        let value = serde_json::to_value(&txn).unwrap();

        assert_eq!(value["date"], "2024-01-10");
        assert_eq!(value["amount"], "1000.00");
        assert_eq!(value["category"], "Salary");
        assert_eq!(value["type"], "income");
    }

    #[test]
    fn test_display() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let txn = Transaction::expense(date, Money::from_cents(20000), "Food");
        assert_eq!(txn.to_string(), "2024-02-01 expense $200.00 (Food)");
    }
}
