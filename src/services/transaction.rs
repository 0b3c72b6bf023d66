//! Transaction service
//!
//! Sits between the front end and a [`TransactionStore`]: checks input the
//! store itself accepts blindly, and orders history for display.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Period, Summary, Transaction, TransactionType};
use crate::storage::TransactionStore;

/// Service for recording and reading transactions
pub struct TransactionService<'a, S: TransactionStore> {
    store: &'a S,
}

impl<'a, S: TransactionStore> TransactionService<'a, S> {
    /// Create a new transaction service
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Validate and append a transaction
    ///
    /// The category is trimmed but otherwise free-form; it does not have to
    /// exist in any registry.
    pub fn record(
        &self,
        date: NaiveDate,
        amount: Money,
        category: &str,
        kind: TransactionType,
    ) -> TrackerResult<Transaction> {
        if amount.is_negative() {
            return Err(TrackerError::Validation(format!(
                "Amount cannot be negative: {}",
                amount
            )));
        }

        let category = category.trim();
        if category.is_empty() {
            return Err(TrackerError::Validation("Category name cannot be empty".into()));
        }

        let txn = Transaction::new(date, amount, category, kind);
        self.store.add_transaction(&txn)?;

        tracing::info!(
            date = %txn.date,
            amount = %txn.amount,
            category = %txn.category,
            kind = %txn.kind,
            "recorded transaction"
        );
        Ok(txn)
    }

    /// All transactions, newest first; same-day entries keep insertion order
    pub fn history(&self) -> TrackerResult<Vec<Transaction>> {
        let mut transactions = self.store.get_transactions()?;
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Summary rows for `period`
    pub fn summary(&self, period: Period) -> TrackerResult<Summary> {
        self.store.get_summary(period)
    }
}
