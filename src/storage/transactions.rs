//! Transaction stores
//!
//! The ledger is append-only: records are added and read back in insertion
//! order, never edited or removed. `CsvTransactionStore` keeps them in
//! transactions.csv; `MemoryTransactionStore` keeps them in a `Vec`.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Period, Summary, Transaction};
use crate::services::summary::summarize;

use super::file_io::{read_csv, write_csv_atomic};

/// Column order of transactions.csv
pub const TRANSACTION_HEADERS: [&str; 4] = ["date", "amount", "category", "type"];

/// Append-only transaction persistence
pub trait TransactionStore {
    /// Append one record
    ///
    /// No validation happens here; callers are expected to have rejected
    /// negative amounts already.
    fn add_transaction(&self, txn: &Transaction) -> TrackerResult<()>;

    /// All records in insertion order; empty when nothing has been added
    fn get_transactions(&self) -> TrackerResult<Vec<Transaction>>;

    /// Expense and income totals grouped by (period bucket, category)
    fn get_summary(&self, period: Period) -> TrackerResult<Summary> {
        let transactions = self.get_transactions()?;
        summarize(&transactions, period)
    }
}

/// Transaction store backed by a CSV file
///
/// Each append is a whole-file read-modify-write. The rewrite is atomic, so
/// a failed append leaves the previous ledger intact.
pub struct CsvTransactionStore {
    path: PathBuf,
}

impl CsvTransactionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Write an empty ledger (header only) if no file exists yet
    pub fn ensure_exists(&self) -> TrackerResult<()> {
        if !self.path.exists() {
            write_csv_atomic::<Transaction, _>(&self.path, &TRANSACTION_HEADERS, &[])?;
        }
        Ok(())
    }
}

impl TransactionStore for CsvTransactionStore {
    fn add_transaction(&self, txn: &Transaction) -> TrackerResult<()> {
        let mut transactions: Vec<Transaction> = read_csv(&self.path)?;
        transactions.push(txn.clone());
        write_csv_atomic(&self.path, &TRANSACTION_HEADERS, &transactions)?;

        tracing::debug!(count = transactions.len(), "appended transaction");
        Ok(())
    }

    fn get_transactions(&self) -> TrackerResult<Vec<Transaction>> {
        read_csv(&self.path)
    }
}

/// Transaction store held entirely in memory
#[derive(Default)]
pub struct MemoryTransactionStore {
    data: RwLock<Vec<Transaction>>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `transactions`, in order
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            data: RwLock::new(transactions),
        }
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn add_transaction(&self, txn: &Transaction) -> TrackerResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(txn.clone());
        Ok(())
    }

    fn get_transactions(&self) -> TrackerResult<Vec<Transaction>> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }
}
