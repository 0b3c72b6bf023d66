//! Storage layer for fintrack
//!
//! Two independent stores sit behind traits so the same services run against
//! files in production and memory in tests:
//!
//! - [`TransactionStore`]: the append-only ledger (transactions.csv)
//! - [`CategoryRegistry`]: user-defined categories (custom_categories.json)
//!
//! File-backed writes are whole-file rewrites through a temp file and rename.
//! There is no locking between processes; the last writer wins.

pub mod categories;
pub mod file_io;
pub mod init;
pub mod transactions;

pub use categories::{CategoryMap, CategoryRegistry, JsonCategoryRegistry, MemoryCategoryRegistry};
pub use file_io::{read_csv, read_json, write_csv_atomic, write_json_atomic};
pub use init::initialize_storage;
pub use transactions::{CsvTransactionStore, MemoryTransactionStore, TransactionStore};

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// File-backed stores rooted at one data directory
pub struct Storage {
    paths: TrackerPaths,
    pub transactions: CsvTransactionStore,
    pub categories: JsonCategoryRegistry,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: CsvTransactionStore::new(paths.transactions_file()),
            categories: JsonCategoryRegistry::new(paths.categories_file()),
            paths,
        })
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        !init::needs_initialization(&self.paths)
    }
}
