//! Storage initialization
//!
//! Handles first-run setup: directories plus empty-but-valid data files.

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

use super::categories::JsonCategoryRegistry;
use super::transactions::CsvTransactionStore;

/// Initialize storage for a fresh installation
///
/// Existing data files are left untouched.
pub fn initialize_storage(paths: &TrackerPaths) -> Result<(), TrackerError> {
    paths.ensure_directories()?;

    CsvTransactionStore::new(paths.transactions_file()).ensure_exists()?;
    JsonCategoryRegistry::new(paths.categories_file()).ensure_exists()?;

    tracing::info!(data_dir = %paths.data_dir().display(), "storage initialized");
    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &TrackerPaths) -> bool {
    !paths.transactions_file().exists() || !paths.categories_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use crate::storage::{CategoryRegistry, TransactionStore};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));

        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.transactions_file().exists());
        assert!(paths.categories_file().exists());
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();

        let store = CsvTransactionStore::new(paths.transactions_file());
        let txn = Transaction::expense(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            Money::from_cents(10000),
            "Food",
        );
        store.add_transaction(&txn).unwrap();

        let registry = JsonCategoryRegistry::new(paths.categories_file());
        registry.add_custom_category("Hobbies", "🎨", "#AABBCC").unwrap();

        initialize_storage(&paths).unwrap();

        assert_eq!(store.get_transactions().unwrap(), vec![txn]);
        assert_eq!(registry.get_custom_categories().unwrap().len(), 1);
    }

    #[test]
    fn test_unwritable_location_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "a file, not a directory").unwrap();

        let paths = TrackerPaths::with_base_dir(blocker.join("fintrack"));
        let err = initialize_storage(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}
