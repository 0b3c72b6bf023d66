//! Service layer for fintrack
//!
//! The service layer provides business logic on top of the storage layer:
//! input checks, display ordering, category merging and aggregation.

pub mod category;
pub mod summary;
pub mod transaction;

pub use category::CategoryService;
pub use summary::{income_vs_expenses, summarize, totals_by_period};
pub use transaction::TransactionService;
