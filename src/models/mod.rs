//! Core data models for fintrack
//!
//! Transactions, categories, money amounts, summary periods and the rows
//! derived from them.

pub mod category;
pub mod money;
pub mod period;
pub mod summary;
pub mod transaction;

pub use category::{BuiltinCategory, Category, CategorySource, CategoryStyle};
pub use money::Money;
pub use period::Period;
pub use summary::{PeriodComparison, Summary, SummaryRow};
pub use transaction::{Transaction, TransactionType};
