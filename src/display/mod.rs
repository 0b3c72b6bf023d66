//! Display formatting for terminal output
//!
//! Turns models and summaries into printable tables. Nothing in here touches
//! storage.

pub mod category;
pub mod summary;
pub mod transaction;

pub use category::{category_label, format_category_details, format_category_list};
pub use summary::format_summary;
pub use transaction::format_transaction_list;
