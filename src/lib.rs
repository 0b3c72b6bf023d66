//! fintrack - personal finance tracker
//!
//! Records income and expense transactions in an append-only ledger and
//! summarizes them by ISO week, month or year and by category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money, periods)
//! - `storage`: Pluggable stores (CSV/JSON files or memory)
//! - `services`: Aggregation and business logic
//! - `display`: Terminal table formatting
//! - `cli`: clap subcommands used by the `fintrack` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fintrack::models::{Money, Period, Transaction};
//! use fintrack::storage::{MemoryTransactionStore, TransactionStore};
//!
//! let store = MemoryTransactionStore::new();
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! store.add_transaction(&Transaction::expense(date, Money::from_cents(1000), "Food"))?;
//!
//! let summary = store.get_summary(Period::Month)?;
//! assert_eq!(summary.expenses[0].period, 1);
//! # Ok::<(), fintrack::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
