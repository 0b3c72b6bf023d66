//! Transaction CLI commands
//!
//! Implements CLI commands for recording and listing transactions and for
//! period summaries.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_summary, format_transaction_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Period, TransactionType};
use crate::services::summary::income_vs_expenses;
use crate::services::{CategoryService, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount (e.g., "42", "42.50" or "$42.50"); at most two decimal places
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name (need not be registered)
        category: String,
        /// Transaction type: income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
        /// Transaction date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| TrackerError::Parse(format!("Invalid date '{}': {}", s, e)))
}

/// Parse a period name, falling back to the configured default
pub fn parse_period(s: Option<&str>, settings: &Settings) -> TrackerResult<Period> {
    match s {
        Some(raw) => raw
            .parse::<Period>()
            .map_err(|e| TrackerError::Parse(e.to_string())),
        None => Ok(settings.default_period),
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let service = TransactionService::new(&storage.transactions);

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            kind,
            date,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| TrackerError::Parse(format!("Invalid amount: {}", e)))?;
            let kind: TransactionType = kind.parse().map_err(TrackerError::Parse)?;
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => chrono::Local::now().date_naive(),
            };

            let txn = service.record(date, amount, &category, kind)?;
            println!(
                "Recorded {} of {} in '{}' on {}",
                txn.kind,
                txn.amount.format_with_symbol(&settings.currency_symbol),
                txn.category,
                txn.date.format(&settings.date_format)
            );
        }

        TransactionCommands::List { limit } => {
            let history = service.history()?;
            let styles = CategoryService::new(&storage.categories).styles()?;
            print!(
                "{}",
                format_transaction_list(
                    &history,
                    &styles,
                    &settings.currency_symbol,
                    &settings.date_format,
                    limit
                )
            );
        }
    }

    Ok(())
}

/// Handle `fintrack summary`
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    period: Option<&str>,
) -> TrackerResult<()> {
    let period = parse_period(period, settings)?;
    let service = TransactionService::new(&storage.transactions);

    let summary = service.summary(period)?;
    let comparison = income_vs_expenses(&summary)?;
    let styles = CategoryService::new(&storage.categories).styles()?;
    print!(
        "{}",
        format_summary(&summary, &comparison, &styles, period, &settings.currency_symbol)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(matches!(parse_date("15/01/2024"), Err(TrackerError::Parse(_))));
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_parse_period_default() {
        let mut settings = Settings::default();
        settings.default_period = Period::Year;

        assert_eq!(parse_period(None, &settings).unwrap(), Period::Year);
        assert_eq!(parse_period(Some("week"), &settings).unwrap(), Period::Week);
        assert!(parse_period(Some("fortnight"), &settings).is_err());
    }
}
