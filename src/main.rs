use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_category_command, handle_summary_command, handle_transaction_command,
    CategoryCommands, TransactionCommands,
};
use fintrack::config::{paths::TrackerPaths, settings::Settings};
use fintrack::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker",
    long_about = "fintrack records income and expense transactions and summarizes \
                  them by week, month or year, broken down by category."
)]
struct Cli {
    /// off, error, warn, info, debug, trace (overridden by RUST_LOG)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Summarize transactions by period and category
    Summary {
        /// week, month or year; defaults to the configured period
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Create the data directory and empty data files
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Summary { period }) => {
            handle_summary_command(&storage, &settings, period.as_deref())?;
        }
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.data_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'fintrack category list' to see available categories.");
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Categories file:   {}", paths.categories_file().display());
            println!(
                "Initialized:       {}",
                if storage.is_initialized() { "yes" } else { "no (run 'fintrack init')" }
            );
            println!();
            println!("Settings:");
            println!("  Default period:  {}", settings.default_period);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        // Without RUST_LOG, only this crate's events at the requested level
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
