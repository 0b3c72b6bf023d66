//! Category CLI commands
//!
//! Implements CLI commands for listing built-in and custom categories and
//! registering new ones.

use clap::Subcommand;

use crate::display::{format_category_details, format_category_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::CategorySource;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List built-in and custom categories
    List {
        /// Only show custom categories
        #[arg(long)]
        custom: bool,
    },

    /// Register a custom category (replaces an existing one of the same name)
    Add {
        /// Category name
        name: String,
        /// Icon glyph or markup
        #[arg(short, long, default_value = "📦")]
        icon: String,
        /// Color, hex (#AABBCC) or named
        #[arg(short, long, default_value = "#95A5A6")]
        color: String,
    },

    /// Show category details
    Show {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> TrackerResult<()> {
    let service = CategoryService::new(&storage.categories);

    match cmd {
        CategoryCommands::List { custom } => {
            let mut categories = service.merged()?;
            if custom {
                categories.retain(|c| c.source == CategorySource::Custom);
            }
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Add { name, icon, color } => {
            let category = service.create(&name, &icon, &color)?;
            println!("Saved category: {}", category);
        }

        CategoryCommands::Show { name } => {
            let category = service
                .lookup(&name)?
                .ok_or_else(|| TrackerError::category_not_found(&name))?;
            print!("{}", format_category_details(&category));
        }
    }

    Ok(())
}
