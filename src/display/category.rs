//! Category display formatting

use std::collections::BTreeMap;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, CategoryStyle};

/// Category name prefixed with its icon
///
/// Names missing from `styles` get the fallback icon.
pub fn category_label(name: &str, styles: &BTreeMap<String, CategoryStyle>) -> String {
    match styles.get(name) {
        Some(style) => format!("{} {}", style.icon, name),
        None => format!("{} {}", CategoryStyle::fallback().icon, name),
    }
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Icon")]
    icon: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Source")]
    source: String,
}

/// Format a table of categories
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|c| CategoryRow {
            icon: c.style.icon.clone(),
            name: c.name.clone(),
            color: c.style.color.clone(),
            source: c.source.to_string(),
        })
        .collect();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

/// Format category details
pub fn format_category_details(category: &Category) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  Icon:   {}\n", category.style.icon));
    output.push_str(&format!("  Color:  {}\n", category.style.color));
    output.push_str(&format!("  Source: {}\n", category.source));

    output
}
