//! Category service
//!
//! Combines the built-in category set with a [`CategoryRegistry`]. When a
//! custom category shares a name with a built-in, the custom entry wins.

use std::collections::BTreeMap;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BuiltinCategory, Category, CategorySource, CategoryStyle};
use crate::storage::CategoryRegistry;

/// Service for category management
pub struct CategoryService<'a, R: CategoryRegistry> {
    registry: &'a R,
}

impl<'a, R: CategoryRegistry> CategoryService<'a, R> {
    /// Create a new category service
    pub fn new(registry: &'a R) -> Self {
        Self { registry }
    }

    /// Register (or replace) a custom category
    pub fn create(&self, name: &str, icon: &str, color: &str) -> TrackerResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::Validation("Category name cannot be empty".into()));
        }

        if BuiltinCategory::from_name(name).is_some() {
            tracing::warn!(name, "custom category shadows a built-in");
        }

        self.registry.add_custom_category(name, icon, color)?;
        tracing::info!(name, "saved custom category");

        Ok(Category::new(
            name,
            CategoryStyle::new(icon, color),
            CategorySource::Custom,
        ))
    }

    /// Find a category by name, custom entries first
    pub fn lookup(&self, name: &str) -> TrackerResult<Option<Category>> {
        if let Some(style) = self.registry.get_category(name)? {
            return Ok(Some(Category::new(name, style, CategorySource::Custom)));
        }

        Ok(BuiltinCategory::from_name(name).map(|c| c.to_category()))
    }

    /// Built-ins overlaid with custom categories, sorted by name
    pub fn merged(&self) -> TrackerResult<Vec<Category>> {
        let mut by_name: BTreeMap<String, Category> = BuiltinCategory::all()
            .iter()
            .map(|c| (c.name().to_string(), c.to_category()))
            .collect();

        for (name, style) in self.registry.get_custom_categories()? {
            let category = Category::new(name.clone(), style, CategorySource::Custom);
            by_name.insert(name, category);
        }

        Ok(by_name.into_values().collect())
    }

    /// Name to style for every known category, as [`merged`](Self::merged) resolves it
    pub fn styles(&self) -> TrackerResult<BTreeMap<String, CategoryStyle>> {
        Ok(self
            .merged()?
            .into_iter()
            .map(|c| (c.name, c.style))
            .collect())
    }
}
