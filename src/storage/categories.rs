//! Custom category registries
//!
//! Holds the user-created categories only; built-ins live in
//! [`crate::models::BuiltinCategory`] and are never persisted.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};
use crate::models::CategoryStyle;

use super::file_io::{read_json, write_json_atomic};

/// Custom categories keyed by name
pub type CategoryMap = BTreeMap<String, CategoryStyle>;

/// Persistence for user-defined categories
pub trait CategoryRegistry {
    /// Every custom category; empty when none have been created
    fn get_custom_categories(&self) -> TrackerResult<CategoryMap>;

    /// Insert or overwrite the entry for `name`
    ///
    /// Names shadowing a built-in are accepted.
    fn add_custom_category(&self, name: &str, icon: &str, color: &str) -> TrackerResult<()>;

    /// Look up one custom category; `None` when absent
    fn get_category(&self, name: &str) -> TrackerResult<Option<CategoryStyle>> {
        Ok(self.get_custom_categories()?.remove(name))
    }
}

/// Registry backed by custom_categories.json
pub struct JsonCategoryRegistry {
    path: PathBuf,
}

impl JsonCategoryRegistry {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Write an empty mapping if no file exists yet
    pub fn ensure_exists(&self) -> TrackerResult<()> {
        if !self.path.exists() {
            write_json_atomic(&self.path, &CategoryMap::new())?;
        }
        Ok(())
    }
}

impl CategoryRegistry for JsonCategoryRegistry {
    fn get_custom_categories(&self) -> TrackerResult<CategoryMap> {
        read_json(&self.path)
    }

    fn add_custom_category(&self, name: &str, icon: &str, color: &str) -> TrackerResult<()> {
        let mut categories = self.get_custom_categories()?;
        let replaced = categories
            .insert(name.to_string(), CategoryStyle::new(icon, color))
            .is_some();
        write_json_atomic(&self.path, &categories)?;

        tracing::debug!(name, replaced, "saved custom category");
        Ok(())
    }
}

/// Registry held entirely in memory
#[derive(Default)]
pub struct MemoryCategoryRegistry {
    data: RwLock<CategoryMap>,
}

impl MemoryCategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryRegistry for MemoryCategoryRegistry {
    fn get_custom_categories(&self) -> TrackerResult<CategoryMap> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    fn add_custom_category(&self, name: &str, icon: &str, color: &str) -> TrackerResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(name.to_string(), CategoryStyle::new(icon, color));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_registry() -> (TempDir, JsonCategoryRegistry) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom_categories.json");
        (temp_dir, JsonCategoryRegistry::new(path))
    }

    #[test]
    fn test_empty_registry() {
        let (_temp_dir, registry) = create_test_registry();
        assert!(registry.get_custom_categories().unwrap().is_empty());
        assert_eq!(registry.get_category("Hobbies").unwrap(), None);
    }

    #[test]
    fn test_ensure_exists_writes_empty_object() {
        let (_temp_dir, registry) = create_test_registry();
        registry.ensure_exists().unwrap();

        let content = std::fs::read_to_string(registry.path()).unwrap();
        assert_eq!(content, "{}");
        assert!(registry.get_custom_categories().unwrap().is_empty());
    }

    #[test]
    fn test_add_and_get() {
        let (_temp_dir, registry) = create_test_registry();
        registry.add_custom_category("Hobbies", "🎨", "#AABBCC").unwrap();

        let all = registry.get_custom_categories().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all["Hobbies"], CategoryStyle::new("🎨", "#AABBCC"));

        assert_eq!(
            registry.get_category("Hobbies").unwrap(),
            Some(CategoryStyle::new("🎨", "#AABBCC"))
        );
        assert_eq!(registry.get_category("Nonexistent").unwrap(), None);
    }

    #[test]
    fn test_add_overwrites() {
        let (_temp_dir, registry) = create_test_registry();
        registry.add_custom_category("Pets", "🐶", "brown").unwrap();
        registry.add_custom_category("Pets", "🐱", "#000000").unwrap();

        let all = registry.get_custom_categories().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all["Pets"], CategoryStyle::new("🐱", "#000000"));
    }

    #[test]
    fn test_builtin_name_accepted() {
        let (_temp_dir, registry) = create_test_registry();
        registry.add_custom_category("Food", "🥗", "green").unwrap();
        assert_eq!(
            registry.get_category("Food").unwrap(),
            Some(CategoryStyle::new("🥗", "green"))
        );
    }

    #[test]
    fn test_file_format() {
        let (temp_dir, registry) = create_test_registry();
        registry
            .add_custom_category("Gifts", "<span>🎁</span>", "#123456")
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(registry.path()).unwrap()).unwrap();
        assert_eq!(raw["Gifts"]["icon"], "<span>🎁</span>");
        assert_eq!(raw["Gifts"]["color"], "#123456");

        let reopened = JsonCategoryRegistry::new(temp_dir.path().join("custom_categories.json"));
        assert_eq!(
            reopened.get_category("Gifts").unwrap(),
            Some(CategoryStyle::new("<span>🎁</span>", "#123456"))
        );
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let (_temp_dir, registry) = create_test_registry();
        std::fs::write(registry.path(), "[1, 2").unwrap();

        assert!(registry.get_custom_categories().is_err());
        assert!(registry.get_category("Anything").is_err());
        assert!(registry.add_custom_category("New", "x", "y").is_err());
    }

    #[test]
    fn test_memory_registry() {
        let registry = MemoryCategoryRegistry::new();
        assert!(registry.get_custom_categories().unwrap().is_empty());

        registry.add_custom_category("Hobbies", "🎨", "#AABBCC").unwrap();
        assert_eq!(
            registry.get_category("Hobbies").unwrap(),
            Some(CategoryStyle::new("🎨", "#AABBCC"))
        );
        assert_eq!(registry.get_category("Nonexistent").unwrap(), None);
    }
}
