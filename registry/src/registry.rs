//! The Registry - immutable category lookup.

use crate::CategoryMeta;
use std::collections::HashMap;

/// The Registry maps category labels to their posting metadata.
/// It is immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Category definitions by label.
    categories: HashMap<String, CategoryMeta>,
}

impl Registry {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(categories: HashMap<String, CategoryMeta>) -> Self {
        Self { categories }
    }

    /// Resolve a label to its metadata. Labels match exactly, case included.
    pub fn resolve(&self, label: &str) -> Option<&CategoryMeta> {
        self.categories.get(label)
    }

    /// Get all category definitions sorted by label.
    pub fn sorted_categories(&self) -> Vec<&CategoryMeta> {
        let mut categories: Vec<&CategoryMeta> = self.categories.values().collect();
        categories.sort_by(|a, b| a.label.cmp(&b.label));
        categories
    }

    /// Get the number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::RegistryBuilder;

    // ========== TEST: resolve_not_found ==========
    #[test]
    fn test_resolve_not_found() {
        // GIVEN empty registry
        let registry = RegistryBuilder::new().build().unwrap();

        // WHEN resolve("[Unknown]")
        let result = registry.resolve("[Unknown]");

        // THEN returns None
        assert!(result.is_none());
    }

    // ========== TEST: resolve_is_case_sensitive ==========
    #[test]
    fn test_resolve_is_case_sensitive() {
        let mut builder = RegistryBuilder::new();
        builder.add_category("[NASA]", "1").done().unwrap();
        let registry = builder.build().unwrap();

        assert!(registry.resolve("[NASA]").is_some());
        assert!(registry.resolve("[nasa]").is_none());
        assert!(registry.resolve("NASA").is_none());
    }

    // ========== TEST: sorted_categories ==========
    #[test]
    fn test_sorted_categories() {
        let mut builder = RegistryBuilder::new();
        builder.add_category("[SpaceX]", "2").done().unwrap();
        builder.add_category("[IMSA]", "1").done().unwrap();
        builder.add_category("[NASA]", "2").done().unwrap();
        let registry = builder.build().unwrap();

        let labels: Vec<&str> = registry
            .sorted_categories()
            .iter()
            .map(|c| c.label.as_str())
            .collect();

        assert_eq!(labels, vec!["[IMSA]", "[NASA]", "[SpaceX]"]);
        assert_eq!(registry.category_count(), 3);
    }
}
