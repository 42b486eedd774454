//! Category registry.
//!
//! An explicit value built by one discovery pass and handed to the command
//! dispatcher; there is no global registry. Not thread-safe: it is built
//! and read on a single thread.

use tracing::error;

use crate::frameworks::category::Category;

/// Table of every registered category, keyed by program name.
#[derive(Default)]
pub struct Registry {
    categories: Vec<Category>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category. The first registrant of a program name wins;
    /// a duplicate is reported and discarded.
    ///
    /// Returns whether the category was actually registered.
    pub fn register_category(&mut self, category: Category) -> bool {
        if self.category(category.prog_name()).is_some() {
            error!(
                "There is already a registered category named '{}'. Not registering the second one.",
                category.name()
            );
            return false;
        }
        self.categories.push(category);
        true
    }

    /// Look up a category by program name.
    pub fn category(&self, prog: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.prog_name() == prog)
    }

    pub(crate) fn category_mut(&mut self, prog: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.prog_name() == prog)
    }

    /// The main category, when one was registered.
    pub fn main_category(&self) -> Option<&Category> {
        self.categories.iter().find(|c| c.is_main())
    }

    /// All categories, in registration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_category_keeps_the_first_registrant() {
        let mut registry = Registry::new();
        assert!(registry.register_category(Category::new("Games", "first", false, &[])));
        assert!(!registry.register_category(Category::new("Games", "second", false, &[])));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.category("games").unwrap().description(), "first");
    }

    #[test]
    fn duplicate_detection_uses_prog_name_not_display_name() {
        let mut registry = Registry::new();
        assert!(registry.register_category(Category::new("My Tools", "", false, &[])));
        assert!(!registry.register_category(Category::new("my/tools", "", false, &[])));
    }

    #[test]
    fn main_category_lookup() {
        let mut registry = Registry::new();
        registry.register_category(Category::main());
        registry.register_category(Category::new("Games", "", false, &[]));

        assert_eq!(registry.main_category().unwrap().prog_name(), "main");
    }

    #[test]
    fn categories_iterate_in_registration_order() {
        let mut registry = Registry::new();
        registry.register_category(Category::main());
        registry.register_category(Category::new("IDE", "", false, &[]));
        registry.register_category(Category::new("Android", "", false, &[]));

        let progs: Vec<_> = registry
            .categories()
            .iter()
            .map(|c| c.prog_name())
            .collect();
        assert_eq!(progs, ["main", "ide", "android"]);
    }
}
