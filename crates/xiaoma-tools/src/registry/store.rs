//! Adapter registry storage

use super::{AdapterCategory, AdapterRegistration};
use crate::adapter::{ProfileAdapter, TargetAdapter};
use std::collections::HashMap;

/// Central registry of adapter profiles.
///
/// Provides lookup by slug, filtering by category, and priority-based ordering.
pub struct AdapterRegistry {
    adapters: HashMap<String, AdapterRegistration>,
}

impl AdapterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with all built-in adapters.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for reg in super::builtins::builtin_registrations() {
            registry.register(reg);
        }
        registry
    }

    /// Register an adapter, replacing any with the same slug.
    pub fn register(&mut self, reg: AdapterRegistration) {
        self.adapters.insert(reg.slug().to_string(), reg);
    }

    pub fn get(&self, slug: &str) -> Option<&AdapterRegistration> {
        self.adapters.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.adapters.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Build the adapter for `slug`.
    pub fn adapter(&self, slug: &str) -> Option<Box<dyn TargetAdapter>> {
        self.get(slug)
            .map(|reg| Box::new(ProfileAdapter::new(reg.profile.clone())) as Box<dyn TargetAdapter>)
    }

    /// List all registered slugs (sorted).
    pub fn list(&self) -> Vec<&str> {
        let mut slugs: Vec<_> = self.adapters.keys().map(|s| s.as_str()).collect();
        slugs.sort();
        slugs
    }

    /// List adapters by category (sorted).
    pub fn by_category(&self, cat: AdapterCategory) -> Vec<&str> {
        let mut slugs: Vec<_> = self
            .adapters
            .iter()
            .filter(|(_, r)| r.category == cat)
            .map(|(s, _)| s.as_str())
            .collect();
        slugs.sort();
        slugs
    }

    /// All registrations: preferred first, then by priority, then by slug.
    pub fn by_priority(&self) -> Vec<&AdapterRegistration> {
        let mut adapters: Vec<_> = self.adapters.values().collect();
        adapters.sort_by_key(|r| (!r.preferred(), r.priority, r.slug()));
        adapters
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{AdapterProfile, Destination};

    fn make_reg(slug: &'static str, category: AdapterCategory) -> AdapterRegistration {
        AdapterRegistration::new(
            category,
            AdapterProfile::new(slug, slug, slug, Destination::ModesRegistry { file: slug }),
        )
    }

    #[test]
    fn test_empty_registry() {
        let registry = AdapterRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.adapter("roo").is_none());
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = AdapterRegistry::new();
        registry.register(make_reg("test", AdapterCategory::Ide));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("test"));
        assert_eq!(registry.adapter("test").unwrap().name(), "test");
    }

    #[test]
    fn test_by_category() {
        let registry = AdapterRegistry::with_builtins();
        assert_eq!(
            registry.by_category(AdapterCategory::Autonomous),
            vec!["cline", "kilo", "roo"]
        );
    }

    #[test]
    fn test_by_priority_puts_preferred_first() {
        let registry = AdapterRegistry::with_builtins();
        let order: Vec<&str> = registry.by_priority().iter().map(|r| r.slug()).collect();
        assert_eq!(&order[..2], &["claude-code", "cursor"]);
        assert_eq!(order.len(), 16);
    }
}
