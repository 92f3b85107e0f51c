//! Cache key construction for entity queries

use std::collections::BTreeMap;
use std::fmt::Display;

/// Parameters for cache key generation
#[derive(Debug, Clone, Default)]
pub struct CacheKeyParams {
    /// Primary identifier (e.g. the serialized filter)
    pub primary: String,
    /// Secondary components (sorted for consistency)
    pub components: BTreeMap<String, String>,
}

impl CacheKeyParams {
    /// Creates new cache key parameters with a primary identifier
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            components: BTreeMap::new(),
        }
    }

    /// Adds a component to the key parameters
    pub fn with_component(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.components.insert(key.into(), value.into());
        self
    }

    /// Renders `primary:k1=v1:k2=v2` with components sorted by name
    pub fn compose(&self) -> String {
        let mut parts = vec![self.primary.clone()];

        for (k, v) in &self.components {
            parts.push(format!("{}={}", k, v));
        }

        parts.join(":")
    }
}

/// Key scheme for one entity type
///
/// Every key starts with the entity prefix, so a single prefix removal sweeps
/// both list and by-id entries.
#[derive(Debug, Clone)]
pub struct EntityCacheKeys {
    prefix: String,
}

impl EntityCacheKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Key for a list query
    pub fn list_key(&self, params: &CacheKeyParams) -> String {
        format!("{}_{}", self.prefix, params.compose())
    }

    /// Key for a single entity lookup
    pub fn id_key(&self, key: &impl Display) -> String {
        format!("{}_id_{}", self.prefix, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_params_with_components() {
        let params = CacheKeyParams::new("filter")
            .with_component("page", "1")
            .with_component("size", "10");

        assert_eq!(params.primary, "filter");
        assert_eq!(params.components.len(), 2);
        assert_eq!(params.components.get("page"), Some(&"1".to_string()));
    }

    #[test]
    fn test_components_are_sorted() {
        let params = CacheKeyParams::new("test")
            .with_component("zebra", "z")
            .with_component("apple", "a")
            .with_component("mango", "m");

        assert_eq!(params.compose(), "test:apple=a:mango=m:zebra=z");
    }

    #[test]
    fn test_entity_keys_share_prefix() {
        let keys = EntityCacheKeys::new("product_list_");
        let params = CacheKeyParams::new("null").with_component("page", "2");

        let list_key = keys.list_key(&params);
        let id_key = keys.id_key(&42);

        assert_eq!(list_key, "product_list__null:page=2");
        assert_eq!(id_key, "product_list__id_42");
        assert!(list_key.starts_with(keys.prefix()));
        assert!(id_key.starts_with(keys.prefix()));
    }

    #[test]
    fn test_equal_inputs_produce_equal_keys() {
        let keys = EntityCacheKeys::new("order_list_");
        let build = || {
            CacheKeyParams::new(r#"{"employee_id":3}"#)
                .with_component("sort", "order_date")
                .with_component("dir", "desc")
        };

        assert_eq!(keys.list_key(&build()), keys.list_key(&build()));
    }

    #[test]
    fn test_different_pages_produce_different_keys() {
        let keys = EntityCacheKeys::new("supplier_list_");
        let page = |n: i64| CacheKeyParams::new("null").with_component("page", n.to_string());

        assert_ne!(keys.list_key(&page(1)), keys.list_key(&page(2)));
    }
}
