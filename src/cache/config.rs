//! Cache configuration.
//!
//! Controls TTLs and capacity limits for the catalog object cache via
//! `brezza.toml`.

use std::num::NonZeroUsize;
use std::time::Duration;

use serde::Deserialize;

// Default values for cache configuration
const DEFAULT_POSTS_TTL_SECS: u64 = 60;
const DEFAULT_CATEGORIES_TTL_SECS: u64 = 300;
const DEFAULT_LOOKUP_TTL_SECS: u64 = 60;
const DEFAULT_FEATURED_TTL_SECS: u64 = 60;
const DEFAULT_POST_LIST_LIMIT: usize = 50;
const DEFAULT_LOOKUP_LIMIT: usize = 500;

/// Cache configuration from `brezza.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Enable the object cache; when false every call recomputes.
    pub enabled: bool,
    /// TTL for full and category-filtered post lists.
    pub posts_ttl_secs: u64,
    /// TTL for the category listing.
    pub categories_ttl_secs: u64,
    /// TTL for slug lookups (hits and misses alike).
    pub lookup_ttl_secs: u64,
    /// TTL for the featured subset.
    pub featured_ttl_secs: u64,
    /// Maximum post lists kept in the LRU cache.
    pub post_list_limit: usize,
    /// Maximum slug lookups kept in the LRU cache.
    pub lookup_limit: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            posts_ttl_secs: DEFAULT_POSTS_TTL_SECS,
            categories_ttl_secs: DEFAULT_CATEGORIES_TTL_SECS,
            lookup_ttl_secs: DEFAULT_LOOKUP_TTL_SECS,
            featured_ttl_secs: DEFAULT_FEATURED_TTL_SECS,
            post_list_limit: DEFAULT_POST_LIST_LIMIT,
            lookup_limit: DEFAULT_LOOKUP_LIMIT,
        }
    }
}

impl CacheConfig {
    pub fn posts_ttl(&self) -> Duration {
        Duration::from_secs(self.posts_ttl_secs)
    }

    pub fn categories_ttl(&self) -> Duration {
        Duration::from_secs(self.categories_ttl_secs)
    }

    pub fn lookup_ttl(&self) -> Duration {
        Duration::from_secs(self.lookup_ttl_secs)
    }

    pub fn featured_ttl(&self) -> Duration {
        Duration::from_secs(self.featured_ttl_secs)
    }

    /// Returns the post list limit as NonZeroUsize, clamping to 1 if zero.
    pub fn post_list_limit_non_zero(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.post_list_limit).unwrap_or(NonZeroUsize::MIN)
    }

    /// Returns the slug lookup limit as NonZeroUsize, clamping to 1 if zero.
    pub fn lookup_limit_non_zero(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.lookup_limit).unwrap_or(NonZeroUsize::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = CacheConfig::default();
        assert!(config.enabled);
        assert_eq!(config.posts_ttl_secs, 60);
        assert_eq!(config.categories_ttl_secs, 300);
        assert_eq!(config.lookup_ttl_secs, 60);
        assert_eq!(config.featured_ttl_secs, 60);
        assert_eq!(config.post_list_limit, 50);
        assert_eq!(config.lookup_limit, 500);
    }

    #[test]
    fn ttl_accessors_convert_to_durations() {
        let config = CacheConfig {
            posts_ttl_secs: 7,
            ..Default::default()
        };
        assert_eq!(config.posts_ttl(), Duration::from_secs(7));
        assert_eq!(config.categories_ttl(), Duration::from_secs(300));
    }

    #[test]
    fn non_zero_clamps_to_min() {
        let config = CacheConfig {
            post_list_limit: 0,
            ..Default::default()
        };
        assert_eq!(config.post_list_limit_non_zero().get(), 1);
    }
}
