//! Catalog object cache.
//!
//! Time-bounded memoization over the access layer: each query family keeps
//! its results for a configurable TTL, and external callers can drop whole
//! families early through coarse [`CacheTag`]s.
//!
//! ## Configuration
//!
//! Cache behavior is controlled via `brezza.toml`:
//!
//! ```toml
//! [cache]
//! enabled = true
//! posts_ttl_secs = 60
//! categories_ttl_secs = 300
//! # ... see config.rs for all options
//! ```

mod config;
mod keys;
mod lock;
mod store;

pub use config::CacheConfig;
pub use keys::CacheTag;
pub use store::{CatalogStore, METRIC_CACHE_HIT, METRIC_CACHE_MISS};
