//! Cache storage for catalog query results.
//!
//! Typed families instead of a generic map: a singleton entry per corpus-wide
//! query (categories, featured) and LRU-bounded keyed families for post lists
//! and slug lookups. Every entry carries an expiry instant; stale entries
//! read as misses and are dropped on the next touch.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use lru::LruCache;
use metrics::counter;
use tokio::time::Instant;

use crate::domain::entities::{CategoryRecord, PostRecord};

use super::config::CacheConfig;
use super::keys::CacheTag;
use super::lock::{rw_read, rw_write};

const SOURCE: &str = "cache::store";

pub const METRIC_CACHE_HIT: &str = "brezza_cache_hit_total";
pub const METRIC_CACHE_MISS: &str = "brezza_cache_miss_total";

/// A cached value plus its expiry instant.
///
/// Expiry uses `tokio::time::Instant` so tests drive TTLs with the paused
/// clock instead of sleeping for real.
struct TimedEntry<T> {
    value: T,
    expires_at: Instant,
}

impl<T: Clone> TimedEntry<T> {
    fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn fresh(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Object cache over the catalog's query families.
///
/// Values are shared as `Arc`s: within a TTL window repeated calls with
/// identical arguments observe the same allocation, and readers always see a
/// fully-formed entry or a miss, never a torn value.
pub struct CatalogStore {
    // Singletons (one corpus-wide result each)
    categories: RwLock<Option<TimedEntry<Arc<[CategoryRecord]>>>>,
    featured: RwLock<Option<TimedEntry<Arc<[PostRecord]>>>>,

    // Keyed families (with LRU eviction)
    // Post lists keyed by the optional category-slug filter
    post_lists: RwLock<LruCache<Option<String>, TimedEntry<Arc<[PostRecord]>>>>,
    // Slug lookups; the inner Option caches negative results too
    posts_by_slug: RwLock<LruCache<String, TimedEntry<Option<Arc<PostRecord>>>>>,
}

impl CatalogStore {
    /// Create a new store with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            categories: RwLock::new(None),
            featured: RwLock::new(None),
            post_lists: RwLock::new(LruCache::new(config.post_list_limit_non_zero())),
            posts_by_slug: RwLock::new(LruCache::new(config.lookup_limit_non_zero())),
        }
    }

    // ========================================================================
    // Singleton families
    // ========================================================================

    pub fn get_categories(&self) -> Option<Arc<[CategoryRecord]>> {
        let hit = rw_read(&self.categories, SOURCE, "get_categories")
            .as_ref()
            .filter(|entry| entry.fresh())
            .map(|entry| entry.value.clone());
        record_outcome("categories", hit.is_some());
        hit
    }

    pub fn set_categories(&self, value: Arc<[CategoryRecord]>, ttl: Duration) {
        *rw_write(&self.categories, SOURCE, "set_categories") = Some(TimedEntry::new(value, ttl));
    }

    pub fn get_featured(&self) -> Option<Arc<[PostRecord]>> {
        let hit = rw_read(&self.featured, SOURCE, "get_featured")
            .as_ref()
            .filter(|entry| entry.fresh())
            .map(|entry| entry.value.clone());
        record_outcome("featured", hit.is_some());
        hit
    }

    pub fn set_featured(&self, value: Arc<[PostRecord]>, ttl: Duration) {
        *rw_write(&self.featured, SOURCE, "set_featured") = Some(TimedEntry::new(value, ttl));
    }

    // ========================================================================
    // Post list family
    // ========================================================================

    pub fn get_post_list(&self, category: Option<&str>) -> Option<Arc<[PostRecord]>> {
        let key = category.map(str::to_string);
        let mut guard = rw_write(&self.post_lists, SOURCE, "get_post_list");

        let hit = guard
            .get(&key)
            .filter(|entry| entry.fresh())
            .map(|entry| entry.value.clone());
        if hit.is_none() {
            guard.pop(&key);
        }
        record_outcome("post_list", hit.is_some());
        hit
    }

    pub fn set_post_list(
        &self,
        category: Option<String>,
        value: Arc<[PostRecord]>,
        ttl: Duration,
    ) {
        rw_write(&self.post_lists, SOURCE, "set_post_list")
            .put(category, TimedEntry::new(value, ttl));
    }

    // ========================================================================
    // Slug lookup family
    // ========================================================================

    /// Outer `None` is a cache miss; inner `None` is a cached negative lookup.
    pub fn get_post_by_slug(&self, slug: &str) -> Option<Option<Arc<PostRecord>>> {
        let mut guard = rw_write(&self.posts_by_slug, SOURCE, "get_post_by_slug");

        let hit = guard
            .get(slug)
            .filter(|entry| entry.fresh())
            .map(|entry| entry.value.clone());
        if hit.is_none() {
            guard.pop(slug);
        }
        record_outcome("post_lookup", hit.is_some());
        hit
    }

    pub fn set_post_by_slug(&self, slug: String, value: Option<Arc<PostRecord>>, ttl: Duration) {
        rw_write(&self.posts_by_slug, SOURCE, "set_post_by_slug")
            .put(slug, TimedEntry::new(value, ttl));
    }

    // ========================================================================
    // Invalidation
    // ========================================================================

    /// Drop every entry covered by the given tag.
    pub fn invalidate(&self, tag: CacheTag) {
        match tag {
            CacheTag::Posts => {
                rw_write(&self.post_lists, SOURCE, "invalidate.post_lists").clear();
                rw_write(&self.posts_by_slug, SOURCE, "invalidate.posts_by_slug").clear();
                *rw_write(&self.featured, SOURCE, "invalidate.featured") = None;
            }
            CacheTag::Categories => {
                *rw_write(&self.categories, SOURCE, "invalidate.categories") = None;
            }
        }
    }

    /// Clear all cached data.
    pub fn clear(&self) {
        self.invalidate(CacheTag::Posts);
        self.invalidate(CacheTag::Categories);
    }
}

fn record_outcome(family: &'static str, hit: bool) {
    if hit {
        counter!(METRIC_CACHE_HIT, "family" => family).increment(1);
    } else {
        counter!(METRIC_CACHE_MISS, "family" => family).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::*;
    use crate::generator::Corpus;

    const TTL: Duration = Duration::from_secs(60);

    fn sample_corpus() -> Corpus {
        Corpus::generate(123, 5)
    }

    #[tokio::test]
    async fn post_list_roundtrip() {
        let store = CatalogStore::new(&CacheConfig::default());
        let corpus = sample_corpus();
        let posts: Arc<[PostRecord]> = Arc::from(corpus.posts.clone());

        assert!(store.get_post_list(None).is_none());

        store.set_post_list(None, posts.clone(), TTL);

        let cached = store.get_post_list(None).expect("cached list");
        assert!(Arc::ptr_eq(&cached, &posts));

        // The filtered family is keyed independently
        assert!(store.get_post_list(Some("technology")).is_none());
    }

    #[tokio::test]
    async fn slug_lookup_caches_negative_results() {
        let store = CatalogStore::new(&CacheConfig::default());

        assert!(store.get_post_by_slug("missing").is_none());

        store.set_post_by_slug("missing".to_string(), None, TTL);

        let cached = store.get_post_by_slug("missing").expect("cached lookup");
        assert!(cached.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn entries_expire_after_ttl() {
        let store = CatalogStore::new(&CacheConfig::default());
        let corpus = sample_corpus();
        let categories: Arc<[CategoryRecord]> = Arc::from(corpus.categories.clone());

        store.set_categories(categories, TTL);
        assert!(store.get_categories().is_some());

        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(store.get_categories().is_none());
    }

    #[tokio::test]
    async fn lru_evicts_oldest_post_list() {
        let config = CacheConfig {
            post_list_limit: 2,
            ..Default::default()
        };
        let store = CatalogStore::new(&config);
        let corpus = sample_corpus();
        let posts: Arc<[PostRecord]> = Arc::from(corpus.posts.clone());

        store.set_post_list(None, posts.clone(), TTL);
        store.set_post_list(Some("design".to_string()), posts.clone(), TTL);
        store.set_post_list(Some("business".to_string()), posts, TTL);

        assert!(store.get_post_list(None).is_none()); // Evicted
        assert!(store.get_post_list(Some("design")).is_some());
        assert!(store.get_post_list(Some("business")).is_some());
    }

    #[tokio::test]
    async fn posts_tag_clears_post_families_only() {
        let store = CatalogStore::new(&CacheConfig::default());
        let corpus = sample_corpus();
        let posts: Arc<[PostRecord]> = Arc::from(corpus.posts.clone());
        let categories: Arc<[CategoryRecord]> = Arc::from(corpus.categories.clone());

        store.set_post_list(None, posts.clone(), TTL);
        store.set_featured(posts, TTL);
        store.set_categories(categories, TTL);

        store.invalidate(CacheTag::Posts);

        assert!(store.get_post_list(None).is_none());
        assert!(store.get_featured().is_none());
        assert!(store.get_categories().is_some());

        store.invalidate(CacheTag::Categories);
        assert!(store.get_categories().is_none());
    }

    #[tokio::test]
    async fn store_recovers_from_poisoned_lock() {
        let store = CatalogStore::new(&CacheConfig::default());
        let corpus = sample_corpus();
        let categories: Arc<[CategoryRecord]> = Arc::from(corpus.categories.clone());

        let _ = catch_unwind(AssertUnwindSafe(|| {
            let _guard = store
                .categories
                .write()
                .expect("categories lock should be acquired");
            panic!("poison categories lock");
        }));

        store.set_categories(categories, TTL);
        assert!(store.get_categories().is_some());
    }
}
