//! Read-only catalog access with artificial latency and cache-through reads.
//!
//! The service owns the corpus and serves every query from it. Each cache
//! miss pays the configured artificial delay before recomputing, emulating a
//! network round-trip so front-end loading states stay realistic; a fresh hit
//! returns the shared result immediately.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, OnceCell};
use tokio::time::sleep;
use tracing::info;

use crate::cache::{CacheTag, CatalogStore};
use crate::config::CatalogSettings;
use crate::domain::entities::{CategoryRecord, PostRecord};
use crate::domain::error::CatalogError;
use crate::generator::Corpus;

/// Size of the featured subset.
pub const FEATURED_COUNT: usize = 3;

/// Read-only queries over a generated corpus.
///
/// The corpus is generated lazily on first access and never mutated; the
/// `OnceCell` guarantees concurrent first-time callers observe the identical
/// result. All operations are total: unknown slugs and filters yield empty
/// results, never errors.
pub struct CatalogService {
    settings: CatalogSettings,
    corpus: OnceCell<Arc<Corpus>>,
    store: CatalogStore,

    // Single-flight guards: concurrent misses within a family coalesce into
    // one delayed recomputation whose result is then shared.
    post_list_flight: Mutex<()>,
    categories_flight: Mutex<()>,
    lookup_flight: Mutex<()>,
    featured_flight: Mutex<()>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl CatalogService {
    /// Build a service over validated settings.
    ///
    /// Fails fast with [`CatalogError::InvalidArgument`] when the generator
    /// settings are out of range; this is the crate's only failure point.
    pub fn new(settings: CatalogSettings) -> Result<Self, CatalogError> {
        settings.generator.validate()?;
        let store = CatalogStore::new(&settings.cache);

        Ok(Self {
            settings,
            corpus: OnceCell::new(),
            store,
            post_list_flight: Mutex::new(()),
            categories_flight: Mutex::new(()),
            lookup_flight: Mutex::new(()),
            featured_flight: Mutex::new(()),
        })
    }

    /// The underlying corpus, generating it on first access.
    pub async fn corpus(&self) -> Arc<Corpus> {
        self.corpus
            .get_or_init(|| async {
                let generator = self.settings.generator;
                let corpus = Corpus::generate(generator.seed, generator.post_count);
                info!(
                    seed = generator.seed,
                    post_count = generator.post_count,
                    categories = corpus.categories.len(),
                    "Generated content corpus"
                );
                Arc::new(corpus)
            })
            .await
            .clone()
    }

    /// All posts, or only those in the given category slug (exact match).
    ///
    /// Ordered by `published_at` descending; an unknown category yields an
    /// empty list.
    pub async fn list_posts(&self, category: Option<&str>) -> Arc<[PostRecord]> {
        if !self.settings.cache.enabled {
            return self.compute_post_list(category).await;
        }

        if let Some(hit) = self.store.get_post_list(category) {
            return hit;
        }

        let _flight = self.post_list_flight.lock().await;
        if let Some(hit) = self.store.get_post_list(category) {
            return hit;
        }

        let value = self.compute_post_list(category).await;
        self.store.set_post_list(
            category.map(str::to_string),
            value.clone(),
            self.settings.cache.posts_ttl(),
        );
        value
    }

    /// The full category set with per-category post counts.
    pub async fn list_categories(&self) -> Arc<[CategoryRecord]> {
        if !self.settings.cache.enabled {
            return self.compute_categories().await;
        }

        if let Some(hit) = self.store.get_categories() {
            return hit;
        }

        let _flight = self.categories_flight.lock().await;
        if let Some(hit) = self.store.get_categories() {
            return hit;
        }

        let value = self.compute_categories().await;
        self.store
            .set_categories(value.clone(), self.settings.cache.categories_ttl());
        value
    }

    /// Exact-match slug lookup; `None` when absent. Negative lookups are
    /// cached like any other result.
    pub async fn get_post_by_slug(&self, slug: &str) -> Option<Arc<PostRecord>> {
        if !self.settings.cache.enabled {
            return self.compute_post_lookup(slug).await;
        }

        if let Some(hit) = self.store.get_post_by_slug(slug) {
            return hit;
        }

        let _flight = self.lookup_flight.lock().await;
        if let Some(hit) = self.store.get_post_by_slug(slug) {
            return hit;
        }

        let value = self.compute_post_lookup(slug).await;
        self.store.set_post_by_slug(
            slug.to_string(),
            value.clone(),
            self.settings.cache.lookup_ttl(),
        );
        value
    }

    /// A small promotional subset of posts.
    ///
    /// Policy: deterministic — a [`FEATURED_COUNT`]-post sample drawn with a
    /// PRNG seeded from the corpus seed, stable for the life of the corpus.
    /// Cached results therefore never re-randomize within a TTL window.
    pub async fn featured_posts(&self) -> Arc<[PostRecord]> {
        if !self.settings.cache.enabled {
            return self.compute_featured().await;
        }

        if let Some(hit) = self.store.get_featured() {
            return hit;
        }

        let _flight = self.featured_flight.lock().await;
        if let Some(hit) = self.store.get_featured() {
            return hit;
        }

        let value = self.compute_featured().await;
        self.store
            .set_featured(value.clone(), self.settings.cache.featured_ttl());
        value
    }

    /// Drop cached results covered by the given tag before their TTL expires.
    pub fn invalidate(&self, tag: CacheTag) {
        info!(?tag, "Invalidating cached catalog results");
        self.store.invalidate(tag);
    }

    async fn compute_post_list(&self, category: Option<&str>) -> Arc<[PostRecord]> {
        let delay = self.settings.latency.default_delay();
        info!(
            category = category.unwrap_or("all"),
            delay_ms = delay.as_millis() as u64,
            "Fetching blog posts"
        );
        self.simulate_latency(delay).await;

        let corpus = self.corpus().await;
        let posts: Vec<PostRecord> = match category {
            None => corpus.posts.clone(),
            Some(slug) => corpus
                .posts
                .iter()
                .filter(|post| post.category == slug)
                .cloned()
                .collect(),
        };
        Arc::from(posts)
    }

    async fn compute_categories(&self) -> Arc<[CategoryRecord]> {
        let delay = self.settings.latency.default_delay();
        info!(
            delay_ms = delay.as_millis() as u64,
            "Fetching categories"
        );
        self.simulate_latency(delay).await;

        let corpus = self.corpus().await;
        Arc::from(corpus.categories.clone())
    }

    async fn compute_post_lookup(&self, slug: &str) -> Option<Arc<PostRecord>> {
        let delay = self.settings.latency.default_delay();
        info!(
            slug,
            delay_ms = delay.as_millis() as u64,
            "Fetching blog post by slug"
        );
        self.simulate_latency(delay).await;

        let corpus = self.corpus().await;
        corpus
            .posts
            .iter()
            .find(|post| post.slug == slug)
            .cloned()
            .map(Arc::new)
    }

    async fn compute_featured(&self) -> Arc<[PostRecord]> {
        let delay = self.settings.latency.featured_delay();
        info!(
            delay_ms = delay.as_millis() as u64,
            "Fetching featured posts"
        );
        self.simulate_latency(delay).await;

        let corpus = self.corpus().await;
        Arc::from(corpus.featured_sample(FEATURED_COUNT))
    }

    async fn simulate_latency(&self, delay: Duration) {
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}
