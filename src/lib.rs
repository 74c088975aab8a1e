//! brezza — deterministic content catalog for blog front-ends.
//!
//! Synthesizes a fixed corpus of categories and posts from a numeric seed,
//! then serves read-only queries over it behind artificial latency and a TTL
//! object cache. It stands in for a real content API during front-end work:
//! loading states stay realistic, while the data underneath is reproducible
//! byte for byte across runs and processes.
//!
//! ```no_run
//! use brezza::{CatalogService, CatalogSettings};
//!
//! # async fn demo() -> Result<(), brezza::domain::error::CatalogError> {
//! let service = CatalogService::new(CatalogSettings::default())?;
//! let posts = service.list_posts(None).await;
//! let categories = service.list_categories().await;
//! assert_eq!(
//!     categories.iter().map(|c| c.post_count).sum::<usize>(),
//!     posts.len(),
//! );
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cache;
pub mod config;
pub mod domain;
pub mod generator;
pub mod telemetry;

pub use application::CatalogService;
pub use cache::CacheTag;
pub use config::CatalogSettings;
pub use generator::Corpus;
