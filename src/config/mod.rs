//! Configuration layer: typed settings with layered precedence (file → env).
//!
//! Settings load from an optional TOML file with a `BREZZA_`-prefixed
//! environment overlay, deserialize into a raw form, then validate into the
//! typed [`CatalogSettings`]. Range problems in generator input surface as
//! [`CatalogError::InvalidArgument`] and are fatal at startup.

use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::cache::CacheConfig;
use crate::domain::error::CatalogError;

const LOCAL_CONFIG_BASENAME: &str = "brezza";
const ENV_PREFIX: &str = "BREZZA";
const ENV_SEPARATOR: &str = "__";

const DEFAULT_SEED: i64 = 123;
const DEFAULT_POST_COUNT: i64 = 12;
const DEFAULT_DELAY_MS: u64 = 250;
const DEFAULT_FEATURED_DELAY_MS: u64 = 1500;

/// Upper bound on the generated post count. The corpus lives in memory for
/// the process lifetime, so runaway counts are treated as configuration
/// mistakes rather than something to silently satisfy.
pub const MAX_POST_COUNT: u32 = 10_000;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Validated settings for the catalog service.
#[derive(Debug, Clone, Default)]
pub struct CatalogSettings {
    pub generator: GeneratorSettings,
    pub latency: LatencySettings,
    pub cache: CacheConfig,
}

/// Seed and corpus size for the generator.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorSettings {
    pub seed: u64,
    pub post_count: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED as u64,
            post_count: DEFAULT_POST_COUNT as u32,
        }
    }
}

impl GeneratorSettings {
    /// Range check for programmatic construction paths that bypass
    /// [`CatalogSettings::load`].
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.post_count > MAX_POST_COUNT {
            return Err(CatalogError::invalid_argument(format!(
                "post_count must be at most {MAX_POST_COUNT}, got {}",
                self.post_count
            )));
        }
        Ok(())
    }
}

/// Artificial latency applied to uncached access-layer calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LatencySettings {
    /// Delay for post lists, category listings, and slug lookups.
    pub default_ms: u64,
    /// Delay for the featured subset.
    pub featured_ms: u64,
}

impl Default for LatencySettings {
    fn default() -> Self {
        Self {
            default_ms: DEFAULT_DELAY_MS,
            featured_ms: DEFAULT_FEATURED_DELAY_MS,
        }
    }
}

impl LatencySettings {
    pub fn default_delay(&self) -> Duration {
        Duration::from_millis(self.default_ms)
    }

    pub fn featured_delay(&self) -> Duration {
        Duration::from_millis(self.featured_ms)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    generator: RawGeneratorSettings,
    latency: LatencySettings,
    cache: CacheConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawGeneratorSettings {
    seed: i64,
    post_count: i64,
}

impl Default for RawGeneratorSettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            post_count: DEFAULT_POST_COUNT,
        }
    }
}

impl RawSettings {
    fn validated(self) -> Result<CatalogSettings, CatalogError> {
        if self.generator.post_count < 0 {
            return Err(CatalogError::invalid_argument(format!(
                "post_count must be non-negative, got {}",
                self.generator.post_count
            )));
        }
        if self.generator.post_count > i64::from(MAX_POST_COUNT) {
            return Err(CatalogError::invalid_argument(format!(
                "post_count must be at most {MAX_POST_COUNT}, got {}",
                self.generator.post_count
            )));
        }

        Ok(CatalogSettings {
            generator: GeneratorSettings {
                // Two's-complement cast: negative seeds are accepted and map
                // onto the full u64 seed space.
                seed: self.generator.seed as u64,
                post_count: self.generator.post_count as u32,
            },
            latency: self.latency,
            cache: self.cache,
        })
    }
}

impl CatalogSettings {
    /// Load settings from an optional TOML file layered under the
    /// environment overlay (`BREZZA_GENERATOR__SEED=7`, etc.).
    ///
    /// Without an explicit path, a `brezza.toml` in the working directory is
    /// used when present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        builder = match config_file {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false)),
        };

        let raw: RawSettings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
            .build()?
            .try_deserialize()?;

        Ok(raw.validated()?)
    }

    /// Convenience constructor for tests and embedded use: defaults
    /// everywhere except the generator inputs.
    pub fn with_generator(seed: u64, post_count: u32) -> Self {
        Self {
            generator: GeneratorSettings { seed, post_count },
            ..Default::default()
        }
    }
}
