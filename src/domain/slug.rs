//! Deterministic, human-friendly slug derivation.
//!
//! Generated titles are independent draws, so two posts can slugify to the
//! same value. The [`UniqueSlugger`] resolves collisions with monotonic
//! suffixes (`section`, `section-2`, `section-3`) processed in generation
//! order, which keeps the result reproducible for a fixed seed.

use std::collections::HashMap;

use slug::slugify;
use thiserror::Error;

/// Errors that can occur while deriving a slug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug source text is empty")]
    EmptyInput,
    #[error("failed to derive slug from `{input}`")]
    Unrepresentable { input: String },
}

/// Derive a lower-cased, URL-safe slug from human-readable text.
pub fn derive_slug(input: &str) -> Result<String, SlugError> {
    if input.trim().is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let candidate = slugify(input);
    if candidate.is_empty() {
        return Err(SlugError::Unrepresentable {
            input: input.to_string(),
        });
    }

    Ok(candidate)
}

/// Deterministically generate unique slugs within a single corpus.
///
/// Inputs processed in order receive monotonic suffixes when duplicates
/// occur.
#[derive(Default, Debug)]
pub struct UniqueSlugger {
    occurrences: HashMap<String, usize>,
}

impl UniqueSlugger {
    pub fn new() -> Self {
        Self {
            occurrences: HashMap::new(),
        }
    }

    /// Generate a slug for the provided text, ensuring uniqueness within
    /// this slugger. Returns an error when the text cannot produce a slug
    /// (empty or unrepresentable input).
    pub fn slug_for(&mut self, text: &str) -> Result<String, SlugError> {
        let base = derive_slug(text)?;
        let count = self.occurrences.entry(base.clone()).or_insert(0);
        *count += 1;

        if *count == 1 {
            Ok(base)
        } else {
            Ok(format!("{base}-{}", *count))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_slug_lowercases_and_dashes() {
        let slug = derive_slug("Composable Delivery Pipelines").expect("slug");
        assert_eq!(slug, "composable-delivery-pipelines");
    }

    #[test]
    fn derive_slug_rejects_empty_input() {
        assert_eq!(derive_slug("   "), Err(SlugError::EmptyInput));
    }

    #[test]
    fn derive_slug_rejects_unrepresentable_input() {
        assert_eq!(
            derive_slug("---"),
            Err(SlugError::Unrepresentable {
                input: "---".to_string()
            })
        );
    }

    #[test]
    fn unique_slugger_suffixes_duplicates() {
        let mut slugger = UniqueSlugger::new();

        let first = slugger.slug_for("Overview").expect("slug");
        let second = slugger.slug_for("Overview").expect("slug");
        let third = slugger.slug_for("overview").expect("slug");

        assert_eq!(first, "overview");
        assert_eq!(second, "overview-2");
        assert_eq!(third, "overview-3");
    }
}
