//! Cache invalidation tags.

/// Coarse invalidation signal an external caller can raise.
///
/// The corpus itself is immutable, so tags exist for callers that layer
/// their own refresh semantics on top of the TTL windows ("drop everything
/// derived from posts now" rather than waiting for expiry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheTag {
    /// Post lists, slug lookups, and the featured subset.
    Posts,
    /// The category listing.
    Categories,
}
