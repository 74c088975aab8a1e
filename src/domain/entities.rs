//! Catalog entities produced by the generator.
//!
//! Records serialize with camelCase field names and RFC 3339 timestamps so a
//! caller exposing them over a network boundary gets the expected JSON shape
//! without an extra mapping layer.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Author attribution embedded in each post. A value object, not a shared
/// entity: two posts by the same name carry independent copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRef {
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    /// Number of posts whose `category` field references this slug. Derived
    /// at generation time; equals the actual count by construction.
    pub post_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    /// Slug of the owning category. Plain string equality, no foreign key.
    pub category: String,
    pub author: AuthorRef,
    #[serde(with = "time::serde::rfc3339")]
    pub published_at: OffsetDateTime,
    /// Estimated reading time in minutes.
    pub read_time: u32,
    pub image_url: String,
}
