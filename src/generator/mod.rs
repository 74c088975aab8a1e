//! Seed-deterministic corpus synthesis.
//!
//! [`Corpus::generate`] produces the fixed set of categories plus `count`
//! posts from a single sequentially-consumed PRNG. The draw order is part of
//! the contract: category ids first, in table order, then each post in index
//! order drawing fields as {id, category, title phrase, slug, excerpt,
//! content, author name, avatar, published date, read time, image url}.
//! Re-running with the same `(seed, count)` reproduces the corpus exactly.

pub mod lexicon;
mod rng;

use time::{Duration, OffsetDateTime, macros::datetime};
use uuid::Uuid;

use crate::domain::entities::{AuthorRef, CategoryRecord, PostRecord};
use crate::domain::slug::UniqueSlugger;

pub use rng::SeededRng;

/// Fixed category table; enumeration order is part of the generator contract.
const CATEGORY_TABLE: &[(&str, &str)] = &[
    ("Technology", "Latest in tech and innovation"),
    ("Design", "UI/UX and creative design"),
    ("Development", "Software development and programming"),
    ("Business", "Business strategy and entrepreneurship"),
    ("Marketing", "Digital marketing and growth"),
];

/// Published dates fall in the window ending at this fixed instant. Anchoring
/// at a constant rather than "now" keeps equal seeds byte-identical across
/// processes.
pub const PUBLISHED_ANCHOR: OffsetDateTime = datetime!(2025-01-01 00:00:00 UTC);

/// Width of the published-date window, in days.
pub const PUBLISHED_WINDOW_DAYS: u64 = 30;

const READ_TIME_MIN: u64 = 3;
const READ_TIME_MAX: u64 = 12;
const AVATAR_POOL_SIZE: u64 = 70;

// Stream separation for the featured sample, so it never perturbs the draws
// that shape the corpus itself.
const FEATURED_STREAM_SALT: u64 = 0x66EA_7012_ED50_57A1;

/// The fixed, immutable set of generated categories and posts for a process
/// lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    pub seed: u64,
    pub categories: Vec<CategoryRecord>,
    pub posts: Vec<PostRecord>,
}

impl Corpus {
    /// Generate a corpus of `post_count` posts across the fixed categories.
    ///
    /// Pure and total: any `u64` seed and any count (including zero) produce
    /// a valid corpus. Range validation of raw configuration input happens in
    /// the config layer before this is reached.
    pub fn generate(seed: u64, post_count: u32) -> Self {
        let mut rng = SeededRng::new(seed);

        let mut categories: Vec<CategoryRecord> = CATEGORY_TABLE
            .iter()
            .map(|(name, description)| CategoryRecord {
                id: deterministic_id(&mut rng),
                name: (*name).to_string(),
                slug: name.to_lowercase(),
                description: (*description).to_string(),
                post_count: 0,
            })
            .collect();

        let mut slugger = UniqueSlugger::new();
        let mut posts = Vec::with_capacity(post_count as usize);

        for _ in 0..post_count {
            posts.push(generate_post(&mut rng, &categories, &mut slugger));
        }

        for category in &mut categories {
            category.post_count = posts
                .iter()
                .filter(|post| post.category == category.slug)
                .count();
        }

        // Stable sort: ties on published_at keep generation order.
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        Self {
            seed,
            categories,
            posts,
        }
    }

    /// A deterministic sample of `count` distinct posts for promotional
    /// display.
    ///
    /// Drawn from a PRNG re-seeded from the corpus seed, so the subset is
    /// stable for the life of the corpus; caching it can never re-randomize
    /// within a TTL window. Returns fewer posts when the corpus is smaller
    /// than `count`.
    pub fn featured_sample(&self, count: usize) -> Vec<PostRecord> {
        let mut rng = SeededRng::new(self.seed ^ FEATURED_STREAM_SALT);
        rng.sample_distinct(self.posts.len(), count)
            .into_iter()
            .map(|index| self.posts[index].clone())
            .collect()
    }
}

fn generate_post(
    rng: &mut SeededRng,
    categories: &[CategoryRecord],
    slugger: &mut UniqueSlugger,
) -> PostRecord {
    let id = deterministic_id(rng);
    let category = rng.pick(categories);
    let phrase = lexicon::catch_phrase(rng);
    let title = format!("{phrase} in {}", category.name);
    let slug = slugger
        .slug_for(&phrase)
        .expect("generated phrase yields a slug");
    let excerpt = lexicon::paragraph(rng, 2);
    let content = lexicon::paragraphs(rng, 5);
    let author = AuthorRef {
        name: lexicon::full_name(rng),
        avatar_url: format!(
            "https://i.pravatar.cc/128?img={}",
            rng.next_in(1, AVATAR_POOL_SIZE)
        ),
    };
    let published_at = PUBLISHED_ANCHOR
        - Duration::seconds(rng.next_in(0, PUBLISHED_WINDOW_DAYS * 86_400 - 1) as i64);
    let read_time = rng.next_in(READ_TIME_MIN, READ_TIME_MAX) as u32;
    let image_url = format!("https://picsum.photos/seed/{:016x}/800/400", rng.next_u64());

    PostRecord {
        id,
        title,
        slug,
        excerpt,
        content,
        category: category.slug.clone(),
        author,
        published_at,
        read_time,
        image_url,
    }
}

/// Build a well-formed v4-shaped UUID from deterministic PRNG bytes.
fn deterministic_id(rng: &mut SeededRng) -> Uuid {
    uuid::Builder::from_random_bytes(rng.next_bytes_16()).into_uuid()
}
