//! Fixed vocabulary tables and phrase builders.
//!
//! The stand-in for a faker library: headline phrases, filler prose, and
//! person names assembled from static word tables. Builders draw from the
//! caller's [`SeededRng`], so output is reproducible for a fixed seed.

use super::rng::SeededRng;

const PHRASE_OPENERS: &[&str] = &[
    "Composable",
    "Adaptive",
    "Resilient",
    "Ergonomic",
    "Scalable",
    "Incremental",
    "Declarative",
    "Frictionless",
    "Observable",
    "Modular",
    "Sustainable",
    "Pragmatic",
    "Asynchronous",
    "Portable",
    "Transparent",
    "Distributed",
];

const PHRASE_QUALITIES: &[&str] = &[
    "delivery",
    "content",
    "feedback",
    "onboarding",
    "publishing",
    "growth",
    "migration",
    "review",
    "discovery",
    "automation",
    "measurement",
    "collaboration",
    "prototyping",
    "localization",
    "retention",
    "testing",
];

const PHRASE_SUBJECTS: &[&str] = &[
    "pipelines",
    "workflows",
    "playbooks",
    "roadmaps",
    "interfaces",
    "strategies",
    "patterns",
    "toolchains",
    "handoffs",
    "experiments",
    "campaigns",
    "architectures",
    "rituals",
    "dashboards",
    "blueprints",
    "loops",
];

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "tempor",
    "incididunt", "labore", "dolore", "magna", "aliqua", "enim", "minim", "veniam", "quis",
    "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip", "commodo", "consequat",
    "duis", "aute", "irure", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "proident", "culpa", "officia", "deserunt",
    "mollit", "anim", "laborum",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Bruno", "Carla", "Dmitri", "Elena", "Felix", "Greta", "Hugo", "Ingrid", "Jonas",
    "Katya", "Luca", "Mira", "Nadia", "Oscar", "Petra", "Quentin", "Rosa", "Stefan", "Tilda",
];

const LAST_NAMES: &[&str] = &[
    "Almeida",
    "Bergström",
    "Castellano",
    "Dufresne",
    "Eriksen",
    "Fontaine",
    "Gallo",
    "Hartmann",
    "Ivanova",
    "Janssen",
    "Kowalski",
    "Lindqvist",
    "Moreau",
    "Novak",
    "Okafor",
    "Petrov",
    "Quiroga",
    "Rossi",
    "Silva",
    "Tanaka",
];

/// A three-word headline phrase, e.g. "Composable delivery pipelines".
pub fn catch_phrase(rng: &mut SeededRng) -> String {
    format!(
        "{} {} {}",
        rng.pick(PHRASE_OPENERS),
        rng.pick(PHRASE_QUALITIES),
        rng.pick(PHRASE_SUBJECTS),
    )
}

/// One filler sentence of 8 to 14 words, capitalized and terminated.
pub fn sentence(rng: &mut SeededRng) -> String {
    let word_count = rng.next_in(8, 14) as usize;
    let mut out = String::new();

    for index in 0..word_count {
        let word = *rng.pick(LOREM_WORDS);
        if index == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push(' ');
            out.push_str(word);
        }
    }

    out.push('.');
    out
}

/// A paragraph of `sentences` filler sentences.
pub fn paragraph(rng: &mut SeededRng, sentences: usize) -> String {
    let mut parts = Vec::with_capacity(sentences);
    for _ in 0..sentences {
        parts.push(sentence(rng));
    }
    parts.join(" ")
}

/// `count` paragraphs of 3 to 5 sentences each, separated by blank lines.
pub fn paragraphs(rng: &mut SeededRng, count: usize) -> String {
    let mut parts = Vec::with_capacity(count);
    for _ in 0..count {
        let sentences = rng.next_in(3, 5) as usize;
        parts.push(paragraph(rng, sentences));
    }
    parts.join("\n\n")
}

/// A full person name drawn from the fixed name tables.
pub fn full_name(rng: &mut SeededRng) -> String {
    format!("{} {}", rng.pick(FIRST_NAMES), rng.pick(LAST_NAMES))
}
