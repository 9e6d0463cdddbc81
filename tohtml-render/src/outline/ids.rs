//! Heading identifier generation.
//!
//! Every heading gets an identifier that is unique within the page and safe to
//! use as a fragment (`#id`). Two schemes exist:
//!
//! - [`IdScheme::Slug`]: derived from the display text (`"Getting Started"` →
//!   `getting-started`). Duplicates get `-1`, `-2`, … suffixes. Rebuilding the
//!   same document yields the same identifiers, so output can be cached and diffed.
//! - [`IdScheme::Random`]: an `h-` prefix plus nine random characters, independent
//!   of the heading text. Identifiers change on every build.

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Used when a heading has no characters that survive slugification.
const EMPTY_SLUG: &str = "section";
const RANDOM_PREFIX: &str = "h-";
const RANDOM_LEN: usize = 9;

/// How heading identifiers are produced.
///
/// `Random` is the original heading-id behavior: opaque tokens that ignore the
/// heading text and differ on every build. `Slug` is the default because its
/// output is stable across builds; select `random` to get the original ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    #[default]
    Slug,
    Random,
}

impl IdScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            IdScheme::Slug => "slug",
            IdScheme::Random => "random",
        }
    }
}

impl fmt::Display for IdScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdScheme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "slug" => Ok(IdScheme::Slug),
            "random" => Ok(IdScheme::Random),
            other => Err(format!(
                "unknown id scheme '{other}' (expected 'slug' or 'random')"
            )),
        }
    }
}

/// Lowercase `text` and collapse every run of characters that are not
/// alphanumeric (or `_`) into a single hyphen.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() || ch == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Hands out identifiers for one page, never the same one twice.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    scheme: IdScheme,
    used: HashSet<String>,
}

impl IdAllocator {
    pub fn new(scheme: IdScheme) -> Self {
        Self {
            scheme,
            used: HashSet::new(),
        }
    }

    pub fn scheme(&self) -> IdScheme {
        self.scheme
    }

    /// Mark an identifier as taken without generating it here.
    pub fn reserve(&mut self, id: &str) {
        self.used.insert(id.to_string());
    }

    /// Produce a fresh identifier for a heading with the given display text.
    pub fn allocate(&mut self, text: &str) -> String {
        let id = match self.scheme {
            IdScheme::Slug => self.next_slug(text),
            IdScheme::Random => self.next_random(),
        };
        self.used.insert(id.clone());
        id
    }

    fn next_slug(&self, text: &str) -> String {
        let base = slugify(text);
        let base = if base.is_empty() {
            EMPTY_SLUG.to_string()
        } else {
            base
        };

        if !self.used.contains(&base) {
            return base;
        }

        let mut counter = 1;
        loop {
            let candidate = format!("{base}-{counter}");
            if !self.used.contains(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    fn next_random(&self) -> String {
        loop {
            let token = uuid::Uuid::new_v4().simple().to_string();
            let candidate = format!("{RANDOM_PREFIX}{}", &token[..RANDOM_LEN]);
            if !self.used.contains(&candidate) {
                return candidate;
            }
        }
    }
}
