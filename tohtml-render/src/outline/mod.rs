//! Document outline: the ordered list of headings found in the Markdown source.
//!
//! The outline feeds both the table of contents and the heading identifiers in
//! the rendered article. See [`extract`] for the matching rules, [`normalize`]
//! for how display text is cleaned and [`ids`] for identifier schemes.

pub mod extract;
pub mod ids;
pub mod normalize;

pub use extract::{extract_headings, Headings};
pub use ids::{slugify, IdAllocator, IdScheme};
pub use normalize::strip_inline_markup;

use serde::Serialize;

/// One heading occurrence, in document order.
///
/// Serializes as `{ "id", "text", "level" }`, the shape the client script reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingRecord {
    #[serde(rename = "id")]
    pub identifier: String,
    #[serde(rename = "text")]
    pub display_text: String,
    pub level: u8,
}

/// Collect the whole outline of `source` at once.
pub fn outline(source: &str, scheme: IdScheme) -> Vec<HeadingRecord> {
    extract_headings(source, scheme).collect()
}
