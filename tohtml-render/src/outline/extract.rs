//! Line-based heading extraction.
//!
//! The extractor looks at raw Markdown one line at a time and never builds a
//! syntax tree. A line is a heading when it matches `^(#{1,6})\s+(.+)$`: one to
//! six hashes, whitespace, then text. Seven or more hashes never match.
//!
//! Because fence state is not tracked, a `# comment` line inside a fenced code
//! block is reported as a heading, and setext (`===` underlined) or indented ATX
//! headings are not reported at all. The renderer binds identifiers by position,
//! so these cases shift the pairing; [`crate::html::reconcile`] absorbs the extra
//! headings with fallback identifiers instead of failing.

use super::ids::{IdAllocator, IdScheme};
use super::normalize::strip_inline_markup;
use super::HeadingRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::Lines;

static HEADING_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern is valid"));

/// Lazy iterator over the headings of a Markdown source, in source order.
///
/// Cloning the iterator (or calling [`extract_headings`] again) restarts the scan.
#[derive(Debug, Clone)]
pub struct Headings<'a> {
    lines: Lines<'a>,
    ids: IdAllocator,
}

/// Start scanning `source` for heading lines.
pub fn extract_headings(source: &str, scheme: IdScheme) -> Headings<'_> {
    Headings {
        lines: source.lines(),
        ids: IdAllocator::new(scheme),
    }
}

/// Split a heading line into its level and raw (unnormalized) text.
pub fn match_heading_line(line: &str) -> Option<(u8, &str)> {
    let captures = HEADING_LINE.captures(line)?;
    let hashes = captures.get(1)?.as_str();
    let text = captures.get(2)?.as_str();
    Some((hashes.len() as u8, text))
}

impl Iterator for Headings<'_> {
    type Item = HeadingRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            if let Some((level, raw)) = match_heading_line(line) {
                let display_text = strip_inline_markup(raw.trim());
                let identifier = self.ids.allocate(&display_text);
                return Some(HeadingRecord {
                    identifier,
                    display_text,
                    level,
                });
            }
        }
        None
    }
}
