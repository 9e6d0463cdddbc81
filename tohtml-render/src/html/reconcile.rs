//! Binding extracted heading identifiers to rendered heading elements.
//!
//! The extractor and the Markdown engine each see the headings of a document in
//! source order. [`HeadingIds`] walks the extracted records with a cursor, handing
//! out the Nth identifier to the Nth rendered heading. It is created for one
//! render and dropped with it.
//!
//! When the two sides disagree (a `#` line inside a fenced code block, a setext
//! heading) the positional binding degrades gracefully: surplus rendered headings
//! get fresh identifiers that never collide with extracted ones.

use super::dom::create_element;
use crate::outline::{HeadingRecord, IdAllocator, IdScheme};
use log::debug;
use markup5ever_rcdom::Handle;

/// Per-render reconciliation context
#[derive(Debug)]
pub struct HeadingIds<'a> {
    records: &'a [HeadingRecord],
    cursor: usize,
    fallback: IdAllocator,
}

impl<'a> HeadingIds<'a> {
    pub fn new(records: &'a [HeadingRecord], scheme: IdScheme) -> Self {
        let mut fallback = IdAllocator::new(scheme);
        for record in records {
            fallback.reserve(&record.identifier);
        }
        Self {
            records,
            cursor: 0,
            fallback,
        }
    }

    /// Identifier for the next rendered heading. `text` is only used when the
    /// extracted records are exhausted.
    pub fn next_id(&mut self, text: &str) -> String {
        let id = match self.records.get(self.cursor) {
            Some(record) => record.identifier.clone(),
            None => {
                let id = self.fallback.allocate(text);
                debug!(
                    "heading #{} ({text:?}) has no extracted record, using fallback id {id:?}",
                    self.cursor
                );
                id
            }
        };
        self.cursor += 1;
        id
    }

    /// Number of headings bound so far
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Log any extracted records no rendered heading claimed.
    pub fn finish(self) {
        if self.cursor < self.records.len() {
            debug!(
                "{} extracted heading(s) were not rendered: {:?}",
                self.records.len() - self.cursor,
                self.records[self.cursor..]
                    .iter()
                    .map(|record| record.identifier.as_str())
                    .collect::<Vec<_>>()
            );
        }
    }
}

/// What a heading override gets to work with.
#[derive(Debug, Clone, Copy)]
pub struct HeadingElement<'e> {
    pub level: u8,
    pub id: &'e str,
    /// Attributes unrelated to the heading itself, passed through unchanged
    pub attrs: &'e [(String, String)],
}

/// Builds the (still empty) element for one heading
pub type HeadingOverride = fn(&HeadingElement) -> Handle;

/// Level → override dispatch table, consulted once per heading.
#[derive(Clone, Copy)]
pub struct HeadingOverrides([HeadingOverride; 6]);

impl HeadingOverrides {
    /// Replace the override for `level` (clamped to 1..=6).
    pub fn with(mut self, level: u8, render: HeadingOverride) -> Self {
        self.0[slot(level)] = render;
        self
    }

    pub fn render(&self, heading: &HeadingElement) -> Handle {
        (self.0[slot(heading.level)])(heading)
    }
}

impl Default for HeadingOverrides {
    fn default() -> Self {
        Self([anchored_heading as HeadingOverride; 6])
    }
}

impl std::fmt::Debug for HeadingOverrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadingOverrides").finish_non_exhaustive()
    }
}

fn slot(level: u8) -> usize {
    usize::from(level.clamp(1, 6)) - 1
}

/// `<hN id="…" …attrs>`
pub fn anchored_heading(heading: &HeadingElement) -> Handle {
    let tag = format!("h{}", heading.level.clamp(1, 6));
    let mut attrs = vec![("id", heading.id)];
    attrs.extend(
        heading
            .attrs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
    );
    create_element(&tag, attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::dom::serialize_node;
    use crate::outline::outline;

    #[test]
    fn ids_follow_extraction_order() {
        let records = outline("# A\n## B\n# A\n", IdScheme::Slug);
        let mut ids = HeadingIds::new(&records, IdScheme::Slug);

        assert_eq!(ids.next_id("A"), "a");
        assert_eq!(ids.next_id("B"), "b");
        assert_eq!(ids.next_id("A"), "a-1");
        assert_eq!(ids.cursor(), 3);
    }

    #[test]
    fn surplus_headings_get_fresh_ids() {
        let records = outline("# Setup\n", IdScheme::Slug);
        let mut ids = HeadingIds::new(&records, IdScheme::Slug);

        assert_eq!(ids.next_id("Setup"), "setup");
        assert_eq!(ids.next_id("Setup"), "setup-1");
        assert_eq!(ids.next_id("Other"), "other");
    }

    #[test]
    fn random_fallbacks_never_repeat_extracted_ids() {
        let records = outline("# A\n", IdScheme::Random);
        let mut ids = HeadingIds::new(&records, IdScheme::Random);

        let first = ids.next_id("A");
        let second = ids.next_id("B");
        assert_eq!(first, records[0].identifier);
        assert!(second.starts_with("h-"));
        assert_ne!(first, second);
    }

    #[test]
    fn default_override_writes_id_and_passes_attrs_through() {
        let attrs = vec![("data-sourcepos".to_string(), "1:1-1:4".to_string())];
        let heading = HeadingElement {
            level: 3,
            id: "hi",
            attrs: &attrs,
        };
        let element = HeadingOverrides::default().render(&heading);
        assert_eq!(
            serialize_node(&element).unwrap(),
            r#"<h3 id="hi" data-sourcepos="1:1-1:4"></h3>"#
        );
    }

    #[test]
    fn override_is_used_only_for_its_level() {
        fn boxed(heading: &HeadingElement) -> Handle {
            create_element("div", vec![("id", heading.id), ("class", "big")])
        }
        let overrides = HeadingOverrides::default().with(1, boxed);

        let top = overrides.render(&HeadingElement {
            level: 1,
            id: "a",
            attrs: &[],
        });
        let sub = overrides.render(&HeadingElement {
            level: 2,
            id: "b",
            attrs: &[],
        });
        assert_eq!(
            serialize_node(&top).unwrap(),
            r#"<div id="a" class="big"></div>"#
        );
        assert_eq!(serialize_node(&sub).unwrap(), r#"<h2 id="b"></h2>"#);
    }
}
