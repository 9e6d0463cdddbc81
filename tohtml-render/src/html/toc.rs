//! Table of contents: outline → `<nav class="toc">`

use super::dom::{append, create_element, text_element};
use crate::outline::HeadingRecord;
use crate::scroll::ActiveHeading;
use markup5ever_rcdom::Handle;

/// One rendered TOC link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// `#<identifier>`
    pub href: String,
    pub text: String,
    pub level: u8,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toc {
    pub entries: Vec<TocEntry>,
}

/// Build the TOC for `records`, marking the entry of `active` (if any).
///
/// No headings means no navigation at all, not an empty list.
pub fn build_toc(records: &[HeadingRecord], active: &ActiveHeading) -> Option<Toc> {
    if records.is_empty() {
        return None;
    }

    let entries = records
        .iter()
        .map(|record| TocEntry {
            href: format!("#{}", record.identifier),
            text: record.display_text.clone(),
            level: record.level,
            active: active.is(&record.identifier),
        })
        .collect();

    Some(Toc { entries })
}

impl Toc {
    pub fn to_element(&self) -> Handle {
        let nav = create_element("nav", vec![("class", "toc")]);
        let list = create_element("ul", vec![("class", "toc-list")]);

        for entry in &self.entries {
            let item_class = format!("toc-item toc-level-{}", entry.level);
            let link_class = if entry.active {
                "toc-link active"
            } else {
                "toc-link"
            };

            let item = create_element("li", vec![("class", item_class.as_str())]);
            append(
                &item,
                text_element(
                    "a",
                    vec![("href", entry.href.as_str()), ("class", link_class)],
                    &entry.text,
                ),
            );
            append(&list, item);
        }

        append(&nav, list);
        nav
    }
}
