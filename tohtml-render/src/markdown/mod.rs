//! Markdown front end.
//!
//! # Library Choice
//!
//! Parsing is delegated to `comrak`, a CommonMark + GFM implementation. We only
//! walk its syntax tree and flatten it into [`events::Event`]s; the HTML side
//! ([`crate::html`]) never sees comrak types.
//!
//! Enabled extensions: tables, strikethrough, autolinks, task lists and
//! (optionally) `---` delimited front matter, which is dropped from the output.
//! Raw HTML blocks and inline HTML are dropped as well.

pub mod events;
pub mod parser;

pub use events::{CellAlignment, Event, InlineContent};
pub use parser::parse_to_events;

/// Knobs for the Markdown front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Strip a leading `---` delimited front matter block
    pub front_matter: bool,
    /// Annotate headings with `data-sourcepos="line:col-line:col"`
    pub sourcepos: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            front_matter: true,
            sourcepos: false,
        }
    }
}
