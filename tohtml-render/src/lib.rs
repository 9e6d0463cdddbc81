//! Markdown to a single self-contained HTML page with a table of contents
//!
//!     This crate turns one Markdown document into one HTML file: inlined stylesheet, inlined
//!     client script, no external assets. The page carries a table of contents built from the
//!     document's headings, and (in interactive mode) a small script that keeps the TOC in step
//!     with the reader's scroll position.
//!
//!     This is a pure lib: it powers tohtml-cli but never touches stdin, stdout or env vars.
//!
//! Pipeline
//!
//!     raw Markdown
//!       → preprocess        entity unescaping, then front matter removal
//!       → outline           line-level heading scan: ordered {id, text, level} records
//!       → markdown          comrak parse flattened into events
//!       → html::body        events → DOM, headings take their ids from the outline by position
//!       → html::page        head + TOC + article + script, serialized once
//!
//!     The outline and the rendered headings are produced independently and bound by order only
//!     (see html::reconcile). The line scanner knows nothing about fenced code or setext headings,
//!     so the two can disagree; surplus rendered headings then get fresh, non-colliding ids.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── preprocess.rs
//!     ├── outline                 # extract, normalize, ids
//!     ├── markdown                # comrak → events
//!     ├── html                    # dom helpers, reconcile, body, toc, page
//!     ├── client.rs               # inlined css/js, TOC data
//!     ├── scroll.rs               # scroll-sync state machine (mirrors assets/toc.js)
//!     └── publish.rs
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Subdirectories are pulled in from tests/lib.rs.
//!
//! Library Choices
//!
//!     We never parse Markdown or serialize HTML ourselves: comrak does the former, html5ever over
//!     a markup5ever_rcdom tree the latter, which also gives us escaping for free.
//!
pub mod client;
pub mod error;
pub mod html;
pub mod markdown;
pub mod outline;
pub mod preprocess;
pub mod publish;
pub mod scroll;

pub use error::BuildError;
pub use html::{page_outline, render_page, PageOptions};
pub use outline::{outline, HeadingRecord, IdScheme};
pub use publish::{publish, PageSpec, PublishArtifact, PublishResult};
