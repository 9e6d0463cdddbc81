//! HTML back end.
//!
//! The page is built as one `markup5ever_rcdom` tree and serialized once with
//! html5ever. Element mapping for the article body:
//!
//! | Event                     | Element                                   |
//! |---------------------------|-------------------------------------------|
//! | heading                   | `<hN id>` via [`reconcile::HeadingOverrides`] |
//! | paragraph                 | `<p>`                                     |
//! | block quote               | `<blockquote>`                            |
//! | list / item               | `<ul>`, `<ol start>` / `<li>`             |
//! | task item                 | `<li class="task-list-item">` + disabled checkbox |
//! | code block                | `<pre><code class="language-x">`          |
//! | thematic break            | `<hr>`                                    |
//! | table                     | `<table>`, `<thead>`, `<tbody>`, `<tr>`, `<th>`/`<td style>` |
//! | strong / em / strike      | `<strong>` / `<em>` / `<del>`             |
//! | inline code               | `<code>`                                  |
//! | link / image              | `<a href title>` / `<img src alt title>`  |
//! | hard break                | `<br>`                                    |
//!
//! Page layout:
//!
//! ```text
//! html[lang]
//! ├── head: meta charset, meta viewport, meta generator, title, style
//! └── body
//!     ├── div#root > div.app-layout
//!     │   ├── nav.toc            (only when the document has headings)
//!     │   └── div.article-container > article.markdown-body
//!     └── script                 (interactive pages only)
//! ```

pub mod body;
pub mod dom;
pub mod page;
pub mod reconcile;
pub mod toc;

pub use page::{page_outline, render_page, render_page_with, PageOptions};
pub use reconcile::{HeadingElement, HeadingIds, HeadingOverride, HeadingOverrides};
pub use toc::{build_toc, Toc, TocEntry};
