//! Whole-page assembly

use super::body::render_body;
use super::dom::{append, create_element, serialize_node, text_element};
use super::reconcile::{HeadingIds, HeadingOverrides};
use super::toc::build_toc;
use crate::client::{toc_script, STYLESHEET};
use crate::error::BuildError;
use crate::markdown::{parse_to_events, MarkdownOptions};
use crate::outline::{outline, HeadingRecord, IdScheme};
use crate::preprocess::{strip_front_matter, unescape_entities};
use crate::scroll::{ActiveHeading, DEFAULT_SCROLL_OFFSET};
use log::debug;
use markup5ever_rcdom::Handle;

/// Resolved knobs for one page build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    /// Value of `<html lang>`
    pub lang: String,
    /// Emit the scroll-sync script. Off for static/print pages.
    pub interactive: bool,
    pub scroll_offset: u32,
    pub id_scheme: IdScheme,
    pub markdown: MarkdownOptions,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Document".to_string(),
            lang: "en".to_string(),
            interactive: true,
            scroll_offset: DEFAULT_SCROLL_OFFSET,
            id_scheme: IdScheme::default(),
            markdown: MarkdownOptions::default(),
        }
    }
}

impl PageOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// The outline a page built from `markdown` with `options` would carry.
///
/// Applies the same pre-processing as [`render_page`], so ids and texts match the
/// page's TOC data.
pub fn page_outline(markdown: &str, options: &PageOptions) -> Vec<HeadingRecord> {
    let source = prepare_source(markdown, &options.markdown);
    outline(&source, options.id_scheme)
}

/// Entity unescaping, then front matter removal when enabled. Both the
/// extractor and comrak read the result.
fn prepare_source(markdown: &str, options: &MarkdownOptions) -> String {
    let source = unescape_entities(markdown);
    if options.front_matter {
        strip_front_matter(&source).to_string()
    } else {
        source
    }
}

/// Render `markdown` into a complete HTML document.
pub fn render_page(markdown: &str, options: &PageOptions) -> Result<String, BuildError> {
    render_page_with(markdown, options, &HeadingOverrides::default())
}

/// [`render_page`] with a custom heading override table.
pub fn render_page_with(
    markdown: &str,
    options: &PageOptions,
    overrides: &HeadingOverrides,
) -> Result<String, BuildError> {
    let source = prepare_source(markdown, &options.markdown);

    let records = outline(&source, options.id_scheme);
    debug!(
        "extracted {} heading(s) with {} ids",
        records.len(),
        options.id_scheme
    );

    // Front matter is already gone; comrak must not strip a second block.
    let markdown_options = MarkdownOptions {
        front_matter: false,
        ..options.markdown.clone()
    };
    let events = parse_to_events(&source, &markdown_options);
    let mut ids = HeadingIds::new(&records, options.id_scheme);
    let article = render_body(&events, &mut ids, overrides)?;
    ids.finish();

    let head = create_element("head", vec![]);
    append(&head, create_element("meta", vec![("charset", "utf-8")]));
    append(
        &head,
        create_element(
            "meta",
            vec![
                ("name", "viewport"),
                ("content", "width=device-width, initial-scale=1"),
            ],
        ),
    );
    append(
        &head,
        create_element("meta", vec![("name", "generator"), ("content", "tohtml")]),
    );
    append(&head, text_element("title", vec![], &options.title));
    append(&head, text_element("style", vec![], STYLESHEET));

    let layout = create_element("div", vec![("class", "app-layout")]);
    if let Some(toc) = build_toc(&records, &ActiveHeading::default()) {
        append(&layout, toc.to_element());
    }
    append(&layout, article_container(article));

    let root = create_element("div", vec![("id", "root")]);
    append(&root, layout);

    let body = create_element("body", vec![]);
    append(&body, root);
    if options.interactive {
        let script = toc_script(&records, options.scroll_offset)?;
        append(&body, text_element("script", vec![], &script));
    }

    let html = create_element("html", vec![("lang", options.lang.as_str())]);
    append(&html, head);
    append(&html, body);

    let serialized = serialize_node(&html)?;
    Ok(format!("<!DOCTYPE html>\n{serialized}\n"))
}

fn article_container(article: Handle) -> Handle {
    let container = create_element("div", vec![("class", "article-container")]);
    append(&container, article);
    container
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_has_doctype_title_and_lang() {
        let page = render_page("# Hi\n", &PageOptions::titled("Hello")).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(page.contains("<title>Hello</title>"));
        assert!(page.contains(r#"<meta name="generator" content="tohtml">"#));
    }

    #[test]
    fn title_is_escaped() {
        let page = render_page("", &PageOptions::titled("A & <B>")).unwrap();
        assert!(page.contains("<title>A &amp; &lt;B&gt;</title>"));
    }

    #[test]
    fn static_pages_have_no_script() {
        let options = PageOptions {
            interactive: false,
            ..PageOptions::default()
        };
        let page = render_page("# Hi\n", &options).unwrap();
        assert!(!page.contains("<script"));
        assert!(page.contains(r##"<a href="#hi" class="toc-link">Hi</a>"##));
    }

    #[test]
    fn front_matter_comments_do_not_shift_heading_ids() {
        let source = "---\n# draft notes\ntitle: x\n---\n\n# Intro\n\n## Usage\n";
        let page = render_page(source, &PageOptions::default()).unwrap();

        assert!(page.contains(r#"<h1 id="intro">Intro</h1>"#));
        assert!(page.contains(r#"<h2 id="usage">Usage</h2>"#));
        assert!(!page.contains("draft-notes"));
        assert!(!page.contains("title: x"));
    }

    #[test]
    fn front_matter_is_content_when_disabled() {
        let mut options = PageOptions::default();
        options.markdown.front_matter = false;
        let records = page_outline("---\n# draft notes\n---\n# Intro\n", &options);

        let ids: Vec<&str> = records.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, vec!["draft-notes", "intro"]);
    }

    #[test]
    fn outline_matches_page_preprocessing() {
        let records = page_outline("# Fish &amp; Chips\n", &PageOptions::default());
        assert_eq!(records[0].display_text, "Fish & Chips");
        assert_eq!(records[0].identifier, "fish-chips");
    }

    #[test]
    fn entities_are_unescaped_before_rendering() {
        let page = render_page("Fish &amp; chips\n", &PageOptions::default()).unwrap();
        assert!(page.contains("<p>Fish &amp; chips</p>"));
    }
}
