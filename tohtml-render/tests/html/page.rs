use tohtml_render::client::STYLESHEET;
use tohtml_render::{publish, render_page, PageOptions, PageSpec, PublishArtifact};

fn article(page: &str) -> &str {
    let start = page.find("<article").unwrap();
    let end = page.find("</article>").unwrap() + "</article>".len();
    &page[start..end]
}

#[test]
fn minimal_document() {
    let page = render_page("# Hi\n", &PageOptions::titled("Hello")).unwrap();

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Hello</title>"));
    assert_eq!(page.matches("<h1").count(), 1);
    assert_eq!(page.matches("<h2").count(), 0);
    assert!(page.contains(">Hi</h1>"));
}

#[test]
fn layout_nests_toc_and_article() {
    let page = render_page("# A\n\nBody.\n", &PageOptions::default()).unwrap();

    let root = page.find(r#"<div id="root"><div class="app-layout"><nav class="toc">"#);
    let container = page.find(r#"<div class="article-container"><article class="markdown-body">"#);
    assert!(root.is_some());
    assert!(container.is_some());
    assert!(root < container);
}

#[test]
fn no_headings_no_nav() {
    let page = render_page("Just a paragraph.\n", &PageOptions::default()).unwrap();

    assert!(!page.contains("<nav"));
    assert!(page.contains("window.__TOC_DATA__ = [];"));
}

#[test]
fn interactive_page_ends_with_the_script() {
    let page = render_page("# A\n## B\n", &PageOptions::default()).unwrap();

    let script = page.find("<script>").unwrap();
    assert!(script > page.find("</article>").unwrap());
    assert!(page.contains(
        r#"window.__TOC_DATA__ = [{"id":"a","text":"A","level":1},{"id":"b","text":"B","level":2}];"#
    ));
    assert!(page.contains("window.__TOC_OFFSET__ = 100;"));
    assert!(page.trim_end().ends_with("</script></body></html>"));
}

#[test]
fn static_page_has_plain_anchors_only() {
    let options = PageOptions {
        interactive: false,
        ..PageOptions::default()
    };
    let page = render_page("# A\n## B\n", &options).unwrap();

    assert!(!page.contains("<script"));
    assert!(page.contains(r##"<a href="#b" class="toc-link">B</a>"##));
}

#[test]
fn stylesheet_is_inlined_unescaped() {
    let page = render_page("", &PageOptions::default()).unwrap();
    assert!(page.contains(&format!("<style>{STYLESHEET}</style>")));
}

#[test]
fn article_markup() {
    let source = "\
# Guide

Read **this** first.

> quoted

1. one
2. two

---
";
    let page = render_page(source, &PageOptions::default()).unwrap();
    insta::assert_snapshot!(article(&page), @r#"<article class="markdown-body"><h1 id="guide">Guide</h1><p>Read <strong>this</strong> first.</p><blockquote><p>quoted</p></blockquote><ol><li>one</li><li>two</li></ol><hr></article>"#);
}

#[test]
fn publish_writes_the_same_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    let options = PageOptions::titled("Doc");

    let result = publish(PageSpec::new("# A\n", options.clone()).with_output_path(&path)).unwrap();
    assert_eq!(result.artifact, PublishArtifact::File(path.clone()));

    let written = std::fs::read_to_string(&path).unwrap();
    let rendered = render_page("# A\n", &options).unwrap();
    assert_eq!(written, rendered);
}
