use markup5ever_rcdom::Handle;
use tohtml_render::html::dom::create_element;
use tohtml_render::html::{render_page, render_page_with, HeadingElement, HeadingOverrides, PageOptions};
use tohtml_render::outline::{outline, IdScheme};

fn heading_ids(page: &str) -> Vec<String> {
    let article = &page[page.find("<article").unwrap()..];
    article
        .match_indices(" id=\"")
        .map(|(start, _)| {
            let rest = &article[start + 5..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect()
}

#[test]
fn nth_rendered_heading_gets_nth_record_id() {
    let source = "# Intro\n\ntext\n\n## Details\n\n## Details\n\n### End\n";
    let records = outline(source, IdScheme::Slug);
    let page = render_page(source, &PageOptions::default()).unwrap();

    let expected: Vec<String> = records.into_iter().map(|r| r.identifier).collect();
    assert_eq!(heading_ids(&page), expected);
}

#[test]
fn fenced_hash_lines_shift_but_never_duplicate_ids() {
    // The line scanner sees "# not a heading" inside the fence; comrak does not.
    let source = "# Real\n\n```sh\n# not a heading\n```\n\n## Second\n";
    let page = render_page(source, &PageOptions::default()).unwrap();

    let ids = heading_ids(&page);
    assert_eq!(ids, vec!["real", "not-a-heading"]);
    assert!(page.contains(r##"<a href="#second" class="toc-link">Second</a>"##));
}

#[test]
fn setext_headings_get_fallback_ids() {
    let source = "# Atx\n\nSetext\n======\n";
    let page = render_page(source, &PageOptions::default()).unwrap();

    assert_eq!(heading_ids(&page), vec!["atx", "setext"]);
}

#[test]
fn random_ids_are_shared_by_toc_and_article() {
    let options = PageOptions {
        id_scheme: IdScheme::Random,
        ..PageOptions::default()
    };
    let page = render_page("# A\n## B\n", &options).unwrap();

    let ids = heading_ids(&page);
    assert_eq!(ids.len(), 2);
    for id in &ids {
        assert!(id.starts_with("h-"));
        assert!(page.contains(&format!("href=\"#{id}\"")));
    }
}

#[test]
fn custom_override_is_consulted_per_level() {
    fn numbered(heading: &HeadingElement) -> Handle {
        create_element(
            "h2",
            vec![("id", heading.id), ("class", "numbered")],
        )
    }
    let overrides = HeadingOverrides::default().with(2, numbered);
    let page = render_page_with("# A\n## B\n## C\n", &PageOptions::default(), &overrides).unwrap();

    assert!(page.contains(r#"<h1 id="a">A</h1>"#));
    assert!(page.contains(r#"<h2 id="b" class="numbered">B</h2>"#));
    assert!(page.contains(r#"<h2 id="c" class="numbered">C</h2>"#));
}

#[test]
fn sourcepos_is_passed_through() {
    let mut options = PageOptions::default();
    options.markdown.sourcepos = true;
    let page = render_page("# A\n", &options).unwrap();

    assert!(page.contains(r#"<h1 id="a" data-sourcepos="1:1-"#));
}
