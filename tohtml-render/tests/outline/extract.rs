use tohtml_render::outline::{extract_headings, outline, strip_inline_markup, IdScheme};

#[test]
fn levels_and_texts_follow_the_source() {
    let records = outline("# A\n## B\n### C\n", IdScheme::Slug);

    let levels: Vec<u8> = records.iter().map(|r| r.level).collect();
    let texts: Vec<&str> = records.iter().map(|r| r.display_text.as_str()).collect();
    assert_eq!(levels, vec![1, 2, 3]);
    assert_eq!(texts, vec!["A", "B", "C"]);
}

#[test]
fn record_count_matches_heading_lines() {
    let source = "\
# One
text
## Two
####### not a heading
#nospace
    # indented
###### Six
";
    let records = outline(source, IdScheme::Slug);
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].level, 6);
}

#[test]
fn display_text_is_normalized() {
    assert_eq!(
        strip_inline_markup("**Bold** and _em_ and `code` and [link](http://x)"),
        "Bold and em and code and link"
    );
    let records = outline("## **Bold** and [link](http://x)\n", IdScheme::Slug);
    assert_eq!(records[0].display_text, "Bold and link");
}

#[test]
fn slug_outlines_are_deterministic() {
    let source = "# Intro\n## Intro\n## Setup & Usage\n";
    assert_eq!(
        outline(source, IdScheme::Slug),
        outline(source, IdScheme::Slug)
    );
    let ids: Vec<String> = outline(source, IdScheme::Slug)
        .into_iter()
        .map(|r| r.identifier)
        .collect();
    assert_eq!(ids, vec!["intro", "intro-1", "setup-usage"]);
}

#[test]
fn random_outlines_agree_on_everything_but_ids() {
    let source = "# A\n## B\n";
    let first = outline(source, IdScheme::Random);
    let second = outline(source, IdScheme::Random);

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.level, b.level);
        assert_eq!(a.display_text, b.display_text);
        assert!(a.identifier.starts_with("h-"));
        assert_eq!(a.identifier.len(), 11);
    }
}

#[test]
fn extraction_is_lazy_and_restartable() {
    let mut headings = extract_headings("# A\n## B\n", IdScheme::Slug);
    let restart = headings.clone();

    assert_eq!(headings.next().map(|r| r.identifier), Some("a".to_string()));
    assert_eq!(restart.count(), 2);
    assert_eq!(headings.next().map(|r| r.identifier), Some("b".to_string()));
    assert!(headings.next().is_none());
}

#[test]
fn records_serialize_as_id_text_level() {
    let records = outline("# Hi\n", IdScheme::Slug);
    let json = serde_json::to_value(&records).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "id": "hi", "text": "Hi", "level": 1 }])
    );
}
