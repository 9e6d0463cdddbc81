//! Input clean-up applied once before anything else looks at the Markdown.
//!
//! Markdown copied out of web pages or rich-text tools often arrives with HTML
//! entities already escaped. Those are turned back into plain characters so that
//! headings read correctly in both the outline and the rendered article.
//!
//! Front matter is split off here too, so that the line-based outline never
//! sees `# comment` lines that comrak would not render as headings.

/// Entity replacements, applied in order. `&amp;` comes after `&nbsp;` and before
/// the angle brackets, so `&amp;lt;` ends up as `<`.
const ENTITY_REPLACEMENTS: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
];

/// Replace the common escaped entities in `source` with their literal characters.
pub fn unescape_entities(source: &str) -> String {
    ENTITY_REPLACEMENTS
        .iter()
        .fold(source.to_string(), |text, (entity, replacement)| {
            if text.contains(entity) {
                text.replace(entity, replacement)
            } else {
                text
            }
        })
}

const FRONT_MATTER_DELIMITER: &str = "---";

/// Split off a leading `---` delimited front matter block, returning the rest.
///
/// The opening delimiter must be the very first line. Without a closing
/// delimiter nothing is removed.
pub fn strip_front_matter(source: &str) -> &str {
    let mut lines = source.split_inclusive('\n');
    match lines.next() {
        Some(first) if is_delimiter(first) => {
            let mut consumed = first.len();
            for line in lines {
                consumed += line.len();
                if is_delimiter(line) {
                    return &source[consumed..];
                }
            }
            source
        }
        _ => source,
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == FRONT_MATTER_DELIMITER
}
