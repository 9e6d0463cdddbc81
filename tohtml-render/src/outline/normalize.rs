//! Heading text normalization.
//!
//! Turns the raw text of a heading line into the string shown in the table of
//! contents. Inline markup is removed and its inner text kept:
//!
//! | Markup               | Result |
//! |----------------------|--------|
//! | `**bold**`           | `bold` |
//! | `*italic*`           | `italic` |
//! | `` `code` ``         | `code` |
//! | `[text](url)`        | `text` |
//! | `~~strike~~`         | `strike` |
//! | `__underline__`      | `underline` |
//! | `_italic_`           | `italic` |
//!
//! The rules run in the order of the table. Double markers always run before
//! their single-character counterparts, otherwise `**x**` would be eaten as two
//! empty italics.

use once_cell::sync::Lazy;
use regex::Regex;

static RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\*\*(.*?)\*\*",
        r"\*(.*?)\*",
        r"`(.*?)`",
        r"\[(.*?)\]\(.*?\)",
        r"~~(.*?)~~",
        r"__(.*?)__",
        r"_(.*?)_",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("normalization patterns are valid"))
    .collect()
});

/// Strip inline Markdown markup from heading text, keeping the inner text.
///
/// Passes repeat until nothing changes: removing one marker can pair up another
/// (`~_~x~_~` becomes `~~x~~`). Every replacement shortens the text, so this ends.
pub fn strip_inline_markup(raw: &str) -> String {
    let mut text = raw.to_string();
    loop {
        let next = strip_pass(&text);
        if next == text {
            break;
        }
        text = next;
    }
    text.trim().to_string()
}

fn strip_pass(text: &str) -> String {
    RULES.iter().fold(text.to_string(), |text, rule| {
        rule.replace_all(&text, "$1").into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_every_supported_marker() {
        assert_eq!(
            strip_inline_markup("**Bold** and _em_ and `code` and [link](http://x)"),
            "Bold and em and code and link"
        );
        assert_eq!(strip_inline_markup("~~old~~ __new__ *it*"), "old new it");
    }

    #[test]
    fn double_markers_win_over_single_ones() {
        assert_eq!(strip_inline_markup("**strong**"), "strong");
        assert_eq!(strip_inline_markup("__under__"), "under");
        assert_eq!(strip_inline_markup("***both***"), "both");
    }

    #[test]
    fn link_keeps_only_its_label() {
        assert_eq!(
            strip_inline_markup("See [the docs](https://example.com/a_b) now"),
            "See the docs now"
        );
    }

    #[test]
    fn unmatched_markers_are_kept() {
        assert_eq!(strip_inline_markup("2 * 3 = 6"), "2 * 3 = 6");
        assert_eq!(strip_inline_markup("snake_case"), "snake_case");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(strip_inline_markup("  `x`  "), "x");
        assert_eq!(strip_inline_markup("** **"), "");
    }

    #[test]
    fn markers_paired_up_by_a_later_rule_are_stripped() {
        assert_eq!(strip_inline_markup("~_~old~_~"), "old");
        assert_eq!(strip_inline_markup("*_*x*_*"), "x");
    }

    #[test]
    fn already_plain_text_is_unchanged() {
        assert_eq!(strip_inline_markup("Getting started"), "Getting started");
    }

    fn wrap(word: String, marker: usize) -> String {
        match marker {
            0 => format!("**{word}**"),
            1 => format!("*{word}*"),
            2 => format!("`{word}`"),
            3 => format!("[{word}](https://example.com/x)"),
            4 => format!("~~{word}~~"),
            5 => format!("__{word}__"),
            6 => format!("_{word}_"),
            7 => format!("~{word}~"),
            _ => word,
        }
    }

    /// A word wrapped in up to four layers of markers, innermost first.
    fn decorated_word() -> impl Strategy<Value = String> {
        (
            "[a-z0-9]{1,8}",
            prop::collection::vec(0usize..9, 0..5),
        )
            .prop_map(|(word, markers)| markers.into_iter().fold(word, wrap))
    }

    proptest! {
        #[test]
        fn normalizing_is_idempotent(words in prop::collection::vec(decorated_word(), 1..6)) {
            let heading = words.join(" ");
            let once = strip_inline_markup(&heading);
            let twice = strip_inline_markup(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
