//! Property-based tests for wrapping and indentation.
//!
//! These check invariants that must hold for any input:
//! 1. Wrapping never changes the number of characters after trimming
//! 2. With long words broken, no line is wider than the limit
//! 3. With long words kept, breaks only replace word separators
//! 4. Rewrapping wrapped text gives the same text back, and the same
//!    words for any mix of paragraphs and separators
//! 5. Stripping the indent from every line recovers the input

use proptest::prelude::*;
use refmt::Style;

/// Text made of short lowercase words, spaces and newlines.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z \n]{0,80}").expect("valid regex")
}

/// Words of at least two letters joined by single spaces.
fn sentence_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{2,12}", 1..24).prop_map(|words| words.join(" "))
}

fn words(text: &str) -> Vec<&str> {
    text.split([' ', '\n']).filter(|word| !word.is_empty()).collect()
}

fn style(width: usize, break_long_words: bool) -> Style {
    Style::default()
        .max_width(width)
        .break_long_words(break_long_words)
}

proptest! {
    #[test]
    fn wrap_preserves_length(text in text_strategy(), width in 1usize..30, breaking in any::<bool>()) {
        let wrapped = style(width, breaking).wrap(&text).unwrap();
        let trimmed = text.trim_matches(|c: char| c == ' ' || c == '\n');
        prop_assert_eq!(wrapped.chars().count(), trimmed.chars().count());
    }

    #[test]
    fn broken_lines_fit_width(text in text_strategy(), width in 1usize..30) {
        let wrapped = style(width, true).wrap(&text).unwrap();
        for line in wrapped.split('\n') {
            prop_assert!(line.chars().count() <= width, "line {:?} wider than {}", line, width);
        }
    }

    #[test]
    fn kept_words_are_never_split(text in sentence_strategy(), width in 1usize..30) {
        let wrapped = style(width, false).wrap(&text).unwrap();
        prop_assert_eq!(wrapped.replace('\n', " "), text.clone());

        for line in wrapped.split('\n') {
            if line.chars().count() > width {
                prop_assert!(!line.contains(' '), "overwide line {:?} holds several words", line);
            }
        }
    }

    #[test]
    fn rewrap_is_stable(text in sentence_strategy(), width in 1usize..30) {
        let style = style(width, false);
        let once = style.wrap(&text).unwrap();
        let twice = style.wrap(&once).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn rewrap_keeps_words(text in text_strategy(), width in 1usize..30, breaking in any::<bool>()) {
        let style = style(width, breaking);
        let once = style.wrap(&text).unwrap();
        let twice = style.wrap(&once).unwrap();
        prop_assert_eq!(words(&twice), words(&once));
    }

    #[test]
    fn indent_strips_back_to_input(
        text in prop::string::string_regex("[a-z\n]{0,39}[a-z]").expect("valid regex"),
        width in 0usize..6,
    ) {
        let style = Style::default().indent_width(width);
        let prefix = style.indent_str();
        let indented = style.indent(&text);

        let mut lines = Vec::new();
        for line in indented.split('\n') {
            let stripped = line.strip_prefix(prefix.as_str());
            prop_assert!(stripped.is_some(), "line {:?} is missing the indent", line);
            lines.push(stripped.unwrap_or_default());
        }
        prop_assert_eq!(lines.join("\n"), text);
    }
}
