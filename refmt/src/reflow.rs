//! Greedy line wrapping and indentation.
//!
//! Wrapping works on the text as a sequence of `char`s and only ever
//! swaps one character for another, so the wrapped output has exactly as
//! many characters as the trimmed input.

use log::{debug, trace};
use regex::{Captures, Regex};

use crate::error::Result;
use crate::style::Style;

/// Join lines that were wrapped earlier back into one paragraph.
///
/// A split character becomes a word separator when the characters on both
/// sides of it are ordinary word characters. Splits next to another split
/// or next to a separator are kept, which is how blank-line paragraph
/// breaks survive a rewrap.
///
/// Matches do not overlap. In `"a\nb\nc"` the `b` belongs to the first
/// match, so only the first split is collapsed.
pub fn collapse_splits(style: &Style, text: &str) -> Result<String> {
    style.check_separators()?;

    let split = regex::escape(style.split_char.encode_utf8(&mut [0; 4]));
    let sep = regex::escape(style.word_sep.encode_utf8(&mut [0; 4]));
    let pattern = Regex::new(&format!("([^{split}{sep}]){split}([^{split}{sep}])"))?;

    let collapsed = pattern.replace_all(text, |caps: &Captures<'_>| {
        format!("{}{}{}", &caps[1], style.word_sep, &caps[2])
    });
    Ok(collapsed.into_owned())
}

impl Style {
    /// Reflow `input` into lines no wider than `max_width` characters.
    ///
    /// Leading and trailing separators and splits are trimmed, single line
    /// breaks inside a paragraph are collapsed (see [`collapse_splits`]),
    /// and new breaks are placed greedily at the last word separator that
    /// still fits.
    ///
    /// A word wider than `max_width` is handled by `break_long_words`:
    /// when set, the character at the width limit is replaced by a split,
    /// cutting the word. Otherwise the line runs over to the next
    /// separator, or to the end of the text if there is none.
    ///
    /// A separator right after a kept split is the last one in its window
    /// when nothing else fits, so it becomes a split too and the text gains
    /// a blank line there.
    pub fn wrap(&self, input: &str) -> Result<String> {
        self.validate()?;

        let trimmed = input.trim_matches(|c: char| c == self.word_sep || c == self.split_char);
        let collapsed = collapse_splits(self, trimmed)?;

        let mut text: Vec<char> = collapsed.chars().collect();
        let breaks = self.place_breaks(&mut text);
        debug!(
            "[wrap] {} chars at width {}: {} breaks",
            text.len(),
            self.max_width,
            breaks
        );

        Ok(text.into_iter().collect())
    }

    /// Turn separators into splits until every line fits. Returns the
    /// number of breaks placed.
    fn place_breaks(&self, text: &mut [char]) -> usize {
        let len = text.len();
        let mut breaks = 0;
        let mut seek = 0;
        let mut end = self.max_width;

        while end < len {
            let window = &text[seek..end];

            // Existing line break in range: the line already fits.
            if let Some(offset) = window.iter().position(|&c| c == self.split_char) {
                seek += offset + 1;
                end = seek + self.max_width;
                continue;
            }

            let at = if let Some(offset) = window.iter().rposition(|&c| c == self.word_sep) {
                trace!("[wrap] break at {} on separator", seek + offset);
                seek + offset
            } else if self.break_long_words {
                trace!("[wrap] forced break at {}", end);
                end
            } else if let Some(offset) = text[seek..].iter().position(|&c| c == self.word_sep) {
                trace!("[wrap] overwide line, break at {}", seek + offset);
                seek + offset
            } else {
                debug!("[wrap] no separator after {}, last line left overwide", seek);
                break;
            };

            text[at] = self.split_char;
            breaks += 1;
            seek = at + 1;
            end = seek + self.max_width;
        }

        breaks
    }

    /// Prefix every line of `input` with [`Style::indent_str`].
    ///
    /// A split in the final position gets no indent after it, so text
    /// ending in a newline does not grow an indented empty line. Empty
    /// input yields the indent on its own.
    ///
    /// Indenting does not validate the style. An `indent_char` equal to
    /// `split_char` is unsupported: the output is produced, but its lines
    /// no longer separate into indent and text. [`Style::validate`]
    /// rejects such styles, and [`Style::reflow`] checks before indenting.
    pub fn indent(&self, input: &str) -> String {
        let indent = self.indent_str();

        let mut chars = input.chars();
        let Some(last) = chars.next_back() else {
            return indent;
        };

        let mut output = String::with_capacity(input.len() + indent.len());
        output.push_str(&indent);
        for ch in chars {
            output.push(ch);
            if ch == self.split_char {
                output.push_str(&indent);
            }
        }
        output.push(last);
        output
    }

    /// Wrap `input`, then indent the result.
    pub fn reflow(&self, input: &str) -> Result<String> {
        let wrapped = self.wrap(input)?;
        Ok(self.indent(&wrapped))
    }
}
