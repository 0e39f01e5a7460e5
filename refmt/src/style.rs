//! Layout configuration shared by the reflow and heading operations.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How text is wrapped and indented.
///
/// A `Style` is a plain value: copy it, share it, or embed it in a larger
/// config file. Fields missing from a deserialized style take their
/// [`Default`] values.
///
/// Deserialization does not validate. Operations that depend on the
/// width or separators call [`Style::validate`] before doing any work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Number of indent characters to prepend to each line.
    pub indent_width: usize,

    /// Character the indent is filled with. Must differ from `split_char`.
    pub indent_char: char,

    /// Maximum line width in characters, not counting the indent.
    pub max_width: usize,

    /// Line terminator, usually a newline.
    pub split_char: char,

    /// Word separator, usually a space.
    pub word_sep: char,

    /// When a single word is wider than `max_width`, split it at the
    /// width limit instead of letting the line run over.
    pub break_long_words: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            indent_width: 4,
            indent_char: ' ',
            max_width: 76,
            split_char: '\n',
            word_sep: ' ',
            break_long_words: false,
        }
    }
}

impl Style {
    /// Create a default style with the given line width.
    ///
    /// Fails if `max_width` is zero.
    pub fn new(max_width: usize) -> Result<Self> {
        let style = Self::default().max_width(max_width);
        style.validate()?;
        Ok(style)
    }

    /// Set the indent width.
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the indent fill character.
    pub fn indent_char(mut self, ch: char) -> Self {
        self.indent_char = ch;
        self
    }

    /// Set the maximum line width.
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set the line terminator.
    pub fn split_char(mut self, ch: char) -> Self {
        self.split_char = ch;
        self
    }

    /// Set the word separator.
    pub fn word_sep(mut self, ch: char) -> Self {
        self.word_sep = ch;
        self
    }

    /// Set the long word policy.
    pub fn break_long_words(mut self, enabled: bool) -> Self {
        self.break_long_words = enabled;
        self
    }

    /// Check that this style can be used for wrapping and indenting.
    pub fn validate(&self) -> Result<()> {
        if self.max_width == 0 {
            return Err(Error::invalid_width(self.max_width));
        }
        self.check_separators()?;
        if self.indent_char == self.split_char {
            return Err(Error::indent_conflict(self.indent_char));
        }
        Ok(())
    }

    /// The subset of [`Style::validate`] that only looks at the word
    /// separator and split character.
    pub(crate) fn check_separators(&self) -> Result<()> {
        if self.word_sep == self.split_char {
            return Err(Error::separator_conflict(self.word_sep));
        }
        Ok(())
    }

    /// The prefix [`Style::indent`] puts in front of every line.
    pub fn indent_str(&self) -> String {
        std::iter::repeat_n(self.indent_char, self.indent_width).collect()
    }
}
