//! Underlined headings.

use std::fmt::Display;

use crate::error::{Error, Result};
use crate::style::Style;

/// Underline `text` with the first character of `fill`.
///
/// The rule is as long as the text, counted in characters, and sits on
/// the next line:
///
/// ```
/// assert_eq!(refmt::underline("-", "Title").unwrap(), "Title\n-----");
/// ```
pub fn underline(fill: &str, text: impl Display) -> Result<String> {
    underline_with(fill, text, '\n')
}

impl Style {
    /// Like [`underline`], but ends the heading line with this style's
    /// split character.
    pub fn underline(&self, fill: &str, text: impl Display) -> Result<String> {
        underline_with(fill, text, self.split_char)
    }
}

fn underline_with(fill: &str, text: impl Display, split: char) -> Result<String> {
    let fill = fill.chars().next().ok_or(Error::EmptyFill)?;
    let heading = text.to_string();
    let width = heading.chars().count();

    let mut output = String::with_capacity(heading.len() + split.len_utf8() + width * fill.len_utf8());
    output.push_str(&heading);
    output.push(split);
    output.extend(std::iter::repeat_n(fill, width));
    Ok(output)
}

/// Format a heading and underline it.
///
/// Takes the fill string followed by [`format!`] arguments:
///
/// ```
/// let heading = refmt::underline!("=", "Section {}", 2).unwrap();
/// assert_eq!(heading, "Section 2\n=========");
/// ```
#[macro_export]
macro_rules! underline {
    ($fill:expr, $($arg:tt)+) => {
        $crate::heading::underline($fill, ::std::format!($($arg)+))
    };
}
