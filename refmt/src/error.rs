//! Error types

/// Error type for style validation and formatting operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The line width is zero, so no text could ever fit on a line.
    #[error("Invalid max width {width}: must be at least 1")]
    InvalidWidth { width: usize },

    /// The word separator and the split character are the same character.
    #[error("Word separator and split character are both {ch:?}")]
    SeparatorConflict { ch: char },

    /// The indent is filled with the split character, so indented lines
    /// could not be told apart from their indent.
    #[error("Indent character and split character are both {ch:?}")]
    IndentConflict { ch: char },

    /// An underline was requested with no fill character.
    #[error("Underline fill must contain at least one character")]
    EmptyFill,

    /// The line-collapsing pattern could not be built.
    #[error("Invalid collapse pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// Creates a new invalid width error.
    pub fn invalid_width(width: usize) -> Self {
        Self::InvalidWidth { width }
    }

    /// Creates a new separator conflict error.
    pub fn separator_conflict(ch: char) -> Self {
        Self::SeparatorConflict { ch }
    }

    /// Creates a new indent conflict error.
    pub fn indent_conflict(ch: char) -> Self {
        Self::IndentConflict { ch }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
