//! Plain text reflow utilities.
//!
//! A [`Style`] describes how text should be laid out: how wide a line may
//! be, which characters separate words and lines, and how deep to indent.
//! [`Style::wrap`] reflows a paragraph to the configured width,
//! [`Style::indent`] prefixes every line, and [`underline`] turns a line
//! into a heading.
//!
//! ```
//! use refmt::Style;
//!
//! let style = Style::default().max_width(10);
//! assert_eq!(
//!     style.wrap("the quick brown fox jumps").unwrap(),
//!     "the quick\nbrown fox\njumps"
//! );
//! ```

pub mod error;
pub mod heading;
pub mod reflow;
pub mod style;

pub use error::{Error, Result};
pub use heading::underline;
pub use reflow::collapse_splits;
pub use style::Style;
