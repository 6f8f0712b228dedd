//! Error types for document splitting.
//!
//! All variants are precondition-style: the caller passed bad input, the
//! error surfaces directly at that call, and nothing is retried or downgraded
//! internally.

use thiserror::Error;

/// Error types that can occur while splitting a document.
///
/// # Examples
///
/// ```rust
/// use doctree_core::Document;
/// use doctree_split::{split_by_heading_level, SplitError};
///
/// let result = split_by_heading_level(Document::new(), 9, true);
/// assert_eq!(result.unwrap_err(), SplitError::InvalidHeadingLevel(9));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// Heading level outside 1-6 passed to heading-level splitting.
    #[error("invalid heading level {0}: must be between 1 and 6")]
    InvalidHeadingLevel(usize),

    /// Non-positive word target passed to word-count splitting.
    #[error("invalid word target {0}: must be at least 1")]
    InvalidWordTarget(usize),

    /// Non-positive part count passed to parts splitting.
    #[error("invalid part count {0}: must be at least 1")]
    InvalidPartCount(usize),

    /// Delimiter splitting invoked with an empty string.
    #[error("empty delimiter: delimiter splitting requires a non-empty string")]
    EmptyDelimiter,

    /// The split-specification mini-language rejected the input.
    ///
    /// Never partially accepted: the whole spec string is named in the
    /// message together with the expected grammar.
    #[error(
        "invalid split specification '{0}': expected h1-h6, length=N, parts=N, \
         delimiter=TEXT, break, page, chapter, or auto"
    )]
    InvalidSpec(String),
}

/// Type alias for [`Result<T, SplitError>`].
pub type Result<T> = std::result::Result<T, SplitError>;
