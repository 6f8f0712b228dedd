//! Error types for document tree construction.
//!
//! All errors in this crate are precondition-style: they signal bad input at
//! the boundary of the call that received it and are never caught or
//! downgraded internally. Malformed trees that slip past construction-time
//! validation are a programmer-error class handled with debug assertions,
//! not with recoverable errors.

use thiserror::Error;

/// Error types that can occur while building document trees.
///
/// # Examples
///
/// ```rust
/// use doctree_core::{CoreError, Heading, Node};
///
/// match Heading::new(9, vec![Node::text("Too deep")]) {
///     Err(CoreError::InvalidHeadingLevel(level)) => assert_eq!(level, 9),
///     _ => panic!("expected InvalidHeadingLevel"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Heading level outside the valid range of 1 to 6.
    ///
    /// Raised by [`Heading::new`](crate::Heading::new); every consumer of
    /// heading levels relies on this invariant having been enforced at
    /// construction.
    #[error("invalid heading level {0}: must be between 1 and 6")]
    InvalidHeadingLevel(usize),
}

/// Type alias for [`Result<T, CoreError>`].
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_heading_level_display() {
        let error = CoreError::InvalidHeadingLevel(0);
        assert_eq!(
            format!("{error}"),
            "invalid heading level 0: must be between 1 and 6"
        );
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn inner() -> Result<()> {
            Err(CoreError::InvalidHeadingLevel(7))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        match outer() {
            Err(CoreError::InvalidHeadingLevel(level)) => assert_eq!(level, 7),
            Ok(()) => panic!("expected error to propagate"),
        }
    }
}
