//! # Doctree Split - Document Splitting Strategies
//!
//! Splits a [`doctree_core::Document`] into self-contained pieces along
//! semantic boundaries: heading levels, word-count targets, part counts,
//! thematic breaks, literal delimiters, or an auto-detected strategy. A tiny
//! specification language selects a strategy from command surfaces.
//!
//! Splitting partitions the source tree: every original node ends up owned
//! by exactly one output [`SplitResult`], and each split carries an
//! independent deep copy of the source metadata. Every strategy returns a
//! non-empty, 1-indexed, contiguous list — degenerate documents yield one
//! whole-document split tagged with a `reason`.
//!
//! ## Quick Start
//!
//! ```rust
//! use doctree_core::{Document, Heading, Paragraph};
//! use doctree_split::parse_split_spec;
//!
//! let doc = Document::with_children(vec![
//!     Heading::with_text(1, "Part One").unwrap().into(),
//!     Paragraph::from_text("First part body.").into(),
//!     Heading::with_text(1, "Part Two").unwrap().into(),
//!     Paragraph::from_text("Second part body.").into(),
//! ]);
//!
//! let spec = parse_split_spec("h1")?;
//! let splits = spec.apply(doc)?;
//!
//! assert_eq!(splits.len(), 2);
//! assert_eq!(splits[0].get_filename_slug(), "part-one");
//! # Ok::<(), doctree_split::SplitError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`splitter`] - the six splitting strategies
//! - [`spec`] - the split-specification mini-language
//! - [`result`] - [`SplitResult`] and filename slugs
//! - [`error`] - error types and the crate [`Result`] alias

pub mod error;
pub mod result;
pub mod spec;
pub mod splitter;

pub use error::{Result, SplitError};
pub use result::{SplitResult, MAX_SLUG_LEN};
pub use spec::{parse_split_spec, SplitSpec};
pub use splitter::{
    split_auto, split_by_break, split_by_delimiter, split_by_heading_level, split_by_parts,
    split_by_word_count, DEFAULT_AUTO_TARGET_WORDS,
};
