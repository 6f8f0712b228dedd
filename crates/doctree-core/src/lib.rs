//! # Doctree Core - Format-Agnostic Document Tree
//!
//! The shared core of a multi-format document converter: a universal
//! document tree, visitor-based traversal dispatch, and the structural
//! algorithms reused by every format-specific converter and renderer.
//!
//! Format backends build [`Document`] trees out of [`Node`] variants;
//! renderers consume them through the [`visit::NodeVisitor`] protocol. This
//! crate performs no I/O and knows no serialized file format - persistence
//! belongs to the converters.
//!
//! ## Quick Start
//!
//! ```rust
//! use doctree_core::{get_all_sections, Document, Heading, Paragraph};
//!
//! let mut doc = Document::new();
//! doc.set_title("Survey");
//! doc.push(Heading::with_text(1, "Methods").unwrap().into());
//! doc.push(Paragraph::from_text("We measured twice.").into());
//! doc.push(Heading::with_text(1, "Results").unwrap().into());
//! doc.push(Paragraph::from_text("Both readings agreed.").into());
//!
//! let sections = get_all_sections(&doc, 1, 6);
//! assert_eq!(sections.len(), 2);
//! assert_eq!(sections[1].heading_text(), "Results");
//! ```
//!
//! ## Module Organization
//!
//! - [`node`] - the tagged node variant set and payload types
//! - [`document`] - the root container and its metadata surface
//! - [`meta`] - the open metadata side-map carried by every node
//! - [`visit`] - visitor dispatch and plain-text extraction
//! - [`section`] - section and preamble extraction from heading levels
//! - [`list_builder`] - nested-list reconstruction from flat item streams
//! - [`table_grid`] - occupancy-grid resolution for cells with spans
//! - [`error`] - error types and the crate [`Result`] alias
//!
//! ## Ownership
//!
//! Trees are immutable values once built: every transform produces a new
//! `Document`, metadata maps deep-copy on `clone`, and no node is ever
//! shared between two live trees. Processing many documents concurrently
//! needs no locking as long as each worker owns its tree.

pub mod document;
pub mod error;
pub mod list_builder;
pub mod meta;
pub mod node;
pub mod section;
pub mod table_grid;
pub mod visit;

pub use document::{Document, DocumentStats, META_AUTHOR, META_CREATED, META_MODIFIED, META_TITLE};
pub use error::{CoreError, Result};
pub use list_builder::{nest_flat_items, FlatItem, ListKind};
pub use meta::{MetaMap, MetaValue};
pub use node::{
    Alignment, BlockQuote, Code, CodeBlock, Comment, CommentInline, DefinitionItem,
    DefinitionList, Emphasis, FootnoteDefinition, FootnoteReference, Heading, HtmlBlock,
    HtmlInline, Image, LineBreak, Link, List, ListItem, MathBlock, MathInline, Node, NodeKind,
    Paragraph, Strikethrough, Strong, Subscript, Superscript, Table, TableCell, TableRow, Text,
    ThematicBreak, Underline,
};
pub use section::{
    get_all_sections, get_preamble, Section, MAX_HEADING_LEVEL, MIN_HEADING_LEVEL,
};
pub use table_grid::{resolve_grid, CellPlacement, TableGrid};
pub use visit::{
    document_plain_text, nodes_plain_text, nodes_word_count, plain_text, NodeVisitor,
    PlainTextVisitor,
};
