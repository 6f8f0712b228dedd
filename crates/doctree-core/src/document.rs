//! The root document container.
//!
//! A [`Document`] owns an ordered sequence of block-level children (document
//! order is semantically significant), a metadata map, and an optional
//! provenance marker naming where the tree came from. It is the only node
//! type that may appear as a tree root and never appears nested inside
//! another node; constructors in this crate never produce a nested one.
//!
//! There is no mutation-in-place contract anywhere in this crate: every
//! transform that "modifies" a document produces a new `Document` value.

use crate::meta::{MetaMap, MetaValue};
use crate::node::Node;
use crate::visit::{document_plain_text, NodeVisitor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known metadata key for the document title.
pub const META_TITLE: &str = "title";
/// Well-known metadata key for the document author.
pub const META_AUTHOR: &str = "author";
/// Well-known metadata key for the creation date (RFC 3339).
pub const META_CREATED: &str = "created";
/// Well-known metadata key for the last-modified date (RFC 3339).
pub const META_MODIFIED: &str = "modified";

/// Root node of a document tree.
///
/// # Examples
///
/// ```rust
/// use doctree_core::{Document, Heading, Paragraph};
///
/// let mut doc = Document::new();
/// doc.set_title("Field Notes");
/// doc.push(Heading::with_text(1, "Field Notes").unwrap().into());
/// doc.push(Paragraph::from_text("First observation.").into());
///
/// assert_eq!(doc.title(), Some("Field Notes"));
/// assert_eq!(doc.word_count(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Block-level children in document order
    pub children: Vec<Node>,

    /// Document metadata (title, author, dates, custom fields)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: MetaMap,

    /// Provenance marker: where this tree came from (filename, URL, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Document {
    /// Creates an empty document.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from block children.
    #[inline]
    #[must_use]
    pub fn with_children(children: Vec<Node>) -> Self {
        Self {
            children,
            metadata: MetaMap::new(),
            source: None,
        }
    }

    /// Appends a block child.
    #[inline]
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Dispatches this document to a visitor.
    ///
    /// Equivalent to wrapping the document in [`Node::Document`] and calling
    /// [`Node::accept`], without the allocation.
    #[inline]
    pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_document(self);
    }

    /// Returns the document title, if set.
    #[inline]
    #[must_use = "returns the document title"]
    pub fn title(&self) -> Option<&str> {
        self.metadata.get(META_TITLE).and_then(MetaValue::as_str)
    }

    /// Sets the document title.
    #[inline]
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata
            .insert(META_TITLE.to_string(), MetaValue::Str(title.into()));
    }

    /// Returns the document author, if set.
    #[inline]
    #[must_use = "returns the document author"]
    pub fn author(&self) -> Option<&str> {
        self.metadata.get(META_AUTHOR).and_then(MetaValue::as_str)
    }

    /// Sets the document author.
    #[inline]
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.metadata
            .insert(META_AUTHOR.to_string(), MetaValue::Str(author.into()));
    }

    /// Returns the creation date, if set and parseable.
    #[must_use = "returns the creation date"]
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.date_field(META_CREATED)
    }

    /// Sets the creation date, stored as an RFC 3339 string.
    #[inline]
    pub fn set_created(&mut self, when: DateTime<Utc>) {
        self.metadata
            .insert(META_CREATED.to_string(), MetaValue::from(when));
    }

    /// Returns the last-modified date, if set and parseable.
    #[must_use = "returns the last-modified date"]
    pub fn modified(&self) -> Option<DateTime<Utc>> {
        self.date_field(META_MODIFIED)
    }

    /// Sets the last-modified date, stored as an RFC 3339 string.
    #[inline]
    pub fn set_modified(&mut self, when: DateTime<Utc>) {
        self.metadata
            .insert(META_MODIFIED.to_string(), MetaValue::from(when));
    }

    fn date_field(&self, key: &str) -> Option<DateTime<Utc>> {
        let raw = self.metadata.get(key).and_then(MetaValue::as_str)?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Checks if the document has no children.
    #[inline]
    #[must_use = "returns whether the document is empty"]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Extracts the plain text of the whole tree.
    ///
    /// Structural markers, comments, and raw HTML contribute nothing; see
    /// [`crate::visit::PlainTextVisitor`] for the exact rules.
    #[inline]
    #[must_use = "returns the extracted plain text"]
    pub fn plain_text(&self) -> String {
        document_plain_text(self)
    }

    /// Counts the whitespace-separated tokens of the extracted plain text.
    #[inline]
    #[must_use = "returns the word count"]
    pub fn word_count(&self) -> usize {
        self.plain_text().split_whitespace().count()
    }

    /// Returns basic document statistics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use doctree_core::{Document, Paragraph};
    ///
    /// let doc = Document::with_children(vec![
    ///     Paragraph::from_text("two words").into(),
    /// ]);
    /// let stats = doc.stats();
    /// assert_eq!(stats.num_children, 1);
    /// assert_eq!(stats.word_count, 2);
    /// ```
    #[must_use = "returns basic document statistics"]
    pub fn stats(&self) -> DocumentStats {
        let text = self.plain_text();
        DocumentStats {
            num_children: self.children.len(),
            num_characters: text.chars().count(),
            word_count: text.split_whitespace().count(),
        }
    }
}

/// Basic metrics returned by [`Document::stats()`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of top-level children
    pub num_children: usize,

    /// Number of characters in the extracted plain text
    pub num_characters: usize,

    /// Whitespace-token count of the extracted plain text
    pub word_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Heading, Paragraph};
    use chrono::TimeZone;

    #[test]
    fn test_metadata_helpers() {
        let mut doc = Document::new();
        assert_eq!(doc.title(), None);
        assert_eq!(doc.author(), None);

        doc.set_title("Handbook");
        doc.set_author("Ops Team");
        assert_eq!(doc.title(), Some("Handbook"));
        assert_eq!(doc.author(), Some("Ops Team"));
    }

    #[test]
    fn test_date_round_trip() {
        let when = Utc.with_ymd_and_hms(2023, 11, 5, 8, 30, 0).unwrap();
        let mut doc = Document::new();
        doc.set_created(when);
        doc.set_modified(when);

        assert_eq!(doc.created(), Some(when));
        assert_eq!(doc.modified(), Some(when));
    }

    #[test]
    fn test_unparseable_date_is_none() {
        let mut doc = Document::new();
        doc.metadata
            .insert(META_CREATED.to_string(), MetaValue::from("last tuesday"));
        assert_eq!(doc.created(), None);
    }

    #[test]
    fn test_stats() {
        let doc = Document::with_children(vec![
            Node::from(Heading::with_text(1, "Title").unwrap()),
            Node::from(Paragraph::from_text("This is a test document.")),
            Node::from(Paragraph::from_text("Another paragraph.")),
        ]);

        let stats = doc.stats();
        assert_eq!(stats.num_children, 3);
        assert_eq!(stats.word_count, 8);
        assert!(stats.num_characters > 0);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.word_count(), 0);
        assert_eq!(doc.stats(), DocumentStats::default());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut doc = Document::with_children(vec![Node::from(Paragraph::from_text("body"))]);
        doc.set_title("Serialized");
        doc.source = Some("report.docx".to_string());

        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"title\":\"Serialized\""));
        assert!(json.contains("\"source\":\"report.docx\""));

        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
