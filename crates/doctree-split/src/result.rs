//! The output unit of every splitting strategy.

use doctree_core::{Document, MetaMap};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum length of a filename slug, in characters.
pub const MAX_SLUG_LEN: usize = 100;

/// One self-contained piece of a split document.
///
/// Owns its [`Document`]: the strategies partition the source's children, so
/// every original node ends up in exactly one split, never duplicated and
/// never aliased. `metadata` carries the strategy tags for this split;
/// `document.metadata` is an independent deep copy of the source document's
/// metadata with the same tags merged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    /// 1-based position in output order; contiguous with no gaps
    pub index: usize,

    /// Title of this split, usually its leading heading text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whitespace-token count of the split's extracted plain text
    pub word_count: usize,

    /// Strategy tags for this split (strategy name, reasons, targets)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: MetaMap,

    /// The nodes assigned to this split
    pub document: Document,
}

impl SplitResult {
    /// Derives a filesystem-safe slug from the title.
    ///
    /// Returns the empty string when the title is unset or empty. Otherwise
    /// the slug is lower-cased ASCII with non-alphanumeric runs collapsed to
    /// single hyphens, trimmed, and capped at [`MAX_SLUG_LEN`] characters.
    /// The same title always produces the same slug.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use doctree_core::Document;
    /// use doctree_split::SplitResult;
    ///
    /// let split = SplitResult {
    ///     index: 1,
    ///     title: Some("Chapter 1: Introduction".to_string()),
    ///     word_count: 0,
    ///     metadata: Default::default(),
    ///     document: Document::new(),
    /// };
    /// assert_eq!(split.get_filename_slug(), "chapter-1-introduction");
    /// ```
    #[must_use = "returns the filename slug"]
    pub fn get_filename_slug(&self) -> String {
        match &self.title {
            Some(title) => slugify(title),
            None => String::new(),
        }
    }
}

/// Lower-cases and collapses everything outside `[a-z0-9]` to hyphens.
fn slugify(title: &str) -> String {
    static NON_ALNUM: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("invalid slug regex"));

    let lowered = title.to_lowercase();
    let collapsed = NON_ALNUM.replace_all(&lowered, "-");
    collapsed
        .trim_matches('-')
        .chars()
        .take(MAX_SLUG_LEN)
        .collect()
}
