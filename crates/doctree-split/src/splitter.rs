//! The six document-splitting strategies.
//!
//! Every strategy consumes an owned [`Document`] and partitions its child
//! sequence: no node is duplicated, dropped nodes are only the matched
//! break/delimiter markers, and each output split owns a fresh deep copy of
//! the source metadata. Results are 1-indexed, contiguous, and never empty —
//! a degenerate input yields a single whole-document split tagged with a
//! `reason` in its metadata.
//!
//! Boundaries always respect sections as computed by
//! [`doctree_core::get_all_sections`]: a split never begins in the middle of
//! a section's content.

use crate::error::{Result, SplitError};
use crate::result::SplitResult;
use doctree_core::{
    get_all_sections, nodes_plain_text, nodes_word_count, Document, MetaMap, MetaValue, Node,
};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Word target used by [`split_auto`] when the caller does not supply one.
pub const DEFAULT_AUTO_TARGET_WORDS: usize = 1500;

/// Source facts shared by every split of one operation.
struct SplitSource {
    metadata: MetaMap,
    source: Option<String>,
}

/// Assembles one split: fresh metadata copy, strategy tags, word count.
fn make_split(
    index: usize,
    title: Option<String>,
    children: Vec<Node>,
    src: &SplitSource,
    tags: &MetaMap,
) -> SplitResult {
    let mut doc_meta = src.metadata.clone();
    doc_meta.extend(tags.iter().map(|(k, v)| (k.clone(), v.clone())));
    let document = Document {
        children,
        metadata: doc_meta,
        source: src.source.clone(),
    };
    let word_count = document.word_count();
    SplitResult {
        index,
        title,
        word_count,
        metadata: tags.clone(),
        document,
    }
}

/// Partitions owned children at the given strictly increasing indices.
///
/// Returns `boundaries.len() + 1` buckets; the first covers everything before
/// the first boundary and may be empty.
fn partition_at(children: Vec<Node>, boundaries: &[usize]) -> Vec<Vec<Node>> {
    let mut buckets: Vec<Vec<Node>> = Vec::with_capacity(boundaries.len() + 1);
    buckets.push(Vec::new());
    let mut next = boundaries.iter().copied().peekable();
    for (idx, node) in children.into_iter().enumerate() {
        while next.peek() == Some(&idx) {
            next.next();
            buckets.push(Vec::new());
        }
        if let Some(bucket) = buckets.last_mut() {
            bucket.push(node);
        }
    }
    while next.next().is_some() {
        buckets.push(Vec::new());
    }
    buckets
}

/// Plain text of the first non-empty heading in the bucket, if any.
fn first_heading_text(nodes: &[Node]) -> Option<String> {
    nodes.iter().find_map(|node| match node {
        Node::Heading(heading) => {
            let text = nodes_plain_text(&heading.content).trim().to_string();
            (!text.is_empty()).then_some(text)
        }
        _ => None,
    })
}

// =============================================================================
// Heading-level strategy
// =============================================================================

/// Splits at every section opened by a heading of exactly `level`.
///
/// Content before the first such heading is the preamble; with
/// `include_preamble` it becomes the first split (tagged `preamble`),
/// otherwise it is omitted. A document with no heading at `level` yields a
/// single split tagged `reason=no_headings_found`.
///
/// # Errors
///
/// Returns [`SplitError::InvalidHeadingLevel`] if `level` is outside 1-6.
///
/// # Examples
///
/// ```rust
/// use doctree_core::{Document, Heading, Paragraph};
/// use doctree_split::split_by_heading_level;
///
/// let doc = Document::with_children(vec![
///     Heading::with_text(1, "One").unwrap().into(),
///     Paragraph::from_text("first body").into(),
///     Heading::with_text(1, "Two").unwrap().into(),
///     Paragraph::from_text("second body").into(),
/// ]);
///
/// let splits = split_by_heading_level(doc, 1, true).unwrap();
/// assert_eq!(splits.len(), 2);
/// assert_eq!(splits[0].title.as_deref(), Some("One"));
/// assert_eq!(splits[1].index, 2);
/// ```
pub fn split_by_heading_level(
    doc: Document,
    level: usize,
    include_preamble: bool,
) -> Result<Vec<SplitResult>> {
    if !(1..=6).contains(&level) {
        return Err(SplitError::InvalidHeadingLevel(level));
    }
    let mut tags = MetaMap::new();
    tags.insert(
        "strategy".to_string(),
        MetaValue::from(format!("heading:h{level}")),
    );
    tags.insert("heading_level".to_string(), MetaValue::from(level));
    Ok(heading_splits(doc, level, include_preamble, tags))
}

/// Heading-level splitting with the level already validated.
fn heading_splits(
    doc: Document,
    level: usize,
    include_preamble: bool,
    tags: MetaMap,
) -> Vec<SplitResult> {
    let starts: Vec<usize> = get_all_sections(&doc, level, level)
        .iter()
        .map(|section| section.start())
        .collect();
    let title_fallback = doc.title().map(str::to_string);
    let Document {
        children,
        metadata,
        source,
    } = doc;
    let src = SplitSource { metadata, source };

    if starts.is_empty() {
        debug!("no level-{level} headings: emitting a single whole-document split");
        let mut tags = tags;
        tags.insert(
            "reason".to_string(),
            MetaValue::from("no_headings_found"),
        );
        let title = first_heading_text(&children).or(title_fallback);
        return vec![make_split(1, title, children, &src, &tags)];
    }

    let mut buckets = partition_at(children, &starts).into_iter();
    let preamble = buckets.next().unwrap_or_default();

    let mut results = Vec::new();
    if include_preamble && !preamble.is_empty() {
        let mut preamble_tags = tags.clone();
        preamble_tags.insert("preamble".to_string(), MetaValue::from(true));
        let title = first_heading_text(&preamble);
        results.push(make_split(1, title, preamble, &src, &preamble_tags));
    }
    for bucket in buckets {
        let title = first_heading_text(&bucket);
        results.push(make_split(results.len() + 1, title, bucket, &src, &tags));
    }
    results
}

// =============================================================================
// Word-count strategy
// =============================================================================

/// Splits by accumulating whole sections up to a word target.
///
/// Sections come from the extractor over the full heading range, so every
/// heading starts a new segment; content before the first heading is treated
/// as an initial untitled segment. A new split opens only when the current
/// one is non-empty and adding the next segment would exceed `target_words` —
/// a single oversized section still becomes its own split, never divided
/// internally. A headingless document yields one split tagged
/// `reason=no_headings_found`.
///
/// # Errors
///
/// Returns [`SplitError::InvalidWordTarget`] if `target_words` is 0.
pub fn split_by_word_count(doc: Document, target_words: usize) -> Result<Vec<SplitResult>> {
    if target_words < 1 {
        return Err(SplitError::InvalidWordTarget(target_words));
    }
    let mut tags = MetaMap::new();
    tags.insert("strategy".to_string(), MetaValue::from("word_count"));
    tags.insert("target_words".to_string(), MetaValue::from(target_words));
    Ok(word_count_splits(doc, target_words, tags))
}

/// Word-count splitting with the target already validated.
fn word_count_splits(doc: Document, target_words: usize, tags: MetaMap) -> Vec<SplitResult> {
    let heading_starts: Vec<usize> = get_all_sections(&doc, 1, 6)
        .iter()
        .map(|section| section.start())
        .collect();
    let title_fallback = doc.title().map(str::to_string);
    let Document {
        children,
        metadata,
        source,
    } = doc;
    let src = SplitSource { metadata, source };

    if heading_starts.is_empty() {
        debug!("no headings: emitting a single whole-document split");
        let mut tags = tags;
        tags.insert(
            "reason".to_string(),
            MetaValue::from("no_headings_found"),
        );
        return vec![make_split(1, title_fallback, children, &src, &tags)];
    }

    // Segment boundaries: document start, then every heading.
    let mut segments: Vec<(usize, usize)> = Vec::new();
    let mut prev = 0usize;
    for &start in &heading_starts {
        if start > prev {
            segments.push((prev, start));
        }
        prev = start;
    }
    segments.push((prev, children.len()));

    // Greedy accumulation: close the open split only when it already has
    // content and the next segment would push it past the target.
    let mut split_starts: Vec<usize> = Vec::new();
    let mut accumulated = 0usize;
    let mut open = false;
    for &(seg_start, seg_end) in &segments {
        let words = nodes_word_count(&children[seg_start..seg_end]);
        if open && accumulated + words > target_words {
            split_starts.push(seg_start);
            accumulated = words;
        } else {
            accumulated += words;
            open = true;
        }
    }

    let mut results = Vec::new();
    for bucket in partition_at(children, &split_starts) {
        let title = first_heading_text(&bucket);
        results.push(make_split(results.len() + 1, title, bucket, &src, &tags));
    }
    results
}

// =============================================================================
// Parts strategy
// =============================================================================

/// Splits into roughly `num_parts` pieces.
///
/// Computes `target = max(1, total_words / num_parts)` and delegates to the
/// word-count strategy. The part count is an approximation: uneven section
/// sizes can yield more or fewer splits than requested, and exact counts are
/// not part of the contract. The requested count is recorded under the
/// `requested_parts` metadata key.
///
/// # Errors
///
/// Returns [`SplitError::InvalidPartCount`] if `num_parts` is 0.
pub fn split_by_parts(doc: Document, num_parts: usize) -> Result<Vec<SplitResult>> {
    if num_parts < 1 {
        return Err(SplitError::InvalidPartCount(num_parts));
    }
    let total_words = doc.word_count();
    let target = (total_words / num_parts).max(1);
    debug!("parts strategy: {total_words} words over {num_parts} parts, target {target}");

    let mut tags = MetaMap::new();
    tags.insert("strategy".to_string(), MetaValue::from("parts"));
    tags.insert("requested_parts".to_string(), MetaValue::from(num_parts));
    tags.insert("target_words".to_string(), MetaValue::from(target));
    Ok(word_count_splits(doc, target, tags))
}

// =============================================================================
// Break and delimiter strategies
// =============================================================================

/// Splits at every top-level thematic break; the break node is dropped.
///
/// Empty runs between adjacent breaks are skipped. A document with no breaks
/// yields a single split tagged `reason=no_breaks_found`.
pub fn split_by_break(doc: Document) -> Vec<SplitResult> {
    let mut tags = MetaMap::new();
    tags.insert("strategy".to_string(), MetaValue::from("break"));
    boundary_splits(doc, tags, "no_breaks_found", |node| {
        matches!(node, Node::ThematicBreak(_))
    })
}

/// Splits at nodes matching a literal delimiter; the matched node is dropped.
///
/// A node matches when it is a thematic break and the delimiter's shape is a
/// horizontal rule (three or more of `-`, `*`, `_`), or when it is a
/// paragraph or text node whose trimmed plain text equals the trimmed
/// delimiter exactly. Escape decoding belongs to the spec parser; this
/// function takes the literal string. No match yields a single split tagged
/// `reason=delimiter_not_found`.
///
/// # Errors
///
/// Returns [`SplitError::EmptyDelimiter`] if `delimiter` is empty.
pub fn split_by_delimiter(doc: Document, delimiter: &str) -> Result<Vec<SplitResult>> {
    if delimiter.is_empty() {
        return Err(SplitError::EmptyDelimiter);
    }
    let trimmed = delimiter.trim();
    let hr_like = is_horizontal_rule(trimmed);

    let mut tags = MetaMap::new();
    tags.insert("strategy".to_string(), MetaValue::from("delimiter"));
    tags.insert("delimiter".to_string(), MetaValue::from(delimiter));

    Ok(boundary_splits(
        doc,
        tags,
        "delimiter_not_found",
        |node| match node {
            Node::ThematicBreak(_) => hr_like,
            Node::Paragraph(paragraph) => nodes_plain_text(&paragraph.content).trim() == trimmed,
            Node::Text(text) => text.text.trim() == trimmed,
            _ => false,
        },
    ))
}

/// Checks whether a delimiter looks like a horizontal rule.
fn is_horizontal_rule(text: &str) -> bool {
    static HR_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[-*_]{3,}$").expect("invalid horizontal rule regex"));
    HR_PATTERN.is_match(text)
}

/// Shared machinery for break and delimiter splitting.
fn boundary_splits(
    doc: Document,
    tags: MetaMap,
    missing_reason: &str,
    is_boundary: impl Fn(&Node) -> bool,
) -> Vec<SplitResult> {
    let title_fallback = doc.title().map(str::to_string);
    let Document {
        children,
        metadata,
        source,
    } = doc;
    let src = SplitSource { metadata, source };

    let mut buckets: Vec<Vec<Node>> = vec![Vec::new()];
    let mut matched = 0usize;
    for node in children {
        if is_boundary(&node) {
            matched += 1;
            buckets.push(Vec::new());
        } else if let Some(bucket) = buckets.last_mut() {
            bucket.push(node);
        }
    }

    if matched == 0 {
        let children = buckets.pop().unwrap_or_default();
        let mut tags = tags;
        tags.insert("reason".to_string(), MetaValue::from(missing_reason));
        let title = first_heading_text(&children).or(title_fallback);
        return vec![make_split(1, title, children, &src, &tags)];
    }

    let mut results = Vec::new();
    for bucket in buckets {
        if bucket.is_empty() {
            continue;
        }
        let title = first_heading_text(&bucket);
        results.push(make_split(results.len() + 1, title, bucket, &src, &tags));
    }

    if results.is_empty() {
        // Every child was a separator; there is still exactly one split.
        let mut tags = tags;
        tags.insert("reason".to_string(), MetaValue::from("no_content"));
        return vec![make_split(1, title_fallback, Vec::new(), &src, &tags)];
    }
    results
}

// =============================================================================
// Auto strategy
// =============================================================================

/// Picks a strategy from the document's own shape.
///
/// Tries H1 boundaries first: accepted when the average H1 section is within
/// twice the target and the largest within three times. Falls back to H2
/// boundaries when the average H2 section is within 1.5 times the target,
/// and to plain word-count splitting otherwise. Every result is tagged with
/// the chosen strategy: `auto:h1`, `auto:h2`, or `auto:word_count`.
///
/// `target_words` defaults to [`DEFAULT_AUTO_TARGET_WORDS`].
#[allow(clippy::cast_precision_loss)]
pub fn split_auto(doc: Document, target_words: Option<usize>) -> Vec<SplitResult> {
    let target = target_words.unwrap_or(DEFAULT_AUTO_TARGET_WORDS).max(1);
    let target_f = target as f64;

    if let Some((avg, max)) = heading_stats(&doc, 1) {
        if avg <= 2.0 * target_f && max <= 3 * target {
            debug!("auto strategy: H1 boundaries fit target {target}");
            let tags = auto_tags("auto:h1", target);
            return heading_splits(doc, 1, true, tags);
        }
    }

    if let Some((avg, _)) = heading_stats(&doc, 2) {
        if avg <= 1.5 * target_f {
            debug!("auto strategy: H2 boundaries fit target {target}");
            let tags = auto_tags("auto:h2", target);
            return heading_splits(doc, 2, true, tags);
        }
    }

    debug!("auto strategy: falling back to word-count splitting at {target}");
    word_count_splits(doc, target, auto_tags("auto:word_count", target))
}

fn auto_tags(strategy: &str, target: usize) -> MetaMap {
    let mut tags = MetaMap::new();
    tags.insert("strategy".to_string(), MetaValue::from(strategy));
    tags.insert("target_words".to_string(), MetaValue::from(target));
    tags
}

/// Average and maximum word counts of the sections at one heading level.
#[allow(clippy::cast_precision_loss)]
fn heading_stats(doc: &Document, level: usize) -> Option<(f64, usize)> {
    let sections = get_all_sections(doc, level, level);
    if sections.is_empty() {
        return None;
    }
    let counts: Vec<usize> = sections.iter().map(|section| section.word_count()).collect();
    let total: usize = counts.iter().sum();
    let avg = total as f64 / counts.len() as f64;
    let max = counts.iter().copied().max().unwrap_or(0);
    Some((avg, max))
}
