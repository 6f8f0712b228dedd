//! Section and preamble extraction.
//!
//! A document's children are a flat sequence; headings impose an implied
//! hierarchy on it. A [`Section`] is one heading plus every subsequent child
//! up to, but not including, the next heading whose level is less than or
//! equal to the section's level — so a new H1 closes an open H2 section as
//! well as any open H1. Sections are computed on demand from the unmodified
//! tree and are never stored on it; extracting twice yields value-equal
//! results.

use crate::document::Document;
use crate::node::Node;
use crate::visit::nodes_plain_text;

/// Smallest heading level a document can carry.
pub const MIN_HEADING_LEVEL: usize = 1;
/// Largest heading level a document can carry.
pub const MAX_HEADING_LEVEL: usize = 6;

/// A derived view of one heading and the children it owns.
///
/// Borrows the document; materialize with [`Section::to_document`] when an
/// owned standalone tree is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section<'a> {
    doc: &'a Document,
    level: usize,
    start: usize,
    end: usize,
}

impl<'a> Section<'a> {
    /// Returns the heading level this section was opened at.
    #[inline]
    #[must_use = "returns the section level"]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Returns the child index of the section heading.
    #[inline]
    #[must_use = "returns the heading's child index"]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the exclusive child index where the section ends.
    #[inline]
    #[must_use = "returns the section's end index"]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the heading node that opened this section.
    #[inline]
    #[must_use = "returns the section heading"]
    pub fn heading(&self) -> &'a Node {
        &self.doc.children[self.start]
    }

    /// Returns the section's children: the heading plus its owned content.
    #[inline]
    #[must_use = "returns the section's nodes"]
    pub fn nodes(&self) -> &'a [Node] {
        &self.doc.children[self.start..self.end]
    }

    /// Returns the section's content without the heading itself.
    #[inline]
    #[must_use = "returns the section body"]
    pub fn body(&self) -> &'a [Node] {
        &self.doc.children[self.start + 1..self.end]
    }

    /// Concatenates the inline text of the heading node only.
    ///
    /// Content nested under the heading does not contribute.
    #[must_use = "returns the heading text"]
    pub fn heading_text(&self) -> String {
        match self.heading() {
            Node::Heading(heading) => nodes_plain_text(&heading.content).trim().to_string(),
            other => {
                debug_assert!(false, "section starts at non-heading {:?}", other.kind());
                String::new()
            }
        }
    }

    /// Counts the whitespace-separated tokens of the section's plain text.
    #[inline]
    #[must_use = "returns the section word count"]
    pub fn word_count(&self) -> usize {
        nodes_plain_text(self.nodes()).split_whitespace().count()
    }

    /// Materializes the section as a standalone document.
    ///
    /// Children are cloned; the source document's metadata and provenance
    /// marker are deep-copied so the result shares nothing with the source.
    #[must_use = "materializes the section as a standalone document"]
    pub fn to_document(&self) -> Document {
        Document {
            children: self.nodes().to_vec(),
            metadata: self.doc.metadata.clone(),
            source: self.doc.source.clone(),
        }
    }
}

/// Computes the sections implied by headings with levels in
/// `[min_level, max_level]`.
///
/// A single left-to-right scan. Every in-range heading opens a section; a
/// heading of level `<=` an open section's level closes that section, whether
/// or not the closing heading is itself in range. With a narrow range,
/// sections are disjoint; with the full range they nest — an H2 section runs
/// through its H3 subsections to the next H1 or H2.
///
/// Children before the first qualifying heading belong to no section. Levels
/// outside 1-6 are clamped; a reversed range is swapped.
///
/// # Examples
///
/// ```rust
/// use doctree_core::{get_all_sections, Document, Heading, Paragraph};
///
/// let doc = Document::with_children(vec![
///     Paragraph::from_text("preamble").into(),
///     Heading::with_text(1, "One").unwrap().into(),
///     Paragraph::from_text("body").into(),
///     Heading::with_text(1, "Two").unwrap().into(),
/// ]);
///
/// let sections = get_all_sections(&doc, 1, 6);
/// assert_eq!(sections.len(), 2);
/// assert_eq!(sections[0].heading_text(), "One");
/// assert_eq!(sections[0].nodes().len(), 2);
/// assert_eq!(sections[1].nodes().len(), 1);
/// ```
#[must_use = "returns the extracted sections"]
pub fn get_all_sections(doc: &Document, min_level: usize, max_level: usize) -> Vec<Section<'_>> {
    let min = min_level.clamp(MIN_HEADING_LEVEL, MAX_HEADING_LEVEL);
    let max = max_level.clamp(MIN_HEADING_LEVEL, MAX_HEADING_LEVEL);
    let (min, max) = if min <= max { (min, max) } else { (max, min) };

    // (level, start, provisional end); open sections are indices into this
    // vec so the output stays in document order of section starts.
    let mut spans: Vec<(usize, usize, usize)> = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for (idx, node) in doc.children.iter().enumerate() {
        let Node::Heading(heading) = node else {
            continue;
        };
        let level = heading.level();

        while let Some(&span_idx) = open.last() {
            if level <= spans[span_idx].0 {
                spans[span_idx].2 = idx;
                open.pop();
            } else {
                break;
            }
        }

        if (min..=max).contains(&level) {
            open.push(spans.len());
            spans.push((level, idx, doc.children.len()));
        }
    }

    spans
        .into_iter()
        .map(|(level, start, end)| Section {
            doc,
            level,
            start,
            end,
        })
        .collect()
}

/// Returns the children before the first heading of any level.
///
/// For a document with no headings this is the whole child sequence.
#[must_use = "returns the preamble nodes"]
pub fn get_preamble(doc: &Document) -> &[Node] {
    let first_heading = doc
        .children
        .iter()
        .position(|node| matches!(node, Node::Heading(_)))
        .unwrap_or(doc.children.len());
    &doc.children[..first_heading]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Heading, Paragraph, ThematicBreak};

    fn doc_with(children: Vec<Node>) -> Document {
        Document::with_children(children)
    }

    fn heading(level: usize, text: &str) -> Node {
        Node::from(Heading::with_text(level, text).unwrap())
    }

    fn para(text: &str) -> Node {
        Node::from(Paragraph::from_text(text))
    }

    #[test]
    fn test_flat_sections_at_one_level() {
        let doc = doc_with(vec![
            para("intro"),
            heading(2, "First"),
            para("a"),
            para("b"),
            heading(2, "Second"),
            para("c"),
        ]);

        let sections = get_all_sections(&doc, 2, 2);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].heading_text(), "First");
        assert_eq!(sections[0].body().len(), 2);
        assert_eq!(sections[1].heading_text(), "Second");
        assert_eq!(sections[1].body().len(), 1);
    }

    #[test]
    fn test_shallower_heading_closes_section() {
        // An H1 closes an open H2 section even when only H2s are in range.
        let doc = doc_with(vec![
            heading(2, "Sub"),
            para("owned"),
            heading(1, "Chapter"),
            para("not owned"),
        ]);

        let sections = get_all_sections(&doc, 2, 2);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].end(), 2);
        assert_eq!(sections[0].body(), &[para("owned")]);
    }

    #[test]
    fn test_deeper_heading_stays_inside_section() {
        let doc = doc_with(vec![
            heading(2, "Outer"),
            para("a"),
            heading(3, "Inner"),
            para("b"),
            heading(2, "Next"),
        ]);

        let sections = get_all_sections(&doc, 2, 2);
        assert_eq!(sections.len(), 2);
        // The H3 and its content belong to the H2 section.
        assert_eq!(sections[0].nodes().len(), 4);
    }

    #[test]
    fn test_full_range_sections_nest() {
        let doc = doc_with(vec![
            heading(1, "Chapter"),
            para("a"),
            heading(2, "Detail"),
            para("b"),
        ]);

        let sections = get_all_sections(&doc, 1, 6);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].level(), 1);
        assert_eq!(sections[0].end(), 4); // runs through the H2 subsection
        assert_eq!(sections[1].level(), 2);
        assert_eq!(sections[1].start(), 2);
    }

    #[test]
    fn test_no_headings_yields_no_sections_and_full_preamble() {
        let doc = doc_with(vec![para("a"), Node::from(ThematicBreak::new()), para("b")]);

        assert!(get_all_sections(&doc, 1, 6).is_empty());
        assert_eq!(get_preamble(&doc).len(), 3);
    }

    #[test]
    fn test_heading_only_section() {
        let doc = doc_with(vec![heading(1, "Lonely"), heading(1, "Also lonely")]);

        let sections = get_all_sections(&doc, 1, 1);
        assert_eq!(sections.len(), 2);
        assert!(sections[0].body().is_empty());
        assert_eq!(sections[0].nodes().len(), 1);
    }

    #[test]
    fn test_preamble_stops_at_first_heading_of_any_level() {
        let doc = doc_with(vec![para("p1"), para("p2"), heading(4, "Deep"), para("p3")]);
        assert_eq!(get_preamble(&doc).len(), 2);
    }

    #[test]
    fn test_out_of_range_levels_are_clamped() {
        let doc = doc_with(vec![heading(1, "Top"), para("a")]);
        // min 0 clamps to 1, max 99 clamps to 6.
        let sections = get_all_sections(&doc, 0, 99);
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let doc = doc_with(vec![
            para("intro"),
            heading(1, "A"),
            para("a"),
            heading(2, "A.1"),
            para("a1"),
            heading(1, "B"),
        ]);

        let first = get_all_sections(&doc, 1, 6);
        let second = get_all_sections(&doc, 1, 6);
        assert_eq!(first, second);
    }

    #[test]
    fn test_to_document_copies_metadata() {
        use crate::meta::MetaValue;

        let mut doc = doc_with(vec![heading(1, "A"), para("body")]);
        doc.set_title("Source");
        doc.source = Some("in.docx".to_string());

        let sections = get_all_sections(&doc, 1, 1);
        let mut standalone = sections[0].to_document();
        assert_eq!(standalone.title(), Some("Source"));
        assert_eq!(standalone.children.len(), 2);

        // Mutating the copy leaves the source untouched.
        standalone
            .metadata
            .insert("title".to_string(), MetaValue::from("Changed"));
        assert_eq!(doc.title(), Some("Source"));
    }
}
