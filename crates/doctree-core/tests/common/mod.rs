//! Shared fixtures for doctree-core integration tests.
//!
//! Not every test binary uses every fixture.
#![allow(dead_code)]

use doctree_core::{Document, Heading, Node, Paragraph};

/// Builds a heading node, panicking on invalid levels (test input is fixed).
#[must_use]
pub fn heading(level: usize, text: &str) -> Node {
    Heading::with_text(level, text)
        .expect("fixture heading level must be valid")
        .into()
}

/// Builds a single-text paragraph node.
#[must_use]
pub fn para(text: &str) -> Node {
    Paragraph::from_text(text).into()
}

/// A small report-shaped document: preamble, two chapters, one subsection.
#[must_use]
pub fn report_document() -> Document {
    let mut doc = Document::with_children(vec![
        para("Executive summary before any heading."),
        heading(1, "Findings"),
        para("Primary findings text."),
        heading(2, "Detail"),
        para("Supporting detail text."),
        heading(1, "Recommendations"),
        para("Recommended actions text."),
    ]);
    doc.set_title("Quarterly Report");
    doc.source = Some("report.docx".to_string());
    doc
}
