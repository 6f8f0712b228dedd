//! Shared fixtures for doctree-split integration tests.
//!
//! Not every test binary uses every fixture.
#![allow(dead_code)]

use doctree_core::{Document, Heading, Node, Paragraph, ThematicBreak};

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

/// Builds a thematic break node.
#[must_use]
pub fn thematic_break() -> Node {
    ThematicBreak::new().into()
}

/// Builds a paragraph with exactly `n` distinct words.
#[must_use]
pub fn words(n: usize) -> Node {
    let text = (0..n)
        .map(|i| format!("word{i}"))
        .collect::<Vec<_>>()
        .join(" ");
    para(&text)
}

/// A book-shaped document: titled, with a preamble, three chapters, and
/// sections inside the second chapter.
#[must_use]
pub fn book_document() -> Document {
    let mut doc = Document::with_children(vec![
        para("Front matter before any chapter."),
        heading(1, "The Beginning"),
        words(30),
        heading(1, "The Middle"),
        words(10),
        heading(2, "A Twist"),
        words(10),
        heading(2, "Another Twist"),
        words(10),
        heading(1, "The End"),
        words(30),
    ]);
    doc.set_title("An Example Book");
    doc.set_author("The Authors");
    doc.source = Some("book.epub".to_string());
    doc
}
