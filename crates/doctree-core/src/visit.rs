//! Visitor dispatch over the document tree.
//!
//! Renderers and transforms implement [`NodeVisitor`]; [`Node::accept`]
//! routes each node to the one handler matching its variant (double
//! dispatch). Every handler is required — there is deliberately no default
//! or fallback method, so adding a node variant breaks every visitor at
//! compile time instead of being silently ignored by some renderer.
//!
//! Dispatch never mutates the node; all side effects are confined to the
//! visitor. Recursion is the visitor's responsibility: a handler that wants
//! to descend calls [`Node::accept`] on the children it cares about, as
//! [`PlainTextVisitor`] does.

use crate::document::Document;
use crate::node::{
    BlockQuote, Code, CodeBlock, Comment, CommentInline, DefinitionList, Emphasis,
    FootnoteDefinition, FootnoteReference, Heading, HtmlBlock, HtmlInline, Image, LineBreak, Link,
    List, ListItem, MathBlock, MathInline, Node, Paragraph, Strikethrough, Strong, Subscript,
    Superscript, Table, TableCell, TableRow, Text, ThematicBreak, Underline,
};

/// A visitor over the full node variant set.
///
/// One required method per variant. Implementations decide for themselves
/// whether and how to descend into children.
///
/// # Examples
///
/// A visitor that counts paragraphs:
///
/// ```rust
/// use doctree_core::{Document, Paragraph};
/// use doctree_core::visit::CountingVisitor;
///
/// let doc = Document::with_children(vec![
///     Paragraph::from_text("one").into(),
///     Paragraph::from_text("two").into(),
/// ]);
///
/// let mut counter = CountingVisitor::default();
/// doc.accept(&mut counter);
/// assert_eq!(counter.paragraphs, 2);
/// ```
pub trait NodeVisitor {
    /// Handles the root document.
    fn visit_document(&mut self, node: &Document);
    /// Handles a paragraph.
    fn visit_paragraph(&mut self, node: &Paragraph);
    /// Handles a heading.
    fn visit_heading(&mut self, node: &Heading);
    /// Handles a list.
    fn visit_list(&mut self, node: &List);
    /// Handles a list item.
    fn visit_list_item(&mut self, node: &ListItem);
    /// Handles a table.
    fn visit_table(&mut self, node: &Table);
    /// Handles a table row.
    fn visit_table_row(&mut self, node: &TableRow);
    /// Handles a table cell.
    fn visit_table_cell(&mut self, node: &TableCell);
    /// Handles a block quote.
    fn visit_block_quote(&mut self, node: &BlockQuote);
    /// Handles a code block.
    fn visit_code_block(&mut self, node: &CodeBlock);
    /// Handles a thematic break.
    fn visit_thematic_break(&mut self, node: &ThematicBreak);
    /// Handles a raw HTML block.
    fn visit_html_block(&mut self, node: &HtmlBlock);
    /// Handles a display math block.
    fn visit_math_block(&mut self, node: &MathBlock);
    /// Handles a definition list.
    fn visit_definition_list(&mut self, node: &DefinitionList);
    /// Handles a footnote definition.
    fn visit_footnote_definition(&mut self, node: &FootnoteDefinition);
    /// Handles a block comment.
    fn visit_comment(&mut self, node: &Comment);
    /// Handles a text run.
    fn visit_text(&mut self, node: &Text);
    /// Handles a bold span.
    fn visit_strong(&mut self, node: &Strong);
    /// Handles an italic span.
    fn visit_emphasis(&mut self, node: &Emphasis);
    /// Handles an underline span.
    fn visit_underline(&mut self, node: &Underline);
    /// Handles a strikethrough span.
    fn visit_strikethrough(&mut self, node: &Strikethrough);
    /// Handles a subscript span.
    fn visit_subscript(&mut self, node: &Subscript);
    /// Handles a superscript span.
    fn visit_superscript(&mut self, node: &Superscript);
    /// Handles an inline code span.
    fn visit_code(&mut self, node: &Code);
    /// Handles a hyperlink.
    fn visit_link(&mut self, node: &Link);
    /// Handles an inline image.
    fn visit_image(&mut self, node: &Image);
    /// Handles a hard line break.
    fn visit_line_break(&mut self, node: &LineBreak);
    /// Handles a footnote reference.
    fn visit_footnote_reference(&mut self, node: &FootnoteReference);
    /// Handles an inline math span.
    fn visit_math_inline(&mut self, node: &MathInline);
    /// Handles an inline comment.
    fn visit_comment_inline(&mut self, node: &CommentInline);
    /// Handles a raw inline HTML span.
    fn visit_html_inline(&mut self, node: &HtmlInline);
}

impl Node {
    /// Dispatches this node to the visitor handler matching its variant.
    pub fn accept<V: NodeVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Self::Document(n) => visitor.visit_document(n),
            Self::Paragraph(n) => visitor.visit_paragraph(n),
            Self::Heading(n) => visitor.visit_heading(n),
            Self::List(n) => visitor.visit_list(n),
            Self::ListItem(n) => visitor.visit_list_item(n),
            Self::Table(n) => visitor.visit_table(n),
            Self::TableRow(n) => visitor.visit_table_row(n),
            Self::TableCell(n) => visitor.visit_table_cell(n),
            Self::BlockQuote(n) => visitor.visit_block_quote(n),
            Self::CodeBlock(n) => visitor.visit_code_block(n),
            Self::ThematicBreak(n) => visitor.visit_thematic_break(n),
            Self::HtmlBlock(n) => visitor.visit_html_block(n),
            Self::MathBlock(n) => visitor.visit_math_block(n),
            Self::DefinitionList(n) => visitor.visit_definition_list(n),
            Self::FootnoteDefinition(n) => visitor.visit_footnote_definition(n),
            Self::Comment(n) => visitor.visit_comment(n),
            Self::Text(n) => visitor.visit_text(n),
            Self::Strong(n) => visitor.visit_strong(n),
            Self::Emphasis(n) => visitor.visit_emphasis(n),
            Self::Underline(n) => visitor.visit_underline(n),
            Self::Strikethrough(n) => visitor.visit_strikethrough(n),
            Self::Subscript(n) => visitor.visit_subscript(n),
            Self::Superscript(n) => visitor.visit_superscript(n),
            Self::Code(n) => visitor.visit_code(n),
            Self::Link(n) => visitor.visit_link(n),
            Self::Image(n) => visitor.visit_image(n),
            Self::LineBreak(n) => visitor.visit_line_break(n),
            Self::FootnoteReference(n) => visitor.visit_footnote_reference(n),
            Self::MathInline(n) => visitor.visit_math_inline(n),
            Self::CommentInline(n) => visitor.visit_comment_inline(n),
            Self::HtmlInline(n) => visitor.visit_html_inline(n),
        }
    }
}

/// Plain-text extraction visitor.
///
/// Collects the human-readable text of a subtree: text runs, code literals,
/// math source, image alt text, and link text. Structural markers (thematic
/// breaks, line breaks between blocks), comments, raw HTML, and footnote
/// reference labels contribute nothing. Block boundaries become newlines and
/// cell boundaries become spaces, so whitespace tokenization of the result
/// gives a stable word count.
#[derive(Debug, Default)]
pub struct PlainTextVisitor {
    text: String,
}

impl PlainTextVisitor {
    /// Creates an empty collector.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the collector and returns the extracted text.
    #[inline]
    #[must_use = "returns the extracted text"]
    pub fn into_text(self) -> String {
        self.text
    }

    fn visit_all(&mut self, nodes: &[Node]) {
        for node in nodes {
            node.accept(self);
        }
    }

    fn end_block(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
    }

    fn pad(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with(char::is_whitespace) {
            self.text.push(' ');
        }
    }
}

impl NodeVisitor for PlainTextVisitor {
    fn visit_document(&mut self, node: &Document) {
        self.visit_all(&node.children);
    }

    fn visit_paragraph(&mut self, node: &Paragraph) {
        self.visit_all(&node.content);
        self.end_block();
    }

    fn visit_heading(&mut self, node: &Heading) {
        self.visit_all(&node.content);
        self.end_block();
    }

    fn visit_list(&mut self, node: &List) {
        for item in &node.items {
            self.visit_list_item(item);
        }
    }

    fn visit_list_item(&mut self, node: &ListItem) {
        self.visit_all(&node.children);
        self.end_block();
    }

    fn visit_table(&mut self, node: &Table) {
        if let Some(header) = &node.header {
            self.visit_table_row(header);
        }
        for row in &node.rows {
            self.visit_table_row(row);
        }
    }

    fn visit_table_row(&mut self, node: &TableRow) {
        for cell in &node.cells {
            self.visit_table_cell(cell);
        }
        self.end_block();
    }

    fn visit_table_cell(&mut self, node: &TableCell) {
        self.pad();
        self.visit_all(&node.content);
    }

    fn visit_block_quote(&mut self, node: &BlockQuote) {
        self.visit_all(&node.children);
        self.end_block();
    }

    fn visit_code_block(&mut self, node: &CodeBlock) {
        self.text.push_str(&node.text);
        self.end_block();
    }

    fn visit_thematic_break(&mut self, _node: &ThematicBreak) {}

    fn visit_html_block(&mut self, _node: &HtmlBlock) {}

    fn visit_math_block(&mut self, node: &MathBlock) {
        self.text.push_str(&node.math);
        self.end_block();
    }

    fn visit_definition_list(&mut self, node: &DefinitionList) {
        for item in &node.items {
            self.visit_all(&item.term);
            self.end_block();
            self.visit_all(&item.definition);
            self.end_block();
        }
    }

    fn visit_footnote_definition(&mut self, node: &FootnoteDefinition) {
        self.visit_all(&node.children);
        self.end_block();
    }

    fn visit_comment(&mut self, _node: &Comment) {}

    fn visit_text(&mut self, node: &Text) {
        self.text.push_str(&node.text);
    }

    fn visit_strong(&mut self, node: &Strong) {
        self.visit_all(&node.content);
    }

    fn visit_emphasis(&mut self, node: &Emphasis) {
        self.visit_all(&node.content);
    }

    fn visit_underline(&mut self, node: &Underline) {
        self.visit_all(&node.content);
    }

    fn visit_strikethrough(&mut self, node: &Strikethrough) {
        self.visit_all(&node.content);
    }

    fn visit_subscript(&mut self, node: &Subscript) {
        self.visit_all(&node.content);
    }

    fn visit_superscript(&mut self, node: &Superscript) {
        self.visit_all(&node.content);
    }

    fn visit_code(&mut self, node: &Code) {
        self.text.push_str(&node.text);
    }

    fn visit_link(&mut self, node: &Link) {
        self.visit_all(&node.content);
    }

    fn visit_image(&mut self, node: &Image) {
        self.text.push_str(&node.alt);
    }

    fn visit_line_break(&mut self, _node: &LineBreak) {
        self.text.push('\n');
    }

    fn visit_footnote_reference(&mut self, _node: &FootnoteReference) {}

    fn visit_math_inline(&mut self, node: &MathInline) {
        self.text.push_str(&node.math);
    }

    fn visit_comment_inline(&mut self, _node: &CommentInline) {}

    fn visit_html_inline(&mut self, _node: &HtmlInline) {}
}

/// Extracts the plain text of a single node.
#[must_use = "returns the extracted plain text"]
pub fn plain_text(node: &Node) -> String {
    let mut visitor = PlainTextVisitor::new();
    node.accept(&mut visitor);
    visitor.into_text()
}

/// Extracts the plain text of a sequence of nodes.
#[must_use = "returns the extracted plain text"]
pub fn nodes_plain_text(nodes: &[Node]) -> String {
    let mut visitor = PlainTextVisitor::new();
    for node in nodes {
        node.accept(&mut visitor);
    }
    visitor.into_text()
}

/// Extracts the plain text of a whole document.
#[must_use = "returns the extracted plain text"]
pub fn document_plain_text(doc: &Document) -> String {
    let mut visitor = PlainTextVisitor::new();
    doc.accept(&mut visitor);
    visitor.into_text()
}

/// Counts the whitespace-separated tokens of a node sequence's plain text.
#[must_use = "returns the word count"]
pub fn nodes_word_count(nodes: &[Node]) -> usize {
    nodes_plain_text(nodes).split_whitespace().count()
}

/// A demonstration visitor that tallies a few node kinds.
///
/// Doubles as the reference implementation for the "descend or not" choice:
/// it descends everywhere a block can nest.
#[derive(Debug, Default)]
pub struct CountingVisitor {
    /// Paragraphs seen
    pub paragraphs: usize,
    /// Headings seen
    pub headings: usize,
    /// List items seen
    pub list_items: usize,
    /// Tables seen
    pub tables: usize,
}

impl NodeVisitor for CountingVisitor {
    fn visit_document(&mut self, node: &Document) {
        for child in &node.children {
            child.accept(self);
        }
    }

    fn visit_paragraph(&mut self, _node: &Paragraph) {
        self.paragraphs += 1;
    }

    fn visit_heading(&mut self, _node: &Heading) {
        self.headings += 1;
    }

    fn visit_list(&mut self, node: &List) {
        for item in &node.items {
            self.visit_list_item(item);
        }
    }

    fn visit_list_item(&mut self, node: &ListItem) {
        self.list_items += 1;
        for child in &node.children {
            child.accept(self);
        }
    }

    fn visit_table(&mut self, _node: &Table) {
        self.tables += 1;
    }

    fn visit_table_row(&mut self, _node: &TableRow) {}

    fn visit_table_cell(&mut self, _node: &TableCell) {}

    fn visit_block_quote(&mut self, node: &BlockQuote) {
        for child in &node.children {
            child.accept(self);
        }
    }

    fn visit_code_block(&mut self, _node: &CodeBlock) {}

    fn visit_thematic_break(&mut self, _node: &ThematicBreak) {}

    fn visit_html_block(&mut self, _node: &HtmlBlock) {}

    fn visit_math_block(&mut self, _node: &MathBlock) {}

    fn visit_definition_list(&mut self, _node: &DefinitionList) {}

    fn visit_footnote_definition(&mut self, node: &FootnoteDefinition) {
        for child in &node.children {
            child.accept(self);
        }
    }

    fn visit_comment(&mut self, _node: &Comment) {}

    fn visit_text(&mut self, _node: &Text) {}

    fn visit_strong(&mut self, _node: &Strong) {}

    fn visit_emphasis(&mut self, _node: &Emphasis) {}

    fn visit_underline(&mut self, _node: &Underline) {}

    fn visit_strikethrough(&mut self, _node: &Strikethrough) {}

    fn visit_subscript(&mut self, _node: &Subscript) {}

    fn visit_superscript(&mut self, _node: &Superscript) {}

    fn visit_code(&mut self, _node: &Code) {}

    fn visit_link(&mut self, _node: &Link) {}

    fn visit_image(&mut self, _node: &Image) {}

    fn visit_line_break(&mut self, _node: &LineBreak) {}

    fn visit_footnote_reference(&mut self, _node: &FootnoteReference) {}

    fn visit_math_inline(&mut self, _node: &MathInline) {}

    fn visit_comment_inline(&mut self, _node: &CommentInline) {}

    fn visit_html_inline(&mut self, _node: &HtmlInline) {}
}
