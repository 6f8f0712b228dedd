//! The universal document tree.
//!
//! [`Node`] is a closed tagged variant over every block and inline element a
//! converter can produce. Converters build these trees; the structural
//! algorithms in this crate analyze them; renderers consume them through the
//! visitor protocol in [`crate::visit`]. Nodes are value trees: once built
//! they are treated as immutable, and `clone` produces a fully independent
//! deep copy.
//!
//! Every node carries an open [`MetaMap`] side-map for renderer-specific
//! facts (original numbering scheme, style name, anchor id) that have no
//! first-class field.

use crate::document::Document;
use crate::error::{CoreError, Result};
use crate::meta::MetaMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_span() -> usize {
    1
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_default_span(span: &usize) -> bool {
    *span == 1
}

/// A node of the document tree.
///
/// Block variants form the document skeleton; inline variants appear inside
/// the `content` of blocks such as [`Paragraph`] and [`Heading`]. The set is
/// closed: renderers match exhaustively, and the visitor protocol carries one
/// handler per variant so a new variant is a compile-time-visible change to
/// every consumer.
///
/// Serialized with an internal `type` tag:
///
/// ```rust
/// use doctree_core::Node;
///
/// let json = serde_json::to_string(&Node::text("hi")).unwrap();
/// assert_eq!(json, r#"{"type":"text","text":"hi"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Root container; never nested inside another node
    Document(Box<Document>),
    /// Block of inline content
    Paragraph(Paragraph),
    /// Section heading, level 1-6
    Heading(Heading),
    /// Ordered or bulleted list
    List(List),
    /// Single list entry
    ListItem(ListItem),
    /// Table with optional header row
    Table(Table),
    /// Row of table cells
    TableRow(TableRow),
    /// Table cell with span information
    TableCell(TableCell),
    /// Quoted block
    BlockQuote(BlockQuote),
    /// Fenced or indented code
    CodeBlock(CodeBlock),
    /// Horizontal rule / page separator
    ThematicBreak(ThematicBreak),
    /// Raw block-level HTML
    HtmlBlock(HtmlBlock),
    /// Display math
    MathBlock(MathBlock),
    /// Term/definition pairs
    DefinitionList(DefinitionList),
    /// Footnote body
    FootnoteDefinition(FootnoteDefinition),
    /// Block comment (non-content)
    Comment(Comment),
    /// Plain text run
    Text(Text),
    /// Bold
    Strong(Strong),
    /// Italic
    Emphasis(Emphasis),
    /// Underline
    Underline(Underline),
    /// Strikethrough
    Strikethrough(Strikethrough),
    /// Subscript
    Subscript(Subscript),
    /// Superscript
    Superscript(Superscript),
    /// Inline code span
    Code(Code),
    /// Hyperlink
    Link(Link),
    /// Inline image
    Image(Image),
    /// Hard line break
    LineBreak(LineBreak),
    /// Reference to a footnote definition
    FootnoteReference(FootnoteReference),
    /// Inline math
    MathInline(MathInline),
    /// Inline comment (non-content)
    CommentInline(CommentInline),
    /// Raw inline HTML
    HtmlInline(HtmlInline),
}

impl Node {
    /// Creates a plain text node.
    ///
    /// Shorthand for the most common leaf.
    #[inline]
    #[must_use = "creates a text node"]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(Text::new(text))
    }

    /// Returns the kind discriminant of this node.
    #[must_use = "returns the kind of this node"]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Document(_) => NodeKind::Document,
            Self::Paragraph(_) => NodeKind::Paragraph,
            Self::Heading(_) => NodeKind::Heading,
            Self::List(_) => NodeKind::List,
            Self::ListItem(_) => NodeKind::ListItem,
            Self::Table(_) => NodeKind::Table,
            Self::TableRow(_) => NodeKind::TableRow,
            Self::TableCell(_) => NodeKind::TableCell,
            Self::BlockQuote(_) => NodeKind::BlockQuote,
            Self::CodeBlock(_) => NodeKind::CodeBlock,
            Self::ThematicBreak(_) => NodeKind::ThematicBreak,
            Self::HtmlBlock(_) => NodeKind::HtmlBlock,
            Self::MathBlock(_) => NodeKind::MathBlock,
            Self::DefinitionList(_) => NodeKind::DefinitionList,
            Self::FootnoteDefinition(_) => NodeKind::FootnoteDefinition,
            Self::Comment(_) => NodeKind::Comment,
            Self::Text(_) => NodeKind::Text,
            Self::Strong(_) => NodeKind::Strong,
            Self::Emphasis(_) => NodeKind::Emphasis,
            Self::Underline(_) => NodeKind::Underline,
            Self::Strikethrough(_) => NodeKind::Strikethrough,
            Self::Subscript(_) => NodeKind::Subscript,
            Self::Superscript(_) => NodeKind::Superscript,
            Self::Code(_) => NodeKind::Code,
            Self::Link(_) => NodeKind::Link,
            Self::Image(_) => NodeKind::Image,
            Self::LineBreak(_) => NodeKind::LineBreak,
            Self::FootnoteReference(_) => NodeKind::FootnoteReference,
            Self::MathInline(_) => NodeKind::MathInline,
            Self::CommentInline(_) => NodeKind::CommentInline,
            Self::HtmlInline(_) => NodeKind::HtmlInline,
        }
    }

    /// Returns `true` for block-level variants.
    #[inline]
    #[must_use]
    pub const fn is_block(&self) -> bool {
        self.kind().is_block()
    }

    /// Returns `true` for inline variants.
    #[inline]
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        self.kind().is_inline()
    }
}

/// Kind discriminant for [`Node`], one variant per node variant.
///
/// Useful for diagnostics and metadata keys without matching on payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Root container
    Document,
    /// Paragraph block
    Paragraph,
    /// Heading block
    Heading,
    /// List block
    List,
    /// List item
    ListItem,
    /// Table block
    Table,
    /// Table row
    TableRow,
    /// Table cell
    TableCell,
    /// Block quote
    BlockQuote,
    /// Code block
    CodeBlock,
    /// Thematic break
    ThematicBreak,
    /// Raw HTML block
    HtmlBlock,
    /// Display math block
    MathBlock,
    /// Definition list
    DefinitionList,
    /// Footnote definition
    FootnoteDefinition,
    /// Block comment
    Comment,
    /// Text run
    Text,
    /// Bold span
    Strong,
    /// Italic span
    Emphasis,
    /// Underline span
    Underline,
    /// Strikethrough span
    Strikethrough,
    /// Subscript span
    Subscript,
    /// Superscript span
    Superscript,
    /// Inline code span
    Code,
    /// Hyperlink
    Link,
    /// Inline image
    Image,
    /// Hard line break
    LineBreak,
    /// Footnote reference
    FootnoteReference,
    /// Inline math
    MathInline,
    /// Inline comment
    CommentInline,
    /// Raw inline HTML
    HtmlInline,
}

impl NodeKind {
    /// Returns `true` for block-level kinds.
    #[must_use]
    pub const fn is_block(self) -> bool {
        matches!(
            self,
            Self::Document
                | Self::Paragraph
                | Self::Heading
                | Self::List
                | Self::ListItem
                | Self::Table
                | Self::TableRow
                | Self::TableCell
                | Self::BlockQuote
                | Self::CodeBlock
                | Self::ThematicBreak
                | Self::HtmlBlock
                | Self::MathBlock
                | Self::DefinitionList
                | Self::FootnoteDefinition
                | Self::Comment
        )
    }

    /// Returns `true` for inline kinds.
    #[inline]
    #[must_use]
    pub const fn is_inline(self) -> bool {
        !self.is_block()
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Document => "document",
            Self::Paragraph => "paragraph",
            Self::Heading => "heading",
            Self::List => "list",
            Self::ListItem => "list_item",
            Self::Table => "table",
            Self::TableRow => "table_row",
            Self::TableCell => "table_cell",
            Self::BlockQuote => "block_quote",
            Self::CodeBlock => "code_block",
            Self::ThematicBreak => "thematic_break",
            Self::HtmlBlock => "html_block",
            Self::MathBlock => "math_block",
            Self::DefinitionList => "definition_list",
            Self::FootnoteDefinition => "footnote_definition",
            Self::Comment => "comment",
            Self::Text => "text",
            Self::Strong => "strong",
            Self::Emphasis => "emphasis",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
            Self::Subscript => "subscript",
            Self::Superscript => "superscript",
            Self::Code => "code",
            Self::Link => "link",
            Self::Image => "image",
            Self::LineBreak => "line_break",
            Self::FootnoteReference => "footnote_reference",
            Self::MathInline => "math_inline",
            Self::CommentInline => "comment_inline",
            Self::HtmlInline => "html_inline",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "document" => Ok(Self::Document),
            "paragraph" => Ok(Self::Paragraph),
            "heading" => Ok(Self::Heading),
            "list" => Ok(Self::List),
            "list_item" | "listitem" | "list-item" => Ok(Self::ListItem),
            "table" => Ok(Self::Table),
            "table_row" | "tablerow" | "table-row" => Ok(Self::TableRow),
            "table_cell" | "tablecell" | "table-cell" => Ok(Self::TableCell),
            "block_quote" | "blockquote" | "block-quote" => Ok(Self::BlockQuote),
            "code_block" | "codeblock" | "code-block" => Ok(Self::CodeBlock),
            "thematic_break" | "thematicbreak" | "thematic-break" => Ok(Self::ThematicBreak),
            "html_block" | "htmlblock" | "html-block" => Ok(Self::HtmlBlock),
            "math_block" | "mathblock" | "math-block" => Ok(Self::MathBlock),
            "definition_list" | "definitionlist" | "definition-list" => Ok(Self::DefinitionList),
            "footnote_definition" | "footnotedefinition" | "footnote-definition" => {
                Ok(Self::FootnoteDefinition)
            }
            "comment" => Ok(Self::Comment),
            "text" => Ok(Self::Text),
            "strong" => Ok(Self::Strong),
            "emphasis" => Ok(Self::Emphasis),
            "underline" => Ok(Self::Underline),
            "strikethrough" => Ok(Self::Strikethrough),
            "subscript" => Ok(Self::Subscript),
            "superscript" => Ok(Self::Superscript),
            "code" => Ok(Self::Code),
            "link" => Ok(Self::Link),
            "image" => Ok(Self::Image),
            "line_break" | "linebreak" | "line-break" => Ok(Self::LineBreak),
            "footnote_reference" | "footnotereference" | "footnote-reference" => {
                Ok(Self::FootnoteReference)
            }
            "math_inline" | "mathinline" | "math-inline" => Ok(Self::MathInline),
            "comment_inline" | "commentinline" | "comment-inline" => Ok(Self::CommentInline),
            "html_inline" | "htmlinline" | "html-inline" => Ok(Self::HtmlInline),
            _ => Err(format!("unknown node kind: '{s}'")),
        }
    }
}

/// Horizontal alignment of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Left-aligned
    Left,
    /// Centered
    Center,
    /// Right-aligned
    Right,
}

// =============================================================================
// Block payloads
// =============================================================================

/// A paragraph of inline content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline children in document order
    pub content: Vec<Node>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Paragraph {
    /// Creates a paragraph from inline content.
    #[inline]
    #[must_use]
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            content,
            meta: MetaMap::new(),
        }
    }

    /// Creates a paragraph containing a single text run.
    #[inline]
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![Node::text(text)])
    }
}

/// A section heading.
///
/// The level is validated at construction and kept private so a built tree
/// can never carry an out-of-range value; every consumer relies on that.
///
/// # Examples
///
/// ```rust
/// use doctree_core::{Heading, Node};
///
/// let heading = Heading::new(2, vec![Node::text("Background")]).unwrap();
/// assert_eq!(heading.level(), 2);
///
/// assert!(Heading::new(0, vec![]).is_err());
/// assert!(Heading::new(7, vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    level: usize,
    /// Inline heading content
    pub content: Vec<Node>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Heading {
    /// Creates a heading with the given level and inline content.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidHeadingLevel`] if `level` is outside 1-6.
    pub fn new(level: usize, content: Vec<Node>) -> Result<Self> {
        if !(1..=6).contains(&level) {
            return Err(CoreError::InvalidHeadingLevel(level));
        }
        Ok(Self {
            level,
            content,
            meta: MetaMap::new(),
        })
    }

    /// Creates a heading containing a single text run.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidHeadingLevel`] if `level` is outside 1-6.
    pub fn with_text(level: usize, text: impl Into<String>) -> Result<Self> {
        Self::new(level, vec![Node::text(text)])
    }

    /// Returns the heading level, guaranteed to be within 1-6.
    #[inline]
    #[must_use = "returns the heading level"]
    pub const fn level(&self) -> usize {
        self.level
    }
}

/// An ordered or bulleted list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// `true` for numbered lists, `false` for bulleted lists
    pub ordered: bool,
    /// List entries in document order
    pub items: Vec<ListItem>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl List {
    /// Creates a list from its items.
    #[inline]
    #[must_use]
    pub fn new(ordered: bool, items: Vec<ListItem>) -> Self {
        Self {
            ordered,
            items,
            meta: MetaMap::new(),
        }
    }
}

/// A single list entry.
///
/// Children are block nodes and may include nested [`List`]s; the tree is
/// acyclic by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Block children of this entry
    pub children: Vec<Node>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl ListItem {
    /// Creates a list item from block children.
    #[inline]
    #[must_use]
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            meta: MetaMap::new(),
        }
    }

    /// Creates a list item containing a single text paragraph.
    #[inline]
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![Node::Paragraph(Paragraph::from_text(text))])
    }
}

/// A table with an optional header row and ordered data rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Header row, when the source format distinguishes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<TableRow>,
    /// Data rows in document order
    pub rows: Vec<TableRow>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Table {
    /// Creates a table from an optional header row and data rows.
    #[inline]
    #[must_use]
    pub fn new(header: Option<TableRow>, rows: Vec<TableRow>) -> Self {
        Self {
            header,
            rows,
            meta: MetaMap::new(),
        }
    }
}

/// A row of table cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in left-to-right order
    pub cells: Vec<TableCell>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl TableRow {
    /// Creates a row from its cells.
    #[inline]
    #[must_use]
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            meta: MetaMap::new(),
        }
    }
}

/// A table cell.
///
/// Spans are always at least 1; zero values supplied by a converter are a
/// violated invariant and are normalized at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Inline cell content
    pub content: Vec<Node>,
    /// Horizontal alignment, when the source format specifies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    /// Number of grid columns this cell occupies (>= 1)
    #[serde(default = "default_span", skip_serializing_if = "is_default_span")]
    pub colspan: usize,
    /// Number of grid rows this cell occupies (>= 1)
    #[serde(default = "default_span", skip_serializing_if = "is_default_span")]
    pub rowspan: usize,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Default for TableCell {
    #[inline]
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TableCell {
    /// Creates a cell with default spans of 1.
    #[inline]
    #[must_use]
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            content,
            alignment: None,
            colspan: 1,
            rowspan: 1,
            meta: MetaMap::new(),
        }
    }

    /// Creates a cell containing a single text run.
    #[inline]
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![Node::text(text)])
    }

    /// Sets the column and row spans.
    ///
    /// Zero spans are a converter bug; they trip a debug assertion and are
    /// normalized to 1.
    #[must_use]
    pub fn with_span(mut self, colspan: usize, rowspan: usize) -> Self {
        debug_assert!(colspan >= 1, "colspan must be at least 1");
        debug_assert!(rowspan >= 1, "rowspan must be at least 1");
        self.colspan = colspan.max(1);
        self.rowspan = rowspan.max(1);
        self
    }

    /// Sets the horizontal alignment.
    #[inline]
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// A quoted block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockQuote {
    /// Block children of the quote
    pub children: Vec<Node>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl BlockQuote {
    /// Creates a block quote from block children.
    #[inline]
    #[must_use]
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            meta: MetaMap::new(),
        }
    }
}

/// A block of literal code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Language hint from the source format, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Literal code text
    pub text: String,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl CodeBlock {
    /// Creates a code block.
    #[inline]
    #[must_use]
    pub fn new(language: Option<String>, text: impl Into<String>) -> Self {
        Self {
            language,
            text: text.into(),
            meta: MetaMap::new(),
        }
    }
}

/// A thematic break (horizontal rule, page separator).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThematicBreak {
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl ThematicBreak {
    /// Creates a thematic break.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Raw block-level HTML passed through from the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HtmlBlock {
    /// Raw HTML text
    pub html: String,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl HtmlBlock {
    /// Creates a raw HTML block.
    #[inline]
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            meta: MetaMap::new(),
        }
    }
}

/// Display math.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MathBlock {
    /// Math source, notation decided by the converter
    pub math: String,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl MathBlock {
    /// Creates a display math block.
    #[inline]
    #[must_use]
    pub fn new(math: impl Into<String>) -> Self {
        Self {
            math: math.into(),
            meta: MetaMap::new(),
        }
    }
}

/// A term/definition pair inside a [`DefinitionList`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionItem {
    /// Inline term content
    pub term: Vec<Node>,
    /// Block definition content
    pub definition: Vec<Node>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl DefinitionItem {
    /// Creates a term/definition pair.
    #[inline]
    #[must_use]
    pub fn new(term: Vec<Node>, definition: Vec<Node>) -> Self {
        Self {
            term,
            definition,
            meta: MetaMap::new(),
        }
    }
}

/// A definition list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionList {
    /// Term/definition pairs in document order
    pub items: Vec<DefinitionItem>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl DefinitionList {
    /// Creates a definition list from its pairs.
    #[inline]
    #[must_use]
    pub fn new(items: Vec<DefinitionItem>) -> Self {
        Self {
            items,
            meta: MetaMap::new(),
        }
    }
}

/// The body of a footnote, referenced by label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FootnoteDefinition {
    /// Label matched by [`FootnoteReference`]
    pub label: String,
    /// Block children of the footnote body
    pub children: Vec<Node>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl FootnoteDefinition {
    /// Creates a footnote definition.
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            label: label.into(),
            children,
            meta: MetaMap::new(),
        }
    }
}

/// A block comment: carried for round-tripping, never rendered as content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment text
    pub text: String,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Comment {
    /// Creates a block comment.
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            meta: MetaMap::new(),
        }
    }
}

// =============================================================================
// Inline payloads
// =============================================================================

/// A plain text run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Text content
    pub text: String,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Text {
    /// Creates a text run.
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            meta: MetaMap::new(),
        }
    }
}

/// Bold span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Strong {
    /// Inline children
    pub content: Vec<Node>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Strong {
    /// Creates a bold span.
    #[inline]
    #[must_use]
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            content,
            meta: MetaMap::new(),
        }
    }
}

/// Italic span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Emphasis {
    /// Inline children
    pub content: Vec<Node>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Emphasis {
    /// Creates an italic span.
    #[inline]
    #[must_use]
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            content,
            meta: MetaMap::new(),
        }
    }
}

/// Underline span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Underline {
    /// Inline children
    pub content: Vec<Node>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Underline {
    /// Creates an underline span.
    #[inline]
    #[must_use]
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            content,
            meta: MetaMap::new(),
        }
    }
}

/// Strikethrough span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Strikethrough {
    /// Inline children
    pub content: Vec<Node>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Strikethrough {
    /// Creates a strikethrough span.
    #[inline]
    #[must_use]
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            content,
            meta: MetaMap::new(),
        }
    }
}

/// Subscript span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscript {
    /// Inline children
    pub content: Vec<Node>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Subscript {
    /// Creates a subscript span.
    #[inline]
    #[must_use]
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            content,
            meta: MetaMap::new(),
        }
    }
}

/// Superscript span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Superscript {
    /// Inline children
    pub content: Vec<Node>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Superscript {
    /// Creates a superscript span.
    #[inline]
    #[must_use]
    pub fn new(content: Vec<Node>) -> Self {
        Self {
            content,
            meta: MetaMap::new(),
        }
    }
}

/// Inline code span.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Code {
    /// Literal code text
    pub text: String,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Code {
    /// Creates an inline code span.
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            meta: MetaMap::new(),
        }
    }
}

/// A hyperlink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Link target
    pub href: String,
    /// Optional title attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Inline link text
    pub content: Vec<Node>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Link {
    /// Creates a hyperlink.
    #[inline]
    #[must_use]
    pub fn new(href: impl Into<String>, content: Vec<Node>) -> Self {
        Self {
            href: href.into(),
            title: None,
            content,
            meta: MetaMap::new(),
        }
    }
}

/// An inline image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Image source
    pub src: String,
    /// Alternative text
    #[serde(default)]
    pub alt: String,
    /// Optional title attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl Image {
    /// Creates an inline image.
    #[inline]
    #[must_use]
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            title: None,
            meta: MetaMap::new(),
        }
    }
}

/// A hard line break.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineBreak {
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl LineBreak {
    /// Creates a hard line break.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// A reference to a [`FootnoteDefinition`] by label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FootnoteReference {
    /// Label of the referenced footnote
    pub label: String,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl FootnoteReference {
    /// Creates a footnote reference.
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            meta: MetaMap::new(),
        }
    }
}

/// Inline math.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MathInline {
    /// Math source, notation decided by the converter
    pub math: String,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl MathInline {
    /// Creates an inline math span.
    #[inline]
    #[must_use]
    pub fn new(math: impl Into<String>) -> Self {
        Self {
            math: math.into(),
            meta: MetaMap::new(),
        }
    }
}

/// An inline comment: carried for round-tripping, never rendered as content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentInline {
    /// Comment text
    pub text: String,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl CommentInline {
    /// Creates an inline comment.
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            meta: MetaMap::new(),
        }
    }
}

/// Raw inline HTML passed through from the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HtmlInline {
    /// Raw HTML text
    pub html: String,
    /// Open metadata side-map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: MetaMap,
}

impl HtmlInline {
    /// Creates a raw inline HTML span.
    #[inline]
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            meta: MetaMap::new(),
        }
    }
}

// =============================================================================
// Payload-to-node conversions
// =============================================================================

impl From<Document> for Node {
    #[inline]
    fn from(value: Document) -> Self {
        Self::Document(Box::new(value))
    }
}

impl From<Paragraph> for Node {
    #[inline]
    fn from(value: Paragraph) -> Self {
        Self::Paragraph(value)
    }
}

impl From<Heading> for Node {
    #[inline]
    fn from(value: Heading) -> Self {
        Self::Heading(value)
    }
}

impl From<List> for Node {
    #[inline]
    fn from(value: List) -> Self {
        Self::List(value)
    }
}

impl From<ListItem> for Node {
    #[inline]
    fn from(value: ListItem) -> Self {
        Self::ListItem(value)
    }
}

impl From<Table> for Node {
    #[inline]
    fn from(value: Table) -> Self {
        Self::Table(value)
    }
}

impl From<TableRow> for Node {
    #[inline]
    fn from(value: TableRow) -> Self {
        Self::TableRow(value)
    }
}

impl From<TableCell> for Node {
    #[inline]
    fn from(value: TableCell) -> Self {
        Self::TableCell(value)
    }
}

impl From<BlockQuote> for Node {
    #[inline]
    fn from(value: BlockQuote) -> Self {
        Self::BlockQuote(value)
    }
}

impl From<CodeBlock> for Node {
    #[inline]
    fn from(value: CodeBlock) -> Self {
        Self::CodeBlock(value)
    }
}

impl From<ThematicBreak> for Node {
    #[inline]
    fn from(value: ThematicBreak) -> Self {
        Self::ThematicBreak(value)
    }
}

impl From<HtmlBlock> for Node {
    #[inline]
    fn from(value: HtmlBlock) -> Self {
        Self::HtmlBlock(value)
    }
}

impl From<MathBlock> for Node {
    #[inline]
    fn from(value: MathBlock) -> Self {
        Self::MathBlock(value)
    }
}

impl From<DefinitionList> for Node {
    #[inline]
    fn from(value: DefinitionList) -> Self {
        Self::DefinitionList(value)
    }
}

impl From<FootnoteDefinition> for Node {
    #[inline]
    fn from(value: FootnoteDefinition) -> Self {
        Self::FootnoteDefinition(value)
    }
}

impl From<Comment> for Node {
    #[inline]
    fn from(value: Comment) -> Self {
        Self::Comment(value)
    }
}

impl From<Text> for Node {
    #[inline]
    fn from(value: Text) -> Self {
        Self::Text(value)
    }
}

impl From<Strong> for Node {
    #[inline]
    fn from(value: Strong) -> Self {
        Self::Strong(value)
    }
}

impl From<Emphasis> for Node {
    #[inline]
    fn from(value: Emphasis) -> Self {
        Self::Emphasis(value)
    }
}

impl From<Underline> for Node {
    #[inline]
    fn from(value: Underline) -> Self {
        Self::Underline(value)
    }
}

impl From<Strikethrough> for Node {
    #[inline]
    fn from(value: Strikethrough) -> Self {
        Self::Strikethrough(value)
    }
}

impl From<Subscript> for Node {
    #[inline]
    fn from(value: Subscript) -> Self {
        Self::Subscript(value)
    }
}

impl From<Superscript> for Node {
    #[inline]
    fn from(value: Superscript) -> Self {
        Self::Superscript(value)
    }
}

impl From<Code> for Node {
    #[inline]
    fn from(value: Code) -> Self {
        Self::Code(value)
    }
}

impl From<Link> for Node {
    #[inline]
    fn from(value: Link) -> Self {
        Self::Link(value)
    }
}

impl From<Image> for Node {
    #[inline]
    fn from(value: Image) -> Self {
        Self::Image(value)
    }
}

impl From<LineBreak> for Node {
    #[inline]
    fn from(value: LineBreak) -> Self {
        Self::LineBreak(value)
    }
}

impl From<FootnoteReference> for Node {
    #[inline]
    fn from(value: FootnoteReference) -> Self {
        Self::FootnoteReference(value)
    }
}

impl From<MathInline> for Node {
    #[inline]
    fn from(value: MathInline) -> Self {
        Self::MathInline(value)
    }
}

impl From<CommentInline> for Node {
    #[inline]
    fn from(value: CommentInline) -> Self {
        Self::CommentInline(value)
    }
}

impl From<HtmlInline> for Node {
    #[inline]
    fn from(value: HtmlInline) -> Self {
        Self::HtmlInline(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_validation() {
        for level in 1..=6 {
            let heading = Heading::with_text(level, "ok").unwrap();
            assert_eq!(heading.level(), level);
        }
        assert_eq!(
            Heading::with_text(0, "bad").unwrap_err(),
            CoreError::InvalidHeadingLevel(0)
        );
        assert_eq!(
            Heading::with_text(7, "bad").unwrap_err(),
            CoreError::InvalidHeadingLevel(7)
        );
    }

    #[test]
    fn test_node_kind_mapping() {
        assert_eq!(Node::text("x").kind(), NodeKind::Text);
        assert_eq!(
            Node::from(Paragraph::from_text("x")).kind(),
            NodeKind::Paragraph
        );
        assert_eq!(
            Node::from(ThematicBreak::new()).kind(),
            NodeKind::ThematicBreak
        );
        assert!(NodeKind::Table.is_block());
        assert!(!NodeKind::Table.is_inline());
        assert!(NodeKind::Strong.is_inline());
        assert!(Node::from(CodeBlock::new(None, "x")).is_block());
        assert!(Node::from(Code::new("x")).is_inline());
    }

    #[test]
    fn test_node_kind_display_from_str_round_trip() {
        use std::str::FromStr;

        let kinds = [
            NodeKind::Document,
            NodeKind::Paragraph,
            NodeKind::Heading,
            NodeKind::List,
            NodeKind::ListItem,
            NodeKind::Table,
            NodeKind::TableRow,
            NodeKind::TableCell,
            NodeKind::BlockQuote,
            NodeKind::CodeBlock,
            NodeKind::ThematicBreak,
            NodeKind::HtmlBlock,
            NodeKind::MathBlock,
            NodeKind::DefinitionList,
            NodeKind::FootnoteDefinition,
            NodeKind::Comment,
            NodeKind::Text,
            NodeKind::Strong,
            NodeKind::Emphasis,
            NodeKind::Underline,
            NodeKind::Strikethrough,
            NodeKind::Subscript,
            NodeKind::Superscript,
            NodeKind::Code,
            NodeKind::Link,
            NodeKind::Image,
            NodeKind::LineBreak,
            NodeKind::FootnoteReference,
            NodeKind::MathInline,
            NodeKind::CommentInline,
            NodeKind::HtmlInline,
        ];
        for kind in kinds {
            let name = kind.to_string();
            assert_eq!(NodeKind::from_str(&name).unwrap(), kind, "kind {name}");
        }
        assert!(NodeKind::from_str("not_a_kind").is_err());
    }

    #[test]
    fn test_table_cell_span_normalization() {
        let cell = TableCell::from_text("x");
        assert_eq!(cell.colspan, 1);
        assert_eq!(cell.rowspan, 1);

        let wide = TableCell::from_text("x").with_span(3, 2);
        assert_eq!(wide.colspan, 3);
        assert_eq!(wide.rowspan, 2);
    }

    #[test]
    fn test_serde_tagged_round_trip() {
        let node = Node::from(Paragraph::new(vec![
            Node::text("see "),
            Node::from(Link::new("https://example.com", vec![Node::text("here")])),
        ]));

        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"type\":\"paragraph\""));
        assert!(json.contains("\"type\":\"link\""));

        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_default_spans_omitted_from_json() {
        let cell = Node::from(TableCell::from_text("x"));
        let json = serde_json::to_string(&cell).unwrap();
        assert!(!json.contains("colspan"));
        assert!(!json.contains("rowspan"));

        let spanned = Node::from(TableCell::from_text("x").with_span(2, 1));
        let json = serde_json::to_string(&spanned).unwrap();
        assert!(json.contains("\"colspan\":2"));
        assert!(!json.contains("rowspan"));
    }

    #[test]
    fn test_meta_side_map_round_trip() {
        use crate::meta::MetaValue;

        let mut para = Paragraph::from_text("numbered");
        para.meta
            .insert("numbering".to_string(), MetaValue::from("roman"));
        let node = Node::from(para);

        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"numbering\":\"roman\""));

        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
