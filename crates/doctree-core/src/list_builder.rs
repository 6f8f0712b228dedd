//! Nested-list reconstruction from flat item streams.
//!
//! Word-processor formats encode list membership as a flat paragraph stream
//! with an indentation/level attribute instead of a nested structure. This
//! module rebuilds the proper [`List`] tree from that stream with an explicit
//! stack of owned frames: one frame per open list, levels strictly increasing
//! from bottom to top, no frame ever left without items.

use crate::node::{List, ListItem, Node};
use log::debug;
use serde::{Deserialize, Serialize};

/// The kind of list an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Unordered (bulleted) list
    Bullet,
    /// Ordered (numbered) list
    Number,
}

impl ListKind {
    /// Returns `true` for numbered lists.
    #[inline]
    #[must_use]
    pub const fn is_ordered(self) -> bool {
        matches!(self, Self::Number)
    }
}

/// One entry of the flat stream: kind, indentation level (>= 1), content.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatItem {
    /// List kind at this entry
    pub kind: ListKind,
    /// Indentation level, 1-based
    pub level: usize,
    /// The item content
    pub item: ListItem,
}

impl FlatItem {
    /// Creates a flat stream entry.
    ///
    /// A level of 0 is a converter bug; it trips a debug assertion and is
    /// normalized to 1.
    #[must_use]
    pub fn new(kind: ListKind, level: usize, item: ListItem) -> Self {
        debug_assert!(level >= 1, "list level must be at least 1");
        Self {
            kind,
            level: level.max(1),
            item,
        }
    }
}

impl From<(ListKind, usize, ListItem)> for FlatItem {
    #[inline]
    fn from((kind, level, item): (ListKind, usize, ListItem)) -> Self {
        Self::new(kind, level, item)
    }
}

/// An open list being accumulated.
#[derive(Debug)]
struct Frame {
    kind: ListKind,
    level: usize,
    items: Vec<ListItem>,
}

impl Frame {
    fn new(kind: ListKind, level: usize, first: ListItem) -> Self {
        Self {
            kind,
            level,
            items: vec![first],
        }
    }

    fn into_list(self) -> List {
        List::new(self.kind.is_ordered(), self.items)
    }
}

/// Closes a frame: nests its list under the last item of the frame beneath
/// it, or emits it as a completed top-level list when the stack is empty.
fn fold(stack: &mut Vec<Frame>, completed: &mut Vec<List>, frame: Frame) {
    let list = frame.into_list();
    match stack.last_mut().and_then(|below| below.items.last_mut()) {
        Some(parent_item) => parent_item.children.push(Node::List(list)),
        None => completed.push(list),
    }
}

/// Rebuilds nested lists from a flat, ordered stream of items.
///
/// - an item deeper than the open frame pushes a new frame;
/// - an item shallower than the open frame pops and folds every frame that is
///   strictly deeper, nesting each popped list under the last item of the
///   frame exposed beneath it;
/// - at equal level the item joins the open frame when the kind matches, and
///   otherwise finalizes it and starts a fresh frame — so a bullet run
///   followed by a numbered run at the same level yields two sibling lists;
/// - the end of the stream folds the remaining frames from deepest to
///   shallowest.
///
/// A level jump of more than one step (1 directly to 3) is accepted by
/// collapsing to the nearest enclosing level; no empty intermediate levels
/// are synthesized.
///
/// Usually the result is a single list; kind changes at the outermost level
/// produce several, in document order. An empty stream yields no lists.
///
/// # Examples
///
/// ```rust
/// use doctree_core::{nest_flat_items, FlatItem, ListItem, ListKind};
///
/// let lists = nest_flat_items(vec![
///     FlatItem::new(ListKind::Bullet, 1, ListItem::from_text("A")),
///     FlatItem::new(ListKind::Bullet, 2, ListItem::from_text("A1")),
///     FlatItem::new(ListKind::Bullet, 1, ListItem::from_text("B")),
/// ]);
///
/// assert_eq!(lists.len(), 1);
/// assert_eq!(lists[0].items.len(), 2);
/// // "A" now carries the nested sublist as an extra child.
/// assert_eq!(lists[0].items[0].children.len(), 2);
/// ```
#[must_use = "returns the reconstructed lists"]
pub fn nest_flat_items(flat: impl IntoIterator<Item = FlatItem>) -> Vec<List> {
    let mut completed: Vec<List> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for entry in flat {
        let FlatItem { kind, level, item } = entry;
        let level = level.max(1);

        // Pop every frame strictly deeper than the target level.
        while stack.last().is_some_and(|frame| frame.level > level) {
            if let Some(frame) = stack.pop() {
                fold(&mut stack, &mut completed, frame);
            }
        }

        enum Placement {
            Append,
            Restart,
            Push,
        }

        let placement = match stack.last() {
            Some(top) if top.level == level && top.kind == kind => Placement::Append,
            Some(top) if top.level == level => Placement::Restart,
            Some(top) => {
                if level > top.level + 1 {
                    debug!(
                        "list level jump from {} to {}: collapsing to nearest enclosing level",
                        top.level, level
                    );
                }
                Placement::Push
            }
            None => Placement::Push,
        };

        match placement {
            Placement::Append => {
                if let Some(top) = stack.last_mut() {
                    top.items.push(item);
                }
            }
            Placement::Restart => {
                if let Some(frame) = stack.pop() {
                    fold(&mut stack, &mut completed, frame);
                }
                stack.push(Frame::new(kind, level, item));
            }
            Placement::Push => stack.push(Frame::new(kind, level, item)),
        }
    }

    // End of stream: fold the remaining frames from deepest to shallowest.
    while let Some(frame) = stack.pop() {
        fold(&mut stack, &mut completed, frame);
    }

    completed
}
