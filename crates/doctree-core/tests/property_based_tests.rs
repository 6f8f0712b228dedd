//! Property-Based Tests
//!
//! Uses proptest to explore the input space of the structural algorithms:
//! - section extraction is idempotent and produces in-bounds ranges
//! - list reconstruction preserves items and never builds empty lists
//! - grid resolution never double-claims a position
//! - tree serialization round-trips by value

mod common;

use common::{heading, para};
use doctree_core::{
    get_all_sections, nest_flat_items, resolve_grid, Document, FlatItem, List, ListItem, ListKind,
    Node, Table, TableCell, TableRow,
};
use proptest::prelude::*;

/// Builds a document whose children alternate per the generated pattern:
/// `Some(level)` is a heading, `None` a paragraph.
fn doc_from_pattern(pattern: &[Option<usize>]) -> Document {
    let children = pattern
        .iter()
        .enumerate()
        .map(|(i, slot)| match slot {
            Some(level) => heading(*level, &format!("H{i}")),
            None => para(&format!("paragraph {i}")),
        })
        .collect();
    Document::with_children(children)
}

proptest! {
    #[test]
    fn proptest_sections_idempotent_and_in_bounds(
        pattern in prop::collection::vec(prop::option::of(1usize..=6), 0..40),
        min in 1usize..=6,
        max in 1usize..=6,
    ) {
        let doc = doc_from_pattern(&pattern);

        let first = get_all_sections(&doc, min, max);
        let second = get_all_sections(&doc, min, max);
        prop_assert_eq!(&first, &second);

        for section in &first {
            prop_assert!(section.start() < section.end());
            prop_assert!(section.end() <= doc.children.len());
            prop_assert!(matches!(section.heading(), Node::Heading(_)));
            // The section's nodes always include at least the heading.
            prop_assert!(!section.nodes().is_empty());
        }

        // Section starts are strictly increasing in document order.
        for pair in first.windows(2) {
            prop_assert!(pair[0].start() < pair[1].start());
        }
    }

    #[test]
    fn proptest_narrow_range_sections_are_disjoint(
        pattern in prop::collection::vec(prop::option::of(1usize..=6), 0..40),
        level in 1usize..=6,
    ) {
        let doc = doc_from_pattern(&pattern);
        let sections = get_all_sections(&doc, level, level);
        for pair in sections.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start());
        }
    }

    #[test]
    fn proptest_list_nesting_preserves_items(
        stream in prop::collection::vec((any::<bool>(), 1usize..=5), 0..30),
    ) {
        let flat: Vec<FlatItem> = stream
            .iter()
            .enumerate()
            .map(|(i, (ordered, level))| {
                let kind = if *ordered { ListKind::Number } else { ListKind::Bullet };
                FlatItem::new(kind, *level, ListItem::from_text(format!("item {i}")))
            })
            .collect();
        let expected = flat.len();

        let lists = nest_flat_items(flat);

        fn count(list: &List) -> usize {
            list.items
                .iter()
                .map(|item| {
                    1 + item
                        .children
                        .iter()
                        .filter_map(|child| match child {
                            Node::List(nested) => Some(count(nested)),
                            _ => None,
                        })
                        .sum::<usize>()
                })
                .sum()
        }

        fn no_empty(list: &List) -> bool {
            !list.items.is_empty()
                && list.items.iter().all(|item| {
                    item.children.iter().all(|child| match child {
                        Node::List(nested) => no_empty(nested),
                        _ => true,
                    })
                })
        }

        let total: usize = lists.iter().map(count).sum();
        prop_assert_eq!(total, expected);
        prop_assert!(lists.iter().all(no_empty));
        prop_assert_eq!(lists.is_empty(), expected == 0);
    }

    #[test]
    fn proptest_grid_never_double_claims(
        rows in prop::collection::vec(
            prop::collection::vec((1usize..=4, 1usize..=4), 1..6),
            1..6,
        ),
    ) {
        let table = Table::new(
            None,
            rows.iter()
                .map(|cells| {
                    TableRow::new(
                        cells
                            .iter()
                            .map(|(colspan, rowspan)| {
                                TableCell::from_text("x").with_span(*colspan, *rowspan)
                            })
                            .collect(),
                    )
                })
                .collect(),
        );

        let grid = resolve_grid(&table);
        prop_assert_eq!(grid.num_rows, rows.len());

        // Anchors are unique positions.
        let mut anchors = std::collections::HashSet::new();
        for p in &grid.placements {
            prop_assert!(p.row < grid.num_rows);
            prop_assert!(p.col < grid.num_cols);
            prop_assert!(anchors.insert((p.row, p.col)), "duplicate anchor");
            prop_assert!(grid.is_occupied(p.row, p.col));
        }
    }

    #[test]
    fn proptest_document_json_round_trip(
        pattern in prop::collection::vec(prop::option::of(1usize..=6), 0..20),
        title in "[a-zA-Z0-9 ]{0,30}",
    ) {
        let mut doc = doc_from_pattern(&pattern);
        if !title.is_empty() {
            doc.set_title(title);
        }

        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, doc);
    }
}
