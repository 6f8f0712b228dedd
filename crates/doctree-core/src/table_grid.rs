//! Table grid resolution for cells with column and row spans.
//!
//! Fixed-width-grid output targets need to know which grid cell every source
//! cell lands on and which cells a span shadows. [`resolve_grid`] computes an
//! occupancy grid from a table's rows: per row, walk left to right, skip
//! columns already claimed by an earlier row's rowspan, place the next cell
//! at the first free column, mark its span rectangle, and advance by its
//! colspan. No grid cell is ever claimed by two source cells.

use crate::node::Table;
use log::{debug, warn};

/// Where one source cell landed in the resolved grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPlacement {
    /// Source row index; 0 is the header row when the table has one
    pub source_row: usize,
    /// Cell index within the source row
    pub source_cell: usize,
    /// Grid row of the cell's anchor
    pub row: usize,
    /// Grid column of the cell's anchor
    pub col: usize,
    /// Declared row span (normalized to >= 1)
    pub rowspan: usize,
    /// Declared column span (normalized to >= 1)
    pub colspan: usize,
}

/// The resolved occupancy grid of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrid {
    /// Number of grid rows (header row included when present)
    pub num_rows: usize,
    /// Number of grid columns: the maximum reach of any row's walk
    pub num_cols: usize,
    /// `occupied[row][col]` is `true` when some cell claims that position
    pub occupied: Vec<Vec<bool>>,
    /// One placement per source cell that fit into the grid, in source order
    pub placements: Vec<CellPlacement>,
}

impl TableGrid {
    /// Checks whether a grid position is claimed by any cell.
    ///
    /// Out-of-bounds positions read as unoccupied.
    #[inline]
    #[must_use = "returns whether the position is occupied"]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.occupied
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Finds the placement of a source cell.
    #[must_use = "returns the placement of the source cell"]
    pub fn placement_for(&self, source_row: usize, source_cell: usize) -> Option<&CellPlacement> {
        self.placements
            .iter()
            .find(|p| p.source_row == source_row && p.source_cell == source_cell)
    }
}

/// Iterates the table's rows with the header (when present) first.
fn source_rows(table: &Table) -> impl Iterator<Item = &crate::node::TableRow> {
    table.header.iter().chain(table.rows.iter())
}

/// Resolves a table's cells into an occupancy grid.
///
/// Two passes. The first computes `num_cols` as the maximum column reachable
/// by any row's left-to-right walk (skipping columns shadowed by earlier
/// rowspans, advancing by colspan). The second places every cell into the
/// fixed `num_rows x num_cols` grid; span rectangles are clipped at the grid
/// edge, a position already claimed stays with its first claimant, and a row
/// that runs out of columns before exhausting its cells drops the excess.
///
/// Zero spans are a converter bug; they trip a debug assertion in
/// [`crate::TableCell::with_span`] and are treated as 1 here.
///
/// # Examples
///
/// ```rust
/// use doctree_core::{resolve_grid, Table, TableCell, TableRow};
///
/// let table = Table::new(
///     Some(TableRow::new(vec![TableCell::from_text("Span").with_span(2, 1)])),
///     vec![
///         TableRow::new(vec![TableCell::from_text("a"), TableCell::from_text("b")]),
///         TableRow::new(vec![TableCell::from_text("c"), TableCell::from_text("d")]),
///     ],
/// );
///
/// let grid = resolve_grid(&table);
/// assert_eq!(grid.num_rows, 3);
/// assert_eq!(grid.num_cols, 2);
/// assert!(grid.is_occupied(0, 1)); // shadowed by the header span
/// ```
#[must_use = "returns the resolved grid"]
pub fn resolve_grid(table: &Table) -> TableGrid {
    let num_rows = source_rows(table).count();

    // Pass 1: maximum reach of any row's walk, tracked with per-column
    // pending rowspan counters that grow as wide as needed.
    let mut pending: Vec<usize> = Vec::new();
    let mut num_cols = 0;
    for row in source_rows(table) {
        let mut col = 0;
        for cell in &row.cells {
            while col < pending.len() && pending[col] > 0 {
                col += 1;
            }
            let colspan = cell.colspan.max(1);
            let rowspan = cell.rowspan.max(1);
            let end = col + colspan;
            if pending.len() < end {
                pending.resize(end, 0);
            }
            for counter in &mut pending[col..end] {
                *counter = (*counter).max(rowspan);
            }
            col = end;
        }
        num_cols = num_cols.max(col);
        for counter in &mut pending {
            *counter = counter.saturating_sub(1);
        }
    }

    // Pass 2: place cells into the fixed grid.
    let mut occupied = vec![vec![false; num_cols]; num_rows];
    let mut placements = Vec::new();

    for (row_idx, row) in source_rows(table).enumerate() {
        let mut col = 0;
        for (cell_idx, cell) in row.cells.iter().enumerate() {
            while col < num_cols && occupied[row_idx][col] {
                col += 1;
            }
            if col >= num_cols {
                let dropped = row.cells.len() - cell_idx;
                warn!("table row {row_idx} wider than resolved grid: dropping {dropped} cell(s)");
                break;
            }

            let colspan = cell.colspan.max(1);
            let rowspan = cell.rowspan.max(1);
            debug_assert!(
                cell.colspan >= 1 && cell.rowspan >= 1,
                "cell spans must be at least 1"
            );

            for r in row_idx..(row_idx + rowspan).min(num_rows) {
                for c in col..(col + colspan).min(num_cols) {
                    if occupied[r][c] {
                        // First claimant wins; a span overlapping an earlier
                        // claim does not steal the position.
                        debug!("span overlap at grid position ({r}, {c}); keeping first claimant");
                    } else {
                        occupied[r][c] = true;
                    }
                }
            }

            placements.push(CellPlacement {
                source_row: row_idx,
                source_cell: cell_idx,
                row: row_idx,
                col,
                rowspan,
                colspan,
            });
            col += colspan;
        }
    }

    TableGrid {
        num_rows,
        num_cols,
        occupied,
        placements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{TableCell, TableRow};

    fn cell(text: &str) -> TableCell {
        TableCell::from_text(text)
    }

    fn row(cells: Vec<TableCell>) -> TableRow {
        TableRow::new(cells)
    }

    #[test]
    fn test_plain_grid() {
        let table = Table::new(
            None,
            vec![
                row(vec![cell("a"), cell("b"), cell("c")]),
                row(vec![cell("d"), cell("e"), cell("f")]),
            ],
        );

        let grid = resolve_grid(&table);
        assert_eq!(grid.num_rows, 2);
        assert_eq!(grid.num_cols, 3);
        assert_eq!(grid.placements.len(), 6);
        assert!(grid.occupied.iter().flatten().all(|&o| o));
    }

    #[test]
    fn test_header_colspan_over_two_data_columns() {
        let table = Table::new(
            Some(row(vec![cell("Span").with_span(2, 1)])),
            vec![
                row(vec![cell("a"), cell("b")]),
                row(vec![cell("c"), cell("d")]),
            ],
        );

        let grid = resolve_grid(&table);
        assert_eq!(grid.num_rows, 3);
        assert_eq!(grid.num_cols, 2);

        // Every grid position claimed exactly once: 5 placements cover
        // 1x2 + 4x1 = 6 positions with no overlap.
        assert_eq!(grid.placements.len(), 5);
        assert!(grid.occupied.iter().flatten().all(|&o| o));
    }

    #[test]
    fn test_rowspan_shifts_later_rows() {
        let table = Table::new(
            None,
            vec![
                row(vec![cell("tall").with_span(1, 2), cell("r0c1")]),
                row(vec![cell("r1c1")]),
            ],
        );

        let grid = resolve_grid(&table);
        assert_eq!(grid.num_cols, 2);

        // The single cell of row 1 lands in column 1, shifted past the span.
        let placement = grid.placement_for(1, 0).unwrap();
        assert_eq!(placement.col, 1);
        assert!(grid.is_occupied(1, 0));
    }

    #[test]
    fn test_no_double_claim() {
        let table = Table::new(
            None,
            vec![
                row(vec![cell("a").with_span(2, 2), cell("b")]),
                row(vec![cell("c")]),
                row(vec![cell("d"), cell("e"), cell("f")]),
            ],
        );

        let grid = resolve_grid(&table);

        // Count claims by replaying placements; every occupied position must
        // be covered by exactly one placement rectangle after clipping.
        let mut claims = vec![vec![0usize; grid.num_cols]; grid.num_rows];
        for p in &grid.placements {
            for r in p.row..(p.row + p.rowspan).min(grid.num_rows) {
                for c in p.col..(p.col + p.colspan).min(grid.num_cols) {
                    claims[r][c] += 1;
                }
            }
        }
        for row_claims in &claims {
            for &count in row_claims {
                assert!(count <= 1, "grid position claimed {count} times");
            }
        }
    }

    #[test]
    fn test_shadowed_row_widens_grid_to_its_reach() {
        // Row 1 starts shadowed by the rowspan, so its two cells walk out to
        // column 2 and the grid is three wide.
        let table = Table::new(
            None,
            vec![
                row(vec![cell("tall").with_span(1, 2), cell("b")]),
                row(vec![cell("x"), cell("y")]),
            ],
        );

        let grid = resolve_grid(&table);
        assert_eq!(grid.num_cols, 3);
        assert_eq!(grid.placement_for(1, 0).unwrap().col, 1);
        assert_eq!(grid.placement_for(1, 1).unwrap().col, 2);
        // Position (0, 2) was never reached by row 0 and stays free.
        assert!(!grid.is_occupied(0, 2));
    }

    #[test]
    fn test_empty_table() {
        let grid = resolve_grid(&Table::new(None, vec![]));
        assert_eq!(grid.num_rows, 0);
        assert_eq!(grid.num_cols, 0);
        assert!(grid.placements.is_empty());
        assert!(!grid.is_occupied(0, 0));
    }

    #[test]
    fn test_rowspan_clipped_at_grid_edge() {
        let table = Table::new(None, vec![row(vec![cell("overshoot").with_span(1, 5)])]);

        let grid = resolve_grid(&table);
        assert_eq!(grid.num_rows, 1);
        assert_eq!(grid.num_cols, 1);
        assert!(grid.is_occupied(0, 0));
    }
}
