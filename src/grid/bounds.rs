use crate::foundation::core::Rect;
use crate::grid::model::Grid;

/// Tight cell-space box around every filled cell.
///
/// `min_*` are inclusive, `max_*` exclusive, so `max_col - min_col` is the width in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FilledBounds {
    /// First filled row.
    pub min_row: usize,
    /// One past the last filled row.
    pub max_row: usize,
    /// First filled column.
    pub min_col: usize,
    /// One past the last filled column.
    pub max_col: usize,
}

impl FilledBounds {
    /// Width in cells (never zero).
    pub fn width(&self) -> usize {
        self.max_col - self.min_col
    }

    /// Height in cells (never zero).
    pub fn height(&self) -> usize {
        self.max_row - self.min_row
    }

    /// Same box in lattice units.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.min_col as f64,
            self.min_row as f64,
            self.max_col as f64,
            self.max_row as f64,
        )
    }
}

/// Bounding box of the filled cells, or `None` when nothing is filled.
pub fn filled_bounds(grid: &Grid) -> Option<FilledBounds> {
    grid.filled_cells().fold(None, |acc, cell| {
        Some(match acc {
            None => FilledBounds {
                min_row: cell.row,
                max_row: cell.row + 1,
                min_col: cell.col,
                max_col: cell.col + 1,
            },
            Some(b) => FilledBounds {
                min_row: b.min_row.min(cell.row),
                max_row: b.max_row.max(cell.row + 1),
                min_col: b.min_col.min(cell.col),
                max_col: b.max_col.max(cell.col + 1),
            },
        })
    })
}

#[cfg(test)]
#[path = "../../tests/unit/grid/bounds.rs"]
mod tests;
