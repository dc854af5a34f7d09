use crate::foundation::core::CellCoord;
use crate::foundation::error::{ShapeError, ShapeResult};

/// Rectangular boolean occupancy matrix.
///
/// Every row has the same column count; storage is a dense row-major `Vec<bool>`.
/// Serialized as one string per row, `#` for a filled cell and `.` for an empty one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Character used for filled cells in the text form.
    pub const FILLED: char = '#';
    /// Character used for empty cells in the text form.
    pub const EMPTY: char = '.';

    /// Create an all-empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Build from nested rows. Fails when rows disagree on their length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> ShapeResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let n_rows = rows.len();
        let mut cells = Vec::with_capacity(n_rows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(ShapeError::validation(format!(
                    "grid row {i} has {} columns, expected {cols}",
                    row.len()
                )));
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols,
            cells,
        })
    }

    /// Parse the text form: one line per row, `#` filled, `.` empty.
    ///
    /// Leading/trailing whitespace on each line is ignored, as are blank lines.
    pub fn parse(text: &str) -> ShapeResult<Self> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .enumerate()
            .map(|(r, line)| {
                line.chars()
                    .enumerate()
                    .map(|(c, ch)| match ch {
                        Self::FILLED => Ok(true),
                        Self::EMPTY => Ok(false),
                        other => Err(ShapeError::validation(format!(
                            "grid cell ({r}, {c}) has invalid character {other:?}"
                        ))),
                    })
                    .collect::<ShapeResult<Vec<bool>>>()
            })
            .collect::<ShapeResult<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Occupancy of an in-bounds cell, `None` outside the grid.
    pub fn get(&self, cell: CellCoord) -> Option<bool> {
        if cell.row < self.rows && cell.col < self.cols {
            Some(self.cells[cell.row * self.cols + cell.col])
        } else {
            None
        }
    }

    /// Signed occupancy probe. Anything outside the grid reads as empty.
    pub fn is_filled(&self, row: isize, col: isize) -> bool {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => self.get(CellCoord::new(row, col)).unwrap_or(false),
            _ => false,
        }
    }

    /// Occupancy of `cell`, treating out-of-bounds as empty.
    pub fn filled(&self, cell: CellCoord) -> bool {
        self.get(cell).unwrap_or(false)
    }

    /// Occupancy of the neighbor at a signed offset from `cell`.
    pub fn neighbor_filled(&self, cell: CellCoord, d_row: isize, d_col: isize) -> bool {
        cell.offset(d_row, d_col).is_some_and(|n| self.filled(n))
    }

    /// Set one cell. Fails for out-of-bounds coordinates.
    pub fn set(&mut self, cell: CellCoord, filled: bool) -> ShapeResult<()> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return Err(ShapeError::validation(format!(
                "cell ({}, {}) is outside a {}x{} grid",
                cell.row, cell.col, self.rows, self.cols
            )));
        }
        self.cells[cell.row * self.cols + cell.col] = filled;
        Ok(())
    }

    /// Filled cells in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, f)| **f)
            .map(move |(i, _)| CellCoord::new(i / cols, i % cols))
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|f| **f).count()
    }

    /// `true` when no cell is filled.
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|f| *f)
    }

    /// Copy into a grid of a new size, keeping the overlapping top-left region.
    pub fn resized(&self, rows: usize, cols: usize) -> Self {
        let mut out = Self::new(rows, cols);
        for r in 0..self.rows.min(rows) {
            for c in 0..self.cols.min(cols) {
                out.cells[r * cols + c] = self.cells[r * self.cols + c];
            }
        }
        out
    }

    /// Text form, one line per row.
    pub fn to_text_rows(&self) -> Vec<String> {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| {
                        if self.cells[r * self.cols + c] {
                            Self::FILLED
                        } else {
                            Self::EMPTY
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = ShapeError;

    fn try_from(rows: Vec<String>) -> ShapeResult<Self> {
        if rows.iter().any(|r| r.trim().is_empty()) {
            return Err(ShapeError::validation("grid rows must not be blank"));
        }
        Self::parse(&rows.join("\n"))
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.to_text_rows()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/model.rs"]
mod tests;
