use crate::foundation::core::{CellCoord, Direction, GridPoint};
use crate::grid::model::Grid;

/// Unit boundary segment between two lattice vertices.
///
/// Orientation keeps the owning filled cell on the right-hand side of travel (y-down), so
/// outer boundaries run clockwise on screen and holes run counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Tail vertex.
    pub start: GridPoint,
    /// Head vertex.
    pub end: GridPoint,
    /// Travel direction from `start` to `end`.
    pub dir: Direction,
    /// Filled cell this edge bounds.
    pub cell: CellCoord,
}

/// Emit one edge for every side of a filled cell that faces an empty or out-of-grid neighbor.
///
/// Cells are visited row-major and sides in top, right, bottom, left order, which fixes the
/// output order (and therefore contour seeding) for a given grid.
pub fn extract_edges(grid: &Grid) -> Vec<Edge> {
    let mut edges = Vec::new();
    for cell in grid.filled_cells() {
        let (x, y) = (cell.col, cell.row);
        let tl = GridPoint::new(x, y);
        let tr = GridPoint::new(x + 1, y);
        let br = GridPoint::new(x + 1, y + 1);
        let bl = GridPoint::new(x, y + 1);

        let sides = [
            (-1, 0, tl, tr, Direction::East),
            (0, 1, tr, br, Direction::South),
            (1, 0, br, bl, Direction::West),
            (0, -1, bl, tl, Direction::North),
        ];
        for (d_row, d_col, start, end, dir) in sides {
            if !grid.neighbor_filled(cell, d_row, d_col) {
                edges.push(Edge {
                    start,
                    end,
                    dir,
                    cell,
                });
            }
        }
    }
    edges
}

#[cfg(test)]
#[path = "../../tests/unit/contour/boundary.rs"]
mod tests;
