use crate::config::overrides::{CellOverride, RadiusLookup};
use crate::config::settings::GlobalConfig;
use crate::contour::assemble::Contour;
use crate::foundation::core::{CellCoord, Direction, GridPoint, Turn};
use crate::foundation::math::clamp_radius;
use crate::grid::model::Grid;

/// Fewer corners than this cannot enclose area.
pub const MIN_CORNERS: usize = 3;

/// Which way a contour bends at a corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CornerKind {
    /// Turns toward the filled side; rounds the silhouette.
    Convex,
    /// Turns away from the filled side; blends a notch.
    Concave,
}

/// Direction change on a contour, with its resolved rounding radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corner {
    /// Lattice vertex where the direction changes.
    pub vertex: GridPoint,
    /// Direction arriving at the vertex.
    pub incoming: Direction,
    /// Direction leaving the vertex.
    pub outgoing: Direction,
    /// Convex or concave.
    pub kind: CornerKind,
    /// Filled cell owning the arriving edge.
    pub cell: CellCoord,
    /// Radius in grid units, already clamped to `[0, 0.5]`.
    pub radius: f64,
}

/// Resolves effective corner radii from globals and optional per-cell overrides.
#[derive(Clone, Copy)]
pub struct RadiusResolver<'a> {
    grid: &'a Grid,
    corner_radius: f64,
    inner_radius: f64,
    overrides: Option<&'a dyn RadiusLookup>,
}

impl<'a> RadiusResolver<'a> {
    /// Capture the grid, clamped defaults and lookup for one render.
    pub fn new(
        grid: &'a Grid,
        config: &GlobalConfig,
        overrides: Option<&'a dyn RadiusLookup>,
    ) -> Self {
        Self {
            grid,
            corner_radius: config.effective_corner_radius(),
            inner_radius: config.effective_inner_radius(),
            overrides,
        }
    }

    /// Overrides only count for filled in-bounds cells.
    fn lookup(&self, cell: CellCoord) -> Option<CellOverride> {
        self.overrides
            .filter(|_| self.grid.filled(cell))
            .and_then(|o| o.lookup(cell))
    }

    /// Radius of a convex corner owned by `cell`.
    pub fn convex(&self, cell: CellCoord) -> f64 {
        self.lookup(cell)
            .map_or(self.corner_radius, |o| clamp_radius(o.corner_radius))
    }

    /// Radius of a concave corner at `vertex`.
    ///
    /// The strongest inner radius among the filled cells touching the vertex wins, so one cell
    /// asking for a blend is never flattened by a neutral neighbor.
    pub fn concave(&self, vertex: GridPoint) -> f64 {
        vertex
            .surrounding_cells()
            .into_iter()
            .flatten()
            .filter(|c| self.grid.filled(*c))
            .map(|c| {
                self.lookup(c)
                    .map_or(self.inner_radius, |o| clamp_radius(o.inner_radius))
            })
            .fold(0.0, f64::max)
    }
}

/// Corners of `contour` in traversal order, starting at the first edge.
///
/// Straight runs are merged and contribute nothing. Returns `None` when fewer than
/// [`MIN_CORNERS`] remain.
pub fn resolve_corners(contour: &Contour, radii: &RadiusResolver<'_>) -> Option<Vec<Corner>> {
    let edges = contour.edges();
    let n = edges.len();
    let mut corners = Vec::new();

    for i in 0..n {
        let prev = &edges[(i + n - 1) % n];
        let cur = &edges[i];
        let kind = match prev.dir.turn_to(cur.dir) {
            Turn::Straight => continue,
            Turn::Right => CornerKind::Convex,
            // Reverse cannot occur on a closed boundary; treat it as a notch.
            Turn::Left | Turn::Reverse => CornerKind::Concave,
        };
        let radius = match kind {
            CornerKind::Convex => radii.convex(prev.cell),
            CornerKind::Concave => radii.concave(cur.start),
        };
        corners.push(Corner {
            vertex: cur.start,
            incoming: prev.dir,
            outgoing: cur.dir,
            kind,
            cell: prev.cell,
            radius,
        });
    }

    (corners.len() >= MIN_CORNERS).then_some(corners)
}

#[cfg(test)]
#[path = "../../tests/unit/contour/corners.rs"]
mod tests;
