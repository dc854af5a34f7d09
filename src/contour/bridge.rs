use crate::config::bridges::{Bridge, BridgeOrientation, BridgeSet};
use crate::config::settings::GlobalConfig;
use crate::foundation::core::{CellCoord, GridPoint, Point, Vec2};
use crate::grid::model::Grid;
use crate::path::data::PathData;

/// A vertex where two filled cells touch only diagonally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BridgeCandidate {
    /// Shared lattice vertex.
    pub vertex: GridPoint,
    /// The two filled cells, as a bridge key.
    pub bridge: Bridge,
}

impl BridgeCandidate {
    /// Signs `(sx, sy)` of the two empty quadrants around the vertex.
    fn empty_quadrants(&self) -> [(f64, f64); 2] {
        match self.bridge.orientation() {
            BridgeOrientation::NwSe => [(1.0, -1.0), (-1.0, 1.0)],
            BridgeOrientation::NeSw => [(-1.0, -1.0), (1.0, 1.0)],
        }
    }
}

/// Every interior vertex where exactly one diagonal pair is filled and the other pair empty.
///
/// Vertices are visited row-major, so the result order is stable for a given grid.
pub fn bridge_candidates(grid: &Grid) -> Vec<BridgeCandidate> {
    let mut out = Vec::new();
    for y in 1..grid.rows() {
        for x in 1..grid.cols() {
            let (r, c) = (y as isize, x as isize);
            let nw = grid.is_filled(r - 1, c - 1);
            let ne = grid.is_filled(r - 1, c);
            let sw = grid.is_filled(r, c - 1);
            let se = grid.is_filled(r, c);

            let pair = if nw && se && !ne && !sw {
                (CellCoord::new(y - 1, x - 1), CellCoord::new(y, x))
            } else if ne && sw && !nw && !se {
                (CellCoord::new(y - 1, x), CellCoord::new(y, x - 1))
            } else {
                continue;
            };
            // Diagonal by construction.
            if let Ok(bridge) = Bridge::new(pair.0, pair.1) {
                out.push(BridgeCandidate {
                    vertex: GridPoint::new(x, y),
                    bridge,
                });
            }
        }
    }
    out
}

/// Append fillet fragments for every active bridge; returns how many bridges were drawn.
///
/// Nothing is drawn unless bridging is enabled with a positive radius. With `active = None`
/// every candidate is drawn; otherwise only candidates named in the set. Set entries that no
/// longer match a candidate are skipped.
///
/// Each bridge adds two closed fragments, one per empty quadrant. A fragment runs from the
/// vertex along the horizontal cell edge, arcs around the quadrant's far corner to the
/// vertical cell edge, and closes at the vertex, filling the pinch with a concave fillet.
pub fn emit_bridges(
    grid: &Grid,
    config: &GlobalConfig,
    active: Option<&BridgeSet>,
    out: &mut PathData,
) -> usize {
    let Some(radius) = config.effective_bridge_radius() else {
        return 0;
    };
    let scale = config.scale();
    let candidates = bridge_candidates(grid);

    if let Some(set) = active {
        for stale in set
            .iter()
            .filter(|b| !candidates.iter().any(|c| c.bridge == **b))
        {
            tracing::trace!(vertex = ?stale.vertex(), "skipping stale bridge");
        }
    }

    let mut drawn = 0;
    for cand in candidates
        .iter()
        .filter(|c| active.is_none_or(|set| set.contains(&c.bridge)))
    {
        let v = cand.vertex.to_point();
        let at = |dx: f64, dy: f64| Point::new((v.x + dx) * scale.x, (v.y + dy) * scale.y);
        for (sx, sy) in cand.empty_quadrants() {
            out.move_to(at(0.0, 0.0));
            out.line_to(at(sx * radius, 0.0));
            out.arc_to(
                Vec2::new(radius * scale.x, radius * scale.y),
                sx * sy < 0.0,
                at(0.0, sy * radius),
            );
            out.close();
        }
        drawn += 1;
    }
    drawn
}

#[cfg(test)]
#[path = "../../tests/unit/contour/bridge.rs"]
mod tests;
