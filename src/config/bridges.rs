use std::collections::BTreeSet;

use crate::contour::bridge::bridge_candidates;
use crate::foundation::core::{CellCoord, GridPoint};
use crate::foundation::error::{ShapeError, ShapeResult};
use crate::grid::model::Grid;

/// Which diagonal of a 2x2 block is filled at a point-touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BridgeOrientation {
    /// Top-left and bottom-right cells filled.
    NwSe,
    /// Top-right and bottom-left cells filled.
    NeSw,
}

/// Unordered pair of diagonally adjacent cells.
///
/// Stored normalized with the upper cell first, so `(a, b)` and `(b, a)` compare equal.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "[(usize, usize); 2]", into = "[(usize, usize); 2]")]
pub struct Bridge {
    upper: CellCoord,
    lower: CellCoord,
}

impl Bridge {
    /// Pair two cells that differ by exactly one row and one column.
    pub fn new(a: CellCoord, b: CellCoord) -> ShapeResult<Self> {
        if a.row.abs_diff(b.row) != 1 || a.col.abs_diff(b.col) != 1 {
            return Err(ShapeError::validation(format!(
                "bridge cells ({}, {}) and ({}, {}) are not diagonal neighbors",
                a.row, a.col, b.row, b.col
            )));
        }
        let (upper, lower) = if a.row < b.row { (a, b) } else { (b, a) };
        Ok(Self { upper, lower })
    }

    /// Both cells, upper first.
    pub fn cells(&self) -> [CellCoord; 2] {
        [self.upper, self.lower]
    }

    /// The lattice vertex the two cells share.
    pub fn vertex(&self) -> GridPoint {
        GridPoint::new(self.upper.col.max(self.lower.col), self.lower.row)
    }

    /// Diagonal the pair occupies.
    pub fn orientation(&self) -> BridgeOrientation {
        if self.upper.col < self.lower.col {
            BridgeOrientation::NwSe
        } else {
            BridgeOrientation::NeSw
        }
    }
}

impl TryFrom<[(usize, usize); 2]> for Bridge {
    type Error = ShapeError;

    fn try_from([a, b]: [(usize, usize); 2]) -> ShapeResult<Self> {
        Self::new(CellCoord::new(a.0, a.1), CellCoord::new(b.0, b.1))
    }
}

impl From<Bridge> for [(usize, usize); 2] {
    fn from(b: Bridge) -> Self {
        b.cells().map(|c| (c.row, c.col))
    }
}

/// User-activated diagonal fillets.
///
/// Entries are preferences only; whether one renders is decided against the current grid on
/// every call, so an entry made stale by a later edit is inert rather than an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BridgeSet {
    entries: BTreeSet<Bridge>,
}

impl BridgeSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a bridge; `false` if it was already active.
    pub fn insert(&mut self, bridge: Bridge) -> bool {
        self.entries.insert(bridge)
    }

    /// Deactivate a bridge; `false` if it was not active.
    pub fn remove(&mut self, bridge: &Bridge) -> bool {
        self.entries.remove(bridge)
    }

    /// Whether `bridge` is activated.
    pub fn contains(&self, bridge: &Bridge) -> bool {
        self.entries.contains(bridge)
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is activated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in stable order.
    pub fn iter(&self) -> impl Iterator<Item = &Bridge> + '_ {
        self.entries.iter()
    }

    /// Drop entries that are no longer point-touch candidates in `grid`.
    ///
    /// Returns the number of entries removed.
    pub fn prune(&mut self, grid: &Grid) -> usize {
        let live: BTreeSet<Bridge> = bridge_candidates(grid)
            .into_iter()
            .map(|c| c.bridge)
            .collect();
        let before = self.entries.len();
        self.entries.retain(|b| live.contains(b));
        before - self.entries.len()
    }
}

impl FromIterator<Bridge> for BridgeSet {
    fn from_iter<I: IntoIterator<Item = Bridge>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/bridges.rs"]
mod tests;
