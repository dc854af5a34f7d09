use std::collections::BTreeMap;

use crate::config::settings::GlobalConfig;
use crate::foundation::core::CellCoord;
use crate::grid::model::Grid;

/// Per-cell radius customization. Values are clamped at resolve time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CellOverride {
    /// Convex radius for corners owned by this cell.
    pub corner_radius: f64,
    /// Concave radius this cell contributes to the vertices it touches.
    pub inner_radius: f64,
}

impl CellOverride {
    /// Seed a record from the current global defaults.
    pub fn from_defaults(config: &GlobalConfig) -> Self {
        Self {
            corner_radius: config.corner_radius,
            inner_radius: config.inner_radius,
        }
    }
}

/// Source of per-cell overrides consulted while resolving corner radii.
///
/// Implementations must answer `None` for cells they know nothing about, including
/// out-of-bounds or stale coordinates.
pub trait RadiusLookup {
    /// Override for `cell`, if one exists.
    fn lookup(&self, cell: CellCoord) -> Option<CellOverride>;
}

impl<F> RadiusLookup for F
where
    F: Fn(CellCoord) -> Option<CellOverride>,
{
    fn lookup(&self, cell: CellCoord) -> Option<CellOverride> {
        self(cell)
    }
}

/// Sparse override storage keyed structurally by cell coordinate.
///
/// Serialized as a list of `{row, col, corner_radius, inner_radius}` records.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<OverrideEntry>", into = "Vec<OverrideEntry>")]
pub struct OverrideMap {
    entries: BTreeMap<CellCoord, CellOverride>,
}

impl OverrideMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an override, returning the previous one.
    pub fn insert(&mut self, cell: CellCoord, value: CellOverride) -> Option<CellOverride> {
        self.entries.insert(cell, value)
    }

    /// Override stored for `cell`.
    pub fn get(&self, cell: CellCoord) -> Option<&CellOverride> {
        self.entries.get(&cell)
    }

    /// Drop the override for `cell` so it inherits the globals again.
    pub fn reset(&mut self, cell: CellCoord) -> Option<CellOverride> {
        self.entries.remove(&cell)
    }

    /// Set only the convex radius. A fresh record copies the other field from `defaults`.
    pub fn set_corner_radius(&mut self, cell: CellCoord, value: f64, defaults: &GlobalConfig) {
        self.entries
            .entry(cell)
            .or_insert_with(|| CellOverride::from_defaults(defaults))
            .corner_radius = value;
    }

    /// Set only the concave radius. A fresh record copies the other field from `defaults`.
    pub fn set_inner_radius(&mut self, cell: CellCoord, value: f64, defaults: &GlobalConfig) {
        self.entries
            .entry(cell)
            .or_insert_with(|| CellOverride::from_defaults(defaults))
            .inner_radius = value;
    }

    /// Drop overrides whose cell is out of bounds or empty; returns how many were removed.
    pub fn retain_filled(&mut self, grid: &Grid) -> usize {
        let before = self.entries.len();
        self.entries.retain(|cell, _| grid.filled(*cell));
        before - self.entries.len()
    }

    /// Number of overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no cell is customized.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overrides in row-major cell order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, CellOverride)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }
}

impl RadiusLookup for OverrideMap {
    fn lookup(&self, cell: CellCoord) -> Option<CellOverride> {
        self.entries.get(&cell).copied()
    }
}

impl FromIterator<(CellCoord, CellOverride)> for OverrideMap {
    fn from_iter<I: IntoIterator<Item = (CellCoord, CellOverride)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideEntry {
    row: usize,
    col: usize,
    corner_radius: f64,
    inner_radius: f64,
}

impl From<Vec<OverrideEntry>> for OverrideMap {
    fn from(entries: Vec<OverrideEntry>) -> Self {
        entries
            .into_iter()
            .map(|e| {
                (
                    CellCoord::new(e.row, e.col),
                    CellOverride {
                        corner_radius: e.corner_radius,
                        inner_radius: e.inner_radius,
                    },
                )
            })
            .collect()
    }
}

impl From<OverrideMap> for Vec<OverrideEntry> {
    fn from(map: OverrideMap) -> Self {
        map.iter()
            .map(|(cell, o)| OverrideEntry {
                row: cell.row,
                col: cell.col,
                corner_radius: o.corner_radius,
                inner_radius: o.inner_radius,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/overrides.rs"]
mod tests;
