use std::collections::HashMap;

use crate::contour::boundary::Edge;
use crate::foundation::core::GridPoint;

/// Fewest edges a closed boundary can have (one isolated cell).
pub const MIN_CONTOUR_EDGES: usize = 4;

/// Whether a contour bounds filled area from outside or a hole from inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContourKind {
    /// Clockwise on screen.
    Outer,
    /// Counter-clockwise on screen.
    Hole,
}

/// Closed, ordered cycle of boundary edges; each edge's end is the next edge's start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contour {
    edges: Vec<Edge>,
}

impl Contour {
    /// Edges in traversal order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of unit edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Always `false` for assembled contours; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Shoelace area in lattice units; positive for clockwise (y-down) loops.
    pub fn signed_area(&self) -> i64 {
        let twice: i64 = self
            .edges
            .iter()
            .map(|e| {
                let (x0, y0) = (e.start.x as i64, e.start.y as i64);
                let (x1, y1) = (e.end.x as i64, e.end.y as i64);
                x0 * y1 - x1 * y0
            })
            .sum();
        twice / 2
    }

    /// Outer boundary or hole, from winding.
    pub fn kind(&self) -> ContourKind {
        if self.signed_area() >= 0 {
            ContourKind::Outer
        } else {
            ContourKind::Hole
        }
    }
}

/// Link boundary edges into closed contours.
///
/// Seeds are taken in input order. From each edge the walk continues with an unused edge
/// leaving its end vertex, preferring a right turn, then straight, then left (see
/// [`crate::Turn::rank`]). Where several boundaries pinch at one vertex this
/// keeps each loop wrapped tightly around its own filled cells, separating holes and diagonal
/// islands. Walks shorter than [`MIN_CONTOUR_EDGES`] are discarded.
pub fn assemble_contours(edges: &[Edge]) -> Vec<Contour> {
    let mut by_start: HashMap<GridPoint, Vec<usize>> = HashMap::new();
    for (i, e) in edges.iter().enumerate() {
        by_start.entry(e.start).or_default().push(i);
    }

    let mut used = vec![false; edges.len()];
    let mut contours = Vec::new();

    for seed in 0..edges.len() {
        if used[seed] {
            continue;
        }

        let mut walk = Vec::new();
        let mut current = seed;
        loop {
            used[current] = true;
            walk.push(edges[current]);

            let cur = &edges[current];
            let next = by_start
                .get(&cur.end)
                .into_iter()
                .flatten()
                .copied()
                .filter(|&i| !used[i] || i == seed)
                .min_by_key(|&i| cur.dir.turn_to(edges[i].dir).rank());

            match next {
                Some(i) if i != seed => current = i,
                _ => break,
            }
        }

        if walk.len() >= MIN_CONTOUR_EDGES {
            contours.push(Contour { edges: walk });
        }
    }

    contours
}

#[cfg(test)]
#[path = "../../tests/unit/contour/assemble.rs"]
mod tests;
