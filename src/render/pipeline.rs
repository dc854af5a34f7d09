use crate::config::bridges::BridgeSet;
use crate::config::overrides::RadiusLookup;
use crate::config::settings::GlobalConfig;
use crate::contour::assemble::assemble_contours;
use crate::contour::boundary::extract_edges;
use crate::contour::bridge::emit_bridges;
use crate::contour::corners::{RadiusResolver, resolve_corners};
use crate::foundation::core::{Rect, Vec2};
use crate::grid::bounds::{FilledBounds, filled_bounds};
use crate::grid::model::Grid;
use crate::path::data::PathData;
use crate::path::emit::emit_contour;

/// Everything one render reads. Borrowed, never mutated.
#[derive(Clone, Copy)]
pub struct ShapeRequest<'a> {
    /// Occupancy grid.
    pub grid: &'a Grid,
    /// Global radii, bridge toggle and scale.
    pub config: &'a GlobalConfig,
    /// Optional per-cell overrides.
    pub overrides: Option<&'a dyn RadiusLookup>,
    /// Optional user-activated bridges; `None` activates every candidate.
    pub bridges: Option<&'a BridgeSet>,
}

impl<'a> ShapeRequest<'a> {
    /// Request with no overrides and no bridge selection.
    pub fn new(grid: &'a Grid, config: &'a GlobalConfig) -> Self {
        Self {
            grid,
            config,
            overrides: None,
            bridges: None,
        }
    }

    /// Attach a per-cell override source.
    pub fn with_overrides(mut self, overrides: &'a dyn RadiusLookup) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Restrict bridges to the given set.
    pub fn with_bridges(mut self, bridges: &'a BridgeSet) -> Self {
        self.bridges = Some(bridges);
        self
    }
}

/// Result of one render.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// Contours followed by bridge fragments.
    pub path: PathData,
    /// Contours that produced geometry.
    pub contours: usize,
    /// Bridges drawn.
    pub bridges: usize,
    /// Tight cell-space crop; `None` means there is nothing to render.
    pub bounds: Option<FilledBounds>,
    /// Stretch the path was emitted with.
    pub scale: Vec2,
}

impl Shape {
    /// Canonical path-data string; empty when there is nothing to draw.
    pub fn path_data(&self) -> String {
        self.path.to_string()
    }

    /// `true` when the render produced no geometry.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Crop rectangle in path coordinates: the filled bounds stretched by `scale`.
    pub fn view_box(&self) -> Option<Rect> {
        self.bounds.map(|b| {
            let r = b.to_rect();
            Rect::new(
                r.x0 * self.scale.x,
                r.y0 * self.scale.y,
                r.x1 * self.scale.x,
                r.y1 * self.scale.y,
            )
        })
    }
}

/// Run the full grid-to-path pipeline.
///
/// 1. [`extract_edges`]: unit boundary edges around filled cells
/// 2. [`assemble_contours`]: closed loops, right turns first
/// 3. [`resolve_corners`] + [`emit_contour`]: rounded subpaths
/// 4. [`emit_bridges`]: diagonal fillets appended after every contour
///
/// Pure and synchronous: the output depends only on the request, so equal requests produce
/// byte-identical path data.
#[tracing::instrument(skip(req), fields(rows = req.grid.rows(), cols = req.grid.cols()))]
pub fn render_shape(req: ShapeRequest<'_>) -> Shape {
    let edges = extract_edges(req.grid);
    let contours = assemble_contours(&edges);
    let radii = RadiusResolver::new(req.grid, req.config, req.overrides);
    let scale = req.config.scale();

    let mut path = PathData::new();
    let mut drawn = 0;
    for contour in &contours {
        if let Some(corners) = resolve_corners(contour, &radii) {
            emit_contour(&corners, scale, &mut path);
            drawn += 1;
        }
    }

    let bridges = emit_bridges(req.grid, req.config, req.bridges, &mut path);

    tracing::debug!(edges = edges.len(), contours = drawn, bridges, "shape rendered");

    Shape {
        path,
        contours: drawn,
        bridges,
        bounds: filled_bounds(req.grid),
        scale,
    }
}

/// Convenience wrapper returning only the path-data string.
pub fn generate_path_data(
    grid: &Grid,
    config: &GlobalConfig,
    overrides: Option<&dyn RadiusLookup>,
    bridges: Option<&BridgeSet>,
) -> String {
    render_shape(ShapeRequest {
        grid,
        config,
        overrides,
        bridges,
    })
    .path_data()
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
