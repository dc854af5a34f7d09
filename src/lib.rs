//! pixelshape turns a binary occupancy grid into a single SVG path with rounded corners.
//!
//! Every filled cell is a unit square; the union of filled squares is traced into closed
//! contours whose corners are rounded with circular arcs. Cells touching only at a corner can
//! optionally be joined with small concave fillets ("bridges").
//!
//! # Pipeline overview
//!
//! 1. **Extract**: `Grid -> Vec<Edge>` (unit boundary edges, filled side on the right)
//! 2. **Assemble**: `Vec<Edge> -> Vec<Contour>` (closed loops, right turns preferred)
//! 3. **Round**: `Contour -> Vec<Corner> -> PathData` (per-corner radii, convex and concave)
//! 4. **Bridge**: diagonal fillet fragments appended after every contour
//! 5. **Export** (optional): SVG markup or a PNG raster via `resvg`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: equal inputs produce byte-identical path data.
//! - **Total**: out-of-range radii are clamped and stale overrides or bridges are ignored;
//!   rendering never fails. Only document loading and export return errors.
//!
//! # Getting started
//!
//! ```
//! use pixelshape::{GlobalConfig, Grid, generate_path_data};
//!
//! let grid = Grid::parse("#").unwrap();
//! let d = generate_path_data(&grid, &GlobalConfig::sharp(), None, None);
//! assert_eq!(d, "M0 0 L1 0 L1 1 L0 1 L0 0 Z");
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod config;
mod contour;
mod document;
mod fingerprint;
mod foundation;
mod grid;
mod path;
mod render;

pub use config::bridges::{Bridge, BridgeOrientation, BridgeSet};
pub use config::overrides::{CellOverride, OverrideMap, RadiusLookup};
pub use config::settings::GlobalConfig;
pub use contour::assemble::{Contour, ContourKind, MIN_CONTOUR_EDGES, assemble_contours};
pub use contour::boundary::{Edge, extract_edges};
pub use contour::bridge::{BridgeCandidate, bridge_candidates, emit_bridges};
pub use contour::corners::{Corner, CornerKind, MIN_CORNERS, RadiusResolver, resolve_corners};
pub use document::ShapeDocument;
pub use fingerprint::{ShapeFingerprint, fingerprint_shape};
pub use foundation::core::{BezPath, CellCoord, Direction, GridPoint, Point, Rect, Turn, Vec2};
pub use foundation::error::{ShapeError, ShapeResult};
pub use foundation::math::{COORD_DECIMALS, MAX_RADIUS, clamp_radius, format_coord, round_coord};
pub use grid::bounds::{FilledBounds, filled_bounds};
pub use grid::model::Grid;
pub use path::data::{ARC_TOLERANCE, PathCommand, PathData};
pub use path::emit::emit_contour;
pub use render::export::{
    BASE_RESOLUTION, CELL_PIXELS, EMPTY_DOCUMENT, FILL_RULE, PixelScale, raster_size,
    svg_document_sized, svg_markup,
};
pub use render::pipeline::{Shape, ShapeRequest, generate_path_data, render_shape};
pub use render::raster::{MAX_DIM, encode_png, rasterize};
