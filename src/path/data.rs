use std::fmt;

use crate::foundation::core::{BezPath, Point, Vec2};
use crate::foundation::math::{round_coord, write_coord};

/// Tolerance used when flattening elliptical arcs into cubic Béziers.
pub const ARC_TOLERANCE: f64 = 1e-3;

/// One vector path instruction, in output (already scaled) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo(Point),
    /// Straight segment.
    LineTo(Point),
    /// Axis-aligned elliptical arc with the small-arc flag and no rotation.
    ArcTo {
        /// Horizontal and vertical radii.
        radii: Vec2,
        /// SVG sweep flag: `true` for the positive-angle (clockwise on screen) direction.
        sweep: bool,
        /// End point.
        to: Point,
    },
    /// Close the current subpath.
    Close,
}

/// Ordered command list for one or more closed subpaths.
///
/// `Display` is the canonical serialization: commands separated by one space, numbers rounded
/// to four decimals with minimal digits, so equal inputs always give identical bytes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one command.
    pub fn push(&mut self, cmd: PathCommand) {
        self.commands.push(cmd);
    }

    /// Start a subpath.
    pub fn move_to(&mut self, p: Point) {
        self.push(PathCommand::MoveTo(p));
    }

    /// Straight segment to `p`.
    pub fn line_to(&mut self, p: Point) {
        self.push(PathCommand::LineTo(p));
    }

    /// Small elliptical arc to `to`.
    pub fn arc_to(&mut self, radii: Vec2, sweep: bool, to: Point) {
        self.push(PathCommand::ArcTo { radii, sweep, to });
    }

    /// Close the current subpath.
    pub fn close(&mut self) {
        self.push(PathCommand::Close);
    }

    /// Append every command of `other`.
    pub fn extend(&mut self, other: PathData) {
        self.commands.extend(other.commands);
    }

    /// Commands in order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// `true` when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of closed subpaths.
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::Close))
            .count()
    }

    /// Number of arc commands.
    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
            .count()
    }

    /// Canonical path-data string.
    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }

    /// Convert to a `kurbo` path, replacing arcs with cubic approximations.
    ///
    /// Coordinates are rounded exactly as in the string form so both describe the same shape.
    pub fn to_bez_path(&self) -> BezPath {
        let round = |p: Point| Point::new(round_coord(p.x), round_coord(p.y));
        let mut path = BezPath::new();
        let mut last = Point::ZERO;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    last = round(p);
                    path.move_to(last);
                }
                PathCommand::LineTo(p) => {
                    last = round(p);
                    path.line_to(last);
                }
                PathCommand::ArcTo { radii, sweep, to } => {
                    let to = round(to);
                    let svg = kurbo::SvgArc {
                        from: last,
                        to,
                        radii: Vec2::new(round_coord(radii.x), round_coord(radii.y)),
                        x_rotation: 0.0,
                        large_arc: false,
                        sweep,
                    };
                    match kurbo::Arc::from_svg_arc(&svg) {
                        Some(arc) => {
                            arc.to_cubic_beziers(ARC_TOLERANCE, |p1, p2, p| {
                                path.curve_to(p1, p2, p)
                            });
                        }
                        None => path.line_to(to),
                    }
                    last = to;
                }
                PathCommand::Close => path.close_path(),
            }
        }
        path
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match *cmd {
                PathCommand::MoveTo(p) => write_point(&mut out, 'M', p),
                PathCommand::LineTo(p) => write_point(&mut out, 'L', p),
                PathCommand::ArcTo { radii, sweep, to } => {
                    out.push('A');
                    write_coord(&mut out, radii.x);
                    out.push(' ');
                    write_coord(&mut out, radii.y);
                    out.push_str(if sweep { " 0 0 1 " } else { " 0 0 0 " });
                    write_coord(&mut out, to.x);
                    out.push(' ');
                    write_coord(&mut out, to.y);
                }
                PathCommand::Close => out.push('Z'),
            }
        }
        f.write_str(&out)
    }
}

fn write_point(out: &mut String, op: char, p: Point) {
    out.push(op);
    write_coord(out, p.x);
    out.push(' ');
    write_coord(out, p.y);
}

#[cfg(test)]
#[path = "../../tests/unit/path/data.rs"]
mod tests;
