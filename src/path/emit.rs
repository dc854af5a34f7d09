use crate::contour::corners::{Corner, CornerKind};
use crate::foundation::core::{Point, Vec2};
use crate::path::data::PathData;

fn scaled(p: Point, scale: Vec2) -> Point {
    Point::new(p.x * scale.x, p.y * scale.y)
}

/// Where the rounded corner's arc ends and the next straight run begins.
fn departure(c: &Corner) -> Point {
    c.vertex.to_point() + c.outgoing.to_vec2() * c.radius
}

/// Where the straight run ends and the rounded corner's arc begins.
fn arrival(c: &Corner) -> Point {
    c.vertex.to_point() - c.incoming.to_vec2() * c.radius
}

/// Emit one closed subpath for a contour's corners.
///
/// Starts at the first corner's departure point and visits the remaining corners in order,
/// finishing with the first corner again before closing. Convex corners sweep clockwise on
/// screen and concave corners counter-clockwise; a zero radius becomes a plain line to the
/// vertex.
pub fn emit_contour(corners: &[Corner], scale: Vec2, out: &mut PathData) {
    let Some(first) = corners.first() else {
        return;
    };

    out.move_to(scaled(departure(first), scale));

    for c in corners.iter().skip(1).chain(std::iter::once(first)) {
        if c.radius > 0.0 {
            out.line_to(scaled(arrival(c), scale));
            out.arc_to(
                Vec2::new(c.radius * scale.x, c.radius * scale.y),
                c.kind == CornerKind::Convex,
                scaled(departure(c), scale),
            );
        } else {
            out.line_to(scaled(c.vertex.to_point(), scale));
        }
    }

    out.close();
}

#[cfg(test)]
#[path = "../../tests/unit/path/emit.rs"]
mod tests;
