use std::fmt::Write as _;

/// Largest radius a corner may use, in grid units. Half a cell keeps every arc inside the
/// cell that owns the corner.
pub const MAX_RADIUS: f64 = 0.5;

/// Number of decimal places kept when serializing path coordinates.
pub const COORD_DECIMALS: i32 = 4;

/// Clamp a radius into `[0, MAX_RADIUS]`. NaN collapses to `0`.
pub fn clamp_radius(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, MAX_RADIUS)
}

/// Round to [`COORD_DECIMALS`] places. Negative zero is folded into `0.0`.
pub fn round_coord(v: f64) -> f64 {
    let scale = 10f64.powi(COORD_DECIMALS);
    let r = (v * scale).round() / scale;
    if r == 0.0 { 0.0 } else { r }
}

/// Append `v` rounded and printed with the fewest digits that round-trip.
pub(crate) fn write_coord(out: &mut String, v: f64) {
    let _ = write!(out, "{}", round_coord(v));
}

/// Format a single coordinate the way path data serializes it.
pub fn format_coord(v: f64) -> String {
    let mut s = String::new();
    write_coord(&mut s, v);
    s
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
