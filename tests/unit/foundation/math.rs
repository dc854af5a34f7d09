use super::*;

#[test]
fn clamp_radius_bounds_and_nan() {
    assert_eq!(clamp_radius(-1.0), 0.0);
    assert_eq!(clamp_radius(0.3), 0.3);
    assert_eq!(clamp_radius(9.0), 0.5);
    assert_eq!(clamp_radius(f64::NAN), 0.0);
    assert_eq!(clamp_radius(f64::INFINITY), 0.5);
}

#[test]
fn format_coord_uses_minimal_digits() {
    assert_eq!(format_coord(1.0), "1");
    assert_eq!(format_coord(0.25), "0.25");
    assert_eq!(format_coord(2.5000), "2.5");
    assert_eq!(format_coord(1.0 / 3.0), "0.3333");
    assert_eq!(format_coord(0.123_46), "0.1235");
    assert_eq!(format_coord(12.0), "12");
}

#[test]
fn format_coord_folds_negative_zero() {
    assert_eq!(format_coord(-0.0), "0");
    assert_eq!(format_coord(-0.000_01), "0");
    assert_eq!(format_coord(-0.75), "-0.75");
}
