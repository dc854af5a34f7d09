use super::*;
use kurbo::Shape;

#[test]
fn display_is_space_separated_and_minimal() {
    let mut p = PathData::new();
    p.move_to(Point::new(0.25, 0.0));
    p.line_to(Point::new(0.75, 0.0));
    p.arc_to(Vec2::new(0.25, 0.25), true, Point::new(1.0, 0.25));
    p.arc_to(Vec2::new(0.5, 1.0), false, Point::new(1.0 / 3.0, -0.0));
    p.close();
    assert_eq!(
        p.to_string(),
        "M0.25 0 L0.75 0 A0.25 0.25 0 0 1 1 0.25 A0.5 1 0 0 0 0.3333 0 Z"
    );
    assert_eq!(p.to_svg_string(), p.to_string());
    assert_eq!(p.subpath_count(), 1);
    assert_eq!(p.arc_count(), 2);
}

#[test]
fn empty_path_serializes_to_empty_string() {
    let p = PathData::new();
    assert!(p.is_empty());
    assert_eq!(p.to_string(), "");
    assert!(p.to_bez_path().elements().is_empty());
}

#[test]
fn extend_concatenates_subpaths() {
    let mut a = PathData::new();
    a.move_to(Point::new(0.0, 0.0));
    a.line_to(Point::new(1.0, 0.0));
    a.line_to(Point::new(1.0, 1.0));
    a.close();
    let b = a.clone();
    a.extend(b);
    assert_eq!(a.subpath_count(), 2);
    assert_eq!(a.to_string(), "M0 0 L1 0 L1 1 Z M0 0 L1 0 L1 1 Z");
}

#[test]
fn bez_path_follows_arc_geometry() {
    // quarter circle of radius 1 bulging toward (1, 0) from (0, 0) to (1, 1)
    let mut p = PathData::new();
    p.move_to(Point::new(0.0, 0.0));
    p.arc_to(Vec2::new(1.0, 1.0), true, Point::new(1.0, 1.0));
    p.close();
    let bez = p.to_bez_path();
    let bbox = bez.bounding_box();
    assert!((bbox.x0 - 0.0).abs() < 1e-6);
    assert!((bbox.x1 - 1.0).abs() < 1e-6);
    assert!((bbox.y1 - 1.0).abs() < 1e-6);
    // the curve never leaves the unit square
    assert!(bbox.y0 > -1e-6);
}
