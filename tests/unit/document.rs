use super::*;
use crate::foundation::core::CellCoord;

const DOC: &str = r###"{
    "grid": ["#.", "##"],
    "config": { "corner_radius": 0.0, "inner_radius": 0.25 },
    "overrides": [{ "row": 0, "col": 0, "corner_radius": 0.5, "inner_radius": 0.0 }]
}"###;

#[test]
fn parses_and_renders() {
    let doc = ShapeDocument::from_json_str(DOC).unwrap();
    assert_eq!(doc.grid.filled_count(), 3);
    assert_eq!(doc.config.inner_radius, 0.25);
    assert!(doc.overrides.get(CellCoord::new(0, 0)).is_some());
    assert!(doc.bridges.is_none());

    let shape = doc.render();
    assert_eq!(shape.contours, 1);
    // two rounded convex corners from the override plus the concave blend
    assert_eq!(shape.path.arc_count(), 3);
}

#[test]
fn json_round_trip_preserves_render() {
    let doc = ShapeDocument::from_json_str(DOC).unwrap();
    let back = ShapeDocument::from_json_str(&doc.to_json_string().unwrap()).unwrap();
    assert_eq!(back, doc);
    assert_eq!(back.render().path_data(), doc.render().path_data());
    assert_eq!(back.fingerprint(), doc.fingerprint());
}

#[test]
fn rejects_bad_documents() {
    let err = ShapeDocument::from_json_str(r###"{"grid": ["#", "##"]}"###).unwrap_err();
    assert!(err.to_string().contains("serialization error"), "{err}");

    let err = ShapeDocument::from_json_str(r##"{"grid": ["#"], "config": {"scale_x": 0}}"##)
        .unwrap_err();
    assert!(err.to_string().contains("validation error"), "{err}");

    assert!(ShapeDocument::from_json_str(r##"{"grid": ["#"], "extra": 1}"##).is_err());
    assert!(ShapeDocument::from_path("/definitely/missing/shape.json").is_err());
}

#[test]
fn minimal_document_uses_defaults() {
    let doc = ShapeDocument::from_json_str(r##"{"grid": ["#"]}"##).unwrap();
    assert_eq!(doc, ShapeDocument::new(Grid::parse("#").unwrap()));
    assert_eq!(doc.render().path.arc_count(), 4);
}
