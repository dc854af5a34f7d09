use super::*;

#[test]
fn defaults_match_editor_startup() {
    let c = GlobalConfig::default();
    assert_eq!(c.effective_corner_radius(), 0.25);
    assert_eq!(c.effective_inner_radius(), 0.0);
    assert_eq!(c.effective_bridge_radius(), None);
    assert_eq!(c.scale(), Vec2::new(1.0, 1.0));
}

#[test]
fn radii_clamp_instead_of_failing() {
    let c = GlobalConfig::default().with_radii(3.0, -1.0);
    assert_eq!(c.effective_corner_radius(), 0.5);
    assert_eq!(c.effective_inner_radius(), 0.0);
    assert!(c.validate().is_ok());
    // stored values are left alone
    assert_eq!(c.corner_radius, 3.0);
}

#[test]
fn bridge_radius_zero_disables_bridges() {
    let on = GlobalConfig::default().with_bridges(true, 0.9);
    assert_eq!(on.effective_bridge_radius(), Some(0.5));
    let zero = GlobalConfig::default().with_bridges(true, 0.0);
    assert_eq!(zero.effective_bridge_radius(), None);
    let off = GlobalConfig::default().with_bridges(false, 0.3);
    assert_eq!(off.effective_bridge_radius(), None);
}

#[test]
fn validate_rejects_bad_scale() {
    assert!(GlobalConfig::default().with_scale(0.0, 1.0).validate().is_err());
    assert!(
        GlobalConfig::default()
            .with_scale(1.0, f64::NAN)
            .validate()
            .is_err()
    );
    assert!(GlobalConfig::default().with_scale(2.0, 0.5).validate().is_ok());
}

#[test]
fn bad_scale_axes_render_unstretched() {
    let c = GlobalConfig::default().with_scale(f64::NAN, 0.0);
    assert_eq!(c.scale(), Vec2::new(1.0, 1.0));
    let c = GlobalConfig::default().with_scale(-2.0, 3.0);
    assert_eq!(c.scale(), Vec2::new(1.0, 3.0));
    let c = GlobalConfig::default().with_scale(f64::INFINITY, 0.5);
    assert_eq!(c.scale(), Vec2::new(1.0, 0.5));
}

#[test]
fn serde_fills_missing_fields_with_defaults() {
    let c: GlobalConfig = serde_json::from_str(r#"{"corner_radius": 0.1}"#).unwrap();
    assert_eq!(c.corner_radius, 0.1);
    assert_eq!(c.bridge_radius, 0.35);
    assert!(serde_json::from_str::<GlobalConfig>(r#"{"nope": 1}"#).is_err());
}
