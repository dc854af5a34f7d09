use super::*;
use crate::config::bridges::Bridge;
use crate::config::overrides::CellOverride;
use crate::foundation::core::CellCoord;

fn base() -> (Grid, GlobalConfig) {
    (
        Grid::parse("#.\n.#").unwrap(),
        GlobalConfig::default().with_bridges(true, 0.3),
    )
}

#[test]
fn equal_inputs_hash_equal() {
    let (g, c) = base();
    assert_eq!(
        fingerprint_shape(&g, &c, None, None),
        fingerprint_shape(&g.clone(), &c.clone(), None, None)
    );
}

#[test]
fn every_input_contributes() {
    let (g, c) = base();
    let reference = fingerprint_shape(&g, &c, None, None);

    let mut g2 = g.clone();
    g2.set(CellCoord::new(0, 1), true).unwrap();
    assert_ne!(fingerprint_shape(&g2, &c, None, None), reference);

    // same cells, different shape of grid
    let g3 = g.resized(2, 3);
    assert_ne!(fingerprint_shape(&g3, &c, None, None), reference);

    let c2 = c.clone().with_radii(0.3, 0.0);
    assert_ne!(fingerprint_shape(&g, &c2, None, None), reference);

    let mut overrides = OverrideMap::new();
    assert_ne!(fingerprint_shape(&g, &c, Some(&overrides), None), reference);
    let empty_overrides = fingerprint_shape(&g, &c, Some(&overrides), None);
    overrides.insert(
        CellCoord::new(0, 0),
        CellOverride {
            corner_radius: 0.1,
            inner_radius: 0.0,
        },
    );
    assert_ne!(
        fingerprint_shape(&g, &c, Some(&overrides), None),
        empty_overrides
    );

    let mut bridges = BridgeSet::new();
    let empty_bridges = fingerprint_shape(&g, &c, None, Some(&bridges));
    assert_ne!(empty_bridges, reference);
    bridges.insert(Bridge::new(CellCoord::new(0, 0), CellCoord::new(1, 1)).unwrap());
    assert_ne!(fingerprint_shape(&g, &c, None, Some(&bridges)), empty_bridges);
}
