use super::*;
use crate::path::data::PathCommand;

fn cell(row: usize, col: usize) -> CellCoord {
    CellCoord::new(row, col)
}

#[test]
fn detects_both_diagonal_orientations() {
    let grid = Grid::parse(
        "
        #..#
        .##.
        ",
    )
    .unwrap();
    let cands = bridge_candidates(&grid);
    assert_eq!(cands.len(), 2);
    assert_eq!(cands[0].vertex, GridPoint::new(1, 1));
    assert_eq!(cands[0].bridge, Bridge::new(cell(0, 0), cell(1, 1)).unwrap());
    assert_eq!(cands[0].bridge.orientation(), BridgeOrientation::NwSe);
    assert_eq!(cands[1].vertex, GridPoint::new(3, 1));
    assert_eq!(cands[1].bridge.orientation(), BridgeOrientation::NeSw);
}

#[test]
fn edge_contact_is_not_a_candidate() {
    for text in ["##\n##", "#.\n##", "##\n..", "#.\n.."] {
        let grid = Grid::parse(text).unwrap();
        assert!(bridge_candidates(&grid).is_empty(), "{text}");
    }
}

#[test]
fn disabled_or_zero_radius_draws_nothing() {
    let grid = Grid::parse("#.\n.#").unwrap();
    let mut out = PathData::new();
    assert_eq!(emit_bridges(&grid, &GlobalConfig::default(), None, &mut out), 0);
    let zero = GlobalConfig::default().with_bridges(true, 0.0);
    assert_eq!(emit_bridges(&grid, &zero, None, &mut out), 0);
    assert!(out.is_empty());
}

#[test]
fn nw_se_bridge_fills_both_empty_quadrants() {
    let grid = Grid::parse("#.\n.#").unwrap();
    let cfg = GlobalConfig::default().with_bridges(true, 0.25);
    let mut out = PathData::new();
    assert_eq!(emit_bridges(&grid, &cfg, None, &mut out), 1);
    assert_eq!(
        out.to_string(),
        "M1 1 L1.25 1 A0.25 0.25 0 0 1 1 0.75 Z M1 1 L0.75 1 A0.25 0.25 0 0 1 1 1.25 Z"
    );
}

#[test]
fn ne_sw_bridge_uses_the_other_quadrants() {
    let grid = Grid::parse(".#\n#.").unwrap();
    let cfg = GlobalConfig::default().with_bridges(true, 0.25);
    let mut out = PathData::new();
    assert_eq!(emit_bridges(&grid, &cfg, None, &mut out), 1);
    assert_eq!(
        out.to_string(),
        "M1 1 L0.75 1 A0.25 0.25 0 0 0 1 0.75 Z M1 1 L1.25 1 A0.25 0.25 0 0 0 1 1.25 Z"
    );
}

#[test]
fn bridge_set_selects_and_stale_entries_are_inert() {
    let grid = Grid::parse(
        "
        #.#
        .#.
        ",
    )
    .unwrap();
    let cfg = GlobalConfig::default().with_bridges(true, 0.3);

    let chosen = Bridge::new(cell(0, 0), cell(1, 1)).unwrap();
    let stale = Bridge::new(cell(0, 1), cell(1, 2)).unwrap();
    let set: BridgeSet = [chosen, stale].into_iter().collect();

    let mut out = PathData::new();
    assert_eq!(emit_bridges(&grid, &cfg, Some(&set), &mut out), 1);
    assert_eq!(out.subpath_count(), 2);
    assert!(out.to_string().starts_with("M1 1 "));

    let mut all = PathData::new();
    assert_eq!(emit_bridges(&grid, &cfg, None, &mut all), 2);

    let mut none = PathData::new();
    assert_eq!(emit_bridges(&grid, &cfg, Some(&BridgeSet::new()), &mut none), 0);
}

#[test]
fn fragments_stay_inside_the_empty_cells() {
    use kurbo::Shape;

    let grid = Grid::parse("#.\n.#").unwrap();
    let cfg = GlobalConfig::default().with_bridges(true, 0.5);
    let mut out = PathData::new();
    emit_bridges(&grid, &cfg, None, &mut out);
    let bbox = out.to_bez_path().bounding_box();
    assert!(bbox.x0 >= 0.5 - 1e-9 && bbox.x1 <= 1.5 + 1e-9);
    assert!(bbox.y0 >= 0.5 - 1e-9 && bbox.y1 <= 1.5 + 1e-9);
}

/// Which of `cells` has the axis-aligned segment `a..b` lying on one of its sides.
fn side_owner(cells: [CellCoord; 2], a: Point, b: Point) -> Option<CellCoord> {
    let within = |v: f64, lo: f64, hi: f64| v >= lo - 1e-9 && v <= hi + 1e-9;
    cells.into_iter().find(|c| {
        let (x0, y0) = (c.col as f64, c.row as f64);
        let (x1, y1) = (x0 + 1.0, y0 + 1.0);
        let horizontal = a.y == b.y
            && (a.y == y0 || a.y == y1)
            && within(a.x, x0, x1)
            && within(b.x, x0, x1);
        let vertical = a.x == b.x
            && (a.x == x0 || a.x == x1)
            && within(a.y, y0, y1)
            && within(b.y, y0, y1);
        horizontal || vertical
    })
}

#[test]
fn each_fragment_runs_along_both_bridged_cells() {
    for text in ["#.\n.#", ".#\n#."] {
        let grid = Grid::parse(text).unwrap();
        let cfg = GlobalConfig::default().with_bridges(true, 0.3);
        let mut out = PathData::new();
        assert_eq!(emit_bridges(&grid, &cfg, None, &mut out), 1);

        let cells = bridge_candidates(&grid)[0].bridge.cells();
        let commands = out.commands();
        assert_eq!(commands.len(), 8, "{text}");
        for frag in commands.chunks(4) {
            let (v, h, w) = match frag {
                [
                    PathCommand::MoveTo(v),
                    PathCommand::LineTo(h),
                    PathCommand::ArcTo { to: w, .. },
                    PathCommand::Close,
                ] => (*v, *h, *w),
                _ => panic!("unexpected fragment {frag:?}"),
            };
            assert_eq!(v, Point::new(1.0, 1.0));

            // the straight run and the closing run each lie on a different filled cell
            let first = side_owner(cells, v, h);
            let second = side_owner(cells, w, v);
            assert!(first.is_some() && second.is_some(), "{text}: {frag:?}");
            assert_ne!(first, second, "{text}: {frag:?}");
            assert!((h - v).hypot() > 0.29 && (w - v).hypot() > 0.29);
        }
    }
}
