use xxhash_rust::xxh3::Xxh3;

use crate::config::bridges::BridgeSet;
use crate::config::overrides::OverrideMap;
use crate::config::settings::GlobalConfig;
use crate::grid::model::Grid;

const XXH3_SEED: u64 = 0x5f3c_9a1e_77d2_b46b;

/// Stable content fingerprint of everything a render reads.
///
/// Lets callers memoize [`crate::render_shape`] across rapid edits: equal fingerprints mean the
/// path data would be byte-identical. Floats hash by bit pattern, so `0.25` and a value that
/// merely clamps to the same radius are still distinct inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeFingerprint {
    /// High 64 bits of the 128-bit digest.
    pub hi: u64,
    /// Low 64 bits of the 128-bit digest.
    pub lo: u64,
}

/// Fingerprint a render's inputs.
pub fn fingerprint_shape(
    grid: &Grid,
    config: &GlobalConfig,
    overrides: Option<&OverrideMap>,
    bridges: Option<&BridgeSet>,
) -> ShapeFingerprint {
    let mut h = StableHasher::new();

    h.write_u64(grid.rows() as u64);
    h.write_u64(grid.cols() as u64);
    for row in grid.to_text_rows() {
        h.write_bytes(row.as_bytes());
    }

    h.write_f64(config.corner_radius);
    h.write_f64(config.inner_radius);
    h.write_bool(config.bridge_enabled);
    h.write_f64(config.bridge_radius);
    h.write_f64(config.scale_x);
    h.write_f64(config.scale_y);

    match overrides {
        None => h.write_u8(0),
        Some(map) => {
            h.write_u8(1);
            h.write_u64(map.len() as u64);
            for (cell, o) in map.iter() {
                h.write_u64(cell.row as u64);
                h.write_u64(cell.col as u64);
                h.write_f64(o.corner_radius);
                h.write_f64(o.inner_radius);
            }
        }
    }

    match bridges {
        None => h.write_u8(0),
        Some(set) => {
            h.write_u8(1);
            h.write_u64(set.len() as u64);
            for b in set.iter() {
                for c in b.cells() {
                    h.write_u64(c.row as u64);
                    h.write_u64(c.col as u64);
                }
            }
        }
    }

    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn finish(self) -> ShapeFingerprint {
        let v = self.inner.digest128();
        ShapeFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/fingerprint.rs"]
mod tests;
