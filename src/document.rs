use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::bridges::BridgeSet;
use crate::config::overrides::OverrideMap;
use crate::config::settings::GlobalConfig;
use crate::fingerprint::{ShapeFingerprint, fingerprint_shape};
use crate::foundation::error::{ShapeError, ShapeResult};
use crate::grid::model::Grid;
use crate::render::pipeline::{Shape, ShapeRequest, render_shape};

/// JSON-facing bundle of everything needed to render one shape.
///
/// ```json
/// {
///   "grid": ["#.", "##"],
///   "config": { "corner_radius": 0.25, "inner_radius": 0.2 },
///   "overrides": [{ "row": 0, "col": 0, "corner_radius": 0.5, "inner_radius": 0.0 }],
///   "bridges": [[[0, 0], [1, 1]]]
/// }
/// ```
///
/// `config` and `overrides` may be omitted. Omitting `bridges` activates every diagonal
/// candidate when bridging is enabled; an explicit list restricts it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeDocument {
    /// Occupancy rows.
    pub grid: Grid,
    /// Global defaults.
    #[serde(default)]
    pub config: GlobalConfig,
    /// Per-cell overrides.
    #[serde(default, skip_serializing_if = "OverrideMap::is_empty")]
    pub overrides: OverrideMap,
    /// Activated bridges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridges: Option<BridgeSet>,
}

impl ShapeDocument {
    /// Document with default config and nothing customized.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            config: GlobalConfig::default(),
            overrides: OverrideMap::new(),
            bridges: None,
        }
    }

    /// Parse and validate a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ShapeResult<Self> {
        let doc: Self = serde_json::from_reader(r)
            .map_err(|e| ShapeError::serde(format!("parse shape document JSON: {e}")))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse and validate a document from a JSON string.
    pub fn from_json_str(s: &str) -> ShapeResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ShapeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ShapeError::validation(format!("open shape document '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty JSON.
    pub fn to_json_string(&self) -> ShapeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ShapeError::serde(format!("serialize shape document: {e}")))
    }

    /// Check what the renderer cannot clamp away.
    ///
    /// Stale overrides and bridges are allowed; they are ignored at render time.
    pub fn validate(&self) -> ShapeResult<()> {
        self.config.validate()
    }

    /// Borrow the document as a render request.
    pub fn request(&self) -> ShapeRequest<'_> {
        let mut req = ShapeRequest::new(&self.grid, &self.config);
        if !self.overrides.is_empty() {
            req = req.with_overrides(&self.overrides);
        }
        if let Some(bridges) = &self.bridges {
            req = req.with_bridges(bridges);
        }
        req
    }

    /// Render the document.
    pub fn render(&self) -> Shape {
        render_shape(self.request())
    }

    /// Content fingerprint for memoizing [`Self::render`].
    pub fn fingerprint(&self) -> ShapeFingerprint {
        fingerprint_shape(
            &self.grid,
            &self.config,
            Some(&self.overrides),
            self.bridges.as_ref(),
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/document.rs"]
mod tests;
