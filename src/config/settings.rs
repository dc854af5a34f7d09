use crate::foundation::core::Vec2;
use crate::foundation::error::{ShapeError, ShapeResult};
use crate::foundation::math::clamp_radius;

/// Shape-wide rendering defaults.
///
/// Stored values are exactly what the editor set; the accessors return the clamped values the
/// geometry actually uses, so an out-of-range slider never fails a render.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default convex corner radius in grid units.
    pub corner_radius: f64,
    /// Default concave (metaball) radius in grid units.
    pub inner_radius: f64,
    /// Emit fillets at diagonal point-touches.
    pub bridge_enabled: bool,
    /// Fillet radius in grid units.
    pub bridge_radius: f64,
    /// Horizontal export stretch.
    pub scale_x: f64,
    /// Vertical export stretch.
    pub scale_y: f64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            corner_radius: 0.25,
            inner_radius: 0.0,
            bridge_enabled: false,
            bridge_radius: 0.35,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl GlobalConfig {
    /// Sharp corners everywhere, no bridges, unit scale.
    pub fn sharp() -> Self {
        Self {
            corner_radius: 0.0,
            ..Self::default()
        }
    }

    /// Builder-style convex/concave radius override.
    pub fn with_radii(mut self, corner_radius: f64, inner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self.inner_radius = inner_radius;
        self
    }

    /// Builder-style bridge toggle.
    pub fn with_bridges(mut self, enabled: bool, radius: f64) -> Self {
        self.bridge_enabled = enabled;
        self.bridge_radius = radius;
        self
    }

    /// Builder-style stretch factors.
    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Clamped default convex radius.
    pub fn effective_corner_radius(&self) -> f64 {
        clamp_radius(self.corner_radius)
    }

    /// Clamped default concave radius.
    pub fn effective_inner_radius(&self) -> f64 {
        clamp_radius(self.inner_radius)
    }

    /// Fillet radius actually drawn: `None` when bridging is off or the radius clamps to zero.
    pub fn effective_bridge_radius(&self) -> Option<f64> {
        let r = clamp_radius(self.bridge_radius);
        (self.bridge_enabled && r > 0.0).then_some(r)
    }

    /// Stretch factors actually applied. An axis that is not finite and positive falls back
    /// to `1.0`, so unvalidated input still renders a well-formed path.
    pub fn scale(&self) -> Vec2 {
        let axis = |v: f64| if v.is_finite() && v > 0.0 { v } else { 1.0 };
        Vec2::new(axis(self.scale_x), axis(self.scale_y))
    }

    /// Reject values the export layer cannot represent.
    ///
    /// Radii are never rejected here; they clamp.
    pub fn validate(&self) -> ShapeResult<()> {
        for (name, v) in [("scale_x", self.scale_x), ("scale_y", self.scale_y)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ShapeError::validation(format!(
                    "{name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
