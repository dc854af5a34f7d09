use crate::foundation::core::Rect;
use crate::foundation::error::{ShapeError, ShapeResult};
use crate::foundation::math::format_coord;
use crate::render::pipeline::Shape;

/// Fill rule applied to every exported document.
///
/// Outer contours wind clockwise and holes counter-clockwise, so nonzero would also work; the
/// crate uses even-odd everywhere so previews, vector and raster exports agree.
pub const FILL_RULE: &str = "evenodd";

/// Pixels per grid unit in the plain vector export.
pub const CELL_PIXELS: u32 = 20;

/// Longer side of a 1x raster export, in pixels.
pub const BASE_RESOLUTION: u32 = 512;

/// Document returned when there is nothing to draw.
pub const EMPTY_DOCUMENT: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1 1" width="20" height="20"></svg>"#;

/// Raster export multiplier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PixelScale {
    /// 512 px on the long side.
    #[default]
    X1,
    /// 1024 px on the long side.
    X2,
    /// 2048 px on the long side.
    X4,
}

impl PixelScale {
    /// Integer multiplier.
    pub fn factor(self) -> u32 {
        match self {
            Self::X1 => 1,
            Self::X2 => 2,
            Self::X4 => 4,
        }
    }
}

impl TryFrom<u32> for PixelScale {
    type Error = ShapeError;

    fn try_from(v: u32) -> ShapeResult<Self> {
        match v {
            1 => Ok(Self::X1),
            2 => Ok(Self::X2),
            4 => Ok(Self::X4),
            other => Err(ShapeError::validation(format!(
                "pixel scale must be 1, 2 or 4, got {other}"
            ))),
        }
    }
}

/// Pixel size for a raster export of `view`, keeping its aspect ratio.
///
/// The longer side gets `BASE_RESOLUTION * scale`; the shorter side is rounded, never below 1.
pub fn raster_size(view: Rect, scale: PixelScale) -> (u32, u32) {
    let long = f64::from(BASE_RESOLUTION * scale.factor());
    let aspect = view.width() / view.height();
    let (w, h) = if aspect >= 1.0 {
        (long, long / aspect)
    } else {
        (long * aspect, long)
    };
    (w.round().max(1.0) as u32, h.round().max(1.0) as u32)
}

/// Wrap the shape in a standalone SVG document of the given pixel size.
///
/// `None` when there is nothing to render.
pub fn svg_document_sized(shape: &Shape, width: u32, height: u32) -> Option<String> {
    let view = shape.view_box()?;
    if shape.is_empty() {
        return None;
    }
    Some(format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            "\n  ",
            r#"<path d="{}" fill="black" fill-rule="{}"/>"#,
            "\n</svg>"
        ),
        format_coord(view.x0),
        format_coord(view.y0),
        format_coord(view.width()),
        format_coord(view.height()),
        width,
        height,
        shape.path,
        FILL_RULE,
    ))
}

/// Vector export: tight view box, [`CELL_PIXELS`] per grid unit.
///
/// Falls back to [`EMPTY_DOCUMENT`] when there is nothing to render.
pub fn svg_markup(shape: &Shape) -> String {
    let Some(view) = shape.view_box() else {
        return EMPTY_DOCUMENT.to_string();
    };
    let px = f64::from(CELL_PIXELS);
    let width = (view.width() * px).round().max(1.0) as u32;
    let height = (view.height() * px).round().max(1.0) as u32;
    svg_document_sized(shape, width, height).unwrap_or_else(|| EMPTY_DOCUMENT.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/render/export.rs"]
mod tests;
