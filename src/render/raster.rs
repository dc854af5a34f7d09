use std::io::Cursor;

use anyhow::Context;

use crate::foundation::error::{ShapeError, ShapeResult};
use crate::render::export::{PixelScale, raster_size, svg_document_sized};
use crate::render::pipeline::Shape;

/// Largest raster edge accepted, in pixels.
pub const MAX_DIM: u32 = 16_384;

/// Rasterize a shape to straight-alpha RGBA8.
///
/// Goes through the same SVG document as the vector export, so both share one fill rule.
/// `Ok(None)` when there is nothing to render.
#[tracing::instrument(skip(shape), fields(contours = shape.contours))]
pub fn rasterize(shape: &Shape, scale: PixelScale) -> ShapeResult<Option<image::RgbaImage>> {
    let Some(view) = shape.view_box() else {
        return Ok(None);
    };
    let (width, height) = raster_size(view, scale);
    if width > MAX_DIM || height > MAX_DIM {
        return Err(ShapeError::render(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }
    let Some(doc) = svg_document_sized(shape, width, height) else {
        return Ok(None);
    };

    let tree = usvg::Tree::from_str(&doc, &usvg::Options::default())
        .context("parse exported svg document")?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ShapeError::render("failed to allocate raster pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| ShapeError::render("raster buffer size mismatch"))?;
    Ok(Some(img))
}

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(img: &image::RgbaImage) -> ShapeResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).context("encode png")?;
    Ok(out.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
