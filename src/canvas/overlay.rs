use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    canvas::composite::{over_in_place, premultiply_in_place},
    foundation::error::{AksaraError, AksaraResult},
};

/// Fraction of the shorter surface side the reference glyph occupies.
pub const REFERENCE_SCALE: f64 = 0.5;

pub const DEFAULT_REFERENCE_OPACITY: f32 = 0.3;

/// Decoded reference artwork shown behind the user's strokes as a tracing guide.
#[derive(Clone, Debug)]
pub enum ReferenceGlyph {
    Svg(Arc<usvg::Tree>),
    /// Straight-alpha RGBA8.
    Raster(Arc<image::RgbaImage>),
}

impl ReferenceGlyph {
    pub fn load(path: &Path) -> AksaraResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read reference glyph '{}'", path.display()))?;
        let is_svg = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
        if is_svg {
            Self::from_svg_bytes(&bytes)
        } else {
            Self::from_image_bytes(&bytes)
        }
    }

    pub fn from_svg_bytes(bytes: &[u8]) -> AksaraResult<Self> {
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(bytes, &opts).context("parse reference svg")?;
        Ok(Self::Svg(Arc::new(tree)))
    }

    pub fn from_image_bytes(bytes: &[u8]) -> AksaraResult<Self> {
        let img = image::load_from_memory(bytes).context("decode reference image")?;
        Ok(Self::Raster(Arc::new(img.to_rgba8())))
    }

    pub fn from_rgba(img: image::RgbaImage) -> Self {
        Self::Raster(Arc::new(img))
    }

    /// Renders the glyph stretched to `size` x `size`, premultiplied.
    pub fn rasterize(&self, size: u32) -> AksaraResult<Vec<u8>> {
        match self {
            Self::Svg(tree) => {
                let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)
                    .ok_or_else(|| AksaraError::canvas("failed to allocate reference pixmap"))?;
                let sx = (size as f32) / tree.size().width();
                let sy = (size as f32) / tree.size().height();
                let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
                resvg::render(tree, xform, &mut pixmap.as_mut());
                Ok(pixmap.data().to_vec())
            }
            Self::Raster(img) => {
                let scaled = image::imageops::resize(
                    img.as_ref(),
                    size,
                    size,
                    image::imageops::FilterType::Triangle,
                );
                let mut rgba = scaled.into_raw();
                premultiply_in_place(&mut rgba);
                Ok(rgba)
            }
        }
    }
}

/// Transparent layer above the stroke buffer that holds at most one reference glyph.
#[derive(Clone, Debug)]
pub(crate) struct OverlayLayer {
    width: u32,
    height: u32,
    rgba8_premul: Vec<u8>,
    visible: bool,
}

impl OverlayLayer {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba8_premul: vec![0; width as usize * height as usize * 4],
            visible: false,
        }
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn pixels(&self) -> &[u8] {
        &self.rgba8_premul
    }

    pub(crate) fn clear(&mut self) {
        self.rgba8_premul.fill(0);
        self.visible = false;
    }

    /// Draws `glyph` centred, scaled to [`REFERENCE_SCALE`] of the shorter side.
    pub(crate) fn show(&mut self, glyph: &ReferenceGlyph, opacity: f32) -> AksaraResult<()> {
        self.clear();

        let shorter = self.width.min(self.height);
        let size = ((f64::from(shorter) * REFERENCE_SCALE).round() as u32).max(1);
        let src = glyph.rasterize(size)?;

        let x0 = ((self.width - size) / 2) as usize;
        let y0 = ((self.height - size) / 2) as usize;
        let stride = self.width as usize * 4;
        let size = size as usize;

        for row in 0..size {
            let dst_start = (y0 + row) * stride + x0 * 4;
            let dst = &mut self.rgba8_premul[dst_start..dst_start + size * 4];
            over_in_place(dst, &src[row * size * 4..(row + 1) * size * 4], opacity)?;
        }

        self.visible = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/overlay.rs"]
mod tests;
