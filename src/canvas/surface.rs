use crate::{
    canvas::{
        composite::{fill, over_in_place, unpremultiply_in_place},
        export::EncodedImage,
        input::{DrawEvent, InputEvent, ViewportRect},
        overlay::{OverlayLayer, ReferenceGlyph},
    },
    foundation::{
        core::{Point, Rgba8},
        error::{AksaraError, AksaraResult},
    },
};

/// Drawing surface parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CanvasOptions {
    pub width: u32,
    pub height: u32,
    /// Line width in surface pixels.
    pub stroke_width: f64,
    pub stroke_color: Rgba8,
    pub background_color: Rgba8,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            stroke_width: 10.0,
            stroke_color: Rgba8::opaque(0x1f, 0x29, 0x37),
            background_color: Rgba8::WHITE,
        }
    }
}

impl CanvasOptions {
    pub fn validate(&self) -> AksaraResult<()> {
        let in_range = |v: u32| (1..=u32::from(u16::MAX)).contains(&v);
        if !in_range(self.width) || !in_range(self.height) {
            return Err(AksaraError::canvas(format!(
                "canvas size {}x{} must be within 1..={} on both axes",
                self.width,
                self.height,
                u16::MAX
            )));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(AksaraError::canvas("stroke width must be a positive number"));
        }
        Ok(())
    }
}

struct Surface {
    width: u16,
    height: u16,
    opts: CanvasOptions,
    /// Premultiplied, always fully opaque (background fill plus strokes).
    strokes: vello_cpu::Pixmap,
    /// Transparent target each segment is rasterized into before compositing.
    scratch: vello_cpu::Pixmap,
    /// Reused across segments; reset before each one.
    ctx: vello_cpu::RenderContext,
    overlay: OverlayLayer,
}

/// Half-open pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PixelBox {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("opts", &self.opts)
            .field("overlay_visible", &self.overlay.is_visible())
            .finish()
    }
}

impl Surface {
    fn background_premul(&self) -> [u8; 4] {
        self.opts.background_color.to_premul()
    }

    fn fill_background(&mut self) {
        let bg = self.background_premul();
        clear_pixmap(&mut self.strokes, bg);
    }

    /// Rasterizes one segment and composites it over the stroke buffer.
    ///
    /// Only the rows and columns the segment can touch are composited; the scratch layer is
    /// transparent outside that box before and after every call.
    fn draw_segment(&mut self, from: Point, to: Point) -> AksaraResult<()> {
        let Some(area) = self.segment_bounds(from, to) else {
            return Ok(());
        };

        let c = self.opts.stroke_color;
        self.ctx.reset();
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(self.opts.stroke_width)
                .with_caps(vello_cpu::kurbo::Cap::Round)
                .with_join(vello_cpu::kurbo::Join::Round),
        );

        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(from));
        path.line_to(point_to_cpu(to));
        self.ctx.stroke_path(&path);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.scratch);

        let stride = usize::from(self.width) * 4;
        let src = self.scratch.data_as_u8_slice();
        let dst = self.strokes.data_as_u8_slice_mut();
        for y in area.y0..area.y1 {
            let row = y * stride + area.x0 * 4..y * stride + area.x1 * 4;
            over_in_place(&mut dst[row.clone()], &src[row], 1.0)?;
        }

        let scratch = self.scratch.data_as_u8_slice_mut();
        for y in area.y0..area.y1 {
            scratch[y * stride + area.x0 * 4..y * stride + area.x1 * 4].fill(0);
        }
        Ok(())
    }

    /// Pixel box covering a round-capped segment, clipped to the surface.
    fn segment_bounds(&self, from: Point, to: Point) -> Option<PixelBox> {
        let pad = self.opts.stroke_width / 2.0 + 1.0;
        let clip = |lo: f64, hi: f64, max: u16| {
            let lo = (lo - pad).floor().max(0.0);
            let hi = (hi + pad).ceil().min(f64::from(max));
            (lo < hi).then_some((lo as usize, hi as usize))
        };
        let (x0, x1) = clip(from.x.min(to.x), from.x.max(to.x), self.width)?;
        let (y0, y1) = clip(from.y.min(to.y), from.y.max(to.y), self.height)?;
        Some(PixelBox { x0, y0, x1, y1 })
    }

    fn straight_rgba(&self) -> Vec<u8> {
        let mut rgba = self.strokes.data_as_u8_slice().to_vec();
        unpremultiply_in_place(&mut rgba);
        rgba
    }
}

/// Freehand drawing surface with an optional reference overlay.
///
/// Every operation is a no-op until [`StrokeCanvas::initialize`] has been called. Exported
/// pixels and [`StrokeCanvas::is_empty`] only ever see the stroke buffer; the overlay is for
/// display through [`StrokeCanvas::preview`].
#[derive(Debug, Default)]
pub struct StrokeCanvas {
    surface: Option<Surface>,
    /// Last recorded point of the stroke in progress.
    active: Option<Point>,
    disabled: bool,
    stroke_count: usize,
}

impl StrokeCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the surface, or re-fills it when the size is unchanged.
    pub fn initialize(&mut self, opts: CanvasOptions) -> AksaraResult<()> {
        opts.validate()?;
        // Range checked by `validate`.
        let width = opts.width as u16;
        let height = opts.height as u16;

        match self.surface.as_mut() {
            Some(s) if s.width == width && s.height == height => {
                s.opts = opts;
                s.overlay.clear();
                s.fill_background();
                tracing::debug!(width, height, "canvas re-filled");
            }
            _ => {
                let mut s = Surface {
                    width,
                    height,
                    overlay: OverlayLayer::new(opts.width, opts.height),
                    opts,
                    strokes: vello_cpu::Pixmap::new(width, height),
                    scratch: vello_cpu::Pixmap::new(width, height),
                    ctx: vello_cpu::RenderContext::new(width, height),
                };
                s.fill_background();
                self.surface = Some(s);
                tracing::debug!(width, height, "canvas allocated");
            }
        }

        self.active = None;
        self.stroke_count = 0;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.surface.is_some()
    }

    pub fn options(&self) -> Option<&CanvasOptions> {
        self.surface.as_ref().map(|s| &s.opts)
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.surface
            .as_ref()
            .map(|s| (u32::from(s.width), u32::from(s.height)))
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// Strokes begun since the last clear or initialization.
    pub fn stroke_count(&self) -> usize {
        self.stroke_count
    }

    /// Starts a stroke at `at` (surface pixels).
    pub fn begin_stroke(&mut self, at: Point) -> Option<DrawEvent> {
        if self.disabled || self.surface.is_none() {
            return None;
        }
        self.active = Some(at);
        self.stroke_count += 1;
        Some(DrawEvent::Started)
    }

    /// Draws a segment from the last recorded point to `to`.
    pub fn extend_stroke(&mut self, to: Point) -> Option<DrawEvent> {
        if self.disabled {
            return None;
        }
        let from = self.active?;
        let surface = self.surface.as_mut()?;
        if let Err(err) = surface.draw_segment(from, to) {
            tracing::warn!(error = %err, "stroke segment dropped");
        }
        self.active = Some(to);
        Some(DrawEvent::Drawing)
    }

    pub fn end_stroke(&mut self) -> Option<DrawEvent> {
        self.active.take().map(|_| DrawEvent::Ended)
    }

    /// Routes host pointer input, translating client coordinates through `viewport`.
    pub fn handle_input(&mut self, event: &InputEvent, viewport: &ViewportRect) -> Option<DrawEvent> {
        let (w, h) = self.dimensions()?;
        match event {
            InputEvent::Down(contacts) => {
                let at = viewport.to_surface(contacts.single()?, w, h)?;
                self.begin_stroke(at)
            }
            InputEvent::Move(contacts) => {
                let to = viewport.to_surface(contacts.single()?, w, h)?;
                self.extend_stroke(to)
            }
            InputEvent::Up | InputEvent::Leave | InputEvent::Cancel => self.end_stroke(),
        }
    }

    /// Resets the stroke buffer to the background fill. The overlay is kept.
    pub fn clear(&mut self) {
        if let Some(s) = self.surface.as_mut() {
            s.fill_background();
        }
        self.stroke_count = 0;
    }

    /// True when every pixel equals the background fill on all four channels.
    pub fn is_empty(&self) -> bool {
        let Some(s) = self.surface.as_ref() else {
            return true;
        };
        let bg = s.background_premul();
        s.strokes
            .data_as_u8_slice()
            .chunks_exact(4)
            .all(|px| px == bg)
    }

    /// Stroke buffer as straight-alpha RGBA8.
    pub fn to_rgba(&self) -> Option<image::RgbaImage> {
        let s = self.surface.as_ref()?;
        image::RgbaImage::from_raw(u32::from(s.width), u32::from(s.height), s.straight_rgba())
    }

    /// PNG of the stroke buffer, `None` when uninitialized.
    pub fn export_image(&self) -> Option<EncodedImage> {
        let s = self.surface.as_ref()?;
        match EncodedImage::png_from_rgba(u32::from(s.width), u32::from(s.height), s.straight_rgba()) {
            Ok(img) => Some(img),
            Err(err) => {
                tracing::warn!(error = %err, "canvas export failed");
                None
            }
        }
    }

    pub fn show_reference(&mut self, glyph: &ReferenceGlyph, opacity: f32) -> AksaraResult<()> {
        match self.surface.as_mut() {
            Some(s) => s.overlay.show(glyph, opacity),
            None => Ok(()),
        }
    }

    pub fn hide_reference(&mut self) {
        if let Some(s) = self.surface.as_mut() {
            s.overlay.clear();
        }
    }

    pub fn is_reference_visible(&self) -> bool {
        self.surface
            .as_ref()
            .is_some_and(|s| s.overlay.is_visible())
    }

    /// What the user sees: strokes with the reference overlay on top.
    pub fn preview(&self) -> Option<image::RgbaImage> {
        let s = self.surface.as_ref()?;
        let mut rgba = s.strokes.data_as_u8_slice().to_vec();
        if s.overlay.is_visible() {
            if let Err(err) = over_in_place(&mut rgba, s.overlay.pixels(), 1.0) {
                tracing::warn!(error = %err, "reference overlay left out of preview");
            }
        }
        unpremultiply_in_place(&mut rgba);
        image::RgbaImage::from_raw(u32::from(s.width), u32::from(s.height), rgba)
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, px: [u8; 4]) {
    fill(pixmap.data_as_u8_slice_mut(), px);
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/surface.rs"]
mod tests;
