use std::fmt::Write as _;

use anyhow::Context;

use crate::{
    canvas::{
        composite::{over_in_place, premultiply_in_place, unpremultiply_in_place},
        export::EncodedImage,
    },
    foundation::error::{AksaraError, AksaraResult},
    session::{attempt::SessionStats, custom_name::FinalResult},
};

const GRADIENT_FROM: &str = "#667eea";
const GRADIENT_TO: &str = "#764ba2";
const CREDIT: &str = "learn-aksara-batak.vercel.app";
const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";
const JPEG_QUALITY: u8 = 90;

const THUMB_SIZE: u32 = 80;
const THUMB_GAP: u32 = 20;
const THUMB_Y: u32 = 280;

/// A user drawing pasted onto the card after the vector layer is rendered.
#[derive(Clone, Debug)]
struct Thumbnail {
    x: u32,
    y: u32,
    /// Straight RGBA8, already `THUMB_SIZE` square.
    pixels: image::RgbaImage,
}

/// Shareable score image.
///
/// Layout is built as an SVG document (background, text, frames) and rasterized with resvg;
/// user drawings are scaled and composited on top.
#[derive(Clone, Debug)]
pub struct ShareCard {
    width: u32,
    height: u32,
    title: &'static str,
    file_name: &'static str,
    share_text: String,
    svg: String,
    thumbnails: Vec<Thumbnail>,
}

impl ShareCard {
    pub fn challenge(stats: &SessionStats, elapsed_seconds: u32) -> Self {
        const TITLE: &str = "Skor Aksara Batak Challenge";
        let (w, h) = (800, 600);
        let mut svg = open_svg(w, h);
        push_text(&mut svg, 400, 100, 48, true, TITLE);
        push_text(
            &mut svg,
            400,
            200,
            72,
            true,
            &format!("{}/{}", stats.correct_count, stats.total_count),
        );
        push_text(&mut svg, 400, 280, 36, true, &format!("{}% Benar", stats.percentage()));
        push_text(&mut svg, 400, 350, 24, false, &format!("Waktu: {elapsed_seconds} detik"));
        push_text(&mut svg, 400, 550, 20, false, CREDIT);
        svg.push_str("</svg>");

        Self {
            width: w,
            height: h,
            title: TITLE,
            file_name: "aksara-batak-score.jpg",
            share_text: format!(
                "Aku berhasil menjawab {} dari {} soal dengan benar!",
                stats.correct_count, stats.total_count
            ),
            svg,
            thumbnails: Vec::new(),
        }
    }

    /// Fails only when a stored drawing cannot be decoded.
    pub fn custom_name(result: &FinalResult) -> AksaraResult<Self> {
        const TITLE: &str = "Namaku dalam Aksara Batak";
        let (w, h) = (800, 700);
        let mut svg = open_svg(w, h);
        push_text(&mut svg, 400, 60, 32, true, TITLE);
        push_text(&mut svg, 400, 120, 48, true, &result.name);
        push_text(&mut svg, 400, 200, 64, true, &format!("{}%", result.average_score));
        let per_syllable = result
            .scores
            .iter()
            .map(|s| format!("{s}%"))
            .collect::<Vec<_>>()
            .join(", ");
        push_text(
            &mut svg,
            400,
            240,
            20,
            false,
            &format!("Skor per suku kata: {per_syllable}"),
        );

        let n = result.images.len() as u32;
        let row = (n * (THUMB_SIZE + THUMB_GAP)).saturating_sub(THUMB_GAP);
        let start_x = w.saturating_sub(row) / 2;
        let mut thumbnails = Vec::with_capacity(result.images.len());
        for (i, img) in result.images.iter().enumerate() {
            let x = start_x + i as u32 * (THUMB_SIZE + THUMB_GAP);
            let _ = write!(
                svg,
                r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#ffffff"/>"##,
                x.saturating_sub(5),
                THUMB_Y - 5,
                THUMB_SIZE + 10,
                THUMB_SIZE + 10
            );
            let center = x + THUMB_SIZE / 2;
            if let Some(label) = result.syllables.get(i) {
                push_text(&mut svg, center, THUMB_Y + THUMB_SIZE + 20, 16, false, label);
            }
            if let Some(score) = result.scores.get(i) {
                push_text(&mut svg, center, THUMB_Y + THUMB_SIZE + 40, 14, false, &format!("{score}%"));
            }

            let decoded = img.decode_rgba()?;
            let pixels = image::imageops::resize(
                &decoded,
                THUMB_SIZE,
                THUMB_SIZE,
                image::imageops::FilterType::Triangle,
            );
            thumbnails.push(Thumbnail { x, y: THUMB_Y, pixels });
        }
        push_text(&mut svg, 400, 650, 18, false, CREDIT);
        svg.push_str("</svg>");

        Ok(Self {
            width: w,
            height: h,
            title: TITLE,
            file_name: "aksara-batak-name.jpg",
            share_text: format!(
                "Namaku \"{}\" dalam Aksara Batak dengan skor {}%!",
                result.name, result.average_score
            ),
            svg,
            thumbnails,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Suggested download name.
    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    /// Message for the native share sheet.
    pub fn share_text(&self) -> &str {
        &self.share_text
    }

    /// The vector layer, without the pasted drawings.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Rasterizes with the system font database.
    pub fn render(&self) -> AksaraResult<image::RgbaImage> {
        let mut opts = usvg::Options::default();
        opts.fontdb_mut().load_system_fonts();
        self.render_with(&opts)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(w = self.width, h = self.height))]
    pub fn render_with(&self, opts: &usvg::Options<'_>) -> AksaraResult<image::RgbaImage> {
        let tree = usvg::Tree::from_str(&self.svg, opts).context("parse share card svg")?;
        let mut pixmap = resvg::tiny_skia::Pixmap::new(self.width, self.height)
            .ok_or_else(|| AksaraError::canvas("failed to allocate share card pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        let mut rgba = pixmap.take();

        for thumb in &self.thumbnails {
            let mut src = thumb.pixels.as_raw().clone();
            premultiply_in_place(&mut src);
            blit_over(&mut rgba, self.width, self.height, &src, thumb)?;
        }

        unpremultiply_in_place(&mut rgba);
        image::RgbaImage::from_raw(self.width, self.height, rgba)
            .ok_or_else(|| AksaraError::canvas("share card buffer size mismatch"))
    }

    pub fn to_jpeg(&self) -> AksaraResult<EncodedImage> {
        let rgba = self.render()?;
        EncodedImage::jpeg_from_rgba(self.width, self.height, rgba.into_raw(), JPEG_QUALITY)
    }
}

/// Source-over of a premultiplied thumbnail, clipped to the card.
fn blit_over(dst: &mut [u8], dst_w: u32, dst_h: u32, src: &[u8], thumb: &Thumbnail) -> AksaraResult<()> {
    let (sw, sh) = thumb.pixels.dimensions();
    let cols = sw.min(dst_w.saturating_sub(thumb.x)) as usize;
    let rows = sh.min(dst_h.saturating_sub(thumb.y));
    if cols == 0 {
        return Ok(());
    }
    for sy in 0..rows {
        let si = (sy * sw) as usize * 4;
        let di = (((thumb.y + sy) * dst_w + thumb.x) as usize) * 4;
        over_in_place(&mut dst[di..di + cols * 4], &src[si..si + cols * 4], 1.0)?;
    }
    Ok(())
}

fn open_svg(w: u32, h: u32) -> String {
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<defs><linearGradient id="bg" gradientUnits="userSpaceOnUse" x1="0" y1="0" x2="{w}" y2="{h}">"#,
            r#"<stop offset="0" stop-color="{from}"/><stop offset="1" stop-color="{to}"/>"#,
            r#"</linearGradient></defs>"#,
            r#"<rect width="{w}" height="{h}" fill="url(#bg)"/>"#,
        ),
        w = w,
        h = h,
        from = GRADIENT_FROM,
        to = GRADIENT_TO,
    )
}

/// Centred white text with its baseline at `y`.
fn push_text(svg: &mut String, x: u32, y: u32, size: u32, bold: bool, text: &str) {
    let weight = if bold { "bold" } else { "normal" };
    let _ = write!(
        svg,
        r##"<text x="{x}" y="{y}" text-anchor="middle" font-family="{FONT_FAMILY}" font-size="{size}" font-weight="{weight}" fill="#ffffff">{}</text>"##,
        escape_xml(text)
    );
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/share/card.rs"]
mod tests;
