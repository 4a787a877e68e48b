use std::io::Cursor;

use anyhow::Context;
use base64::{Engine, engine::general_purpose::STANDARD};

use crate::foundation::error::{AksaraError, AksaraResult};

/// Raster bytes in a portable container, ready to embed in JSON or save to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime: &'static str,
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    /// PNG-encodes straight-alpha RGBA8 pixels.
    pub fn png_from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> AksaraResult<Self> {
        let img = image::RgbaImage::from_raw(width, height, rgba)
            .ok_or_else(|| AksaraError::canvas("rgba buffer does not match image dimensions"))?;

        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .context("encode png")?;

        Ok(Self {
            mime: "image/png",
            width,
            height,
            bytes,
        })
    }

    /// JPEG-encodes straight RGBA8 pixels (alpha is dropped).
    pub fn jpeg_from_rgba(width: u32, height: u32, rgba: Vec<u8>, quality: u8) -> AksaraResult<Self> {
        let img = image::RgbaImage::from_raw(width, height, rgba)
            .ok_or_else(|| AksaraError::canvas("rgba buffer does not match image dimensions"))?;
        let rgb = image::DynamicImage::ImageRgba8(img).to_rgb8();

        let mut bytes = Vec::new();
        let encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100));
        rgb.write_with_encoder(encoder).context("encode jpeg")?;

        Ok(Self {
            mime: "image/jpeg",
            width,
            height,
            bytes,
        })
    }

    /// Wraps already-encoded bytes (a PNG or JPEG read from disk).
    pub fn from_encoded(bytes: Vec<u8>) -> AksaraResult<Self> {
        let format = image::guess_format(&bytes).context("detect image format")?;
        let mime = match format {
            image::ImageFormat::Png => "image/png",
            image::ImageFormat::Jpeg => "image/jpeg",
            image::ImageFormat::WebP => "image/webp",
            other => {
                return Err(AksaraError::validation(format!(
                    "unsupported image format {other:?}"
                )));
            }
        };
        let (width, height) = image::ImageReader::with_format(Cursor::new(&bytes), format)
            .into_dimensions()
            .context("read image dimensions")?;

        Ok(Self {
            mime,
            width,
            height,
            bytes,
        })
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.to_base64())
    }

    /// Decodes back to straight RGBA8.
    pub fn decode_rgba(&self) -> AksaraResult<image::RgbaImage> {
        let img = image::load_from_memory(&self.bytes).context("decode image from memory")?;
        Ok(img.to_rgba8())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/export.rs"]
mod tests;
