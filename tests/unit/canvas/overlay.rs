use super::*;

fn solid_glyph(rgba: [u8; 4]) -> ReferenceGlyph {
    ReferenceGlyph::from_rgba(image::RgbaImage::from_pixel(8, 8, image::Rgba(rgba)))
}

#[test]
fn raster_glyph_scales_to_requested_size() {
    let out = solid_glyph([0, 0, 0, 255]).rasterize(4).unwrap();
    assert_eq!(out.len(), 4 * 4 * 4);
    assert!(out.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
}

#[test]
fn svg_glyph_rasterizes() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#000"/></svg>"##;
    let glyph = ReferenceGlyph::from_svg_bytes(svg).unwrap();
    let out = glyph.rasterize(6).unwrap();
    assert_eq!(out.len(), 6 * 6 * 4);
    assert_eq!(&out[(3 * 6 + 3) * 4..(3 * 6 + 3) * 4 + 4], &[0, 0, 0, 255]);
}

#[test]
fn invalid_svg_is_an_error() {
    assert!(ReferenceGlyph::from_svg_bytes(b"<svg").is_err());
}

#[test]
fn overlay_is_centred_at_half_size_with_opacity() {
    let mut layer = OverlayLayer::new(20, 10);
    layer
        .show(&solid_glyph([0, 0, 0, 255]), DEFAULT_REFERENCE_OPACITY)
        .unwrap();
    assert!(layer.is_visible());

    // Shorter side 10 -> 5x5 glyph at (7, 2)..(12, 7).
    let px = |x: usize, y: usize| {
        let i = (y * 20 + x) * 4;
        layer.pixels()[i + 3]
    };
    assert_eq!(px(7, 2), 77);
    assert_eq!(px(11, 6), 77);
    assert_eq!(px(6, 2), 0);
    assert_eq!(px(12, 6), 0);
    assert_eq!(px(7, 7), 0);

    layer.clear();
    assert!(!layer.is_visible());
    assert!(layer.pixels().iter().all(|b| *b == 0));
}
