use super::*;

#[test]
fn png_roundtrip_preserves_pixels() {
    let rgba = vec![255, 0, 0, 255, 0, 255, 0, 128];
    let png = EncodedImage::png_from_rgba(2, 1, rgba.clone()).unwrap();
    assert_eq!(png.mime, "image/png");
    assert_eq!(png.decode_rgba().unwrap().into_raw(), rgba);
}

#[test]
fn png_rejects_wrong_buffer_size() {
    assert!(EncodedImage::png_from_rgba(2, 2, vec![0; 4]).is_err());
}

#[test]
fn data_url_has_mime_prefix() {
    let png = EncodedImage::png_from_rgba(1, 1, vec![1, 2, 3, 255]).unwrap();
    let url = png.to_data_url();
    assert!(url.starts_with("data:image/png;base64,iVBOR"));
    assert_eq!(url.len(), "data:image/png;base64,".len() + png.to_base64().len());
}

#[test]
fn from_encoded_detects_format_and_size() {
    let png = EncodedImage::png_from_rgba(3, 2, vec![9; 24]).unwrap();
    let back = EncodedImage::from_encoded(png.bytes.clone()).unwrap();
    assert_eq!((back.width, back.height, back.mime), (3, 2, "image/png"));

    let jpg = EncodedImage::jpeg_from_rgba(3, 2, vec![200; 24], 90).unwrap();
    let back = EncodedImage::from_encoded(jpg.bytes).unwrap();
    assert_eq!(back.mime, "image/jpeg");
}

#[test]
fn from_encoded_rejects_garbage() {
    assert!(EncodedImage::from_encoded(b"not an image".to_vec()).is_err());
}
