use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AksaraError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(AksaraError::canvas("x").to_string().contains("canvas error:"));
    assert!(
        AksaraError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn typed_errors_convert_with_their_prefix() {
    let err = AksaraError::from(ClassifyError::Status(500));
    assert!(err.to_string().starts_with("classification error:"));
    assert!(err.to_string().contains("500"));

    let err = AksaraError::from(SegmentError::Unsupported { index: 2, ch: '9' });
    assert!(err.to_string().starts_with("segmentation error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AksaraError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
