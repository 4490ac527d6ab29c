use super::*;

fn local_font() -> Option<Vec<u8>> {
    let path = std::env::var_os("CONTRIBEMBLEM_TEST_FONT")?;
    std::fs::read(path).ok()
}

#[test]
fn corrupt_font_bytes_are_a_font_error() {
    let err = FontFace::from_bytes(b"definitely not a font", 16.0).unwrap_err();
    assert!(matches!(err, BadgeError::Font(_)), "{err}");
}

#[test]
fn non_positive_size_is_rejected() {
    assert!(FontFace::from_bytes(&[], 0.0).is_err());
    assert!(FontFace::from_bytes(&[], f32::NAN).is_err());
}

#[test]
fn font_set_load_names_the_failing_weight() {
    let sources = FontSources::new(b"bad".to_vec(), b"bad".to_vec());
    let err = FontSet::load(&sources, &FontSizes::default()).unwrap_err();
    assert!(err.to_string().contains("bold face"), "{err}");
}

#[test]
fn missing_font_file_is_a_font_error() {
    let err = FontSources::from_paths("does/not/exist.ttf", "nope.ttf").unwrap_err();
    assert!(matches!(err, BadgeError::Font(_)));
}

#[test]
fn measure_and_rasterize_with_local_font_if_present() {
    let Some(bytes) = local_font() else {
        return;
    };
    let mut face = FontFace::from_bytes(&bytes, 16.0).unwrap();
    assert!(!face.family_name().trim().is_empty());

    assert_eq!(face.measure(""), 0);
    let one = face.measure("8");
    let three = face.measure("888");
    assert!(one > 0);
    assert!((three - 3 * one).abs() <= 1);

    let mask = face.rasterize("888");
    assert_eq!(mask.coverage.len(), (mask.width * mask.height) as usize);
    assert!(mask.coverage.iter().any(|&c| c > 0));
    assert!(mask.origin_y < 0);

    let again = face.rasterize("888");
    assert!(Arc::ptr_eq(&mask, &again));
}
