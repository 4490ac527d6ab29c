use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BadgeError::background("x")
            .to_string()
            .contains("background error:")
    );
    assert!(BadgeError::font("x").to_string().contains("font error:"));
    assert!(BadgeError::encode("x").to_string().contains("encode error:"));
    assert!(
        BadgeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BadgeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BadgeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
