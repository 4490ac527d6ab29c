use super::*;
use crate::foundation::core::Rgba8;
use crate::layout::config::StatArrangement;

#[test]
fn empty_object_is_the_reference_design() {
    let cfg = BadgeConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, BadgeConfig::default());
    assert_eq!(cfg.theme.score, Rgba8::rgba(245, 217, 106, 255));
    assert_eq!(cfg.layout.arrangement, StatArrangement::Stacked);
}

#[test]
fn theme_colors_accept_hex_with_alpha() {
    let cfg = BadgeConfig::from_reader(
        r##"{ "theme": { "accent": "#FF000080", "divider": [1, 2, 3, 4] } }"##.as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.theme.accent, Rgba8::rgba(255, 0, 0, 128));
    assert_eq!(cfg.theme.divider, Rgba8::rgba(1, 2, 3, 4));
    assert_eq!(cfg.theme.border, Theme::default().border);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = BadgeConfig::from_reader("{ nope".as_bytes()).unwrap_err();
    assert!(matches!(err, BadgeError::Serde(_)));
}

#[test]
fn invalid_layout_is_rejected_on_load() {
    let err =
        BadgeConfig::from_reader(r#"{ "layout": { "stat_bar_height": 999 } }"#.as_bytes())
            .unwrap_err();
    assert!(matches!(err, BadgeError::Validation(_)));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = BadgeConfig::from_path("no/such/config.json").unwrap_err();
    assert!(err.to_string().contains("no/such/config.json"));
}

#[test]
fn config_serializes_back_to_loadable_json() {
    let text = serde_json::to_string(&BadgeConfig::default()).unwrap();
    let back = BadgeConfig::from_reader(text.as_bytes()).unwrap();
    assert_eq!(back, BadgeConfig::default());
}

#[test]
fn oversized_diamond_is_rejected_on_load() {
    let err = BadgeConfig::from_reader(
        r#"{ "layout": { "diamond_half_width": 2000000000 } }"#.as_bytes(),
    )
    .unwrap_err();
    assert!(matches!(err, BadgeError::Validation(_)), "{err}");
}
