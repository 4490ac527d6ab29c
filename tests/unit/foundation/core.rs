use serde_json::json;

use super::*;

#[test]
fn badge_size_keeps_banner_aspect() {
    let s = CanvasSize::BADGE;
    assert_eq!((s.width, s.height), (800, 162));
    assert_eq!(s.pixel_count(), 800 * 162);
}

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Rgba8 = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgba8::rgba(255, 0, 0, 255));

    let c: Rgba8 = serde_json::from_value(json!("CEAE3350")).unwrap();
    assert_eq!(c, Rgba8::rgba(0xCE, 0xAE, 0x33, 0x50));

    assert!(serde_json::from_value::<Rgba8>(json!("#abc")).is_err());
    assert!(serde_json::from_value::<Rgba8>(json!("#zzzzzz")).is_err());
}

#[test]
fn parses_byte_arrays() {
    let c: Rgba8 = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(c, Rgba8::rgba(1, 2, 3, 255));
    let c: Rgba8 = serde_json::from_value(json!([1, 2, 3, 4])).unwrap();
    assert_eq!(c, Rgba8::rgba(1, 2, 3, 4));
    assert!(serde_json::from_value::<Rgba8>(json!([1, 2])).is_err());
}

#[test]
fn hex_serialization_is_uppercase_rgba() {
    let v = serde_json::to_value(Rgba8::rgba(245, 217, 106, 255)).unwrap();
    assert_eq!(v, json!("#F5D96AFF"));
}

#[test]
fn premul_scales_color_by_alpha() {
    assert_eq!(Rgba8::rgba(255, 255, 255, 0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::WHITE.to_premul(), [255, 255, 255, 255]);
    assert_eq!(
        Rgba8::rgba(100, 50, 200, 128).to_premul(),
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
}

#[test]
fn irect_edges() {
    let r = IRect::new(-2, 3, 10, 4);
    assert_eq!(r.right(), 8);
    assert_eq!(r.bottom(), 7);
    assert!(!r.is_empty());
    assert!(IRect::new(0, 0, 0, 5).is_empty());
}
