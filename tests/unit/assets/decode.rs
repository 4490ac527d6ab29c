use std::io::Cursor;

use super::*;

fn encode(img: image::RgbaImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    let dyn_img = match format {
        image::ImageFormat::Jpeg => image::DynamicImage::ImageRgb8(
            image::DynamicImage::ImageRgba8(img).to_rgb8(),
        ),
        _ => image::DynamicImage::ImageRgba8(img),
    };
    dyn_img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
    buf
}

#[test]
fn decode_png_keeps_dimensions_and_straight_alpha() {
    let img = image::RgbaImage::from_raw(2, 1, vec![100, 50, 200, 128, 1, 2, 3, 255]).unwrap();
    let src = decode_background(&encode(img, image::ImageFormat::Png)).unwrap();
    assert_eq!((src.width(), src.height()), (2, 1));
    assert_eq!(src.pixels().get_pixel(0, 0).0, [100, 50, 200, 128]);
}

#[test]
fn decode_jpeg_banner() {
    let img = image::RgbaImage::from_pixel(474, 96, image::Rgba([60, 80, 200, 255]));
    let src = decode_background(&encode(img, image::ImageFormat::Jpeg)).unwrap();
    assert_eq!((src.width(), src.height()), (474, 96));
}

#[test]
fn garbage_bytes_are_a_background_error() {
    let err = decode_background(b"not an image").unwrap_err();
    assert!(matches!(err, BadgeError::Background(_)), "{err}");
}

#[test]
fn missing_file_names_the_path() {
    let err = load_background("testdata/nonexistent.jpg").unwrap_err();
    assert!(matches!(err, BadgeError::Background(_)));
    assert!(err.to_string().contains("nonexistent.jpg"));
}

#[test]
fn zero_area_images_are_rejected() {
    assert!(SourceImage::from_rgba(image::RgbaImage::new(0, 5)).is_err());
}
