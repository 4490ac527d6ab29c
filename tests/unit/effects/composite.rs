use super::*;

#[test]
fn over_coverage_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 255), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 255), src);
}

#[test]
fn over_opaque_is_saturating_when_repeated() {
    let dst = [12, 34, 56, 255];
    let src = [245, 217, 106, 255];
    let once = over(dst, src, 255);
    assert_eq!(over(once, src, 255), once);
}

#[test]
fn over_dst_transparent_returns_scaled_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src, 255), src);
}

#[test]
fn over_half_black_on_white_halves_channels() {
    let dst = [255, 255, 255, 255];
    let src = [0, 0, 0, 128];
    assert_eq!(over(dst, src, 255), [127, 127, 127, 255]);
}

#[test]
fn over_span_blends_every_pixel() {
    let mut row = [255u8, 255, 255, 255].repeat(3);
    over_span(&mut row, [0, 0, 0, 255]);
    assert_eq!(row, [0u8, 0, 0, 255].repeat(3));
}
