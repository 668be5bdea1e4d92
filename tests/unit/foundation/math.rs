use super::*;

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(255, 0), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u16(200, 128), 100);
}

#[test]
fn over_with_opaque_src_replaces_dst() {
    let mut dst = [10u8, 20, 30, 255];
    premul_over_in_place(&mut dst, &[1, 2, 3, 255]).unwrap();
    assert_eq!(dst, [1, 2, 3, 255]);
}

#[test]
fn over_with_transparent_src_is_noop() {
    let mut dst = [10u8, 20, 30, 40];
    premul_over_in_place(&mut dst, &[0, 0, 0, 0]).unwrap();
    assert_eq!(dst, [10, 20, 30, 40]);
}

#[test]
fn over_rejects_mismatched_buffers() {
    let mut dst = [0u8; 8];
    assert!(premul_over_in_place(&mut dst, &[0u8; 4]).is_err());
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let mut px = [128u8, 64, 0, 128];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [255, 128, 0, 128]);

    let mut clear = [0u8, 0, 0, 0];
    unpremultiply_rgba8_in_place(&mut clear);
    assert_eq!(clear, [0, 0, 0, 0]);
}
