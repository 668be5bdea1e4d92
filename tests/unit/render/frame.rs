use super::*;

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data: vec![128, 64, 0, 128, 10, 20, 30, 255],
        premultiplied: true,
    }
}

#[test]
fn pixel_lookup_is_row_major() {
    let f = frame();
    assert_eq!(f.pixel(0, 0), Some([128, 64, 0, 128]));
    assert_eq!(f.pixel(1, 0), Some([10, 20, 30, 255]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn straight_conversion_unpremultiplies() {
    assert_eq!(
        frame().to_straight_rgba8(),
        vec![255, 128, 0, 128, 10, 20, 30, 255]
    );
}

#[test]
fn rgb_over_black_drops_alpha_of_premultiplied_data() {
    assert_eq!(frame().to_rgb8_over_black(), vec![128, 64, 0, 10, 20, 30]);

    let straight = FrameRGBA {
        premultiplied: false,
        data: vec![255, 128, 0, 128],
        width: 1,
        height: 1,
    };
    assert_eq!(straight.to_rgb8_over_black(), vec![128, 64, 0]);
}
