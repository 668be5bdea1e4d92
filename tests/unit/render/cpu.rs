use super::*;

fn surface(w: u32, h: u32) -> CpuSurface {
    CpuSurface::new(Size::new(w, h).unwrap()).unwrap()
}

#[test]
fn new_surface_is_transparent() {
    let frame = surface(8, 4).into_frame().unwrap();
    assert_eq!((frame.width, frame.height), (8, 4));
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert!(frame.data.iter().all(|&b| b == 0));
    assert!(frame.premultiplied);
}

#[test]
fn solid_fill_covers_every_pixel() {
    let mut s = surface(16, 9);
    s.fill_rect(s.size().rect(), &Paint::Solid(Color::rgb(204, 204, 204)))
        .unwrap();
    let frame = s.into_frame().unwrap();
    assert!(
        frame
            .data
            .chunks_exact(4)
            .all(|px| px == [204, 204, 204, 255])
    );
}

#[test]
fn pixels_see_queued_draws_and_later_draws_composite_on_top() {
    let mut s = surface(4, 4);
    s.fill_rect(s.size().rect(), &Paint::Solid(Color::rgb(10, 20, 30)))
        .unwrap();
    let mut seen = Vec::new();
    s.with_pixels_mut(&mut |px| seen.extend_from_slice(&px[..4]))
        .unwrap();
    assert_eq!(seen, vec![10, 20, 30, 255]);

    s.fill_rect(Rect::new(0.0, 0.0, 2.0, 4.0), &Paint::Solid(Color::rgb(255, 0, 0)))
        .unwrap();
    let frame = s.into_frame().unwrap();
    assert_eq!(frame.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(3, 3), Some([10, 20, 30, 255]));
}

#[test]
fn clear_discards_everything() {
    let mut s = surface(4, 4);
    s.fill_rect(s.size().rect(), &Paint::Solid(Color::rgb(1, 2, 3)))
        .unwrap();
    s.with_pixels_mut(&mut |_| {}).unwrap();
    s.fill_rect(s.size().rect(), &Paint::Solid(Color::rgb(1, 2, 3)))
        .unwrap();
    s.clear().unwrap();
    assert!(s.into_frame().unwrap().data.iter().all(|&b| b == 0));
}

#[test]
fn rounded_clip_crops_corners() {
    let mut s = surface(64, 64);
    let full = s.size().rect();
    s.set_clip(Some(RoundedRect::from_rect(full, 20.0)));
    s.fill_rect(full, &Paint::Solid(Color::rgb(0, 0, 255)))
        .unwrap();
    let frame = s.into_frame().unwrap();
    assert_eq!(frame.pixel(0, 0).unwrap()[3], 0);
    assert_eq!(frame.pixel(63, 63).unwrap()[3], 0);
    assert_eq!(frame.pixel(32, 32), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(32, 0), Some([0, 0, 255, 255]));
}

#[test]
fn gradient_fill_matches_paint_sampling() {
    let mut s = surface(50, 50);
    let paint = Paint::Linear {
        start: Point::new(0.0, 0.0),
        end: Point::new(50.0, 50.0),
        from: Color::rgb(0, 0, 0),
        to: Color::rgb(255, 255, 255),
    };
    s.fill_rect(s.size().rect(), &paint).unwrap();
    let frame = s.into_frame().unwrap();
    let tl = frame.pixel(0, 0).unwrap();
    let br = frame.pixel(49, 49).unwrap();
    assert!(tl[0] <= 6, "{tl:?}");
    assert!(br[0] >= 249, "{br:?}");
    assert_eq!(tl[3], 255);
}

#[test]
fn strokes_and_circles_leave_marks() {
    let mut s = surface(40, 40);
    s.stroke_line(
        Point::new(0.0, 20.0),
        Point::new(40.0, 20.0),
        4.0,
        Color::rgb(255, 0, 0),
    )
    .unwrap();
    s.fill_circle(Point::new(10.0, 10.0), 4.0, Color::rgb(0, 255, 0))
        .unwrap();
    s.stroke_rounded_rect(
        RoundedRect::from_rect(Rect::new(1.0, 1.0, 39.0, 39.0), 0.0),
        2.0,
        Color::rgb(0, 0, 255),
    )
    .unwrap();
    let frame = s.into_frame().unwrap();
    assert_eq!(frame.pixel(20, 20), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(10, 10), Some([0, 255, 0, 255]));
    assert_eq!(frame.pixel(0, 10), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(20, 30).unwrap()[3], 0);
}

#[test]
fn text_without_font_is_skipped() {
    let mut s = surface(40, 40);
    s.fill_text_centered("40 × 40", Point::new(20.0, 20.0), 5.0, Color::rgb(0, 0, 0))
        .unwrap();
    assert!(s.into_frame().unwrap().data.iter().all(|&b| b == 0));
}

#[test]
fn dimensions_beyond_u16_are_rejected() {
    let err = CpuSurface::new(Size::new(65_536, 1).unwrap()).err().unwrap();
    assert!(matches!(err, PlacardError::SurfaceUnavailable(_)));
}

#[test]
fn radial_fill_tracks_the_ramp_definition() {
    let mut s = surface(80, 40);
    let paint = Paint::Radial {
        center: Point::new(40.0, 20.0),
        radius: 40.0,
        from: Color::rgb(255, 0, 0),
        to: Color::rgb(0, 0, 255),
    };
    s.fill_rect(s.size().rect(), &paint).unwrap();
    let frame = s.into_frame().unwrap();
    for (x, y) in [(40, 20), (60, 20), (70, 30), (0, 0), (79, 39)] {
        let want = paint.color_at(Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5));
        let got = frame.pixel(x, y).unwrap();
        assert!(got[0].abs_diff(want.r) <= 4, "({x},{y}): {got:?} vs {want:?}");
        assert!(got[2].abs_diff(want.b) <= 4, "({x},{y}): {got:?} vs {want:?}");
        assert_eq!(got[3], 255);
    }
}
