use crate::foundation::core::{Point, Rect, RoundedRect, Size};
use crate::render::surface::Paint;
use crate::style::color::Color;
use crate::style::descriptor::PatternKind;

use super::*;

#[derive(Debug, PartialEq)]
enum Op {
    Clear,
    Clip(Option<RoundedRect>),
    Fill(Rect),
    Border(RoundedRect, f64, Color),
    Text(String, Point, f64, Color),
    Other,
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Surface for Recorder {
    fn size(&self) -> Size {
        Size::new(1, 1).unwrap()
    }

    fn clear(&mut self) -> PlacardResult<()> {
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn set_clip(&mut self, clip: Option<RoundedRect>) {
        self.ops.push(Op::Clip(clip));
    }

    fn fill_rect(&mut self, rect: Rect, _paint: &Paint) -> PlacardResult<()> {
        self.ops.push(Op::Fill(rect));
        Ok(())
    }

    fn fill_circle(&mut self, _c: Point, _r: f64, _color: Color) -> PlacardResult<()> {
        self.ops.push(Op::Other);
        Ok(())
    }

    fn stroke_line(&mut self, _a: Point, _b: Point, _w: f64, _c: Color) -> PlacardResult<()> {
        self.ops.push(Op::Other);
        Ok(())
    }

    fn stroke_rounded_rect(
        &mut self,
        shape: RoundedRect,
        width: f64,
        color: Color,
    ) -> PlacardResult<()> {
        self.ops.push(Op::Border(shape, width, color));
        Ok(())
    }

    fn fill_text_centered(
        &mut self,
        text: &str,
        center: Point,
        size_px: f64,
        color: Color,
    ) -> PlacardResult<()> {
        self.ops.push(Op::Text(text.to_string(), center, size_px, color));
        Ok(())
    }

    fn with_pixels_mut(&mut self, _f: &mut dyn FnMut(&mut [u8])) -> PlacardResult<()> {
        self.ops.push(Op::Other);
        Ok(())
    }
}

fn record(style: &StyleDescriptor) -> Vec<Op> {
    let mut r = Recorder::default();
    paint_layers(&mut r, style, &mut fastrand::Rng::with_seed(1)).unwrap();
    r.ops
}

#[test]
fn plain_style_is_clear_fill_caption() {
    let ops = record(&StyleDescriptor::default());
    assert_eq!(
        ops,
        vec![
            Op::Clear,
            Op::Clip(None),
            Op::Fill(Rect::new(0.0, 0.0, 800.0, 600.0)),
            Op::Text(
                "800 × 600".to_string(),
                Point::new(400.0, 300.0),
                75.0,
                Color::rgb(0x66, 0x66, 0x66)
            ),
            Op::Clip(None),
        ]
    );
}

#[test]
fn rounded_border_is_drawn_clipped_between_pattern_and_caption() {
    let style = StyleDescriptor::default()
        .with_size(200, 100)
        .with_caption("hi")
        .with_border(20, 8, Color::rgb(1, 2, 3));
    let ops = record(&style);
    let clip = RoundedRect::from_rect(Rect::new(0.0, 0.0, 200.0, 100.0), 20.0);
    let border = RoundedRect::from_rect(Rect::new(4.0, 4.0, 196.0, 96.0), 16.0);
    assert_eq!(
        ops,
        vec![
            Op::Clear,
            Op::Clip(Some(clip)),
            Op::Fill(Rect::new(0.0, 0.0, 200.0, 100.0)),
            Op::Border(border, 8.0, Color::rgb(1, 2, 3)),
            Op::Text(
                "hi".to_string(),
                Point::new(100.0, 50.0),
                12.5,
                Color::rgb(0x66, 0x66, 0x66)
            ),
            Op::Clip(None),
        ]
    );
}

#[test]
fn zero_dimension_is_rejected_before_drawing() {
    let mut r = Recorder::default();
    let err = paint_layers(
        &mut r,
        &StyleDescriptor::default().with_size(0, 10),
        &mut fastrand::Rng::with_seed(1),
    )
    .unwrap_err();
    assert!(matches!(err, crate::PlacardError::InvalidDimension { .. }));
    assert!(r.ops.is_empty());
}

#[test]
fn pattern_draws_stay_between_clip_and_border() {
    let style = StyleDescriptor::default()
        .with_size(100, 100)
        .with_pattern(PatternKind::Dots)
        .with_border(0, 2, Color::rgb(0, 0, 0));
    let ops = record(&style);
    let border_at = ops
        .iter()
        .position(|op| matches!(op, Op::Border(..)))
        .unwrap();
    let last_dot = ops.iter().rposition(|op| *op == Op::Other).unwrap();
    assert!(last_dot < border_at);
    assert!(matches!(ops[border_at + 1], Op::Text(..)));
}

#[test]
fn renderer_rejects_invalid_dimensions() {
    let r = RasterRenderer::new(RasterOpts::default().with_font(FontSource::Disabled)).unwrap();
    assert!(!r.has_caption_font());
    let err = r.render(&StyleDescriptor::default().with_size(10, 0)).unwrap_err();
    assert!(matches!(
        err,
        crate::PlacardError::InvalidDimension {
            width: 10,
            height: 0
        }
    ));
}

#[test]
fn oversized_surface_is_unavailable() {
    let r = RasterRenderer::new(RasterOpts::default().with_font(FontSource::Disabled)).unwrap();
    let err = r
        .render(&StyleDescriptor::default().with_size(70_000, 1))
        .unwrap_err();
    assert!(matches!(err, crate::PlacardError::SurfaceUnavailable(_)));
}
