//! Geometry and caption rules shared by the raster and vector renderers.
//!
//! Both renderers call these functions rather than re-deriving the formulas, so a placeholder
//! looks the same whichever output format is chosen.

use crate::foundation::core::{Point, Rect, RoundedRect, Size};
use crate::style::descriptor::StyleDescriptor;

/// Caption to draw: the descriptor's caption, or `"{width} × {height}"` when it is empty.
pub fn effective_caption(style: &StyleDescriptor) -> String {
    if style.caption.is_empty() {
        default_caption(style.width, style.height)
    } else {
        style.caption.clone()
    }
}

/// `"{width} × {height}"` with U+00D7 MULTIPLICATION SIGN.
pub fn default_caption(width: u32, height: u32) -> String {
    format!("{width} \u{d7} {height}")
}

/// Caption font size in pixels: `min(width, height) / 8`.
pub fn font_size(width: u32, height: u32) -> f64 {
    f64::from(width.min(height)) / 8.0
}

/// Caption anchor: the center of the image.
pub fn caption_center(size: Size) -> Point {
    Point::new(f64::from(size.width) / 2.0, f64::from(size.height) / 2.0)
}

/// Rounded clip region covering the whole image, or `None` for square corners.
pub fn clip_shape(size: Size, border_radius: u32) -> Option<RoundedRect> {
    (border_radius > 0).then(|| RoundedRect::from_rect(size.rect(), f64::from(border_radius)))
}

/// Centerline of the border stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderGeometry {
    /// Rectangle inset by half the stroke width on every side.
    pub rect: Rect,
    /// Corner radius of the centerline, `max(0, border_radius - border_width / 2)`.
    pub radius: f64,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl BorderGeometry {
    /// The stroke path as a rounded rectangle (radius `0` is a plain rectangle).
    pub fn shape(&self) -> RoundedRect {
        RoundedRect::from_rect(self.rect, self.radius)
    }
}

/// Border stroke geometry, or `None` when `border_width == 0`.
///
/// The stroke is inset by half its width so its outer edge lands exactly on the image bounds.
/// With rounded corners the centerline radius shrinks by the same amount, so the outer edge of
/// the stroke follows the clip silhouette. The inset never exceeds half the short side.
pub fn border_geometry(size: Size, border_width: u32, border_radius: u32) -> Option<BorderGeometry> {
    if border_width == 0 {
        return None;
    }
    let stroke_width = f64::from(border_width);
    let inset = (stroke_width / 2.0).min(size.min_side() / 2.0);
    let full = size.rect();
    let rect = Rect::new(
        full.x0 + inset,
        full.y0 + inset,
        full.x1 - inset,
        full.y1 - inset,
    );
    let radius = if border_radius > 0 {
        (f64::from(border_radius) - stroke_width / 2.0).max(0.0)
    } else {
        0.0
    };
    Some(BorderGeometry {
        rect,
        radius,
        stroke_width,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
