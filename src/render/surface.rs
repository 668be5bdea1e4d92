use crate::foundation::core::{Point, Rect, RoundedRect, Size};
use crate::foundation::error::PlacardResult;
use crate::style::color::Color;

/// Fill source for [`Surface::fill_rect`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Flat color.
    Solid(Color),
    /// Linear ramp: `from` at `start`, `to` at `end`, clamped beyond both.
    Linear {
        /// Point where the ramp is `from`.
        start: Point,
        /// Point where the ramp is `to`.
        end: Point,
        /// Color at offset 0.
        from: Color,
        /// Color at offset 1.
        to: Color,
    },
    /// Radial ramp from `center` (radius 0) to `radius`, clamped beyond.
    Radial {
        /// Ramp center.
        center: Point,
        /// Distance at which the ramp reaches `to`.
        radius: f64,
        /// Color at the center.
        from: Color,
        /// Color at `radius` and beyond.
        to: Color,
    },
}

/// Immediate-mode drawing capability consumed by the raster renderer.
///
/// Coordinates are pixels with the origin at the top-left corner. While a clip is set, every
/// fill, stroke and text draw is cropped to it. Pixel buffers handed out by
/// [`Surface::with_pixels_mut`] are premultiplied RGBA8, row-major, tightly packed, and contain
/// everything drawn so far.
pub trait Surface {
    /// Surface dimensions.
    fn size(&self) -> Size;

    /// Reset every pixel to transparent black and drop pending draws.
    fn clear(&mut self) -> PlacardResult<()>;

    /// Set or remove the clip region for subsequent draws.
    fn set_clip(&mut self, clip: Option<RoundedRect>);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> PlacardResult<()>;

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) -> PlacardResult<()>;

    /// Stroke a straight segment with butt caps.
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color)
    -> PlacardResult<()>;

    /// Stroke the outline of a (possibly rounded) rectangle, centered on its edge.
    fn stroke_rounded_rect(
        &mut self,
        shape: RoundedRect,
        width: f64,
        color: Color,
    ) -> PlacardResult<()>;

    /// Draw one line of bold sans-serif text centered on `center`.
    fn fill_text_centered(
        &mut self,
        text: &str,
        center: Point,
        size_px: f64,
        color: Color,
    ) -> PlacardResult<()>;

    /// Run `f` over the premultiplied pixel buffer.
    fn with_pixels_mut(&mut self, f: &mut dyn FnMut(&mut [u8])) -> PlacardResult<()>;
}

impl Paint {
    /// Color of this paint at `p`.
    pub fn color_at(&self, p: Point) -> Color {
        match *self {
            Paint::Solid(c) => c,
            Paint::Linear {
                start,
                end,
                from,
                to,
            } => {
                let d = end - start;
                let len2 = d.hypot2();
                if len2 <= f64::EPSILON {
                    return to;
                }
                let t = (p - start).dot(d) / len2;
                from.lerp(to, t)
            }
            Paint::Radial {
                center,
                radius,
                from,
                to,
            } => {
                if radius <= f64::EPSILON {
                    return to;
                }
                from.lerp(to, p.distance(center) / radius)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
