use crate::foundation::error::{PlacardError, PlacardResult};

pub use kurbo::{Point, Rect, RoundedRect};

/// Upper bound for either side of a placeholder, enforced by the style editing helpers.
///
/// The renderers themselves only require `>= 1`; the surface layer has its own hard limit.
pub const MAX_DIMENSION: u32 = 4096;

/// Output image dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a validated size with both sides `>= 1`.
    pub fn new(width: u32, height: u32) -> PlacardResult<Self> {
        if width == 0 || height == 0 {
            return Err(PlacardError::invalid_dimension(width, height));
        }
        Ok(Self { width, height })
    }

    /// `min(width, height)` as `f64`.
    pub fn min_side(self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    /// `max(width, height)` as `f64`.
    pub fn max_side(self) -> f64 {
        f64::from(self.width.max(self.height))
    }

    /// Full-surface rectangle `(0, 0, width, height)`.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Number of pixels covered by this size.
    pub fn area(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Channel array in `[r, g, b, a]` order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
