use serde::{Deserialize, Serialize};

use crate::foundation::core::{MAX_DIMENSION, Size};
use crate::foundation::error::{PlacardError, PlacardResult};
use crate::style::color::Color;

/// Background fill pattern.
///
/// Deserializes from camelCase names; the short ids `gradient` and `radial` are accepted as
/// aliases for the two gradient kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternKind {
    /// Flat `color_a`.
    #[default]
    Solid,
    /// Linear ramp from the top-left corner (`color_a`) to the bottom-right corner (`color_b`).
    #[serde(alias = "gradient")]
    GradientLinear,
    /// Radial ramp from the center (`color_a`) to `max(w, h) / 2` (`color_b`).
    #[serde(alias = "radial")]
    GradientRadial,
    /// 45 degree `color_b` stripes over `color_a`.
    Stripes,
    /// Grid of `color_b` dots over `color_a`.
    Dots,
    /// 1px `color_b` grid lines over `color_a`.
    Grid,
    /// `color_a` with per-pixel brightness jitter.
    Noise,
}

impl PatternKind {
    /// Every pattern kind, in UI order.
    pub const ALL: [PatternKind; 7] = [
        PatternKind::Solid,
        PatternKind::GradientLinear,
        PatternKind::GradientRadial,
        PatternKind::Stripes,
        PatternKind::Dots,
        PatternKind::Grid,
        PatternKind::Noise,
    ];

    /// Canonical serialized name.
    pub fn as_str(self) -> &'static str {
        match self {
            PatternKind::Solid => "solid",
            PatternKind::GradientLinear => "gradientLinear",
            PatternKind::GradientRadial => "gradientRadial",
            PatternKind::Stripes => "stripes",
            PatternKind::Dots => "dots",
            PatternKind::Grid => "grid",
            PatternKind::Noise => "noise",
        }
    }

    /// Whether `color_b` participates in this pattern.
    pub fn uses_color_b(self) -> bool {
        match self {
            PatternKind::Solid | PatternKind::Noise => false,
            PatternKind::GradientLinear
            | PatternKind::GradientRadial
            | PatternKind::Stripes
            | PatternKind::Dots
            | PatternKind::Grid => true,
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every parameter of one placeholder render.
///
/// Renderers take it by shared reference and never mutate it; edits go through the `with_*`
/// methods, which return a changed copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StyleDescriptor {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Background pattern.
    pub pattern: PatternKind,
    /// Primary background color.
    pub color_a: Color,
    /// Secondary background color; ignored by `solid` and `noise`.
    pub color_b: Color,
    /// Caption color.
    pub text_color: Color,
    /// Caption text. Empty means `"{width} × {height}"`.
    pub caption: String,
    /// Corner radius in pixels, `0` for square corners.
    pub border_radius: u32,
    /// Border stroke width in pixels, `0` for no border.
    pub border_width: u32,
    /// Border stroke color.
    pub border_color: Color,
}

impl Default for StyleDescriptor {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            pattern: PatternKind::Solid,
            color_a: Color::rgb(0xcc, 0xcc, 0xcc),
            color_b: Color::rgb(0x99, 0x99, 0x99),
            text_color: Color::rgb(0x66, 0x66, 0x66),
            caption: String::new(),
            border_radius: 0,
            border_width: 0,
            border_color: Color::rgb(0x33, 0x33, 0x33),
        }
    }
}

impl StyleDescriptor {
    /// Validated output size.
    pub fn size(&self) -> PlacardResult<Size> {
        Size::new(self.width, self.height)
    }

    /// Copy with an exact size. Zero sides are rejected later, at render time.
    pub fn with_size(&self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..self.clone()
        }
    }

    /// Copy with width clamped to `1..=MAX_DIMENSION`.
    pub fn with_width(&self, width: u32) -> Self {
        Self {
            width: clamp_dimension(width),
            ..self.clone()
        }
    }

    /// Copy with height clamped to `1..=MAX_DIMENSION`.
    pub fn with_height(&self, height: u32) -> Self {
        Self {
            height: clamp_dimension(height),
            ..self.clone()
        }
    }

    /// Copy with a different pattern.
    pub fn with_pattern(&self, pattern: PatternKind) -> Self {
        Self {
            pattern,
            ..self.clone()
        }
    }

    /// Copy with both background colors replaced.
    pub fn with_colors(&self, color_a: Color, color_b: Color) -> Self {
        Self {
            color_a,
            color_b,
            ..self.clone()
        }
    }

    /// Copy with a different caption color.
    pub fn with_text_color(&self, text_color: Color) -> Self {
        Self {
            text_color,
            ..self.clone()
        }
    }

    /// Copy with a different caption.
    pub fn with_caption(&self, caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            ..self.clone()
        }
    }

    /// Copy with corner radius, border width and border color replaced.
    pub fn with_border(&self, radius: u32, width: u32, color: Color) -> Self {
        Self {
            border_radius: radius,
            border_width: width,
            border_color: color,
            ..self.clone()
        }
    }

    /// Parse a JSON style document. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> PlacardResult<Self> {
        serde_json::from_str(s).map_err(|e| PlacardError::serde(format!("style json: {e}")))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> PlacardResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlacardError::serde(format!("style json: {e}")))
    }
}

/// Clamp a user-entered dimension to `1..=MAX_DIMENSION`.
pub fn clamp_dimension(v: u32) -> u32 {
    v.clamp(1, MAX_DIMENSION)
}

#[cfg(test)]
#[path = "../../tests/unit/style/descriptor.rs"]
mod tests;
