//! SVG rendering of a [`StyleDescriptor`].
//!
//! Pure string building. The output uses the same geometry and caption rules as the raster path
//! (see [`crate::render::layout`]). Patterns without a vector form (`stripes`, `dots`, `grid`,
//! `noise`) are emitted as a flat `color_a` fill.

use crate::foundation::error::PlacardResult;
use crate::render::layout::{
    border_geometry, caption_center, effective_caption, font_size,
};
use crate::style::color::Color;
use crate::style::descriptor::{PatternKind, StyleDescriptor};

/// Font stack written into the caption element.
pub const CAPTION_FONT_FAMILY: &str = "-apple-system, BlinkMacSystemFont, sans-serif";

const GRADIENT_ID: &str = "bg";
const CLIP_ID: &str = "clip";

/// Renders a [`StyleDescriptor`] to SVG markup.
#[derive(Clone, Copy, Debug, Default)]
pub struct VectorRenderer;

impl VectorRenderer {
    /// Whether `kind` has a native vector form. Other kinds fall back to a flat `color_a` fill.
    pub fn supports(kind: PatternKind) -> bool {
        match kind {
            PatternKind::Solid | PatternKind::GradientLinear | PatternKind::GradientRadial => true,
            PatternKind::Stripes | PatternKind::Dots | PatternKind::Grid | PatternKind::Noise => {
                false
            }
        }
    }

    /// Render `style` to a standalone SVG document.
    #[tracing::instrument(skip_all, fields(w = style.width, h = style.height, pattern = %style.pattern))]
    pub fn render(&self, style: &StyleDescriptor) -> PlacardResult<String> {
        let size = style.size()?;
        let (w, h) = (size.width, size.height);

        if !Self::supports(style.pattern) {
            tracing::debug!(pattern = %style.pattern, "no vector form; using flat color_a");
        }

        let mut defs = Vec::new();
        let fill = match style.pattern {
            PatternKind::GradientLinear => {
                defs.push(format!(
                    r#"<linearGradient id="{GRADIENT_ID}" gradientUnits="userSpaceOnUse" x1="0" y1="0" x2="{w}" y2="{h}">{}</linearGradient>"#,
                    stops(style.color_a, style.color_b)
                ));
                format!(r#"fill="url(#{GRADIENT_ID})""#)
            }
            PatternKind::GradientRadial => {
                let c = caption_center(size);
                defs.push(format!(
                    r#"<radialGradient id="{GRADIENT_ID}" gradientUnits="userSpaceOnUse" cx="{}" cy="{}" r="{}">{}</radialGradient>"#,
                    fmt_num(c.x),
                    fmt_num(c.y),
                    fmt_num(size.max_side() / 2.0),
                    stops(style.color_a, style.color_b)
                ));
                format!(r#"fill="url(#{GRADIENT_ID})""#)
            }
            PatternKind::Solid
            | PatternKind::Stripes
            | PatternKind::Dots
            | PatternKind::Grid
            | PatternKind::Noise => paint_attrs("fill", style.color_a),
        };

        // One rect carries fill, rounding and border. With a border the rect is inset to the
        // stroke centerline so the stroke's outer edge lands on the image bounds, exactly like
        // the raster border.
        let rect = match border_geometry(size, style.border_width, style.border_radius) {
            Some(border) => {
                let r = border.rect;
                let mut attrs = format!(
                    r#"x="{}" y="{}" width="{}" height="{}" {fill}"#,
                    fmt_num(r.x0),
                    fmt_num(r.y0),
                    fmt_num(r.width()),
                    fmt_num(r.height()),
                );
                if border.radius > 0.0 {
                    attrs.push_str(&format!(r#" rx="{}""#, fmt_num(border.radius)));
                }
                attrs.push_str(&format!(
                    r#" {} stroke-width="{}""#,
                    paint_attrs("stroke", style.border_color),
                    fmt_num(border.stroke_width)
                ));
                // A stroke wider than twice the radius has square outer corners; crop them to
                // the rounded silhouette.
                let outer_radius = border.radius + border.stroke_width / 2.0;
                if f64::from(style.border_radius) > outer_radius + 1e-9 {
                    defs.push(format!(
                        r#"<clipPath id="{CLIP_ID}"><rect width="{w}" height="{h}" rx="{}"/></clipPath>"#,
                        style.border_radius
                    ));
                    attrs.push_str(&format!(r#" clip-path="url(#{CLIP_ID})""#));
                }
                attrs
            }
            None => {
                let mut attrs = format!(r#"width="{w}" height="{h}" {fill}"#);
                if style.border_radius > 0 {
                    attrs.push_str(&format!(r#" rx="{}""#, style.border_radius));
                }
                attrs
            }
        };

        let mut out = String::with_capacity(512);
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
        ));
        if !defs.is_empty() {
            out.push_str(&format!("  <defs>{}</defs>\n", defs.concat()));
        }
        out.push_str(&format!("  <rect {rect}/>\n"));

        let c = caption_center(size);
        out.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" dominant-baseline=\"middle\" text-anchor=\"middle\" font-family=\"{CAPTION_FONT_FAMILY}\" font-size=\"{}\" font-weight=\"bold\" {}>{}</text>\n",
            fmt_num(c.x),
            fmt_num(c.y),
            fmt_num(font_size(w, h)),
            paint_attrs("fill", style.text_color),
            escape_xml(&effective_caption(style))
        ));
        out.push_str("</svg>\n");
        Ok(out)
    }
}

fn stops(from: Color, to: Color) -> String {
    format!(
        r#"<stop offset="0" {}/><stop offset="1" {}/>"#,
        paint_attrs("stop-color", from),
        paint_attrs("stop-color", to)
    )
}

/// `name="#rrggbb"`, plus a matching opacity attribute for translucent colors.
fn paint_attrs(name: &str, color: Color) -> String {
    let mut s = format!(r#"{name}="{}""#, color.to_hex_rgb());
    if !color.is_opaque() {
        let opacity_name = match name {
            "stop-color" => "stop-opacity",
            "stroke" => "stroke-opacity",
            _ => "fill-opacity",
        };
        s.push_str(&format!(r#" {opacity_name}="{}""#, fmt_num(color.opacity())));
    }
    s
}

/// Format a coordinate without trailing zeros (`75`, `62.5`, `0.333`).
pub(crate) fn fmt_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/vector.rs"]
mod tests;
