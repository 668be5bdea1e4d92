//! Background layer painters, one per [`PatternKind`].

use crate::foundation::core::{Point, Size};
use crate::foundation::error::PlacardResult;
use crate::render::surface::{Paint, Surface};
use crate::style::color::Color;
use crate::style::descriptor::PatternKind;

/// Peak magnitude of the per-pixel brightness offset used by [`PatternKind::Noise`].
pub const NOISE_AMPLITUDE: f64 = 15.0;

/// Paint the background layer of `kind` over the whole `size` area of `surface`.
///
/// Only the background is drawn; border and caption are the caller's job. `color_b` is never
/// read for `Solid` and `Noise`. `rng` is only consumed by `Noise`.
pub fn paint_pattern<S: Surface + ?Sized>(
    surface: &mut S,
    size: Size,
    kind: PatternKind,
    color_a: Color,
    color_b: Color,
    rng: &mut fastrand::Rng,
) -> PlacardResult<()> {
    match kind {
        PatternKind::Solid => fill(surface, size, color_a),
        PatternKind::GradientLinear => paint_linear(surface, size, color_a, color_b),
        PatternKind::GradientRadial => paint_radial(surface, size, color_a, color_b),
        PatternKind::Stripes => paint_stripes(surface, size, color_a, color_b),
        PatternKind::Dots => paint_dots(surface, size, color_a, color_b),
        PatternKind::Grid => paint_grid(surface, size, color_a, color_b),
        PatternKind::Noise => paint_noise(surface, size, color_a, rng),
    }
}

fn fill<S: Surface + ?Sized>(surface: &mut S, size: Size, color: Color) -> PlacardResult<()> {
    surface.fill_rect(size.rect(), &Paint::Solid(color))
}

fn paint_linear<S: Surface + ?Sized>(
    surface: &mut S,
    size: Size,
    color_a: Color,
    color_b: Color,
) -> PlacardResult<()> {
    let r = size.rect();
    let paint = Paint::Linear {
        start: Point::new(r.x0, r.y0),
        end: Point::new(r.x1, r.y1),
        from: color_a,
        to: color_b,
    };
    surface.fill_rect(r, &paint)
}

fn paint_radial<S: Surface + ?Sized>(
    surface: &mut S,
    size: Size,
    color_a: Color,
    color_b: Color,
) -> PlacardResult<()> {
    let r = size.rect();
    let paint = Paint::Radial {
        center: r.center(),
        radius: size.max_side() / 2.0,
        from: color_a,
        to: color_b,
    };
    surface.fill_rect(r, &paint)
}

/// Stripe thickness: `max(w, h) / 20`.
pub fn stripe_thickness(size: Size) -> f64 {
    size.max_side() / 20.0
}

/// Start x of every 45 degree stripe, from `-h` up to (excluding) `w + h`, spaced at twice the
/// stripe thickness.
pub fn stripe_offsets(size: Size) -> Vec<f64> {
    let (w, h) = (f64::from(size.width), f64::from(size.height));
    let step = stripe_thickness(size) * 2.0;
    let mut out = Vec::new();
    let mut x = -h;
    while x < w + h {
        out.push(x);
        x += step;
    }
    out
}

fn paint_stripes<S: Surface + ?Sized>(
    surface: &mut S,
    size: Size,
    color_a: Color,
    color_b: Color,
) -> PlacardResult<()> {
    fill(surface, size, color_a)?;
    let h = f64::from(size.height);
    let thickness = stripe_thickness(size);
    for x in stripe_offsets(size) {
        surface.stroke_line(Point::new(x, 0.0), Point::new(x + h, h), thickness, color_b)?;
    }
    Ok(())
}

/// Dot radius: `max(w, h) / 40`.
pub fn dot_radius(size: Size) -> f64 {
    size.max_side() / 40.0
}

/// Dot centers on a square grid with spacing `3 * radius`, starting one spacing in from the
/// top-left corner and stopping before the right and bottom edges.
pub fn dot_centers(size: Size) -> Vec<Point> {
    let (w, h) = (f64::from(size.width), f64::from(size.height));
    let spacing = dot_radius(size) * 3.0;
    let mut out = Vec::new();
    let mut x = spacing;
    while x < w {
        let mut y = spacing;
        while y < h {
            out.push(Point::new(x, y));
            y += spacing;
        }
        x += spacing;
    }
    out
}

fn paint_dots<S: Surface + ?Sized>(
    surface: &mut S,
    size: Size,
    color_a: Color,
    color_b: Color,
) -> PlacardResult<()> {
    fill(surface, size, color_a)?;
    let radius = dot_radius(size);
    for center in dot_centers(size) {
        surface.fill_circle(center, radius, color_b)?;
    }
    Ok(())
}

/// Grid cell size: `max(w, h) / 10`.
pub fn grid_step(size: Size) -> f64 {
    size.max_side() / 10.0
}

/// Positions `0, step, 2*step, ...` up to and including `limit`.
pub fn grid_lines(limit: u32, step: f64) -> Vec<f64> {
    let limit = f64::from(limit);
    let mut out = Vec::new();
    let mut v = 0.0;
    while v <= limit {
        out.push(v);
        v += step;
    }
    out
}

fn paint_grid<S: Surface + ?Sized>(
    surface: &mut S,
    size: Size,
    color_a: Color,
    color_b: Color,
) -> PlacardResult<()> {
    fill(surface, size, color_a)?;
    let (w, h) = (f64::from(size.width), f64::from(size.height));
    let step = grid_step(size);
    for x in grid_lines(size.width, step) {
        surface.stroke_line(Point::new(x, 0.0), Point::new(x, h), 1.0, color_b)?;
    }
    for y in grid_lines(size.height, step) {
        surface.stroke_line(Point::new(0.0, y), Point::new(w, y), 1.0, color_b)?;
    }
    Ok(())
}

fn paint_noise<S: Surface + ?Sized>(
    surface: &mut S,
    size: Size,
    color_a: Color,
    rng: &mut fastrand::Rng,
) -> PlacardResult<()> {
    fill(surface, size, color_a)?;
    surface.with_pixels_mut(&mut |pixels| jitter_brightness(pixels, rng))
}

/// Add one uniform offset in `[-NOISE_AMPLITUDE, NOISE_AMPLITUDE]` to the r, g and b of each
/// pixel. Channels of a pixel move together; alpha is untouched.
///
/// Pixels are premultiplied: the offset is scaled by alpha and channels are clamped to
/// `[0, alpha]`, which is `[0, 255]` for opaque pixels. Fully transparent pixels (outside a
/// clip) are skipped.
pub(crate) fn jitter_brightness(pixels: &mut [u8], rng: &mut fastrand::Rng) {
    for px in pixels.chunks_exact_mut(4) {
        let offset = ((rng.f64() - 0.5) * 2.0 * NOISE_AMPLITUDE).round() as i32;
        let a = i32::from(px[3]);
        if a == 0 {
            continue;
        }
        let delta = if a == 255 {
            offset
        } else {
            (offset * a + offset.signum() * 127) / 255
        };
        for c in &mut px[..3] {
            *c = (i32::from(*c) + delta).clamp(0, a) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pattern.rs"]
mod tests;
