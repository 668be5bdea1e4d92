use crate::foundation::error::PlacardResult;
use crate::render::cpu::CpuSurface;
use crate::render::frame::FrameRGBA;
use crate::render::layout::{
    border_geometry, caption_center, clip_shape, effective_caption, font_size,
};
use crate::render::pattern::paint_pattern;
use crate::render::surface::Surface;
use crate::render::text::{CaptionFont, FontSource, resolve_caption_font};
use crate::style::descriptor::StyleDescriptor;

/// Options for [`RasterRenderer`].
#[derive(Clone, Debug, Default)]
pub struct RasterOpts {
    /// Caption font selection.
    pub font: FontSource,
    /// Fixed seed for the `noise` pattern. `None` draws fresh entropy on every render.
    pub noise_seed: Option<u64>,
}

impl RasterOpts {
    /// Return options with a different caption font source.
    pub fn with_font(mut self, font: FontSource) -> Self {
        self.font = font;
        self
    }

    /// Return options with a fixed noise seed.
    pub fn with_noise_seed(mut self, seed: Option<u64>) -> Self {
        self.noise_seed = seed;
        self
    }
}

/// Renders a [`StyleDescriptor`] to premultiplied RGBA8 pixels.
///
/// The renderer holds no per-render state: `render` takes `&self`, every call allocates its own
/// surface, and one renderer can be shared across threads.
#[derive(Clone, Debug)]
pub struct RasterRenderer {
    font: Option<CaptionFont>,
    noise_seed: Option<u64>,
}

impl RasterRenderer {
    /// Build a renderer, resolving the caption font once.
    pub fn new(opts: RasterOpts) -> PlacardResult<Self> {
        let font = resolve_caption_font(&opts.font)?;
        Ok(Self {
            font,
            noise_seed: opts.noise_seed,
        })
    }

    /// Whether raster output will carry a caption.
    pub fn has_caption_font(&self) -> bool {
        self.font.is_some()
    }

    /// Render `style` at its own size.
    #[tracing::instrument(skip_all, fields(w = style.width, h = style.height, pattern = %style.pattern))]
    pub fn render(&self, style: &StyleDescriptor) -> PlacardResult<FrameRGBA> {
        let size = style.size()?;
        let mut surface = CpuSurface::with_font(size, self.font.as_ref())?;
        let mut rng = match self.noise_seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        paint_layers(&mut surface, style, &mut rng)?;
        surface.into_frame()
    }
}

/// Paint every layer of `style` onto `surface`, in order: clear, clip, background pattern,
/// border, caption.
///
/// The rounded clip stays set for every layer. A border thicker than twice the corner radius
/// strokes square corners, which the clip crops back to the silhouette.
pub fn paint_layers<S: Surface + ?Sized>(
    surface: &mut S,
    style: &StyleDescriptor,
    rng: &mut fastrand::Rng,
) -> PlacardResult<()> {
    let size = style.size()?;
    surface.clear()?;

    let clip = clip_shape(size, style.border_radius);
    surface.set_clip(clip);

    paint_pattern(
        surface,
        size,
        style.pattern,
        style.color_a,
        style.color_b,
        rng,
    )?;

    if let Some(border) = border_geometry(size, style.border_width, style.border_radius) {
        surface.stroke_rounded_rect(border.shape(), border.stroke_width, style.border_color)?;
    }

    surface.fill_text_centered(
        &effective_caption(style),
        caption_center(size),
        font_size(size.width, size.height),
        style.text_color,
    )?;
    surface.set_clip(None);
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
