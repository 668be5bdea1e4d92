use kurbo::Shape;

use crate::foundation::core::{Point, Rect, RoundedRect, Size};
use crate::foundation::error::{PlacardError, PlacardResult};
use crate::foundation::math::premul_over_in_place;
use crate::render::frame::FrameRGBA;
use crate::render::surface::{Paint, Surface};
use crate::render::text::{CaptionFont, TextLayoutEngine};
use crate::style::color::Color;

const PATH_TOLERANCE: f64 = 0.1;

/// [`Surface`] backed by `vello_cpu`.
///
/// Vector draws are queued on a `vello_cpu::RenderContext` and composited onto the committed
/// pixmap whenever pixels are read, so immediate-mode pixel access and vector drawing can be
/// interleaved freely.
pub struct CpuSurface {
    size: Size,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    pending: bool,
    clip: Option<vello_cpu::kurbo::BezPath>,
    text: Option<TextLayoutEngine>,
}

impl CpuSurface {
    /// Allocate a transparent surface without a caption font.
    pub fn new(size: Size) -> PlacardResult<Self> {
        let (w, h) = surface_dims(size)?;
        Ok(Self {
            size,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
            pending: false,
            clip: None,
            text: None,
        })
    }

    pub(crate) fn with_font(size: Size, font: Option<&CaptionFont>) -> PlacardResult<Self> {
        let mut surface = Self::new(size)?;
        surface.text = font.map(TextLayoutEngine::new).transpose()?;
        Ok(surface)
    }

    /// Flush queued draws and hand back the finished pixels.
    pub fn into_frame(mut self) -> PlacardResult<FrameRGBA> {
        self.commit()?;
        Ok(FrameRGBA {
            width: self.size.width,
            height: self.size.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn begin_draw(&mut self) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        if let Some(clip) = self.clip.as_ref() {
            self.ctx.push_clip_layer(clip);
        }
    }

    fn end_draw(&mut self) {
        if self.clip.is_some() {
            self.ctx.pop_layer();
        }
        self.pending = true;
    }

    // `vello_cpu` renders into a fresh buffer, so queued draws go to a temp pixmap that is then
    // premul-over'd onto the committed pixels.
    fn commit(&mut self) -> PlacardResult<()> {
        if !self.pending {
            return Ok(());
        }
        let mut tmp = vello_cpu::Pixmap::new(self.pixmap.width(), self.pixmap.height());
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut tmp);
        premul_over_in_place(
            self.pixmap.data_as_u8_slice_mut(),
            tmp.data_as_u8_slice(),
        )?;
        self.ctx.reset();
        self.pending = false;
        Ok(())
    }
}

impl Surface for CpuSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) -> PlacardResult<()> {
        self.ctx.reset();
        self.pending = false;
        self.pixmap.data_as_u8_slice_mut().fill(0);
        Ok(())
    }

    fn set_clip(&mut self, clip: Option<RoundedRect>) {
        self.clip = clip.map(|rr| to_cpu_path(&rr));
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> PlacardResult<()> {
        let rect = vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1);
        match *paint {
            Paint::Solid(c) => {
                self.begin_draw();
                self.ctx.set_paint(cpu_color(c));
                self.ctx.fill_rect(&rect);
                self.end_draw();
            }
            Paint::Linear {
                start,
                end,
                from,
                to,
            } => {
                let gradient =
                    vello_cpu::peniko::Gradient::new_linear((start.x, start.y), (end.x, end.y));
                self.begin_draw();
                self.ctx.set_paint(with_stops(gradient, from, to));
                self.ctx.fill_rect(&rect);
                self.end_draw();
            }
            Paint::Radial {
                center,
                radius,
                from,
                to,
            } => {
                let gradient =
                    vello_cpu::peniko::Gradient::new_radial((center.x, center.y), radius as f32);
                self.begin_draw();
                self.ctx.set_paint(with_stops(gradient, from, to));
                self.ctx.fill_rect(&rect);
                self.end_draw();
            }
        }
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) -> PlacardResult<()> {
        let circle = kurbo::Circle::new(center, radius);
        let path = to_cpu_path(&circle);
        self.begin_draw();
        self.ctx.set_paint(cpu_color(color));
        self.ctx.fill_path(&path);
        self.end_draw();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: Color,
    ) -> PlacardResult<()> {
        let line = kurbo::Line::new(from, to);
        let path = to_cpu_path(&line);
        self.begin_draw();
        self.ctx.set_paint(cpu_color(color));
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(width).with_caps(vello_cpu::kurbo::Cap::Butt),
        );
        self.ctx.stroke_path(&path);
        self.end_draw();
        Ok(())
    }

    fn stroke_rounded_rect(
        &mut self,
        shape: RoundedRect,
        width: f64,
        color: Color,
    ) -> PlacardResult<()> {
        let path = to_cpu_path(&shape);
        self.begin_draw();
        self.ctx.set_paint(cpu_color(color));
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(width).with_join(vello_cpu::kurbo::Join::Miter),
        );
        self.ctx.stroke_path(&path);
        self.end_draw();
        Ok(())
    }

    fn fill_text_centered(
        &mut self,
        text: &str,
        center: Point,
        size_px: f64,
        color: Color,
    ) -> PlacardResult<()> {
        let Some(engine) = self.text.as_mut() else {
            tracing::debug!("no caption font; skipping text");
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }
        let layout = engine.layout_line(text, size_px as f32)?;
        let origin = vello_cpu::kurbo::Affine::translate((
            center.x - f64::from(layout.width()) / 2.0,
            center.y - f64::from(layout.height()) / 2.0,
        ));

        self.begin_draw();
        self.ctx.set_transform(origin);
        self.ctx.set_paint(cpu_color(color));
        if let Some(engine) = self.text.as_ref() {
            for line in layout.lines() {
                for item in line.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    self.ctx
                        .glyph_run(engine.font())
                        .font_size(run.run().font_size())
                        .fill_glyphs(glyphs);
                }
            }
        }
        self.end_draw();
        Ok(())
    }

    fn with_pixels_mut(&mut self, f: &mut dyn FnMut(&mut [u8])) -> PlacardResult<()> {
        self.commit()?;
        f(self.pixmap.data_as_u8_slice_mut());
        Ok(())
    }
}

fn surface_dims(size: Size) -> PlacardResult<(u16, u16)> {
    let w: u16 = size.width.try_into().map_err(|_| {
        PlacardError::surface(format!("surface width {} exceeds u16", size.width))
    })?;
    let h: u16 = size.height.try_into().map_err(|_| {
        PlacardError::surface(format!("surface height {} exceeds u16", size.height))
    })?;
    Ok((w, h))
}

fn cpu_color(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn to_cpu_path(shape: &impl Shape) -> vello_cpu::kurbo::BezPath {
    let mut p = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(PATH_TOLERANCE) {
        p.push(el);
    }
    p
}

/// Two-stop ramp, `from` at offset 0 and `to` at offset 1, padded beyond both ends.
fn with_stops(
    mut gradient: vello_cpu::peniko::Gradient,
    from: Color,
    to: Color,
) -> vello_cpu::peniko::Gradient {
    gradient.extend = vello_cpu::peniko::Extend::Pad;
    for (offset, color) in [(0.0, from), (1.0, to)] {
        gradient.stops.push(vello_cpu::peniko::ColorStop {
            offset,
            color: vello_cpu::peniko::color::DynamicColor::from_alpha_color(cpu_color(color)),
        });
    }
    gradient
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
