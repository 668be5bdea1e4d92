use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::foundation::error::{PlacardError, PlacardResult};

/// Where the raster caption font comes from.
#[derive(Clone, Debug, Default)]
pub enum FontSource {
    /// Best bold sans-serif face among installed system fonts.
    #[default]
    System,
    /// A TTF/OTF/TTC file on disk (first face).
    File(PathBuf),
    /// In-memory font bytes (first face).
    Bytes(Arc<Vec<u8>>),
    /// Draw no caption on raster output.
    Disabled,
}

/// Font bytes selected for caption rendering.
#[derive(Clone)]
pub(crate) struct CaptionFont {
    pub(crate) bytes: Arc<Vec<u8>>,
    pub(crate) index: u32,
}

impl std::fmt::Debug for CaptionFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptionFont")
            .field("len", &self.bytes.len())
            .field("index", &self.index)
            .finish()
    }
}

/// Resolve `source` into font bytes.
///
/// `System` yields `Ok(None)` with a warning when no sans-serif face is installed; `File` and
/// `Bytes` fail loudly because the caller asked for a specific font.
pub(crate) fn resolve_caption_font(source: &FontSource) -> PlacardResult<Option<CaptionFont>> {
    match source {
        FontSource::Disabled => Ok(None),
        FontSource::Bytes(bytes) => {
            if bytes.is_empty() {
                return Err(PlacardError::surface("caption font bytes are empty"));
            }
            Ok(Some(CaptionFont {
                bytes: bytes.clone(),
                index: 0,
            }))
        }
        FontSource::File(path) => {
            let bytes = std::fs::read(path).map_err(|e| {
                PlacardError::surface(format!(
                    "failed to read caption font '{}': {e}",
                    path.display()
                ))
            })?;
            Ok(Some(CaptionFont {
                bytes: Arc::new(bytes),
                index: 0,
            }))
        }
        FontSource::System => {
            let font = system_sans_bold().clone();
            if font.is_none() {
                tracing::warn!("no system sans-serif font found; raster captions are disabled");
            }
            Ok(font)
        }
    }
}

fn system_sans_bold() -> &'static Option<CaptionFont> {
    static FONT: OnceLock<Option<CaptionFont>> = OnceLock::new();
    FONT.get_or_init(|| {
        use usvg::fontdb;

        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");

        let query = fontdb::Query {
            families: &[fontdb::Family::SansSerif],
            weight: fontdb::Weight::BOLD,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        let id = db.query(&query).or_else(|| db.faces().next().map(|f| f.id))?;
        db.with_face_data(id, |data, index| CaptionFont {
            bytes: Arc::new(data.to_vec()),
            index,
        })
    })
}

/// Parley contexts with the caption font registered once.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

impl TextLayoutEngine {
    pub(crate) fn new(font: &CaptionFont) -> PlacardResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| PlacardError::surface("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PlacardError::surface("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font: vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(font.bytes.to_vec()),
                font.index,
            ),
        })
    }

    pub(crate) fn font(&self) -> &vello_cpu::peniko::FontData {
        &self.font
    }

    /// Shape `text` as a single unwrapped line.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
    ) -> PlacardResult<parley::Layout<()>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(PlacardError::surface("text size must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        for prop in caption_style(&self.family_name, size_px) {
            builder.push_default(prop);
        }

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Default style of a caption run: the registered family, bold, at `size_px`.
fn caption_style(family: &str, size_px: f32) -> [parley::style::StyleProperty<'static, ()>; 3] {
    [
        parley::style::StyleProperty::FontStack(parley::style::FontStack::Source(
            std::borrow::Cow::Owned(family.to_owned()),
        )),
        parley::style::StyleProperty::FontWeight(parley::style::FontWeight::BOLD),
        parley::style::StyleProperty::FontSize(size_px),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
