use std::fmt;
use std::str::FromStr;

use base64::Engine as _;

use crate::export::encode::{JPEG_QUALITY, encode_jpeg, encode_png};
use crate::foundation::error::{PlacardError, PlacardResult};
use crate::render::raster::{RasterOpts, RasterRenderer};
use crate::render::vector::VectorRenderer;
use crate::style::descriptor::StyleDescriptor;

/// Output format offered by the export surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless raster with alpha.
    #[default]
    Png,
    /// Lossy raster, quality 90, no alpha.
    #[serde(alias = "jpeg")]
    Jpg,
    /// Vector markup.
    Svg,
}

impl ExportFormat {
    /// Every format, in menu order.
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Png, ExportFormat::Jpg, ExportFormat::Svg];

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpg => "jpg",
            ExportFormat::Svg => "svg",
        }
    }

    /// MIME type of the encoded payload.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpg => "image/jpeg",
            ExportFormat::Svg => "image/svg+xml",
        }
    }

    /// Whether the payload comes from the raster path.
    pub fn is_raster(self) -> bool {
        !matches!(self, ExportFormat::Svg)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = PlacardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpg),
            "svg" => Ok(ExportFormat::Svg),
            other => Err(PlacardError::encode(format!(
                "unknown export format \"{other}\" (expected png, jpg or svg)"
            ))),
        }
    }
}

/// Download name for a `width` x `height` export.
pub fn file_name(width: u32, height: u32, format: ExportFormat) -> String {
    format!("placeholder-{width}x{height}.{}", format.extension())
}

/// `data:` URL wrapping `bytes`.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{payload}")
}

/// One encoded image, ready to be written or handed to a share target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedImage {
    /// Format of `bytes`.
    pub format: ExportFormat,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
    /// Suggested download name.
    pub file_name: String,
    /// Encoded payload.
    pub bytes: Vec<u8>,
}

impl ExportedImage {
    /// MIME type of the payload.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// The payload as a `data:` URL.
    pub fn to_data_url(&self) -> String {
        data_url(self.mime_type(), &self.bytes)
    }
}

/// What to put on the clipboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClipboardPayload {
    /// Binary image content.
    Image {
        /// MIME type, always `image/png`.
        mime: &'static str,
        /// Encoded bytes.
        bytes: Vec<u8>,
    },
    /// Plain text, a `data:` URL.
    Text(String),
}

/// Hands rendered output to the outside world in the requested format.
///
/// Raster formats go through [`RasterRenderer`], SVG through [`VectorRenderer`]. Nothing is
/// written here; callers own files and clipboards.
#[derive(Clone, Debug)]
pub struct ExportGateway {
    raster: RasterRenderer,
    vector: VectorRenderer,
    jpeg_quality: u8,
}

impl ExportGateway {
    /// Build a gateway with its own raster renderer.
    pub fn new(opts: RasterOpts) -> PlacardResult<Self> {
        Ok(Self::with_renderer(RasterRenderer::new(opts)?))
    }

    /// Build a gateway around an existing raster renderer.
    pub fn with_renderer(raster: RasterRenderer) -> Self {
        Self {
            raster,
            vector: VectorRenderer,
            jpeg_quality: JPEG_QUALITY,
        }
    }

    /// The raster renderer used for PNG and JPEG.
    pub fn raster(&self) -> &RasterRenderer {
        &self.raster
    }

    /// Render and encode `style` as `format`.
    #[tracing::instrument(skip_all, fields(w = style.width, h = style.height, format = %format))]
    pub fn export(&self, style: &StyleDescriptor, format: ExportFormat) -> PlacardResult<ExportedImage> {
        let size = style.size()?;
        let bytes = match format {
            ExportFormat::Png => encode_png(&self.raster.render(style)?)?,
            ExportFormat::Jpg => encode_jpeg(&self.raster.render(style)?, self.jpeg_quality)?,
            ExportFormat::Svg => self.vector.render(style)?.into_bytes(),
        };
        tracing::debug!(bytes = bytes.len(), "exported");
        Ok(ExportedImage {
            format,
            width: size.width,
            height: size.height,
            file_name: file_name(size.width, size.height, format),
            bytes,
        })
    }

    /// Render `style` as `format` and wrap it in a `data:` URL.
    pub fn data_url(&self, style: &StyleDescriptor, format: ExportFormat) -> PlacardResult<String> {
        Ok(self.export(style, format)?.to_data_url())
    }

    /// PNG bytes for an image clipboard.
    pub fn copy_image(&self, style: &StyleDescriptor) -> PlacardResult<ClipboardPayload> {
        let img = self.export(style, ExportFormat::Png)?;
        Ok(ClipboardPayload::Image {
            mime: ExportFormat::Png.mime_type(),
            bytes: img.bytes,
        })
    }

    /// A PNG `data:` URL for a text clipboard.
    pub fn copy_data_url(&self, style: &StyleDescriptor) -> PlacardResult<ClipboardPayload> {
        Ok(ClipboardPayload::Text(self.data_url(style, ExportFormat::Png)?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/gateway.rs"]
mod tests;
