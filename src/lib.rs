//! Placard renders parametric placeholder images.
//!
//! A [`StyleDescriptor`] fully describes one image: size, background pattern, two colors, an
//! optional caption and an optional rounded border. The same descriptor can be turned into:
//!
//! - premultiplied RGBA pixels with [`RasterRenderer`]
//! - standalone SVG markup with [`VectorRenderer`]
//! - PNG, JPEG or SVG bytes, data URLs and clipboard payloads with [`ExportGateway`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;
mod style;

/// Encoding and export surfaces.
pub mod export;
/// Raster and vector rendering.
pub mod render;

pub use crate::foundation::core::{MAX_DIMENSION, Point, Rect, Rgba8Premul, RoundedRect, Size};
pub use crate::foundation::error::{PlacardError, PlacardResult};

pub use crate::style::aspect::AspectLock;
pub use crate::style::color::Color;
pub use crate::style::descriptor::{PatternKind, StyleDescriptor, clamp_dimension};
pub use crate::style::presets::{PRESETS, Preset};

pub use crate::export::batch::{BatchList, BatchSize, export_batch};
pub use crate::export::gateway::{ClipboardPayload, ExportFormat, ExportGateway, ExportedImage};
pub use crate::render::cpu::CpuSurface;
pub use crate::render::frame::FrameRGBA;
pub use crate::render::raster::{RasterOpts, RasterRenderer};
pub use crate::render::surface::{Paint, Surface};
pub use crate::render::text::FontSource;
pub use crate::render::vector::VectorRenderer;
