use image::ImageEncoder as _;

use crate::foundation::error::{PlacardError, PlacardResult};
use crate::render::frame::FrameRGBA;

/// JPEG quality used for every lossy export.
pub const JPEG_QUALITY: u8 = 90;

/// Encode as PNG with straight alpha.
pub(crate) fn encode_png(frame: &FrameRGBA) -> PlacardResult<Vec<u8>> {
    check_len(frame)?;
    let rgba = frame.to_straight_rgba8();
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(&mut out)
        .write_image(
            &rgba,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| PlacardError::encode(format!("png: {e}")))?;
    Ok(out)
}

/// Encode as JPEG. Transparent areas come out black.
pub(crate) fn encode_jpeg(frame: &FrameRGBA, quality: u8) -> PlacardResult<Vec<u8>> {
    check_len(frame)?;
    let rgb = frame.to_rgb8_over_black();
    let mut out = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100))
        .write_image(&rgb, frame.width, frame.height, image::ExtendedColorType::Rgb8)
        .map_err(|e| PlacardError::encode(format!("jpeg: {e}")))?;
    Ok(out)
}

fn check_len(frame: &FrameRGBA) -> PlacardResult<()> {
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(4);
    if frame.data.len() != expected {
        return Err(PlacardError::encode(format!(
            "frame data is {} bytes, expected {expected} for {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/encode.rs"]
mod tests;
