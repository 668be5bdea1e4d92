use super::*;
use crate::render::text::FontSource;
use crate::style::color::Color;
use crate::style::descriptor::PatternKind;

fn gateway() -> ExportGateway {
    ExportGateway::new(RasterOpts::default().with_font(FontSource::Disabled)).unwrap()
}

fn style(w: u32, h: u32) -> StyleDescriptor {
    StyleDescriptor::default().with_size(w, h)
}

#[test]
fn format_metadata() {
    assert_eq!(ExportFormat::Png.mime_type(), "image/png");
    assert_eq!(ExportFormat::Jpg.mime_type(), "image/jpeg");
    assert_eq!(ExportFormat::Svg.mime_type(), "image/svg+xml");
    assert_eq!(ExportFormat::Jpg.extension(), "jpg");
    assert!(ExportFormat::Jpg.is_raster());
    assert!(!ExportFormat::Svg.is_raster());
}

#[test]
fn format_parses_from_str_and_json() {
    assert_eq!("PNG".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
    assert_eq!("jpeg".parse::<ExportFormat>().unwrap(), ExportFormat::Jpg);
    assert!("gif".parse::<ExportFormat>().is_err());
    let f: ExportFormat = serde_json::from_str("\"jpeg\"").unwrap();
    assert_eq!(f, ExportFormat::Jpg);
    assert_eq!(serde_json::to_string(&ExportFormat::Svg).unwrap(), "\"svg\"");
}

#[test]
fn file_name_uses_dimensions_and_extension() {
    assert_eq!(file_name(800, 600, ExportFormat::Png), "placeholder-800x600.png");
    assert_eq!(file_name(1, 2, ExportFormat::Svg), "placeholder-1x2.svg");
}

#[test]
fn data_url_is_base64_with_mime_prefix() {
    assert_eq!(data_url("text/plain", b"hi"), "data:text/plain;base64,aGk=");
}

#[test]
fn png_export_carries_name_and_signature() {
    let img = gateway().export(&style(20, 10), ExportFormat::Png).unwrap();
    assert_eq!(img.file_name, "placeholder-20x10.png");
    assert_eq!((img.width, img.height), (20, 10));
    assert_eq!(&img.bytes[..4], b"\x89PNG");
}

#[test]
fn jpg_export_starts_with_soi() {
    let img = gateway().export(&style(16, 16), ExportFormat::Jpg).unwrap();
    assert_eq!(img.file_name, "placeholder-16x16.jpg");
    assert_eq!(&img.bytes[..2], &[0xFF, 0xD8]);
}

#[test]
fn svg_export_is_the_vector_markup() {
    let s = style(40, 30).with_pattern(PatternKind::Dots);
    let img = gateway().export(&s, ExportFormat::Svg).unwrap();
    let text = String::from_utf8(img.bytes).unwrap();
    assert_eq!(text, VectorRenderer.render(&s).unwrap());
}

#[test]
fn invalid_dimensions_fail_before_encoding() {
    let err = gateway().export(&style(0, 10), ExportFormat::Png).unwrap_err();
    assert!(matches!(err, PlacardError::InvalidDimension { width: 0, height: 10 }));
}

#[test]
fn clipboard_payloads() {
    let g = gateway();
    let s = style(8, 8).with_colors(Color::rgb(255, 0, 0), Color::rgb(0, 0, 255));
    match g.copy_image(&s).unwrap() {
        ClipboardPayload::Image { mime, bytes } => {
            assert_eq!(mime, "image/png");
            assert_eq!(&bytes[..4], b"\x89PNG");
        }
        other => panic!("expected image payload, got {other:?}"),
    }
    match g.copy_data_url(&s).unwrap() {
        ClipboardPayload::Text(url) => assert!(url.starts_with("data:image/png;base64,iVBOR")),
        other => panic!("expected text payload, got {other:?}"),
    }
}
