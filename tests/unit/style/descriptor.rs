use serde_json::json;

use super::*;

#[test]
fn defaults_match_initial_editor_state() {
    let d = StyleDescriptor::default();
    assert_eq!((d.width, d.height), (800, 600));
    assert_eq!(d.pattern, PatternKind::Solid);
    assert_eq!(d.color_a.to_string(), "#cccccc");
    assert_eq!(d.color_b.to_string(), "#999999");
    assert_eq!(d.text_color.to_string(), "#666666");
    assert_eq!(d.border_color.to_string(), "#333333");
    assert!(d.caption.is_empty());
    assert_eq!((d.border_radius, d.border_width), (0, 0));
}

#[test]
fn pattern_names_and_aliases() {
    for kind in PatternKind::ALL {
        let v = serde_json::to_value(kind).unwrap();
        assert_eq!(v, json!(kind.as_str()));
        let back: PatternKind = serde_json::from_value(v).unwrap();
        assert_eq!(back, kind);
    }
    let g: PatternKind = serde_json::from_value(json!("gradient")).unwrap();
    assert_eq!(g, PatternKind::GradientLinear);
    let r: PatternKind = serde_json::from_value(json!("radial")).unwrap();
    assert_eq!(r, PatternKind::GradientRadial);
    assert!(serde_json::from_value::<PatternKind>(json!("plaid")).is_err());
}

#[test]
fn second_color_only_for_two_color_patterns() {
    assert!(!PatternKind::Solid.uses_color_b());
    assert!(!PatternKind::Noise.uses_color_b());
    assert!(PatternKind::GradientLinear.uses_color_b());
    assert!(PatternKind::GradientRadial.uses_color_b());
    assert!(PatternKind::Stripes.uses_color_b());
    assert!(PatternKind::Dots.uses_color_b());
    assert!(PatternKind::Grid.uses_color_b());
}

#[test]
fn partial_json_fills_defaults() {
    let d = StyleDescriptor::from_json_str(
        r##"{"width": 500, "height": 500, "pattern": "gradientLinear", "colorA": "#000000", "colorB": "#ffffff"}"##,
    )
    .unwrap();
    assert_eq!((d.width, d.height), (500, 500));
    assert_eq!(d.pattern, PatternKind::GradientLinear);
    assert_eq!(d.color_a, Color::rgb(0, 0, 0));
    assert_eq!(d.color_b, Color::rgb(255, 255, 255));
    assert_eq!(d.text_color, StyleDescriptor::default().text_color);
}

#[test]
fn json_errors_are_serde_errors() {
    let err = StyleDescriptor::from_json_str(r#"{"colorA": "nope"}"#).unwrap_err();
    assert!(matches!(err, PlacardError::Serde(_)));
    let err = StyleDescriptor::from_json_str(r#"{"bogus": 1}"#).unwrap_err();
    assert!(matches!(err, PlacardError::Serde(_)));
}

#[test]
fn json_roundtrip_preserves_descriptor() {
    let d = StyleDescriptor::default()
        .with_pattern(PatternKind::Dots)
        .with_caption("hello")
        .with_border(12, 4, Color::rgb(1, 2, 3));
    let s = d.to_json_string().unwrap();
    assert!(s.contains("\"borderRadius\": 12"));
    assert_eq!(StyleDescriptor::from_json_str(&s).unwrap(), d);
}

#[test]
fn with_methods_copy_and_leave_original_untouched() {
    let d = StyleDescriptor::default();
    let wide = d.with_width(10_000);
    assert_eq!(wide.width, MAX_DIMENSION);
    assert_eq!(d.with_height(0).height, 1);
    assert_eq!(d.width, 800);

    let exact = d.with_size(0, 7);
    assert_eq!((exact.width, exact.height), (0, 7));
    assert!(exact.size().is_err());
}
