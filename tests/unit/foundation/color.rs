use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    assert_eq!(
        Color::from_hex("#E8804C").unwrap(),
        Color::rgb(0xE8, 0x80, 0x4C)
    );
    assert_eq!(
        Color::from_hex("0b0b1a80").unwrap(),
        Color::rgba(0x0B, 0x0B, 0x1A, 0x80)
    );
}

#[test]
fn rejects_malformed_hex() {
    for bad in ["#FFF", "#GG0000", "", "#12345678AB", "#ÄÄ0000"] {
        let err = Color::from_hex(bad).unwrap_err();
        assert!(matches!(err, StoryboardError::Color(_)), "{bad}");
    }
}

#[test]
fn serializes_as_hex_string() {
    let opaque = serde_json::to_value(Color::rgb(0x39, 0xFF, 0x14)).unwrap();
    assert_eq!(opaque, json!("#39FF14"));
    let translucent = serde_json::to_value(Color::rgba(0, 0, 0, 0x10)).unwrap();
    assert_eq!(translucent, json!("#00000010"));
}

#[test]
fn deserializes_hex_or_array() {
    let c: Color = serde_json::from_value(json!("#4fc3f7")).unwrap();
    assert_eq!(c, Color::rgb(0x4F, 0xC3, 0xF7));
    let c: Color = serde_json::from_value(json!([1, 2, 3, 4])).unwrap();
    assert_eq!(c, Color::rgba(1, 2, 3, 4));
    assert!(serde_json::from_value::<Color>(json!([1, 2])).is_err());
}
