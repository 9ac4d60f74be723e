//! Unit tests for colour conversion.

use pageforge::color::{Rgb, computed_color, named_color, parse_hex_color, rgb_to_hex};

#[test]
fn test_computed_forms() {
    assert_eq!(rgb_to_hex("rgb(255, 0, 0)"), "#ff0000");
    assert_eq!(rgb_to_hex("rgba(0, 0, 0, 0)"), "#000000");
    assert_eq!(rgb_to_hex("rgb(0, 128, 255)"), "#0080ff");
}

#[test]
fn test_whitespace_is_irrelevant() {
    assert_eq!(rgb_to_hex("rgb(  7 ,8,   9 )"), "#070809");
    assert_eq!(rgb_to_hex("rgb(7 8 9)"), "#070809");
}

#[test]
fn test_only_digit_runs_count() {
    // Percentages and decimals are not understood, only their digits
    assert_eq!(rgb_to_hex("rgb(50%, 0%, 0%)"), "#320000");
    assert_eq!(rgb_to_hex("rgba(1, 2, 3, 0.75)"), "#010203");
}

#[test]
fn test_keywords_fall_back_to_black() {
    for keyword in ["red", "transparent", "currentcolor", "inherit"] {
        assert_eq!(rgb_to_hex(keyword), "#000000", "keyword {}", keyword);
    }
}

#[test]
fn test_hex_input_is_not_normalised() {
    assert_eq!(rgb_to_hex("#FFF"), "#FFF");
    assert_eq!(rgb_to_hex("#12345678"), "#12345678");
}

#[test]
fn test_channels_above_255_widen_the_output() {
    assert_eq!(rgb_to_hex("rgb(300, 0, 0)"), "#12c0000");
    assert_eq!(rgb_to_hex("rgb(0, 0, 4096)"), "#00001000");
}

#[test]
fn test_hex_round_trip() {
    let color = parse_hex_color("#336699").unwrap();
    assert_eq!(color, Rgb::new(0x33, 0x66, 0x99));
    assert_eq!(color.to_css(), "rgb(51, 102, 153)");
    assert_eq!(rgb_to_hex(&color.to_css()), "#336699");
}

#[test]
fn test_short_hex_expands_each_digit() {
    assert_eq!(parse_hex_color("#abc"), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
    assert_eq!(parse_hex_color("#xyz"), None);
}

#[test]
fn test_named_colors_resolve_to_rgb() {
    assert_eq!(named_color("Tomato"), Some(Rgb::new(255, 99, 71)));
    assert_eq!(named_color("notacolor"), None);
    assert_eq!(computed_color("white").as_deref(), Some("rgb(255, 255, 255)"));
    assert_eq!(rgb_to_hex(&computed_color("red").unwrap()), "#ff0000");
}
