use super::*;

#[test]
fn parses_short_and_long_hex() {
    assert_eq!(parse_hex("#33aaff"), Some(Color::Rgb(0x33, 0xaa, 0xff)));
    assert_eq!(parse_hex("#fff"), Some(Color::Rgb(255, 255, 255)));
    assert_eq!(parse_hex("33aaff"), None);
    assert_eq!(parse_hex("#12345"), None);
    assert_eq!(parse_hex("#gggggg"), None);
}

#[test]
fn color_support_override_values() {
    assert_eq!(parse_color_support(" 24bit "), Some(ColorSupport::TrueColor));
    assert_eq!(parse_color_support("ANSI256"), Some(ColorSupport::Ansi256));
    assert_eq!(parse_color_support("basic"), Some(ColorSupport::Ansi16));
    assert_eq!(parse_color_support("mono"), None);
}

#[test]
fn reduced_palettes_use_indexed_colors() {
    assert_eq!(fit(Color::Rgb(255, 0, 0), ColorSupport::Ansi16), Color::Indexed(9));
    assert_eq!(fit(Color::Rgb(255, 0, 0), ColorSupport::Ansi256), Color::Indexed(9));
    assert_eq!(fit(Color::Indexed(196), ColorSupport::Ansi16), Color::Indexed(9));
    assert_eq!(
        fit(Color::Rgb(1, 2, 3), ColorSupport::TrueColor),
        Color::Rgb(1, 2, 3)
    );
    assert_eq!(fit(Color::Reset, ColorSupport::Ansi16), Color::Reset);
}

#[test]
fn themes_differ_and_scene_colors_fall_back() {
    let dark = Palette::new(Theme::Dark, ColorSupport::TrueColor);
    let light = Palette::new(Theme::Light, ColorSupport::TrueColor);
    assert_ne!(dark.window_bg, light.window_bg);
    assert_eq!(dark.scene_color("#ff66cc", Color::Reset), Color::Rgb(0xff, 0x66, 0xcc));
    assert_eq!(dark.scene_color("oops", Color::Blue), Color::Blue);

    let basic = Palette::new(Theme::Dark, ColorSupport::Ansi16);
    assert!(matches!(basic.fg, Color::Indexed(i) if i <= 15));
}
