//! Terminal colors for the desktop scene.
//!
//! Scene colors are CSS-style hex strings; they are parsed here and folded down to what the
//! terminal can show.

use ratatui::style::Color;

use crate::kernel::services::ports::settings::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub const COLOR_SUPPORT_ENV: &str = "ZERODESK_COLOR_SUPPORT";

pub fn detect_color_support() -> ColorSupport {
    if let Ok(value) = std::env::var(COLOR_SUPPORT_ENV) {
        if let Some(support) = parse_color_support(&value) {
            return support;
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if ["truecolor", "24bit", "direct"]
        .iter()
        .any(|needle| colorterm.contains(needle) || term.contains(needle))
    {
        return ColorSupport::TrueColor;
    }

    if term.contains("256color") {
        return ColorSupport::Ansi256;
    }

    ColorSupport::Ansi16
}

pub fn parse_color_support(value: &str) -> Option<ColorSupport> {
    match value.trim().to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" | "rgb" => Some(ColorSupport::TrueColor),
        "256" | "ansi256" => Some(ColorSupport::Ansi256),
        "16" | "ansi16" | "basic" => Some(ColorSupport::Ansi16),
        _ => None,
    }
}

/// `#rgb` or `#rrggbb`.
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };
    let r = u8::from_str_radix(expanded.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(expanded.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(expanded.get(4..6)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub desktop_bg: Color,
    pub window_bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub success: Color,
    pub error: Color,
    pub dock_bg: Color,
    support: ColorSupport,
}

impl Palette {
    pub fn new(theme: Theme, support: ColorSupport) -> Self {
        let palette = match theme {
            Theme::Dark => Self {
                desktop_bg: Color::Rgb(0x14, 0x16, 0x1c),
                window_bg: Color::Rgb(0x1e, 0x20, 0x26),
                fg: Color::Rgb(0xe6, 0xe6, 0xe6),
                muted: Color::Rgb(0x8a, 0x8f, 0x98),
                success: Color::Rgb(0x5f, 0xd7, 0x87),
                error: Color::Rgb(0xff, 0x5f, 0x5f),
                dock_bg: Color::Rgb(0x26, 0x28, 0x30),
                support,
            },
            Theme::Light => Self {
                desktop_bg: Color::Rgb(0xd8, 0xdf, 0xea),
                window_bg: Color::Rgb(0xf7, 0xf7, 0xf7),
                fg: Color::Rgb(0x22, 0x22, 0x22),
                muted: Color::Rgb(0x6b, 0x70, 0x78),
                success: Color::Rgb(0x1a, 0x7f, 0x37),
                error: Color::Rgb(0xc0, 0x1c, 0x28),
                dock_bg: Color::Rgb(0xff, 0xff, 0xff),
                support,
            },
        };
        palette.fitted()
    }

    fn fitted(self) -> Self {
        let support = self.support;
        Self {
            desktop_bg: fit(self.desktop_bg, support),
            window_bg: fit(self.window_bg, support),
            fg: fit(self.fg, support),
            muted: fit(self.muted, support),
            success: fit(self.success, support),
            error: fit(self.error, support),
            dock_bg: fit(self.dock_bg, support),
            support,
        }
    }

    /// A scene color string, reduced for this terminal; `fallback` when it does not parse.
    pub fn scene_color(&self, value: &str, fallback: Color) -> Color {
        fit(parse_hex(value).unwrap_or(fallback), self.support)
    }
}

pub fn fit(color: Color, support: ColorSupport) -> Color {
    match (support, color) {
        (ColorSupport::TrueColor, value) => value,
        (ColorSupport::Ansi256, Color::Rgb(r, g, b)) => Color::Indexed(rgb_to_ansi256_index(r, g, b)),
        (ColorSupport::Ansi16, Color::Rgb(r, g, b)) => Color::Indexed(rgb_to_ansi16_index(r, g, b)),
        (ColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (_, value) => value,
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    (0u8..=255)
        .min_by_key(|index| {
            let (pr, pg, pb) = ansi256_index_to_rgb(*index);
            color_distance_sq((r, g, b), (pr, pg, pb))
        })
        .unwrap_or(0)
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    ANSI16_RGB
        .iter()
        .enumerate()
        .min_by_key(|(_, rgb)| color_distance_sq((r, g, b), **rgb))
        .map(|(index, _)| index as u8)
        .unwrap_or(0)
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

#[cfg(test)]
#[path = "../../tests/unit/tui/palette.rs"]
mod tests;
