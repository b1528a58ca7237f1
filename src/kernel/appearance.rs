//! Projection of `Settings` onto a rendering surface.
//!
//! Every call here is a pure function of the settings and the window list, so applying the same
//! settings twice leaves the surface unchanged.

use crate::kernel::services::ports::settings::{Settings, Theme, DEFAULT_ACCENT};
use crate::kernel::services::ports::surface::{DockStyle, RenderSurface, WindowStyle};
use crate::kernel::window::WindowId;

const LIGHT_HEADER_BASE: &str = "#e0eafc";
const DARK_HEADER_BASE: &str = "#232526";
const DOCK_EDGE_OFFSET_PX: u16 = 20;
const DOCK_GLOW_ALPHA: f32 = 0.35;

/// `#rgb` / `#rrggbb` to `rgba(r,g,b,a)`. Unparseable digits yield black.
pub fn hex_to_rgba(hex: &str, alpha: f32) -> String {
    let digits = hex.trim_start_matches('#');
    let expanded: String = if digits.chars().count() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    let value = u32::from_str_radix(&expanded, 16).unwrap_or(0);
    let r = (value >> 16) & 0xff;
    let g = (value >> 8) & 0xff;
    let b = value & 0xff;
    format!("rgba({r},{g},{b},{alpha})")
}

fn accent(settings: &Settings) -> &str {
    if settings.accent.is_empty() {
        DEFAULT_ACCENT
    } else {
        &settings.accent
    }
}

pub fn window_style(settings: &Settings) -> WindowStyle {
    let base = match settings.theme {
        Theme::Light => LIGHT_HEADER_BASE,
        Theme::Dark => DARK_HEADER_BASE,
    };
    let accent = accent(settings).to_string();
    WindowStyle {
        border_color: accent.clone(),
        header_from: base.to_string(),
        header_to: accent,
    }
}

pub fn dock_style(settings: &Settings) -> DockStyle {
    DockStyle {
        position: settings.dock_position,
        offset_px: DOCK_EDGE_OFFSET_PX,
        glow: format!("0 4px 24px {}", hex_to_rgba(accent(settings), DOCK_GLOW_ALPHA)),
    }
}

pub fn style_window<S: RenderSurface + ?Sized>(surface: &mut S, id: WindowId, settings: &Settings) {
    surface.style_window(id, &window_style(settings));
}

/// Theme, accent styling of every open window, root font size, motion reduction, dock anchor.
pub fn apply<S: RenderSurface + ?Sized>(surface: &mut S, windows: &[WindowId], settings: &Settings) {
    surface.set_theme(settings.theme);
    let style = window_style(settings);
    for id in windows {
        surface.style_window(*id, &style);
    }
    surface.set_root_font_size(settings.font_size);
    surface.set_reduced_motion(settings.reduce_motion);
    surface.anchor_dock(&dock_style(settings));
    tracing::debug!(
        theme = settings.theme.name(),
        windows = windows.len(),
        "settings applied"
    );
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/appearance.rs"]
mod tests;
