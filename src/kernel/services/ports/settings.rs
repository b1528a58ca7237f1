use serde::{Deserialize, Serialize};

use crate::kernel::window::AppKind;

pub const DEFAULT_ACCENT: &str = "#33aaff";
pub const DEFAULT_FONT_SIZE: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockPosition {
    Top,
    #[default]
    Bottom,
}

impl DockPosition {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// User preferences. Missing fields in persisted JSON fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub theme: Theme,
    pub accent: String,
    pub font_size: u8,
    pub reduce_motion: bool,
    pub default_app: AppKind,
    pub dock_position: DockPosition,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            accent: DEFAULT_ACCENT.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            reduce_motion: false,
            default_app: AppKind::Terminal,
            dock_position: DockPosition::Bottom,
        }
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub accent: Option<String>,
    pub font_size: Option<u8>,
    pub reduce_motion: Option<bool>,
    pub default_app: Option<AppKind>,
    pub dock_position: Option<DockPosition>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the patch into `settings`; returns whether anything changed.
    pub fn apply_to(self, settings: &mut Settings) -> bool {
        let before = settings.clone();
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(accent) = self.accent {
            settings.accent = accent;
        }
        if let Some(font_size) = self.font_size {
            settings.font_size = font_size;
        }
        if let Some(reduce_motion) = self.reduce_motion {
            settings.reduce_motion = reduce_motion;
        }
        if let Some(default_app) = self.default_app {
            settings.default_app = default_app;
        }
        if let Some(dock_position) = self.dock_position {
            settings.dock_position = dock_position;
        }
        *settings != before
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
