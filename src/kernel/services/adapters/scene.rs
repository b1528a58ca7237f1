//! In-memory rendering surface.
//!
//! Keeps the last state every surface call produced, so front-ends can paint from it and tests
//! can compare whole scenes.

use std::collections::BTreeMap;

use crate::kernel::services::ports::settings::{DockPosition, Theme};
use crate::kernel::services::ports::surface::{DockStyle, RenderSurface, WindowStyle};
use crate::kernel::window::{Point, WindowId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneWindow {
    pub title: String,
    pub position: Point,
    pub z_index: u32,
    pub style: Option<WindowStyle>,
    pub page: Option<String>,
    /// Entrance animation still attached; dropped once motion is reduced.
    pub animated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneSurface {
    pub windows: BTreeMap<WindowId, SceneWindow>,
    pub theme: Theme,
    pub root_font_px: u8,
    /// Number of injected motion-reduction style blocks; never more than one.
    pub motion_styles: usize,
    pub dock: DockStyle,
}

impl Default for SceneSurface {
    fn default() -> Self {
        Self {
            windows: BTreeMap::new(),
            theme: Theme::Dark,
            root_font_px: 16,
            motion_styles: 0,
            dock: DockStyle {
                position: DockPosition::Bottom,
                offset_px: 20,
                glow: String::new(),
            },
        }
    }
}

impl SceneSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(&self, id: WindowId) -> Option<&SceneWindow> {
        self.windows.get(&id)
    }

    /// Windows bottom to top.
    pub fn stacked(&self) -> Vec<(WindowId, &SceneWindow)> {
        let mut windows: Vec<_> = self.windows.iter().map(|(id, w)| (*id, w)).collect();
        windows.sort_by_key(|(_, w)| w.z_index);
        windows
    }

    pub fn reduced_motion(&self) -> bool {
        self.motion_styles > 0
    }
}

impl RenderSurface for SceneSurface {
    fn create_window(&mut self, id: WindowId, title: &str, position: Point) {
        let animated = !self.reduced_motion();
        self.windows.insert(
            id,
            SceneWindow {
                title: title.to_string(),
                position,
                z_index: 0,
                style: None,
                page: None,
                animated,
            },
        );
    }

    fn destroy_window(&mut self, id: WindowId) {
        self.windows.remove(&id);
    }

    fn set_title(&mut self, id: WindowId, title: &str) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.title = title.to_string();
        }
    }

    fn move_window(&mut self, id: WindowId, position: Point) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.position = position;
        }
    }

    fn set_z_index(&mut self, id: WindowId, z_index: u32) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.z_index = z_index;
        }
    }

    fn style_window(&mut self, id: WindowId, style: &WindowStyle) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.style = Some(style.clone());
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn set_root_font_size(&mut self, px: u8) {
        self.root_font_px = px;
    }

    fn set_reduced_motion(&mut self, reduced: bool) {
        if reduced {
            if self.motion_styles == 0 {
                self.motion_styles = 1;
            }
            for window in self.windows.values_mut() {
                window.animated = false;
            }
        } else {
            self.motion_styles = 0;
        }
    }

    fn anchor_dock(&mut self, dock: &DockStyle) {
        self.dock = dock.clone();
    }

    fn embed_page(&mut self, id: WindowId, url: &str) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.page = Some(url.to_string());
        }
    }
}
