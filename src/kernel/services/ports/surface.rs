//! Rendering surface contract. The window manager and the settings projection only ever talk
//! to the UI through these calls; how a surface paints is its own business.

use crate::kernel::services::ports::settings::{DockPosition, Theme};
use crate::kernel::window::{Point, WindowId};

/// Accent-derived decoration of one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowStyle {
    pub border_color: String,
    pub header_from: String,
    pub header_to: String,
}

/// How the dock is anchored and lit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockStyle {
    pub position: DockPosition,
    pub offset_px: u16,
    pub glow: String,
}

pub trait RenderSurface {
    fn create_window(&mut self, id: WindowId, title: &str, position: Point);

    fn destroy_window(&mut self, id: WindowId);

    fn set_title(&mut self, id: WindowId, title: &str);

    fn move_window(&mut self, id: WindowId, position: Point);

    fn set_z_index(&mut self, id: WindowId, z_index: u32);

    fn style_window(&mut self, id: WindowId, style: &WindowStyle);

    fn set_theme(&mut self, theme: Theme);

    fn set_root_font_size(&mut self, px: u8);

    /// Injects the motion-suppressing style when `reduced`, removes it otherwise.
    fn set_reduced_motion(&mut self, reduced: bool);

    fn anchor_dock(&mut self, dock: &DockStyle);

    fn embed_page(&mut self, id: WindowId, url: &str);
}
