use crate::kernel::action::Action;
use crate::kernel::services::ports::settings::Settings;
use crate::kernel::window::{Point, WindowId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CreateWindow {
        id: WindowId,
        title: String,
        position: Point,
    },
    DestroyWindow(WindowId),
    MoveWindow {
        id: WindowId,
        position: Point,
    },
    /// Stacking value of every open window.
    Restack(Vec<(WindowId, u32)>),
    SetTitle {
        id: WindowId,
        title: String,
    },
    ApplySettings(Settings),
    EmbedPage {
        id: WindowId,
        url: String,
    },
    /// Dispatch on the next tick.
    Defer(Action),
    Quit,
}
