//! Window registry: singleton-per-kind windows, stacking order and header dragging.

use std::fmt;

use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Pointer;
use crate::kernel::services::ports::config::{SpawnGeometry, Stacking};
use crate::kernel::services::ports::settings::DockPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    Terminal,
    Explorer,
    Editor,
    Calculator,
    Browser,
    Settings,
}

impl AppKind {
    pub const ALL: [AppKind; 6] = [
        AppKind::Terminal,
        AppKind::Explorer,
        AppKind::Editor,
        AppKind::Calculator,
        AppKind::Browser,
        AppKind::Settings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AppKind::Terminal => "terminal",
            AppKind::Explorer => "explorer",
            AppKind::Editor => "editor",
            AppKind::Calculator => "calculator",
            AppKind::Browser => "browser",
            AppKind::Settings => "settings",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == value)
    }

    pub fn title(self) -> &'static str {
        match self {
            AppKind::Terminal => "Terminal",
            AppKind::Explorer => "Explorer",
            AppKind::Editor => "Editor",
            AppKind::Calculator => "Calculator",
            AppKind::Browser => "Browser",
            AppKind::Settings => "Settings",
        }
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Window identity is derived from its kind (`terminal-window`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(AppKind);

impl WindowId {
    pub fn for_kind(kind: AppKind) -> Self {
        Self(kind)
    }

    pub fn kind(self) -> AppKind {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-window", self.0.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Pointer> for Point {
    fn from(p: Pointer) -> Self {
        Self::new(p.x, p.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub id: WindowId,
    pub kind: AppKind,
    pub title: String,
    pub z_index: u32,
    pub position: Point,
    seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        kind: AppKind,
        offset: Point,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    Created,
    Focused,
}

/// Initial origin for a new window: base offset plus jitter. A top dock pushes windows down.
pub fn spawn_position<R: Rng + ?Sized>(
    geometry: &SpawnGeometry,
    dock: DockPosition,
    rng: &mut R,
) -> Point {
    let base_top = match dock {
        DockPosition::Top => geometry.base_top_under_top_dock,
        DockPosition::Bottom => geometry.base_top,
    };
    let jitter_x = rng.random_range(0..geometry.jitter_x.max(1));
    let jitter_y = rng.random_range(0..geometry.jitter_y.max(1));
    Point::new(geometry.base_left + jitter_x, base_top + jitter_y)
}

#[derive(Debug, Default)]
pub struct WindowManager {
    windows: FxHashMap<AppKind, Window>,
    drag: DragState,
    stacking: Stacking,
    next_seq: u64,
}

impl WindowManager {
    pub fn new(stacking: Stacking) -> Self {
        Self {
            windows: FxHashMap::default(),
            drag: DragState::Idle,
            stacking,
            next_seq: 0,
        }
    }

    pub fn get(&self, kind: AppKind) -> Option<&Window> {
        self.windows.get(&kind)
    }

    pub fn contains(&self, kind: AppKind) -> bool {
        self.windows.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Windows bottom to top. Ties on the baseline keep creation order.
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| (w.z_index, w.seq));
        windows
    }

    pub fn ids(&self) -> Vec<WindowId> {
        self.windows_by_z().into_iter().map(|w| w.id).collect()
    }

    pub fn topmost(&self) -> Option<AppKind> {
        self.windows_by_z().last().map(|w| w.kind)
    }

    /// Focuses the existing window of `kind`, or creates one at the position `spawn` yields.
    pub fn open(&mut self, kind: AppKind, spawn: impl FnOnce() -> Point) -> OpenOutcome {
        if self.windows.contains_key(&kind) {
            self.bring_to_front(kind);
            return OpenOutcome::Focused;
        }

        let seq = self.next_seq;
        self.next_seq = self.next_seq.saturating_add(1);
        self.windows.insert(
            kind,
            Window {
                id: WindowId::for_kind(kind),
                kind,
                title: kind.title().to_string(),
                z_index: self.stacking.baseline,
                position: spawn(),
                seq,
            },
        );
        self.bring_to_front(kind);
        OpenOutcome::Created
    }

    pub fn bring_to_front(&mut self, kind: AppKind) -> bool {
        if !self.windows.contains_key(&kind) {
            return false;
        }
        let front = self.stacking.front.max(self.stacking.baseline.saturating_add(1));
        let mut changed = false;
        for window in self.windows.values_mut() {
            let z = if window.kind == kind {
                front
            } else {
                self.stacking.baseline
            };
            changed |= window.z_index != z;
            window.z_index = z;
        }
        changed
    }

    pub fn close(&mut self, kind: AppKind) -> Option<Window> {
        if matches!(self.drag, DragState::Dragging { kind: k, .. } if k == kind) {
            self.drag = DragState::Idle;
        }
        self.windows.remove(&kind)
    }

    pub fn set_title(&mut self, kind: AppKind, title: String) -> bool {
        match self.windows.get_mut(&kind) {
            Some(window) if window.title != title => {
                window.title = title;
                true
            }
            _ => false,
        }
    }

    /// Next window in creation order after the current topmost one.
    pub fn next_in_cycle(&self) -> Option<AppKind> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.seq);
        let top = self.topmost()?;
        let idx = windows.iter().position(|w| w.kind == top)?;
        windows.get((idx + 1) % windows.len()).map(|w| w.kind)
    }

    /// Header press: focus the window and capture the pointer offset from its origin.
    pub fn begin_drag(&mut self, kind: AppKind, pointer: Point) -> bool {
        let Some(window) = self.windows.get(&kind) else {
            return false;
        };
        let offset = Point::new(pointer.x - window.position.x, pointer.y - window.position.y);
        self.bring_to_front(kind);
        self.drag = DragState::Dragging { kind, offset };
        true
    }

    pub fn drag_to(&mut self, pointer: Point) -> Option<(AppKind, Point)> {
        let DragState::Dragging { kind, offset } = self.drag else {
            return None;
        };
        let window = self.windows.get_mut(&kind)?;
        let position = Point::new(pointer.x - offset.x, pointer.y - offset.y);
        if window.position == position {
            return None;
        }
        window.position = position;
        Some((kind, position))
    }

    /// Pointer release ends any drag, wherever the pointer is.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = matches!(self.drag, DragState::Dragging { .. });
        self.drag = DragState::Idle;
        was_dragging
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/window.rs"]
mod tests;
