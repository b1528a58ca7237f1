//! Cell geometry of the desktop.
//!
//! Window positions are kept in surface pixels; a text front-end maps them onto a character grid
//! of fixed-size cells. Hit testing works on the same grid so a click lands on what was painted.

use unicode_width::UnicodeWidthStr;

use crate::core::Pointer;
use crate::kernel::services::ports::settings::DockPosition;
use crate::kernel::{AppKind, Point, WindowManager};

pub const CELL_WIDTH_PX: i32 = 8;
pub const CELL_HEIGHT_PX: i32 = 16;
pub const WINDOW_COLS: u16 = 56;
pub const WINDOW_ROWS: u16 = 16;
const CLOSE_BUTTON: &str = "[x]";

/// A window's rectangle on the cell grid. May extend past the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub col: i32,
    pub row: i32,
    pub cols: u16,
    pub rows: u16,
}

impl Frame {
    pub fn at(position: Point) -> Self {
        Self {
            col: position.x.div_euclid(CELL_WIDTH_PX),
            row: position.y.div_euclid(CELL_HEIGHT_PX),
            cols: WINDOW_COLS,
            rows: WINDOW_ROWS,
        }
    }

    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.col
            && col < self.col + i32::from(self.cols)
            && row >= self.row
            && row < self.row + i32::from(self.rows)
    }

    pub fn is_title_bar(&self, row: i32) -> bool {
        row == self.row
    }

    /// Columns of the `[x]` button, right-aligned inside the top border.
    pub fn close_columns(&self) -> std::ops::Range<i32> {
        let end = self.col + i32::from(self.cols) - 1;
        end - CLOSE_BUTTON.len() as i32..end
    }
}

pub fn close_button() -> &'static str {
    CLOSE_BUTTON
}

/// Pixel position of the top-left corner of a cell.
pub fn pointer_at(col: u16, row: u16) -> Pointer {
    Pointer::new(
        i32::from(col) * CELL_WIDTH_PX,
        i32::from(row) * CELL_HEIGHT_PX,
    )
}

fn cell_of(pointer: Pointer) -> (i32, i32) {
    (
        pointer.x.div_euclid(CELL_WIDTH_PX),
        pointer.y.div_euclid(CELL_HEIGHT_PX),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockItem {
    pub kind: AppKind,
    pub label: String,
    pub col: u16,
}

impl DockItem {
    pub fn width(&self) -> u16 {
        self.label.width() as u16
    }
}

/// The dock row: one launcher per app, centered.
pub fn dock_items(viewport_cols: u16) -> Vec<DockItem> {
    let labels: Vec<(AppKind, String)> = AppKind::ALL
        .iter()
        .enumerate()
        .map(|(idx, kind)| (*kind, format!(" F{} {} ", idx + 1, kind.title())))
        .collect();
    let total: u16 = labels
        .iter()
        .map(|(_, label)| label.width() as u16 + 1)
        .sum();
    let mut col = viewport_cols.saturating_sub(total) / 2;
    labels
        .into_iter()
        .map(|(kind, label)| {
            let item = DockItem { kind, col, label };
            col = col.saturating_add(item.width() + 1);
            item
        })
        .collect()
}

pub fn dock_row(position: DockPosition, viewport_rows: u16) -> u16 {
    match position {
        DockPosition::Top => 0,
        DockPosition::Bottom => viewport_rows.saturating_sub(1),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Dock(AppKind),
    Close(AppKind),
    TitleBar(AppKind),
    Body(AppKind),
    Desktop,
}

/// What sits under `pointer`: the dock first, then windows from the top of the stack down.
pub fn hit_test(
    windows: &WindowManager,
    dock: DockPosition,
    viewport: (u16, u16),
    pointer: Pointer,
) -> Hit {
    let (col, row) = cell_of(pointer);
    let (cols, rows) = viewport;
    if row == i32::from(dock_row(dock, rows)) {
        let item = dock_items(cols).into_iter().find(|item| {
            col >= i32::from(item.col) && col < i32::from(item.col + item.width())
        });
        if let Some(item) = item {
            return Hit::Dock(item.kind);
        }
    }

    for window in windows.windows_by_z().into_iter().rev() {
        let frame = Frame::at(window.position);
        if !frame.contains(col, row) {
            continue;
        }
        if frame.is_title_bar(row) {
            if frame.close_columns().contains(&col) {
                return Hit::Close(window.kind);
            }
            return Hit::TitleBar(window.kind);
        }
        return Hit::Body(window.kind);
    }
    Hit::Desktop
}

#[cfg(test)]
#[path = "../../tests/unit/app/layout.rs"]
mod tests;
