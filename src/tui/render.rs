//! Paints the desktop scene with ratatui.
//!
//! Window placement, titles, stacking and colors come from the scene surface; window contents
//! come from the kernel state.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::app::layout::{self, Frame as WindowFrame};
use crate::app::Desktop;
use crate::kernel::services::adapters::{SceneSurface, SceneWindow};
use crate::kernel::shell::LineKind;
use crate::kernel::viewer::QUICK_LINKS;
use crate::kernel::{AppKind, Store, WindowId};

use super::palette::{ColorSupport, Palette};

const INPUT_PROMPT: &str = "$ ";
const CALCULATOR_KEYS: [&str; 4] = ["7 8 9 /", "4 5 6 *", "1 2 3 -", "0 . = +"];

pub fn render(frame: &mut Frame, desktop: &Desktop<SceneSurface>, support: ColorSupport) {
    let area = frame.area();
    let scene = desktop.surface();
    let palette = Palette::new(scene.theme, support);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.desktop_bg)),
        area,
    );

    let focused = desktop.store().state().focused();
    for (id, window) in scene.stacked() {
        let Some(rect) = window_rect(window, area) else {
            continue;
        };
        let is_focused = focused == Some(id.kind());
        render_window(frame, desktop.store(), &palette, id, window, rect, is_focused);
    }

    render_dock(frame, desktop, &palette, area);
}

/// The window's cell rectangle clipped to `area`; `None` when nothing of it is visible.
fn window_rect(window: &SceneWindow, area: Rect) -> Option<Rect> {
    let frame = WindowFrame::at(window.position);
    let left = frame.col.max(i32::from(area.x));
    let top = frame.row.max(i32::from(area.y));
    let right = (frame.col + i32::from(frame.cols)).min(i32::from(area.right()));
    let bottom = (frame.row + i32::from(frame.rows)).min(i32::from(area.bottom()));
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

fn render_window(
    frame: &mut Frame,
    store: &Store,
    palette: &Palette,
    id: WindowId,
    window: &SceneWindow,
    rect: Rect,
    focused: bool,
) {
    let (accent, header) = match window.style.as_ref() {
        Some(style) => (
            palette.scene_color(&style.border_color, palette.fg),
            palette.scene_color(&style.header_from, palette.window_bg),
        ),
        None => (palette.fg, palette.window_bg),
    };
    let mut title_style = Style::default().fg(accent).bg(header);
    if focused {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(palette.window_bg).fg(palette.fg))
        .title(Span::styled(
            format!(" {} ", truncate(&window.title, title_room(rect.width))),
            title_style,
        ));
    let inner = block.inner(rect);

    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);
    render_close_button(frame, window, rect, accent);

    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let lines = window_lines(store, palette, id.kind(), window, inner.height as usize);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_close_button(frame: &mut Frame, window: &SceneWindow, rect: Rect, accent: Color) {
    let frame_cells = WindowFrame::at(window.position);
    let columns = frame_cells.close_columns();
    if frame_cells.row != i32::from(rect.y)
        || columns.start < i32::from(rect.x)
        || columns.end > i32::from(rect.right())
    {
        return;
    }
    let button = Rect::new(columns.start as u16, rect.y, layout::close_button().len() as u16, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(
            layout::close_button(),
            Style::default().fg(accent),
        )),
        button,
    );
}

/// Cells left for the title between the corners and the close button.
fn title_room(width: u16) -> usize {
    usize::from(width).saturating_sub(layout::close_button().len() + 5)
}

/// Longest prefix of `text` that fits in `max` cells.
pub fn truncate(text: &str, max: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > max {
            return &text[..idx];
        }
    }
    text
}

/// Body text of one window, at most `rows` lines.
pub fn window_lines(
    store: &Store,
    palette: &Palette,
    kind: AppKind,
    window: &SceneWindow,
    rows: usize,
) -> Vec<Line<'static>> {
    let state = store.state();
    match kind {
        AppKind::Terminal => match state.terminal.as_ref() {
            Some(term) => {
                let mut lines: Vec<Line<'static>> = Vec::new();
                for entry in term.transcript() {
                    let style = match entry.kind {
                        LineKind::Echo => Style::default().fg(palette.muted),
                        LineKind::Plain | LineKind::Block => Style::default(),
                        LineKind::Success => Style::default().fg(palette.success),
                        LineKind::Error => Style::default().fg(palette.error),
                    };
                    for text in entry.text.split('\n') {
                        lines.push(Line::styled(text.to_string(), style));
                    }
                }
                // The input line stays pinned; scrolling moves the transcript above it.
                let visible = rows.saturating_sub(1);
                let end = lines.len().saturating_sub(term.scroll_offset());
                let start = end.saturating_sub(visible);
                let mut shown: Vec<Line<'static>> = lines.drain(start..end).collect();
                shown.push(Line::from(format!("{INPUT_PROMPT}{}_", term.input())));
                shown
            }
            None => Vec::new(),
        },
        AppKind::Explorer => {
            let files = store.files();
            if files.is_empty() {
                return vec![Line::styled("(no files)", Style::default().fg(palette.muted))];
            }
            let selected = state.explorer.map(|explorer| explorer.selected(files));
            let names = files.names();
            let first = match selected {
                Some(idx) if idx >= rows => idx + 1 - rows,
                _ => 0,
            };
            names
                .into_iter()
                .enumerate()
                .skip(first)
                .take(rows)
                .map(|(idx, name)| {
                    if Some(idx) == selected {
                        Line::styled(
                            format!("> {name}"),
                            Style::default().add_modifier(Modifier::REVERSED),
                        )
                    } else {
                        Line::from(format!("  {name}"))
                    }
                })
                .collect()
        }
        AppKind::Editor => match state.editor.as_ref() {
            Some(editor) => {
                let content = editor.content(store.files());
                let mut lines: Vec<Line<'static>> = content
                    .split('\n')
                    .map(|line| Line::from(line.to_string()))
                    .collect();
                let visible = rows.saturating_sub(1);
                let start = lines.len().saturating_sub(visible);
                let mut shown: Vec<Line<'static>> = lines.drain(start..).collect();
                shown.push(Line::styled(
                    format!("-- {} --", editor.file_name()),
                    Style::default().fg(palette.muted),
                ));
                shown
            }
            None => Vec::new(),
        },
        AppKind::Calculator => match state.calculator.as_ref() {
            Some(calc) => {
                let mut lines = vec![
                    Line::styled(
                        calc.display().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )
                    .right_aligned(),
                    Line::default(),
                ];
                lines.extend(CALCULATOR_KEYS.iter().map(|row| Line::from(*row)));
                lines.push(Line::styled(
                    "c clear",
                    Style::default().fg(palette.muted),
                ));
                lines
            }
            None => Vec::new(),
        },
        AppKind::Browser => match state.viewer.as_ref() {
            Some(viewer) => {
                let mut lines = vec![Line::from(format!("Address: {}_", viewer.address()))];
                if let Some(message) = viewer.message() {
                    lines.push(Line::styled(
                        message.to_string(),
                        Style::default().fg(palette.error),
                    ));
                }
                let page = window
                    .page
                    .as_deref()
                    .or(viewer.current_url())
                    .unwrap_or("(blank)");
                lines.push(Line::from(format!("Page: {page}")));
                lines.push(Line::default());
                lines.extend(QUICK_LINKS.iter().map(|(label, url)| {
                    Line::styled(
                        format!("  {label}: {url}"),
                        Style::default().fg(palette.muted),
                    )
                }));
                lines
            }
            None => Vec::new(),
        },
        AppKind::Settings => {
            let settings = store.settings().get();
            vec![
                Line::from(format!("[t] Theme         {}", settings.theme.name())),
                Line::from(format!("    Accent        {}", settings.accent)),
                Line::from(format!("[+/-] Font size   {}px", settings.font_size)),
                Line::from(format!(
                    "[m] Reduce motion {}",
                    if settings.reduce_motion { "on" } else { "off" }
                )),
                Line::from(format!("[a] Default app   {}", settings.default_app)),
                Line::from(format!("[d] Dock          {}", settings.dock_position.name())),
            ]
        }
    }
}

fn render_dock(frame: &mut Frame, desktop: &Desktop<SceneSurface>, palette: &Palette, area: Rect) {
    if area.height == 0 {
        return;
    }
    let scene = desktop.surface();
    let row = area.y + layout::dock_row(scene.dock.position, area.height);
    let dock_area = Rect::new(area.x, row, area.width, 1);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.dock_bg)),
        dock_area,
    );

    let windows = &desktop.store().state().windows;
    let accent = palette.scene_color(&desktop.store().settings().get().accent, palette.fg);
    for item in layout::dock_items(area.width) {
        if item.col >= area.width {
            break;
        }
        let width = item.width().min(area.width - item.col);
        let style = if windows.contains(item.kind) {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.fg)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(item.label.clone(), style)),
            Rect::new(area.x + item.col, row, width, 1),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/render.rs"]
mod tests;
