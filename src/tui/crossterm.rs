//! crossterm events to backend-independent input events.
//!
//! Mouse cells are converted to surface pixels here, so the desktop only ever sees pixels.

use crate::app::layout;
use crate::core::event::{InputEvent, Key, KeyCode, KeyModifiers, PointerAction, PointerEvent};

/// `None` for events the desktop ignores: key releases, focus changes, unmapped keys and
/// mouse buttons other than the left one.
pub fn into_input_event(event: crossterm::event::Event) -> Option<InputEvent> {
    match event {
        crossterm::event::Event::Key(key) => into_key(key).map(InputEvent::Key),
        crossterm::event::Event::Mouse(mouse) => into_pointer_event(mouse).map(InputEvent::Pointer),
        crossterm::event::Event::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        crossterm::event::Event::Paste(s) => Some(InputEvent::Paste(s)),
        crossterm::event::Event::FocusGained | crossterm::event::Event::FocusLost => None,
    }
}

pub fn into_key(event: crossterm::event::KeyEvent) -> Option<Key> {
    if event.kind == crossterm::event::KeyEventKind::Release {
        return None;
    }
    let mut modifiers = into_key_modifiers(event.modifiers);
    let code = into_key_code(event.code, &mut modifiers)?;
    Some(Key::new(code, modifiers))
}

fn into_key_modifiers(mods: crossterm::event::KeyModifiers) -> KeyModifiers {
    let mut out = KeyModifiers::NONE;
    if mods.contains(crossterm::event::KeyModifiers::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    if mods.contains(crossterm::event::KeyModifiers::CONTROL) {
        out |= KeyModifiers::CONTROL;
    }
    if mods.contains(crossterm::event::KeyModifiers::ALT) {
        out |= KeyModifiers::ALT;
    }
    if mods.contains(crossterm::event::KeyModifiers::SUPER) {
        out |= KeyModifiers::SUPER;
    }
    out
}

fn into_key_code(code: crossterm::event::KeyCode, modifiers: &mut KeyModifiers) -> Option<KeyCode> {
    let code = match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::BackTab => KeyCode::BackTab,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Delete => KeyCode::Delete,
        crossterm::event::KeyCode::Up => KeyCode::Up,
        crossterm::event::KeyCode::Down => KeyCode::Down,
        crossterm::event::KeyCode::Left => KeyCode::Left,
        crossterm::event::KeyCode::Right => KeyCode::Right,
        crossterm::event::KeyCode::Home => KeyCode::Home,
        crossterm::event::KeyCode::End => KeyCode::End,
        crossterm::event::KeyCode::PageUp => KeyCode::PageUp,
        crossterm::event::KeyCode::PageDown => KeyCode::PageDown,
        crossterm::event::KeyCode::F(n) => KeyCode::F(n),
        crossterm::event::KeyCode::Null => {
            *modifiers |= KeyModifiers::CONTROL;
            KeyCode::Char(' ')
        }
        _ => return None,
    };
    Some(code)
}

pub fn into_pointer_event(event: crossterm::event::MouseEvent) -> Option<PointerEvent> {
    use crossterm::event::{MouseButton, MouseEventKind};

    let action = match event.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerAction::Down,
        MouseEventKind::Drag(MouseButton::Left) => PointerAction::Moved,
        MouseEventKind::Up(MouseButton::Left) => PointerAction::Up,
        MouseEventKind::ScrollUp => PointerAction::ScrollUp,
        MouseEventKind::ScrollDown => PointerAction::ScrollDown,
        _ => return None,
    };
    Some(PointerEvent {
        action,
        position: layout::pointer_at(event.column, event.row),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
