use super::*;
use crate::core::Pointer;

fn key(code: crossterm::event::KeyCode, mods: crossterm::event::KeyModifiers) -> Option<Key> {
    into_key(crossterm::event::KeyEvent::new(code, mods))
}

#[test]
fn ctrl_space_normalizes_from_null() {
    let converted = key(
        crossterm::event::KeyCode::Null,
        crossterm::event::KeyModifiers::NONE,
    )
    .expect("mapped");
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn uppercase_letters_carry_shift() {
    let converted = key(
        crossterm::event::KeyCode::Char('A'),
        crossterm::event::KeyModifiers::SHIFT,
    )
    .expect("mapped");
    assert_eq!(converted, Key::shift(KeyCode::Char('a')));
    assert_eq!(converted.printable(), Some('A'));
}

#[test]
fn releases_and_unmapped_keys_are_dropped() {
    let mut release = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('a'),
        crossterm::event::KeyModifiers::NONE,
    );
    release.kind = crossterm::event::KeyEventKind::Release;
    assert_eq!(into_key(release), None);
    assert_eq!(
        key(
            crossterm::event::KeyCode::CapsLock,
            crossterm::event::KeyModifiers::NONE
        ),
        None
    );
    assert_eq!(
        into_input_event(crossterm::event::Event::FocusLost),
        None
    );
}

#[test]
fn mouse_cells_become_pixels() {
    let event = crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column: 10,
        row: 3,
        modifiers: crossterm::event::KeyModifiers::NONE,
    };
    assert_eq!(
        into_pointer_event(event),
        Some(PointerEvent {
            action: PointerAction::Down,
            position: Pointer::new(80, 48),
        })
    );

    let right = crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Right),
        ..event
    };
    assert_eq!(into_pointer_event(right), None);
}

#[test]
fn paste_and_resize_pass_through() {
    assert_eq!(
        into_input_event(crossterm::event::Event::Paste("hi".into())),
        Some(InputEvent::Paste("hi".into()))
    );
    assert_eq!(
        into_input_event(crossterm::event::Event::Resize(120, 40)),
        Some(InputEvent::Resize(120, 40))
    );
}
