use super::*;

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn uppercase_char_folds_into_shift() {
    let key = Key::simple(KeyCode::Char('Q'));
    assert_eq!(key.code, KeyCode::Char('q'));
    assert!(key.modifiers.contains(KeyModifiers::SHIFT));
    assert_eq!(key.printable(), Some('Q'));
}

#[test]
fn ctrl_chars_are_not_printable() {
    assert_eq!(Key::ctrl(KeyCode::Char('w')).printable(), None);
    assert_eq!(Key::simple(KeyCode::Enter).printable(), None);
    assert_eq!(Key::simple(KeyCode::Char(' ')).printable(), Some(' '));
}

#[test]
fn test_input_event_conversion() {
    let input = InputEvent::Key(Key::simple(KeyCode::Char('a')));
    assert!(input.is_key());
    assert!(!input.is_pointer());
    assert_eq!(input.as_key().map(|k| k.code), Some(KeyCode::Char('a')));
}

#[test]
fn test_pointer_position() {
    let pos = Pointer::new(10, 20);
    assert_eq!(pos.x, 10);
    assert_eq!(pos.y, 20);
}
