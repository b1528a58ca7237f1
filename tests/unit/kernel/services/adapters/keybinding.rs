use super::*;

#[test]
fn terminal_has_history_bindings() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Terminal, &Key::simple(KeyCode::Up)),
        Some(&Command::HistoryPrevious)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Terminal, &Key::simple(KeyCode::Down)),
        Some(&Command::HistoryNext)
    );
}

#[test]
fn global_commands_fall_through_in_every_context() {
    let service = KeybindingService::new();
    let quit = Key::ctrl(KeyCode::Char('q'));
    for context in [
        KeybindingContext::Global,
        KeybindingContext::Terminal,
        KeybindingContext::Editor,
        KeybindingContext::Explorer,
        KeybindingContext::Viewer,
    ] {
        assert_eq!(service.resolve(context, &quit), Some(&Command::Quit));
    }
}

#[test]
fn function_keys_open_apps_in_dock_order() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::simple(KeyCode::F(1))),
        Some(&Command::OpenApp(AppKind::Terminal))
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::simple(KeyCode::F(6))),
        Some(&Command::OpenApp(AppKind::Settings))
    );
}

#[test]
fn enter_means_different_things_per_context() {
    let service = KeybindingService::new();
    let enter = Key::simple(KeyCode::Enter);
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &enter),
        Some(&Command::InsertNewline)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Terminal, &enter),
        Some(&Command::Submit)
    );
    assert_eq!(service.resolve(KeybindingContext::Global, &enter), None);
}

#[test]
fn context_follows_focused_window() {
    assert_eq!(
        KeybindingContext::for_window(Some(AppKind::Browser)),
        KeybindingContext::Viewer
    );
    assert_eq!(
        KeybindingContext::for_window(Some(AppKind::Calculator)),
        KeybindingContext::Global
    );
    assert_eq!(KeybindingContext::for_window(None), KeybindingContext::Global);
}

#[test]
fn bind_overrides_and_unbind_restores_fallthrough() {
    let mut service = KeybindingService::new();
    let key = Key::ctrl(KeyCode::Char('q'));
    service.bind(KeybindingContext::Terminal, key, Command::Custom("noop".into()));
    assert_eq!(
        service.resolve(KeybindingContext::Terminal, &key),
        Some(&Command::Custom("noop".into()))
    );
    service.unbind(KeybindingContext::Terminal, &key);
    assert_eq!(
        service.resolve(KeybindingContext::Terminal, &key),
        Some(&Command::Quit)
    );
}
