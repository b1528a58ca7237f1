use super::*;
use crate::kernel::editor::UNTITLED;
use crate::kernel::services::adapters::{FixedClock, MemoryStorage};
use crate::kernel::services::ports::settings::{Settings, Theme};
use crate::kernel::services::ports::{FILES_KEY, SETTINGS_KEY};
use crate::kernel::window::{Point, WindowId};
use chrono::Local;

fn new_store(storage: &MemoryStorage) -> Store {
    let config = DesktopConfig {
        seed: Some(7),
        ..DesktopConfig::default()
    };
    Store::new(
        config,
        FileStore::load(Box::new(storage.clone())),
        SettingsStore::load(Box::new(storage.clone())),
        Box::new(FixedClock(Local::now())),
    )
}

fn empty_storage() -> MemoryStorage {
    MemoryStorage::new().with_entry(FILES_KEY, "{}")
}

fn run_line(store: &mut Store, line: &str) -> DispatchResult {
    store.dispatch(Action::InsertText(line.to_string()));
    store.dispatch(Action::RunCommand(Command::Submit))
}

fn last_line(store: &Store) -> String {
    store
        .state()
        .terminal
        .as_ref()
        .and_then(|t| t.transcript().last())
        .map(|l| l.text.clone())
        .unwrap_or_default()
}

fn created(result: &DispatchResult) -> Vec<WindowId> {
    result
        .effects
        .iter()
        .filter_map(|e| match e {
            Effect::CreateWindow { id, .. } => Some(*id),
            _ => None,
        })
        .collect()
}

#[test]
fn boot_applies_settings_and_opens_default_app() {
    let storage =
        empty_storage().with_entry(SETTINGS_KEY, r#"{"defaultApp":"explorer","theme":"light"}"#);
    let mut store = new_store(&storage);
    let result = store.dispatch(Action::Boot);

    match &result.effects[0] {
        Effect::ApplySettings(settings) => assert_eq!(settings.theme, Theme::Light),
        other => panic!("unexpected first effect: {other:?}"),
    }
    assert_eq!(
        created(&result),
        vec![WindowId::for_kind(AppKind::Explorer)]
    );
    assert_eq!(store.state().focused(), Some(AppKind::Explorer));
}

#[test]
fn opening_twice_keeps_a_single_window() {
    let mut store = new_store(&empty_storage());
    let first = store.dispatch(Action::OpenApp(AppKind::Terminal));
    run_line(&mut store, "ls");
    let second = store.dispatch(Action::OpenApp(AppKind::Terminal));

    assert_eq!(created(&first).len(), 1);
    assert!(created(&second).is_empty());
    assert_eq!(store.state().windows.len(), 1);
    assert_eq!(
        store.state().terminal.as_ref().unwrap().history().len(),
        1,
        "re-opening must not reload content"
    );
}

#[test]
fn spawn_respects_dock_position() {
    let storage = empty_storage().with_entry(SETTINGS_KEY, r#"{"dockPosition":"top"}"#);
    let mut store = new_store(&storage);
    store.dispatch(Action::OpenApp(AppKind::Calculator));
    let position = store.state().windows.get(AppKind::Calculator).unwrap().position;
    assert!((180..220).contains(&position.y));
    assert!((80..140).contains(&position.x));
}

#[test]
fn shell_file_commands_persist_before_confirming() {
    let storage = empty_storage();
    let mut store = new_store(&storage);
    store.dispatch(Action::OpenApp(AppKind::Terminal));
    run_line(&mut store, "write a.txt hello");
    assert_eq!(last_line(&store), "OK");
    assert!(storage.raw(FILES_KEY).unwrap().contains("\"a.txt\":\"hello\""));

    run_line(&mut store, "cat a.txt");
    assert_eq!(last_line(&store), "hello");
}

#[test]
fn settings_commands_emit_apply() {
    let storage = empty_storage();
    let mut store = new_store(&storage);
    store.dispatch(Action::OpenApp(AppKind::Terminal));
    let result = run_line(&mut store, "theme light");
    assert!(result
        .effects
        .iter()
        .any(|e| matches!(e, Effect::ApplySettings(s) if s.theme == Theme::Light)));
    assert_eq!(last_line(&store), "theme light");

    let rejected = run_line(&mut store, "fontsize 9");
    assert!(!rejected
        .effects
        .iter()
        .any(|e| matches!(e, Effect::ApplySettings(_))));
    assert_eq!(store.settings().get().font_size, 16);
}

#[test]
fn open_command_binds_editor_and_titles_window() {
    let mut store = new_store(&empty_storage());
    store.dispatch(Action::OpenApp(AppKind::Terminal));
    let result = run_line(&mut store, "open notes.txt");

    assert!(result.effects.iter().any(|e| matches!(
        e,
        Effect::CreateWindow { title, .. } if title == "Editor - notes.txt"
    )));
    assert_eq!(store.state().focused(), Some(AppKind::Editor));
    assert_eq!(store.files().read("notes.txt"), Ok(""));
    assert!(!store.files().contains(UNTITLED));
}

#[test]
fn rebinding_open_editor_updates_title() {
    let mut store = new_store(&empty_storage());
    store.dispatch(Action::OpenEditor("a.txt".into()));
    let result = store.dispatch(Action::OpenEditor("b.txt".into()));
    assert!(result.effects.contains(&Effect::SetTitle {
        id: WindowId::for_kind(AppKind::Editor),
        title: "Editor - b.txt".into(),
    }));
}

#[test]
fn dock_opened_editor_edits_untitled() {
    let mut store = new_store(&empty_storage());
    store.dispatch(Action::OpenApp(AppKind::Editor));
    store.dispatch(Action::InsertText("hi".into()));
    store.dispatch(Action::RunCommand(Command::InsertNewline));
    store.dispatch(Action::InsertText("there".into()));
    assert_eq!(store.files().read(UNTITLED), Ok("hi\nthere"));
    assert_eq!(
        store.state().windows.get(AppKind::Editor).unwrap().title,
        "Editor"
    );
}

#[test]
fn closing_editor_drops_its_binding() {
    let mut store = new_store(&empty_storage());
    store.dispatch(Action::OpenEditor("a.txt".into()));
    let result = store.dispatch(Action::CloseWindow(AppKind::Editor));
    assert_eq!(
        result.effects,
        vec![Effect::DestroyWindow(WindowId::for_kind(AppKind::Editor))]
    );
    store.dispatch(Action::OpenApp(AppKind::Editor));
    assert_eq!(
        store.state().editor.as_ref().unwrap().file_name(),
        UNTITLED
    );
}

#[test]
fn closing_terminal_discards_history() {
    let mut store = new_store(&empty_storage());
    store.dispatch(Action::OpenApp(AppKind::Terminal));
    run_line(&mut store, "ls");
    store.dispatch(Action::RunCommand(Command::CloseWindow));
    assert!(store.state().terminal.is_none());
    store.dispatch(Action::OpenApp(AppKind::Terminal));
    assert!(store.state().terminal.as_ref().unwrap().history().is_empty());
}

#[test]
fn browser_command_defers_navigation_one_tick() {
    let mut store = new_store(&empty_storage());
    store.dispatch(Action::OpenApp(AppKind::Terminal));
    let result = run_line(&mut store, "browser example.com");

    let deferred: Vec<_> = result
        .effects
        .iter()
        .filter_map(|e| match e {
            Effect::Defer(action) => Some(action.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(deferred, vec![Action::ViewerNavigate("example.com".into())]);
    assert_eq!(store.state().viewer.as_ref().unwrap().current_url(), None);

    let navigated = store.dispatch(deferred[0].clone());
    assert_eq!(
        navigated.effects,
        vec![Effect::EmbedPage {
            id: WindowId::for_kind(AppKind::Browser),
            url: "https://example.com".into(),
        }]
    );
}

#[test]
fn viewer_reports_invalid_address() {
    let mut store = new_store(&empty_storage());
    store.dispatch(Action::OpenApp(AppKind::Browser));
    store.dispatch(Action::InsertText("bad host".into()));
    let result = store.dispatch(Action::RunCommand(Command::Submit));
    assert!(result.effects.is_empty());
    assert_eq!(
        store.state().viewer.as_ref().unwrap().message(),
        Some("Invalid URL")
    );
}

#[test]
fn drag_moves_window_and_raises_it() {
    let mut store = new_store(&empty_storage());
    store.dispatch(Action::OpenApp(AppKind::Terminal));
    store.dispatch(Action::OpenApp(AppKind::Explorer));
    let origin = store.state().windows.get(AppKind::Terminal).unwrap().position;

    let press = Point::new(origin.x + 5, origin.y + 2);
    let begin = store.dispatch(Action::BeginDrag {
        kind: AppKind::Terminal,
        pointer: press,
    });
    assert!(matches!(begin.effects.as_slice(), [Effect::Restack(_)]));
    assert_eq!(store.state().focused(), Some(AppKind::Terminal));

    let moved = store.dispatch(Action::DragTo(Point::new(305, 202)));
    assert_eq!(
        moved.effects,
        vec![Effect::MoveWindow {
            id: WindowId::for_kind(AppKind::Terminal),
            position: Point::new(300, 200),
        }]
    );
    assert!(store.dispatch(Action::EndDrag).state_changed);
    assert!(store.dispatch(Action::DragTo(Point::new(0, 0))).effects.is_empty());
}

#[test]
fn restack_reports_every_window() {
    let mut store = new_store(&empty_storage());
    store.dispatch(Action::OpenApp(AppKind::Terminal));
    let result = store.dispatch(Action::OpenApp(AppKind::Settings));
    let Some(Effect::Restack(order)) = result.effects.last() else {
        panic!("expected restack");
    };
    assert_eq!(
        order,
        &vec![
            (WindowId::for_kind(AppKind::Terminal), 10),
            (WindowId::for_kind(AppKind::Settings), 100),
        ]
    );
}

#[test]
fn focus_cycles_between_windows() {
    let mut store = new_store(&empty_storage());
    store.dispatch(Action::OpenApp(AppKind::Terminal));
    store.dispatch(Action::OpenApp(AppKind::Explorer));
    store.dispatch(Action::RunCommand(Command::FocusNextWindow));
    assert_eq!(store.state().focused(), Some(AppKind::Terminal));
}

#[test]
fn explorer_submit_opens_selected_file() {
    let mut store = new_store(&MemoryStorage::new());
    store.dispatch(Action::OpenApp(AppKind::Explorer));
    store.dispatch(Action::RunCommand(Command::SelectNext));
    store.dispatch(Action::RunCommand(Command::Submit));
    assert_eq!(
        store.state().editor.as_ref().unwrap().file_name(),
        "readme.txt"
    );
    assert_eq!(store.state().focused(), Some(AppKind::Editor));
}

#[test]
fn settings_panel_shortcuts_update_and_persist() {
    let storage = empty_storage();
    let mut store = new_store(&storage);
    store.dispatch(Action::OpenApp(AppKind::Settings));
    let result = store.dispatch(Action::InsertText("tm+a".into()));
    assert_eq!(
        result
            .effects
            .iter()
            .filter(|e| matches!(e, Effect::ApplySettings(_)))
            .count(),
        4
    );

    let settings = store.settings().get();
    assert_eq!(settings.theme, Theme::Light);
    assert!(settings.reduce_motion);
    assert_eq!(settings.font_size, 17);
    assert_eq!(settings.default_app, AppKind::Explorer);

    let stored: Settings = serde_json::from_str(&storage.raw(SETTINGS_KEY).unwrap()).unwrap();
    assert_eq!(&stored, settings);
}

#[test]
fn calculator_keys_and_evaluate() {
    let mut store = new_store(&empty_storage());
    store.dispatch(Action::OpenApp(AppKind::Calculator));
    store.dispatch(Action::InsertText("6*7".into()));
    store.dispatch(Action::RunCommand(Command::Submit));
    assert_eq!(store.state().calculator.as_ref().unwrap().display(), "42");
    store.dispatch(Action::InsertText("c".into()));
    assert_eq!(store.state().calculator.as_ref().unwrap().display(), "0");
}

#[test]
fn quit_sets_flag() {
    let mut store = new_store(&empty_storage());
    let result = store.dispatch(Action::RunCommand(Command::Quit));
    assert_eq!(result.effects, vec![Effect::Quit]);
    assert!(store.state().quit_requested);
}

#[test]
fn history_keys_recall_in_the_focused_terminal() {
    let storage = empty_storage();
    let mut store = new_store(&storage);
    store.dispatch(Action::Boot);
    run_line(&mut store, "ls");
    run_line(&mut store, "date");
    let input = |store: &Store| store.state().terminal.as_ref().map(|t| t.input().to_string());

    assert!(store.dispatch(Action::RunCommand(Command::HistoryNext)).state_changed);
    assert_eq!(input(&store).as_deref(), Some("ls"));
    store.dispatch(Action::RunCommand(Command::HistoryPrevious));
    assert_eq!(input(&store).as_deref(), Some("ls"));

    store.dispatch(Action::OpenApp(AppKind::Explorer));
    let result = store.dispatch(Action::RunCommand(Command::HistoryNext));
    assert!(!result.state_changed);
    assert_eq!(input(&store).as_deref(), Some("ls"));
}
