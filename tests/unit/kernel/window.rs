use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn manager() -> WindowManager {
    WindowManager::new(Stacking::default())
}

fn at(x: i32, y: i32) -> impl FnOnce() -> Point {
    move || Point::new(x, y)
}

#[test]
fn open_is_singleton_per_kind() {
    let mut wm = manager();
    assert_eq!(wm.open(AppKind::Terminal, at(100, 100)), OpenOutcome::Created);
    assert_eq!(
        wm.open(AppKind::Terminal, || panic!("must not spawn twice")),
        OpenOutcome::Focused
    );
    assert_eq!(wm.len(), 1);
    assert_eq!(wm.get(AppKind::Terminal).unwrap().position, Point::new(100, 100));
}

#[test]
fn new_window_gets_kind_title_and_id() {
    let mut wm = manager();
    wm.open(AppKind::Settings, at(0, 0));
    let window = wm.get(AppKind::Settings).unwrap();
    assert_eq!(window.title, "Settings");
    assert_eq!(window.id.to_string(), "settings-window");
    assert_eq!(window.id.kind(), AppKind::Settings);
}

#[test]
fn bring_to_front_resets_everyone_else_to_baseline() {
    let mut wm = manager();
    wm.open(AppKind::Terminal, at(0, 0));
    wm.open(AppKind::Explorer, at(0, 0));
    wm.open(AppKind::Editor, at(0, 0));

    assert!(wm.bring_to_front(AppKind::Terminal));
    assert_eq!(wm.get(AppKind::Terminal).unwrap().z_index, 100);
    assert_eq!(wm.get(AppKind::Explorer).unwrap().z_index, 10);
    assert_eq!(wm.get(AppKind::Editor).unwrap().z_index, 10);
    assert_eq!(wm.topmost(), Some(AppKind::Terminal));

    assert!(!wm.bring_to_front(AppKind::Terminal));
    assert!(!wm.bring_to_front(AppKind::Browser));
}

#[test]
fn reopening_focuses_existing_window() {
    let mut wm = manager();
    wm.open(AppKind::Terminal, at(0, 0));
    wm.open(AppKind::Explorer, at(0, 0));
    assert_eq!(wm.topmost(), Some(AppKind::Explorer));

    wm.open(AppKind::Terminal, at(5, 5));
    assert_eq!(wm.topmost(), Some(AppKind::Terminal));
    assert_eq!(wm.get(AppKind::Terminal).unwrap().position, Point::new(0, 0));
}

#[test]
fn windows_by_z_keeps_creation_order_among_baseline() {
    let mut wm = manager();
    for kind in [AppKind::Browser, AppKind::Terminal, AppKind::Calculator] {
        wm.open(kind, at(0, 0));
    }
    wm.bring_to_front(AppKind::Browser);
    let order: Vec<AppKind> = wm.windows_by_z().iter().map(|w| w.kind).collect();
    assert_eq!(
        order,
        vec![AppKind::Terminal, AppKind::Calculator, AppKind::Browser]
    );
}

#[test]
fn close_removes_and_allows_recreation() {
    let mut wm = manager();
    wm.open(AppKind::Calculator, at(1, 1));
    assert!(wm.close(AppKind::Calculator).is_some());
    assert!(wm.close(AppKind::Calculator).is_none());
    assert!(wm.is_empty());
    assert_eq!(wm.open(AppKind::Calculator, at(2, 2)), OpenOutcome::Created);
}

#[test]
fn drag_moves_by_captured_offset_until_release() {
    let mut wm = manager();
    wm.open(AppKind::Terminal, at(100, 80));
    wm.open(AppKind::Explorer, at(0, 0));

    assert!(wm.begin_drag(AppKind::Terminal, Point::new(110, 85)));
    assert_eq!(wm.topmost(), Some(AppKind::Terminal));
    assert_eq!(
        wm.drag_state(),
        DragState::Dragging {
            kind: AppKind::Terminal,
            offset: Point::new(10, 5)
        }
    );

    assert_eq!(
        wm.drag_to(Point::new(210, 185)),
        Some((AppKind::Terminal, Point::new(200, 180)))
    );
    assert_eq!(wm.drag_to(Point::new(210, 185)), None);

    assert!(wm.end_drag());
    assert_eq!(wm.drag_state(), DragState::Idle);
    assert_eq!(wm.drag_to(Point::new(0, 0)), None);
    assert_eq!(wm.get(AppKind::Terminal).unwrap().position, Point::new(200, 180));
    assert!(!wm.end_drag());
}

#[test]
fn drag_on_missing_window_is_ignored() {
    let mut wm = manager();
    assert!(!wm.begin_drag(AppKind::Editor, Point::new(0, 0)));
    assert_eq!(wm.drag_state(), DragState::Idle);
}

#[test]
fn closing_dragged_window_ends_drag() {
    let mut wm = manager();
    wm.open(AppKind::Editor, at(0, 0));
    wm.begin_drag(AppKind::Editor, Point::new(3, 3));
    wm.close(AppKind::Editor);
    assert_eq!(wm.drag_state(), DragState::Idle);
}

#[test]
fn set_title_reports_change_only() {
    let mut wm = manager();
    wm.open(AppKind::Editor, at(0, 0));
    assert!(wm.set_title(AppKind::Editor, "Editor - a.txt".into()));
    assert!(!wm.set_title(AppKind::Editor, "Editor - a.txt".into()));
    assert!(!wm.set_title(AppKind::Browser, "x".into()));
}

#[test]
fn cycle_walks_creation_order_and_wraps() {
    let mut wm = manager();
    assert_eq!(wm.next_in_cycle(), None);
    wm.open(AppKind::Terminal, at(0, 0));
    wm.open(AppKind::Explorer, at(0, 0));
    assert_eq!(wm.next_in_cycle(), Some(AppKind::Terminal));
    wm.bring_to_front(AppKind::Terminal);
    assert_eq!(wm.next_in_cycle(), Some(AppKind::Explorer));
}

#[test]
fn spawn_position_stays_within_jitter_box() {
    let geometry = SpawnGeometry::default();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let p = spawn_position(&geometry, DockPosition::Bottom, &mut rng);
        assert!((80..140).contains(&p.x), "x out of range: {}", p.x);
        assert!((80..120).contains(&p.y), "y out of range: {}", p.y);

        let p = spawn_position(&geometry, DockPosition::Top, &mut rng);
        assert!((180..220).contains(&p.y), "y under top dock: {}", p.y);
    }
}

#[test]
fn spawn_position_is_reproducible_with_seed() {
    let geometry = SpawnGeometry::default();
    let a = spawn_position(&geometry, DockPosition::Bottom, &mut StdRng::seed_from_u64(42));
    let b = spawn_position(&geometry, DockPosition::Bottom, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}
