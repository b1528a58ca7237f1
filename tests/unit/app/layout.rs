use super::*;
use crate::kernel::services::ports::config::Stacking;

fn manager_with(windows: &[(AppKind, Point)]) -> WindowManager {
    let mut manager = WindowManager::new(Stacking::default());
    for (kind, position) in windows {
        manager.open(*kind, || *position);
    }
    manager
}

#[test]
fn frame_maps_pixels_to_cells() {
    let frame = Frame::at(Point::new(100, 90));
    assert_eq!((frame.col, frame.row), (12, 5));
    assert!(frame.contains(12, 5));
    assert!(frame.contains(12 + i32::from(WINDOW_COLS) - 1, 5));
    assert!(!frame.contains(12 + i32::from(WINDOW_COLS), 5));
    assert_eq!(frame.close_columns(), 64..67);
}

#[test]
fn dock_items_are_centered_and_ordered() {
    let items = dock_items(200);
    let kinds: Vec<AppKind> = items.iter().map(|item| item.kind).collect();
    assert_eq!(kinds, AppKind::ALL.to_vec());
    assert_eq!(items[0].label, " F1 Terminal ");
    assert!(items[0].col > 0);
    assert_eq!(items[1].col, items[0].col + items[0].width() + 1);
}

#[test]
fn dock_row_follows_position() {
    assert_eq!(dock_row(DockPosition::Top, 24), 0);
    assert_eq!(dock_row(DockPosition::Bottom, 24), 23);
}

#[test]
fn topmost_window_wins_the_hit() {
    let manager = manager_with(&[
        (AppKind::Terminal, Point::new(80, 80)),
        (AppKind::Explorer, Point::new(120, 96)),
    ]);
    // Explorer was opened last and sits on top.
    let hit = hit_test(&manager, DockPosition::Bottom, (200, 60), pointer_at(20, 8));
    assert_eq!(hit, Hit::Body(AppKind::Explorer));

    let hit = hit_test(&manager, DockPosition::Bottom, (200, 60), pointer_at(11, 5));
    assert_eq!(hit, Hit::TitleBar(AppKind::Terminal));
}

#[test]
fn close_button_and_empty_desktop() {
    let manager = manager_with(&[(AppKind::Terminal, Point::new(80, 80))]);
    let frame = Frame::at(Point::new(80, 80));
    let close_col = frame.close_columns().start as u16;
    assert_eq!(
        hit_test(&manager, DockPosition::Bottom, (200, 60), pointer_at(close_col, 5)),
        Hit::Close(AppKind::Terminal)
    );
    assert_eq!(
        hit_test(&manager, DockPosition::Bottom, (200, 60), pointer_at(0, 0)),
        Hit::Desktop
    );
}

#[test]
fn dock_is_checked_before_windows() {
    let manager = manager_with(&[(AppKind::Terminal, Point::new(0, 0))]);
    let item = dock_items(80)[2].clone();
    assert_eq!(
        hit_test(&manager, DockPosition::Top, (80, 24), pointer_at(item.col, 0)),
        Hit::Dock(AppKind::Editor)
    );
}
