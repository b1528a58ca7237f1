use super::*;
use crate::kernel::services::adapters::SceneSurface;
use crate::kernel::services::ports::settings::DockPosition;
use crate::kernel::window::{AppKind, Point};

fn surface_with(kinds: &[AppKind]) -> (SceneSurface, Vec<WindowId>) {
    let mut surface = SceneSurface::new();
    let ids: Vec<WindowId> = kinds.iter().map(|k| WindowId::for_kind(*k)).collect();
    for id in &ids {
        surface.create_window(*id, id.kind().title(), Point::new(0, 0));
    }
    (surface, ids)
}

#[test]
fn hex_to_rgba_expands_short_form() {
    assert_eq!(hex_to_rgba("#33aaff", 0.35), "rgba(51,170,255,0.35)");
    assert_eq!(hex_to_rgba("#fff", 1.0), "rgba(255,255,255,1)");
    assert_eq!(hex_to_rgba("nothex", 0.5), "rgba(0,0,0,0.5)");
}

#[test]
fn header_gradient_follows_theme() {
    let mut settings = Settings::default();
    assert_eq!(window_style(&settings).header_from, "#232526");
    settings.theme = Theme::Light;
    settings.accent = "#ff66cc".into();
    let style = window_style(&settings);
    assert_eq!(style.header_from, "#e0eafc");
    assert_eq!(style.header_to, "#ff66cc");
    assert_eq!(style.border_color, "#ff66cc");
}

#[test]
fn apply_styles_every_open_window() {
    let (mut surface, ids) = surface_with(&[AppKind::Terminal, AppKind::Editor]);
    let settings = Settings {
        accent: "#00ff00".into(),
        font_size: 20,
        dock_position: DockPosition::Top,
        ..Settings::default()
    };
    apply(&mut surface, &ids, &settings);

    for id in &ids {
        let style = surface.window(*id).unwrap().style.as_ref().unwrap();
        assert_eq!(style.border_color, "#00ff00");
    }
    assert_eq!(surface.root_font_px, 20);
    assert_eq!(surface.dock.position, DockPosition::Top);
    assert_eq!(surface.dock.offset_px, 20);
    assert_eq!(surface.dock.glow, "0 4px 24px rgba(0,255,0,0.35)");
}

#[test]
fn apply_is_idempotent() {
    let (mut surface, ids) = surface_with(&[AppKind::Terminal, AppKind::Browser]);
    let settings = Settings {
        theme: Theme::Light,
        reduce_motion: true,
        ..Settings::default()
    };
    apply(&mut surface, &ids, &settings);
    let once = surface.clone();
    apply(&mut surface, &ids, &settings);
    assert_eq!(surface, once);
    assert_eq!(surface.motion_styles, 1);
}

#[test]
fn reduce_motion_is_removed_when_disabled() {
    let (mut surface, ids) = surface_with(&[AppKind::Terminal]);
    let mut settings = Settings {
        reduce_motion: true,
        ..Settings::default()
    };
    apply(&mut surface, &ids, &settings);
    assert!(surface.reduced_motion());
    assert!(!surface.window(ids[0]).unwrap().animated);

    settings.reduce_motion = false;
    apply(&mut surface, &ids, &settings);
    assert!(!surface.reduced_motion());
}
