use super::*;

#[test]
fn test_spawn_geometry_defaults() {
    let geometry = SpawnGeometry::default();
    assert_eq!(geometry.base_left, 80);
    assert_eq!(geometry.base_top, 80);
    assert_eq!(geometry.base_top_under_top_dock, 180);
    assert_eq!((geometry.jitter_x, geometry.jitter_y), (60, 40));
}

#[test]
fn test_stacking_front_is_above_baseline() {
    let stacking = Stacking::default();
    assert!(stacking.front > stacking.baseline);
}

#[test]
fn test_shell_defaults() {
    let shell = ShellConfig::default();
    assert_eq!(shell.default_line_count, 10);
    assert_eq!(shell.default_random_max, 1_000_000);
    assert!(shell.font_size_range.contains(&10));
    assert!(shell.font_size_range.contains(&30));
    assert!(!shell.font_size_range.contains(&9));
    assert!(!shell.font_size_range.contains(&31));
}

#[test]
fn test_desktop_config_default_has_no_overrides() {
    let config = DesktopConfig::default();
    assert!(config.seed.is_none());
    assert!(config.data_dir.is_none());
}
