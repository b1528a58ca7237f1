use super::*;

#[test]
fn test_get_storage_dir() {
    let dir = get_storage_dir();
    assert!(dir.is_some());
    let dir = dir.unwrap();
    assert!(dir.to_string_lossy().contains(APP_NAME));
    assert!(dir.to_string_lossy().contains(STORAGE_DIR));
}

#[test]
fn test_get_log_dir() {
    let dir = get_log_dir();
    assert!(dir.is_some());
    let dir = dir.unwrap();
    assert!(dir.to_string_lossy().contains(APP_NAME));
    assert!(dir.to_string_lossy().contains(LOG_DIR));
}

#[test]
fn test_cookie_jar_lives_outside_storage_dir() {
    let jar = get_cookie_jar_path().unwrap();
    let storage = get_storage_dir().unwrap();
    assert!(jar.ends_with(COOKIE_JAR));
    assert!(!jar.starts_with(&storage));
}
