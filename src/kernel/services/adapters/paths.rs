//! Platform directories
//!
//! - macOS: ~/Library/Application Support/zerodesk, caches under ~/Library/Caches
//! - Linux: $XDG_DATA_HOME/zerodesk (~/.local/share), caches under $XDG_CACHE_HOME (~/.cache)
//! - Windows: %APPDATA%\zerodesk, caches under %LOCALAPPDATA%

use std::path::PathBuf;

const APP_NAME: &str = "zerodesk";
const STORAGE_DIR: &str = "storage";
const LOG_DIR: &str = "logs";
const COOKIE_JAR: &str = "cookies.txt";

fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_NAME)
        });
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return Some(PathBuf::from(xdg).join(APP_NAME));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME));
    }

    #[cfg(target_os = "windows")]
    {
        return std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME));
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches").join(APP_NAME));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg).join(APP_NAME));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache").join(APP_NAME));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local).join(APP_NAME));
        }
        return std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME));
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

/// Primary storage directory (one JSON document per key).
pub fn get_storage_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(STORAGE_DIR))
}

/// Mirror jar used as the fallback read path.
pub fn get_cookie_jar_path() -> Option<PathBuf> {
    get_cache_dir().map(|p| p.join(COOKIE_JAR))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
