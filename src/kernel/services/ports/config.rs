use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Where new windows appear, in surface pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnGeometry {
    pub base_left: i32,
    pub base_top: i32,
    pub base_top_under_top_dock: i32,
    pub jitter_x: i32,
    pub jitter_y: i32,
}

impl Default for SpawnGeometry {
    fn default() -> Self {
        Self {
            base_left: 80,
            base_top: 80,
            base_top_under_top_dock: 180,
            jitter_x: 60,
            jitter_y: 40,
        }
    }
}

/// Stacking values: every window sits on `baseline`, the focused one on `front`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stacking {
    pub baseline: u32,
    pub front: u32,
}

impl Default for Stacking {
    fn default() -> Self {
        Self {
            baseline: 10,
            front: 100,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ShellConfig {
    pub default_line_count: usize,
    pub default_random_max: u64,
    pub font_size_range: RangeInclusive<u8>,
    pub default_browser_url: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_line_count: 10,
            default_random_max: 1_000_000,
            font_size_range: 10..=30,
            default_browser_url: "https://example.com".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DesktopConfig {
    pub spawn: SpawnGeometry,
    pub stacking: Stacking,
    pub shell: ShellConfig,
    /// Fixed RNG seed for reproducible window jitter and `random` output.
    pub seed: Option<u64>,
    /// Storage directory override; platform data dir when unset.
    pub data_dir: Option<PathBuf>,
}

impl DesktopConfig {
    pub const DATA_DIR_ENV: &'static str = "ZERODESK_DATA_DIR";
    pub const SEED_ENV: &'static str = "ZERODESK_SEED";

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var(Self::DATA_DIR_ENV) {
            let dir = dir.trim();
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }
        if let Ok(seed) = std::env::var(Self::SEED_ENV) {
            config.seed = seed.trim().parse().ok();
        }
        config
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
