//! Service ports: traits + data contracts.

pub mod clock;
pub mod config;
pub mod settings;
pub mod storage;
pub mod surface;

pub use clock::Clock;
pub use config::{DesktopConfig, ShellConfig, SpawnGeometry, Stacking};
pub use settings::{DockPosition, Settings, SettingsPatch, Theme};
pub use storage::{KeyValueStorage, StorageError, FILES_KEY, SETTINGS_KEY};
pub use surface::{DockStyle, RenderSurface, WindowStyle};
