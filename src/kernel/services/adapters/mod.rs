//! Service adapters: concrete storage media, platform paths, surfaces and key bindings.

pub mod clock;
pub mod keybinding;
pub mod paths;
pub mod scene;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use keybinding::{KeybindingContext, KeybindingService};
pub use paths::{ensure_log_dir, get_cookie_jar_path, get_log_dir, get_storage_dir};
pub use scene::{SceneSurface, SceneWindow};
pub use storage::{CookieJarStorage, DirStorage, MemoryStorage, MirroredStorage};
