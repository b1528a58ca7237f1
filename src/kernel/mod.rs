//! Headless desktop core (state/action/effect).

pub mod action;
pub mod appearance;
pub mod calculator;
pub mod editor;
pub mod effect;
pub mod explorer;
pub mod files;
pub mod services;
pub mod settings;
pub mod shell;
pub mod state;
pub mod store;
pub mod terminal;
pub mod viewer;
pub mod window;

pub use action::Action;
pub use calculator::Calculator;
pub use editor::EditorSession;
pub use effect::Effect;
pub use explorer::ExplorerState;
pub use files::{FileError, FileStore};
pub use settings::SettingsStore;
pub use state::AppState;
pub use store::{DispatchResult, Store};
pub use terminal::TerminalSession;
pub use viewer::ViewerState;
pub use window::{AppKind, DragState, OpenOutcome, Point, Window, WindowId, WindowManager};
