//! Framework-level abstractions shared by the kernel and the front-ends:
//! - Event: backend-independent key and pointer input
//! - Command: semantic UI commands resolved from key bindings

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{InputEvent, Key, KeyCode, KeyModifiers, Pointer, PointerAction, PointerEvent};
