//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel` and `app` so the desktop core builds without terminal crates.

pub mod crossterm;
pub mod palette;
pub mod render;
pub mod terminal_guard;
