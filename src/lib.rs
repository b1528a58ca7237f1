//! ZeroDesk - a simulated desktop in the terminal.
//!
//! Module layout:
//! - core: backend-independent input events and semantic commands
//! - kernel: headless desktop state, reducer, shell, stores and service ports/adapters
//! - app: desktop host running kernel effects against a render surface
//! - tui: crossterm/ratatui front-end (feature `tui`)

pub mod app;
pub mod core;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
