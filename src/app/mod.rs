//! Desktop host: drives the kernel store and projects its effects onto a surface.

pub mod desktop;
pub mod layout;

pub use desktop::Desktop;
