//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: storage media, platform paths and surfaces implementing those contracts.

pub mod adapters;
pub mod ports;
