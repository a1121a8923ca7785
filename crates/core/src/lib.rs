//! Core shared types and UI for the Gaming Lounge onboarding client
//!
//! This crate contains:
//! - Data models shared between the desktop and WASM builds
//! - Error types
//! - The structured event log
//! - The `Backend` seam to the hosted auth/data service
//! - The shared form UI (with `ui` feature)

pub mod backend;
pub mod error;
pub mod log;
pub mod models;

#[cfg(feature = "ui")]
pub mod ui;

pub use backend::*;
pub use error::*;
pub use log::*;
pub use models::*;

#[cfg(feature = "ui")]
pub use ui::*;
