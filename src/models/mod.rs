//! Data models for the screenshot project configuration.
//!
//! This module contains all the core data structures used throughout the toolkit.
//! Models are designed to be independent of rendering and routing logic.

pub mod color_scheme;
pub mod device;
pub mod project;
pub mod screen;

// Re-export all model types
pub use color_scheme::{ColorScheme, COLOR_SCHEMES};
pub use device::DeviceConfig;
pub use project::ProjectConfig;
pub use screen::{ScreenConfig, ScreenContext, ScreenRenderer};
