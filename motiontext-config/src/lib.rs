//! Configuration system for motiontext.
//!
//! This crate provides configuration loading, saving, and default values
//! for fallback font selection. It includes:
//!
//! - Font trait classes (weight, width, design) as plain serializable data
//! - Fallback font entries as written in the YAML config file
//! - Font database sources (system fonts, extra directories and files)
//! - Typed errors for config I/O and validation

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::{
    FallbackFontEntry, FontDesignClass, FontWeightClass, FontWidthClass, GenericFamilies, LogLevel,
};
