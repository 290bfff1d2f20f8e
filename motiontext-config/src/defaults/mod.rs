//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` fields and by `Config::default`.

mod font;

pub use font::{fallback_fonts, load_system_fonts};

/// Directory name under the user config directory.
pub const CONFIG_DIR_NAME: &str = "motiontext";

/// Config file name inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "fonts.yaml";
