//! Core `Config` struct.

use crate::defaults;
use crate::types::{FallbackFontEntry, GenericFamilies, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fallback font configuration, as stored in `fonts.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Load the platform's installed fonts into the font database
    #[serde(default = "defaults::load_system_fonts")]
    pub load_system_fonts: bool,

    /// Extra directories scanned recursively for font files
    #[serde(default)]
    pub font_dirs: Vec<PathBuf>,

    /// Extra individual font files (TTF/OTF/TTC)
    #[serde(default)]
    pub font_files: Vec<PathBuf>,

    /// Generic family overrides used when resolving design classes
    #[serde(default)]
    pub generic_families: GenericFamilies,

    /// Fallback fonts in priority order.
    ///
    /// An empty list means "use the built-in default", never "no fallbacks".
    #[serde(default = "defaults::fallback_fonts")]
    pub fallback_fonts: Vec<FallbackFontEntry>,

    /// Log level used by the log bridge when neither the CLI nor the
    /// environment sets one
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            load_system_fonts: defaults::load_system_fonts(),
            font_dirs: Vec::new(),
            font_files: Vec::new(),
            generic_families: GenericFamilies::default(),
            fallback_fonts: defaults::fallback_fonts(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the fallback list
    pub fn with_fallback_fonts(mut self, fallback_fonts: Vec<FallbackFontEntry>) -> Self {
        self.fallback_fonts = fallback_fonts;
        self
    }

    /// Add a directory of fonts
    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dirs.push(dir.into());
        self
    }

    /// Toggle loading of installed system fonts
    pub fn with_system_fonts(mut self, load: bool) -> Self {
        self.load_system_fonts = load;
        self
    }

    /// The fallback list with the empty-means-default rule applied.
    pub fn effective_fallback_fonts(&self) -> Vec<FallbackFontEntry> {
        if self.fallback_fonts.is_empty() {
            defaults::fallback_fonts()
        } else {
            self.fallback_fonts.clone()
        }
    }
}
