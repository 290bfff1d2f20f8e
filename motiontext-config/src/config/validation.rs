//! Semantic validation for `Config`.

use super::config_struct::Config;
use crate::error::ConfigError;
use crate::types::FallbackFontEntry;

impl Config {
    /// Check fields that deserialize fine but cannot be used.
    ///
    /// Missing font directories are only warned about: a config shared across
    /// machines may name directories that exist on some of them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, entry) in self.fallback_fonts.iter().enumerate() {
            if let FallbackFontEntry::Family { family, .. } = entry
                && family.trim().is_empty()
            {
                return Err(ConfigError::Validation(format!(
                    "fallback_fonts[{index}]: family name must not be empty"
                )));
            }
        }

        let generic = &self.generic_families;
        for (field, value) in [
            ("sans_serif", &generic.sans_serif),
            ("serif", &generic.serif),
            ("monospace", &generic.monospace),
            ("rounded", &generic.rounded),
        ] {
            if value.as_deref().is_some_and(|name| name.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "generic_families.{field}: family name must not be empty"
                )));
            }
        }

        for dir in &self.font_dirs {
            if !dir.is_dir() {
                log::warn!("Font directory {:?} does not exist, it will be skipped", dir);
            }
        }

        Ok(())
    }
}
