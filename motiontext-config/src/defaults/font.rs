//! Default values for font database and fallback settings.

use crate::types::FallbackFontEntry;

pub fn load_system_fonts() -> bool {
    true
}

/// The built-in fallback list: a single regular-weight system descriptor.
pub fn fallback_fonts() -> Vec<FallbackFontEntry> {
    vec![FallbackFontEntry::default()]
}
