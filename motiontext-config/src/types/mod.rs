//! Configuration types used by [`crate::Config`].
//!
//! - [`font`]: trait classes, fallback entries, generic family overrides
//! - [`logging`]: log level

mod font;
mod logging;

pub use font::{
    FallbackFontEntry, FontDesignClass, FontWeightClass, FontWidthClass, GenericFamilies,
};
pub use logging::LogLevel;
