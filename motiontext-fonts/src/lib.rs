//! Fallback font selection for the motiontext text layer.
//!
//! This crate provides:
//! - Weight classification of raw numeric weights into nine weight classes
//! - Immutable fallback font descriptors (design, weight, width)
//! - Descriptor resolution against a `fontdb` font database
//! - A fallback registry holding a static list or an override callback
//! - Glyph-miss lookup across the resolved fallback chain
//!
//! # Architecture
//!
//! When the primary font lacks a glyph, the text layer asks the
//! [`FallbackRegistry`] for candidates matching the requested [`FontStyle`]:
//! 1. The override callback, when one is installed
//! 2. Otherwise the static fallback list (never empty unless cleared)
//!
//! Each candidate is resolved by the [`FontResolver`] to a [`ResolvedFont`],
//! and the candidates are tried in order until one has the glyph.

pub mod descriptor;
pub mod registry;
pub mod resolver;
pub mod style;

// Re-export main types for convenience
pub use descriptor::{FallbackFont, FallbackFontDescriptor};
pub use motiontext_config::{FontDesignClass, FontWeightClass, FontWidthClass};
pub use registry::{FallbackFontsCallback, FallbackRegistry, GlyphMatch};
pub use resolver::{
    FontResolver, FontTraits, MONOSPACE_FAMILIES, ROUNDED_FAMILIES, ResolvedFont,
    SANS_SERIF_FAMILIES, SERIF_FAMILIES, SYSTEM_DEFAULT_FONT_NAME, Synthesis,
};
pub use style::{FontStyle, FontUsage, ParseFontUsageError, classify_weight};
