//! Family names used when resolving design classes.
//!
//! Each design tries a configured family first, then the list below, then
//! the font database's generic family.

/// Sans-serif families for the default design, in priority order.
pub const SANS_SERIF_FAMILIES: &[&str] = &[
    // Apple system UI
    "SF Pro Text",
    "SF Pro",
    "Helvetica Neue",
    // Windows
    "Segoe UI",
    "Arial",
    // Linux distributions
    "DejaVu Sans",
    "Noto Sans",
    "Liberation Sans",
    "Cantarell",
];

/// Serif families, in priority order.
pub const SERIF_FAMILIES: &[&str] = &[
    "New York",
    "Times New Roman",
    "Georgia",
    "DejaVu Serif",
    "Noto Serif",
    "Liberation Serif",
];

/// Monospaced families, in priority order.
///
/// Only faces flagged as fixed pitch are accepted for the monospaced design.
pub const MONOSPACE_FAMILIES: &[&str] = &[
    "SF Mono",
    "Menlo",
    "Consolas",
    "Courier New",
    "DejaVu Sans Mono",
    "Noto Sans Mono",
    "Liberation Mono",
];

/// Rounded font families, in priority order.
///
/// No generic "rounded" family exists, so the rounded design tries these
/// well-known families before giving up and synthesizing from the default
/// sans-serif face.
pub const ROUNDED_FAMILIES: &[&str] = &[
    // Apple system rounded designs
    "SF Pro Rounded",
    "SF Compact Rounded",
    "Arial Rounded MT Bold",
    // Common open rounded families
    "Nunito",
    "Varela Round",
    "M PLUS Rounded 1c",
    "Quicksand",
    "Comfortaa",
];

/// Name reported for the font used when the database has no usable face.
pub const SYSTEM_DEFAULT_FONT_NAME: &str = "system-ui";
