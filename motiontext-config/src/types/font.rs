//! Font trait classes and fallback font entries.

use serde::{Deserialize, Serialize};

// ============================================================================
// Trait classes
// ============================================================================

/// Ordinal thickness category of a font.
///
/// Classes sit on the CSS/OpenType 100-unit grid, from `Thin` (100) to
/// `Black` (900).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum FontWeightClass {
    Thin,
    #[serde(alias = "ultralight", alias = "extra_light")]
    UltraLight,
    Light,
    #[default]
    #[serde(alias = "normal")]
    Regular,
    Medium,
    #[serde(alias = "semi_bold", alias = "demi_bold")]
    Semibold,
    Bold,
    #[serde(alias = "extra_bold")]
    Heavy,
    Black,
}

impl FontWeightClass {
    /// All weight classes, lightest first.
    pub fn all() -> &'static [FontWeightClass] {
        &[
            FontWeightClass::Thin,
            FontWeightClass::UltraLight,
            FontWeightClass::Light,
            FontWeightClass::Regular,
            FontWeightClass::Medium,
            FontWeightClass::Semibold,
            FontWeightClass::Bold,
            FontWeightClass::Heavy,
            FontWeightClass::Black,
        ]
    }

    /// Numeric weight on the 100..=900 grid.
    pub fn to_number(self) -> u16 {
        match self {
            FontWeightClass::Thin => 100,
            FontWeightClass::UltraLight => 200,
            FontWeightClass::Light => 300,
            FontWeightClass::Regular => 400,
            FontWeightClass::Medium => 500,
            FontWeightClass::Semibold => 600,
            FontWeightClass::Bold => 700,
            FontWeightClass::Heavy => 800,
            FontWeightClass::Black => 900,
        }
    }

    /// Signed weight trait in `[-1.0, 1.0]`, `0.0` being regular.
    ///
    /// These are the values system UI font descriptors carry in their trait
    /// dictionary.
    pub fn weight_trait(self) -> f32 {
        match self {
            FontWeightClass::UltraLight => -0.8,
            FontWeightClass::Thin => -0.6,
            FontWeightClass::Light => -0.4,
            FontWeightClass::Regular => 0.0,
            FontWeightClass::Medium => 0.23,
            FontWeightClass::Semibold => 0.3,
            FontWeightClass::Bold => 0.4,
            FontWeightClass::Heavy => 0.56,
            FontWeightClass::Black => 0.62,
        }
    }

    /// Display name, also used as the synthesized-trait tag in font names.
    pub fn display_name(self) -> &'static str {
        match self {
            FontWeightClass::Thin => "Thin",
            FontWeightClass::UltraLight => "UltraLight",
            FontWeightClass::Light => "Light",
            FontWeightClass::Regular => "Regular",
            FontWeightClass::Medium => "Medium",
            FontWeightClass::Semibold => "Semibold",
            FontWeightClass::Bold => "Bold",
            FontWeightClass::Heavy => "Heavy",
            FontWeightClass::Black => "Black",
        }
    }
}

/// Ordinal horizontal-scale category of a font.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum FontWidthClass {
    Compressed,
    Condensed,
    #[default]
    #[serde(alias = "normal")]
    Standard,
    Expanded,
}

impl FontWidthClass {
    /// All width classes, narrowest first.
    pub fn all() -> &'static [FontWidthClass] {
        &[
            FontWidthClass::Compressed,
            FontWidthClass::Condensed,
            FontWidthClass::Standard,
            FontWidthClass::Expanded,
        ]
    }

    /// Signed width trait: negative is narrower, zero is standard, positive is wider.
    pub fn width_trait(self) -> f32 {
        match self {
            FontWidthClass::Compressed => -0.3,
            FontWidthClass::Condensed => -0.2,
            FontWidthClass::Standard => 0.0,
            FontWidthClass::Expanded => 0.2,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FontWidthClass::Compressed => "Compressed",
            FontWidthClass::Condensed => "Condensed",
            FontWidthClass::Standard => "Standard",
            FontWidthClass::Expanded => "Expanded",
        }
    }
}

/// Stylistic family category of a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FontDesignClass {
    #[default]
    Default,
    Rounded,
    #[serde(alias = "monospace", alias = "mono")]
    Monospaced,
    Serif,
}

impl FontDesignClass {
    pub fn all() -> &'static [FontDesignClass] {
        &[
            FontDesignClass::Default,
            FontDesignClass::Rounded,
            FontDesignClass::Monospaced,
            FontDesignClass::Serif,
        ]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FontDesignClass::Default => "Default",
            FontDesignClass::Rounded => "Rounded",
            FontDesignClass::Monospaced => "Monospaced",
            FontDesignClass::Serif => "Serif",
        }
    }
}

// ============================================================================
// Fallback entries
// ============================================================================

/// One entry of the `fallback_fonts` list in the config file.
///
/// ```yaml
/// fallback_fonts:
///   - design: monospaced
///     weight: bold
///   - family: Noto Color Emoji
/// ```
///
/// Entries with a `family` key name an installed family; every other entry is
/// a system descriptor whose missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FallbackFontEntry {
    /// A specific installed font family
    Family {
        family: String,
        #[serde(default)]
        weight: FontWeightClass,
        #[serde(default)]
        width: FontWidthClass,
    },
    /// A system font described by its trait classes
    System {
        #[serde(default)]
        design: FontDesignClass,
        #[serde(default)]
        weight: FontWeightClass,
        #[serde(default)]
        width: FontWidthClass,
    },
}

impl Default for FallbackFontEntry {
    fn default() -> Self {
        FallbackFontEntry::System {
            design: FontDesignClass::Default,
            weight: FontWeightClass::Regular,
            width: FontWidthClass::Standard,
        }
    }
}

/// Overrides for the generic family names used to resolve design classes.
///
/// Each configured family is tried before the built-in priority list of its
/// design; `None` uses the list alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericFamilies {
    #[serde(default)]
    pub sans_serif: Option<String>,
    #[serde(default)]
    pub serif: Option<String>,
    #[serde(default)]
    pub monospace: Option<String>,
    /// Family tried first for the rounded design
    #[serde(default)]
    pub rounded: Option<String>,
}
