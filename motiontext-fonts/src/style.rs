//! Requested text styles and weight classification.

use std::fmt;
use std::str::FromStr;

use motiontext_config::FontWeightClass;
use thiserror::Error;

/// Classify a raw numeric weight into one of the nine weight classes.
///
/// Classes sit every 100 units from 100 (thin) to 900 (black). The nearest
/// class wins and a midpoint belongs to the lower class, so 150 is thin and
/// 151 is ultra light. Values outside the grid clamp to the nearest end.
/// NaN has no nearest class and maps to regular.
pub fn classify_weight(raw_weight: f32) -> FontWeightClass {
    if raw_weight.is_nan() {
        return FontWeightClass::Regular;
    }
    let classes = FontWeightClass::all();
    let index = ((raw_weight - 150.0) / 100.0).ceil();
    let index = index.clamp(0.0, (classes.len() - 1) as f32) as usize;
    classes[index]
}

/// The style the text layer is rendering when it misses a glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontStyle {
    /// Weight class the raw weight was classified into
    pub weight: FontWeightClass,
    /// Weight as requested by the animation file, before classification
    pub raw_weight: f32,
}

impl FontStyle {
    pub fn new(weight: FontWeightClass) -> Self {
        Self {
            weight,
            raw_weight: f32::from(weight.to_number()),
        }
    }

    /// Build a style from a raw numeric weight (nominally 1..=1000).
    pub fn from_raw_weight(raw_weight: f32) -> Self {
        Self {
            weight: classify_weight(raw_weight),
            raw_weight,
        }
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::new(FontWeightClass::Regular)
    }
}

/// UI usage tag recorded on a resolved system font.
///
/// System UI fonts record the weight they were requested with as a usage
/// string; [`crate::ResolvedFont::usage`] carries the same information so the
/// text layer can tell which weight a fallback was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontUsage {
    UltraLight,
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl FontUsage {
    pub fn for_weight(weight: FontWeightClass) -> Self {
        match weight {
            FontWeightClass::Thin => FontUsage::Thin,
            FontWeightClass::UltraLight => FontUsage::UltraLight,
            FontWeightClass::Light => FontUsage::Light,
            FontWeightClass::Regular => FontUsage::Regular,
            FontWeightClass::Medium => FontUsage::Medium,
            FontWeightClass::Semibold => FontUsage::Semibold,
            FontWeightClass::Bold => FontUsage::Bold,
            FontWeightClass::Heavy => FontUsage::Heavy,
            FontWeightClass::Black => FontUsage::Black,
        }
    }

    pub fn weight(self) -> FontWeightClass {
        match self {
            FontUsage::Thin => FontWeightClass::Thin,
            FontUsage::UltraLight => FontWeightClass::UltraLight,
            FontUsage::Light => FontWeightClass::Light,
            FontUsage::Regular => FontWeightClass::Regular,
            FontUsage::Medium => FontWeightClass::Medium,
            FontUsage::Semibold => FontWeightClass::Semibold,
            FontUsage::Bold => FontWeightClass::Bold,
            FontUsage::Heavy => FontWeightClass::Heavy,
            FontUsage::Black => FontWeightClass::Black,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FontUsage::UltraLight => "CTFontUltraLightUsage",
            FontUsage::Thin => "CTFontThinUsage",
            FontUsage::Light => "CTFontLightUsage",
            FontUsage::Regular => "CTFontRegularUsage",
            FontUsage::Medium => "CTFontMediumUsage",
            FontUsage::Semibold => "CTFontDemiUsage",
            FontUsage::Bold => "CTFontEmphasizedUsage",
            FontUsage::Heavy => "CTFontHeavyUsage",
            FontUsage::Black => "CTFontBlackUsage",
        }
    }
}

impl fmt::Display for FontUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the [`FontUsage`] tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown font usage '{0}'")]
pub struct ParseFontUsageError(pub String);

impl FromStr for FontUsage {
    type Err = ParseFontUsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontWeightClass::all()
            .iter()
            .map(|weight| FontUsage::for_weight(*weight))
            .find(|usage| usage.as_str() == s)
            .ok_or_else(|| ParseFontUsageError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_weights_classify_exactly() {
        for weight in FontWeightClass::all() {
            let raw = f32::from(weight.to_number());
            assert_eq!(classify_weight(raw), *weight, "raw weight {raw}");
        }
    }

    #[test]
    fn test_out_of_range_weights_clamp() {
        assert_eq!(classify_weight(-100.0), FontWeightClass::Thin);
        assert_eq!(classify_weight(0.0), FontWeightClass::Thin);
        assert_eq!(classify_weight(1000.0), FontWeightClass::Black);
        assert_eq!(classify_weight(f32::INFINITY), FontWeightClass::Black);
        assert_eq!(classify_weight(f32::NEG_INFINITY), FontWeightClass::Thin);
    }

    #[test]
    fn test_midpoint_belongs_to_lower_class() {
        assert_eq!(classify_weight(149.0), FontWeightClass::Thin);
        assert_eq!(classify_weight(150.0), FontWeightClass::Thin);
        assert_eq!(classify_weight(151.0), FontWeightClass::UltraLight);
        assert_eq!(classify_weight(250.0), FontWeightClass::UltraLight);
        assert_eq!(classify_weight(251.0), FontWeightClass::Light);
        assert_eq!(classify_weight(850.0), FontWeightClass::Heavy);
        assert_eq!(classify_weight(851.0), FontWeightClass::Black);
    }

    #[test]
    fn test_nan_is_regular() {
        assert_eq!(classify_weight(f32::NAN), FontWeightClass::Regular);
    }

    #[test]
    fn test_style_keeps_raw_weight() {
        let style = FontStyle::from_raw_weight(437.5);
        assert_eq!(style.weight, FontWeightClass::Regular);
        assert_eq!(style.raw_weight, 437.5);
        assert_eq!(FontStyle::default().raw_weight, 400.0);
    }

    #[test]
    fn test_usage_string_round_trip() {
        for weight in FontWeightClass::all() {
            let usage = FontUsage::for_weight(*weight);
            assert_eq!(usage.as_str().parse::<FontUsage>(), Ok(usage));
            assert_eq!(usage.weight(), *weight);
        }
        assert!("CTFontBoldUsage".parse::<FontUsage>().is_err());
    }
}
