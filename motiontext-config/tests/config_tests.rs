//! Integration tests for motiontext-config.

use motiontext_config::{
    Config, ConfigError, FallbackFontEntry, FontDesignClass, FontWeightClass, FontWidthClass,
    LogLevel,
};

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert!(config.load_system_fonts);
    assert!(config.font_dirs.is_empty());
    assert!(config.font_files.is_empty());
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(
        config.fallback_fonts,
        vec![FallbackFontEntry::System {
            design: FontDesignClass::Default,
            weight: FontWeightClass::Regular,
            width: FontWidthClass::Standard,
        }]
    );
}

#[test]
fn test_config_yaml_deserialization() {
    let yaml = r#"
load_system_fonts: false
font_dirs:
  - /usr/share/fonts/extra
generic_families:
  serif: "Noto Serif"
fallback_fonts:
  - design: monospaced
    weight: bold
  - family: "Noto Color Emoji"
  - weight: heavy
    width: condensed
log_level: debug
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert!(!config.load_system_fonts);
    assert_eq!(config.font_dirs.len(), 1);
    assert_eq!(config.generic_families.serif.as_deref(), Some("Noto Serif"));
    assert_eq!(config.generic_families.sans_serif, None);
    assert_eq!(config.log_level, LogLevel::Debug);

    assert_eq!(
        config.fallback_fonts,
        vec![
            FallbackFontEntry::System {
                design: FontDesignClass::Monospaced,
                weight: FontWeightClass::Bold,
                width: FontWidthClass::Standard,
            },
            FallbackFontEntry::Family {
                family: "Noto Color Emoji".to_string(),
                weight: FontWeightClass::Regular,
                width: FontWidthClass::Standard,
            },
            FallbackFontEntry::System {
                design: FontDesignClass::Default,
                weight: FontWeightClass::Heavy,
                width: FontWidthClass::Condensed,
            },
        ]
    );
}

#[test]
fn test_config_missing_fields_use_defaults() {
    let config = Config::from_yaml("log_level: info\n").unwrap();
    assert!(config.load_system_fonts);
    assert_eq!(config.fallback_fonts, Config::default().fallback_fonts);
}

#[test]
fn test_weight_aliases() {
    let yaml = r#"
fallback_fonts:
  - weight: ultralight
  - weight: semi_bold
  - weight: normal
"#;
    let config = Config::from_yaml(yaml).unwrap();
    let weights: Vec<FontWeightClass> = config
        .fallback_fonts
        .iter()
        .map(|entry| match entry {
            FallbackFontEntry::System { weight, .. } => *weight,
            FallbackFontEntry::Family { weight, .. } => *weight,
        })
        .collect();
    assert_eq!(
        weights,
        vec![
            FontWeightClass::UltraLight,
            FontWeightClass::Semibold,
            FontWeightClass::Regular
        ]
    );
}

#[test]
fn test_empty_fallback_list_means_default() {
    let config = Config::from_yaml("fallback_fonts: []\n").unwrap();
    assert!(config.fallback_fonts.is_empty());
    assert_eq!(
        config.effective_fallback_fonts(),
        vec![FallbackFontEntry::default()]
    );
}

#[test]
fn test_empty_family_name_fails_validation() {
    let yaml = r#"
fallback_fonts:
  - family: "  "
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("fallback_fonts[0]")));
}

#[test]
fn test_empty_generic_family_fails_validation() {
    let yaml = r#"
generic_families:
  monospace: ""
"#;
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("monospace")));
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let err = Config::from_yaml("fallback_fonts: [design: {").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_unknown_weight_is_parse_error() {
    let yaml = r#"
fallback_fonts:
  - family: "Inter"
    weight: featherweight
"#;
    assert!(Config::from_yaml(yaml).is_err());
}

#[test]
fn test_weight_class_numbers_are_ordered() {
    let numbers: Vec<u16> = FontWeightClass::all()
        .iter()
        .map(|w| w.to_number())
        .collect();
    assert_eq!(numbers, vec![100, 200, 300, 400, 500, 600, 700, 800, 900]);
}

#[test]
fn test_width_traits_sign() {
    assert!(FontWidthClass::Compressed.width_trait() < 0.0);
    assert!(FontWidthClass::Condensed.width_trait() < 0.0);
    assert_eq!(FontWidthClass::Standard.width_trait(), 0.0);
    assert!(FontWidthClass::Expanded.width_trait() > 0.0);
}

#[test]
fn test_log_level_from_name() {
    assert_eq!(LogLevel::from_name("WARNING"), Some(LogLevel::Warn));
    assert_eq!(LogLevel::from_name(" trace "), Some(LogLevel::Trace));
    assert_eq!(LogLevel::from_name("motiontext=debug"), None);
}
