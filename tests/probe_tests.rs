//! Integration tests for the motiontext-probe command line.

use clap::Parser;
use motiontext::cli::{self, Cli};
use motiontext::config::Config;
use tempfile::TempDir;

/// Writes `yaml` to a temp config file and returns the parsed CLI for `args`.
fn cli_with_config(yaml: &str, args: &[&str]) -> (Cli, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("fonts.yaml");
    std::fs::write(&path, yaml).expect("Failed to write config");

    let mut argv = vec!["motiontext-probe", "--config", path.to_str().unwrap()];
    argv.extend_from_slice(args);
    (Cli::parse_from(argv), temp_dir)
}

fn run(cli: &Cli) -> String {
    let config = cli::load_config(cli).unwrap();
    let mut out = Vec::new();
    cli::run(cli, &config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_classify_command() {
    let cli = Cli::parse_from(["motiontext-probe", "classify", "151"]);
    let mut out = Vec::new();
    cli::run(&cli, &Config::default(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "UltraLight (200)\n");
}

#[test]
fn test_classify_negative_weight() {
    let cli = Cli::parse_from(["motiontext-probe", "classify", "-100"]);
    let mut out = Vec::new();
    cli::run(&cli, &Config::default(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Thin (100)\n");
}

#[test]
fn test_resolve_without_fonts_reports_system_default() {
    let (cli, _dir) = cli_with_config(
        "load_system_fonts: false\n",
        &["resolve", "--design", "rounded", "--weight", "bold"],
    );
    let output = run(&cli);
    assert!(output.starts_with("#0 system-ui+Rounded+Bold "), "{output}");
    assert!(output.contains("usage=CTFontEmphasizedUsage"), "{output}");
    assert!(output.contains("width=+0.00"), "{output}");
}

#[test]
fn test_fallbacks_lists_configured_chain() {
    let yaml = r#"
load_system_fonts: false
fallback_fonts:
  - design: serif
    weight: heavy
  - family: "Not Installed Anywhere"
    width: condensed
"#;
    let (cli, _dir) = cli_with_config(yaml, &["fallbacks", "--weight", "700", "--char", "A"]);
    let lines: Vec<String> = run(&cli).lines().map(str::to_string).collect();

    assert_eq!(lines[0], "style: Bold (raw 700)");
    assert!(lines[1].starts_with("#0 system-ui+Serif+Heavy "), "{lines:?}");
    assert!(lines[2].starts_with("#1 system-ui+Regular+Condensed "), "{lines:?}");
    assert_eq!(
        lines[3],
        "'A' (U+0041): not found in any fallback font"
    );
}

#[test]
fn test_no_system_fonts_flag_overrides_config() {
    let (cli, _dir) = cli_with_config(
        "load_system_fonts: true\n",
        &["--no-system-fonts", "resolve"],
    );
    let config = cli::load_config(&cli).unwrap();
    assert!(!config.load_system_fonts);
}

#[test]
fn test_invalid_config_is_reported() {
    let (cli, _dir) = cli_with_config("fallback_fonts:\n  - family: \"\"\n", &["fallbacks"]);
    let err = cli::load_config(&cli).unwrap_err();
    assert!(
        err.downcast_ref::<motiontext::config::ConfigError>().is_some(),
        "{err:#}"
    );
}
