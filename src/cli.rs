//! Command-line interface for motiontext-probe.
//!
//! Inspects fallback font resolution on the current machine: classifies raw
//! weights, resolves single descriptors, and lists the configured fallback
//! chain for a style.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use motiontext_config::{Config, FontDesignClass, FontWeightClass, FontWidthClass, LogLevel};
use motiontext_fonts::{
    FallbackFontDescriptor, FallbackRegistry, FontResolver, FontStyle, ResolvedFont,
    classify_weight,
};
use serde::de::DeserializeOwned;

/// motiontext-probe - inspect fallback font selection
#[derive(Parser, Debug)]
#[command(name = "motiontext-probe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/motiontext/fonts.yaml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", value_parser = parse_name::<LogLevel>, global = true)]
    pub log_level: Option<LogLevel>,

    /// Do not load the platform's installed fonts
    #[arg(long, global = true)]
    pub no_system_fonts: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a raw numeric weight into a weight class
    Classify {
        /// Raw weight, nominally 1..=1000
        #[arg(allow_negative_numbers = true)]
        weight: f32,
    },

    /// Resolve a single fallback descriptor
    Resolve {
        /// default, rounded, monospaced or serif
        #[arg(long, default_value = "default", value_parser = parse_name::<FontDesignClass>)]
        design: FontDesignClass,

        /// thin, ultra_light, light, regular, medium, semibold, bold, heavy or black
        #[arg(long, default_value = "regular", value_parser = parse_name::<FontWeightClass>)]
        weight: FontWeightClass,

        /// compressed, condensed, standard or expanded
        #[arg(long, default_value = "standard", value_parser = parse_name::<FontWidthClass>)]
        width: FontWidthClass,
    },

    /// List the resolved fallback chain for a style
    Fallbacks {
        /// Raw weight of the requested style
        #[arg(long, default_value_t = 400.0)]
        weight: f32,

        /// Also report which fallback provides this character
        #[arg(long = "char", value_name = "CHAR")]
        character: Option<char>,
    },
}

/// Parse a class name the way the config file spells it.
fn parse_name<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_yaml_ng::from_str(value.trim()).map_err(|_| format!("unknown value '{value}'"))
}

/// Load the config named on the command line, or the default one.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let load_system_fonts = config.load_system_fonts && !cli.no_system_fonts;
    Ok(config.with_system_fonts(load_system_fonts))
}

/// Run a parsed command, writing the report to `out`.
pub fn run(cli: &Cli, config: &Config, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Commands::Classify { weight } => {
            let class = classify_weight(*weight);
            writeln!(out, "{} ({})", class.display_name(), class.to_number())?;
        }
        Commands::Resolve {
            design,
            weight,
            width,
        } => {
            let resolver = build_resolver(config);
            let font = resolver.resolve(&FallbackFontDescriptor::new(*design, *weight, *width));
            write_font(out, 0, &font)?;
        }
        Commands::Fallbacks { weight, character } => {
            let resolver = build_resolver(config);
            let registry = FallbackRegistry::from_config(config);
            let style = FontStyle::from_raw_weight(*weight);

            writeln!(
                out,
                "style: {} (raw {})",
                style.weight.display_name(),
                style.raw_weight
            )?;
            for (index, font) in registry
                .resolve_fallbacks(&style, &resolver)
                .iter()
                .enumerate()
            {
                write_font(out, index, font)?;
            }

            if let Some(character) = character {
                match registry.find_glyph(&style, *character, &resolver) {
                    Some(found) => writeln!(
                        out,
                        "'{}' (U+{:04X}): glyph {} in #{} {}",
                        character,
                        *character as u32,
                        found.glyph_id,
                        found.fallback_index,
                        found.font.name
                    )?,
                    None => writeln!(
                        out,
                        "'{}' (U+{:04X}): not found in any fallback font",
                        character, *character as u32
                    )?,
                }
            }
        }
    }
    Ok(())
}

fn build_resolver(config: &Config) -> FontResolver {
    let resolver = FontResolver::from_config(config);
    if resolver.face_count() == 0 {
        log::warn!("No fonts loaded, every descriptor resolves to the system default");
    }
    resolver
}

fn write_font(out: &mut impl Write, index: usize, font: &ResolvedFont) -> Result<()> {
    writeln!(
        out,
        "#{index} {} family={} usage={} weight={:+.2} width={:+.2}",
        font.name, font.family, font.usage, font.traits.weight, font.traits.width
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_accepts_config_spelling() {
        assert_eq!(
            parse_name::<FontWeightClass>("ultralight"),
            Ok(FontWeightClass::UltraLight)
        );
        assert_eq!(
            parse_name::<FontDesignClass>("mono"),
            Ok(FontDesignClass::Monospaced)
        );
        assert!(parse_name::<FontWidthClass>("narrow").is_err());
    }

    #[test]
    fn test_cli_parses_resolve() {
        let cli = Cli::parse_from([
            "motiontext-probe",
            "resolve",
            "--design",
            "serif",
            "--weight",
            "bold",
        ]);
        match cli.command {
            Commands::Resolve {
                design,
                weight,
                width,
            } => {
                assert_eq!(design, FontDesignClass::Serif);
                assert_eq!(weight, FontWeightClass::Bold);
                assert_eq!(width, FontWidthClass::Standard);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
