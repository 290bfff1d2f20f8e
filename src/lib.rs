//! Fallback font selection for the text layer of a vector-animation runtime.
//!
//! The work is split across member crates:
//! - [`config`] (`motiontext-config`): YAML configuration and trait classes
//! - [`fonts`] (`motiontext-fonts`): weight classification, descriptor
//!   resolution, and the fallback registry
//!
//! This crate adds the log bridge ([`debug`]) and the `motiontext-probe`
//! command line ([`cli`]) used to inspect fallback resolution on a machine.

pub mod cli;
pub mod debug;

pub use motiontext_config as config;
pub use motiontext_fonts as fonts;
