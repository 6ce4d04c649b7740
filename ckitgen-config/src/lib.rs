// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `ckitgen.toml`.

mod config;
mod error;
mod file;
mod validate;

pub use config::{Config, LicenseConfig, SwiftConfig};
pub use error::{Error, Result, SourceContext};
pub use file::{CONFIG_FILE_NAME, ConfigFile};
pub use validate::SWIFT_ACCESS_MODIFIERS;
