//! Configuration schema.

use std::str::FromStr;

use serde::Deserialize;
use toml::Spanned;

use crate::{Error, Result, error::SourceContext, validate};

const DEFAULT_ACCESS: &str = "public";
const DEFAULT_RAW_VALUE: &str = "Int32";
const DEFAULT_HOLDER: &str = "CKit";
const DEFAULT_YEAR: u16 = 2017;

/// Root of ckitgen.toml. Every section and key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Defaults for Swift snippets
    #[serde(default)]
    pub swift: SwiftConfig,

    /// License banner settings
    #[serde(default)]
    pub license: LicenseConfig,
}

/// `[swift]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwiftConfig {
    /// Wrapped in Spanned to preserve source location for error reporting
    pub(crate) access: Option<Spanned<String>>,
    pub(crate) raw_value: Option<Spanned<String>>,
}

impl SwiftConfig {
    /// Access modifier for option-set bodies.
    pub fn access(&self) -> &str {
        self.access
            .as_ref()
            .map_or(DEFAULT_ACCESS, |access| access.get_ref().as_str())
    }

    /// Raw storage type for option-set bodies.
    pub fn raw_value(&self) -> &str {
        self.raw_value
            .as_ref()
            .map_or(DEFAULT_RAW_VALUE, |raw| raw.get_ref().as_str())
    }
}

/// `[license]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LicenseConfig {
    pub(crate) holder: Option<String>,
    pub(crate) since: Option<Spanned<u16>>,
    pub(crate) year: Option<u16>,
}

impl LicenseConfig {
    pub fn holder(&self) -> &str {
        self.holder.as_deref().unwrap_or(DEFAULT_HOLDER)
    }

    /// Year of first publication; falls back to [`LicenseConfig::year`].
    pub fn since(&self) -> u16 {
        self.since_or(self.year())
    }

    /// Year of first publication, or `year` when none is configured.
    pub fn since_or(&self, year: u16) -> u16 {
        self.since.as_ref().map_or(year, |since| *since.get_ref())
    }

    pub fn year(&self) -> u16 {
        self.year.unwrap_or(DEFAULT_YEAR)
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "ckitgen.toml")
    }
}

impl Config {
    /// Parse a ckitgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate::validate_config(&config, &ctx)?;
    Ok(config)
}
