//! Platform predicates for Swift conditional compilation.
//!
//! Each predicate is a `||` disjunction of `os(..)` or `arch(..)` checks,
//! inserted verbatim after `#if` in generated sources.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! darwin {
    () => {
        "os(OSX) || os(iOS) || os(watchOS) || os(tvOS)"
    };
}

macro_rules! fbsd {
    () => {
        "os(FreeBSD) || os(PS4)"
    };
}

/// Apple platforms.
pub const DARWIN: &str = darwin!();

/// FreeBSD and its PS4 derivative.
pub const FBSD: &str = fbsd!();

/// Every BSD-flavoured platform: [`DARWIN`] or [`FBSD`].
pub const BSD: &str = concat!(darwin!(), " || ", fbsd!());

/// 32-bit architectures.
pub const BIT32: &str = "arch(arm) || arch(i386)";

/// 64-bit architectures.
pub const BIT64: &str = "arch(x86_64)";

/// Named platform predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Platform {
    #[serde(rename = "darwin")]
    Darwin,
    #[serde(rename = "fbsd")]
    FreeBsd,
    #[serde(rename = "bsd")]
    Bsd,
    #[serde(rename = "32bit")]
    Bits32,
    #[serde(rename = "64bit")]
    Bits64,
}

impl Platform {
    /// All predicates, in declaration order.
    pub const ALL: [Platform; 5] = [
        Platform::Darwin,
        Platform::FreeBsd,
        Platform::Bsd,
        Platform::Bits32,
        Platform::Bits64,
    ];

    /// Short name accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Darwin => "darwin",
            Platform::FreeBsd => "fbsd",
            Platform::Bsd => "bsd",
            Platform::Bits32 => "32bit",
            Platform::Bits64 => "64bit",
        }
    }

    /// The predicate expression for this platform.
    pub fn predicate(&self) -> &'static str {
        match self {
            Platform::Darwin => DARWIN,
            Platform::FreeBsd => FBSD,
            Platform::Bsd => BSD,
            Platform::Bits32 => BIT32,
            Platform::Bits64 => BIT64,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "darwin" => Ok(Platform::Darwin),
            "fbsd" | "freebsd" => Ok(Platform::FreeBsd),
            "bsd" => Ok(Platform::Bsd),
            "32bit" => Ok(Platform::Bits32),
            "64bit" => Ok(Platform::Bits64),
            _ => Err(format!(
                "unknown platform '{}', expected one of: darwin, fbsd, bsd, 32bit, 64bit",
                s
            )),
        }
    }
}
