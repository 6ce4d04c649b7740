mod camel;
mod capitalize;
mod completions;
mod guard;
mod license;
mod option_set;
mod platform;
mod pointer;

use std::path::{Path, PathBuf};

use camel::CamelCommand;
use capitalize::CapitalizeCommand;
use ckitgen_config::{Config, ConfigFile};
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use guard::GuardCommand;
use license::LicenseCommand;
use option_set::OptionSetCommand;
use platform::PlatformCommand;
use pointer::PointerCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for ckitgen_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the config given on the command line, else ./ckitgen.toml, else defaults.
pub(crate) fn load_config(path: Option<&Path>) -> ckitgen_config::Result<Config> {
    match path {
        Some(path) => ConfigFile::open(path).map(ConfigFile::into_config),
        None => Ok(ConfigFile::discover(".")?
            .map(ConfigFile::into_config)
            .unwrap_or_default()),
    }
}

#[derive(Parser)]
#[command(name = "ckitgen")]
#[command(version)]
#[command(about = "Emit Swift snippets for CKit bindings")]
pub(crate) struct Cli {
    /// Path to ckitgen.toml (defaults to ./ckitgen.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let config = || load_config(self.config.as_deref()).unwrap_or_exit();

        match &self.command {
            Commands::Capitalize(cmd) => cmd.run(),
            Commands::Camel(cmd) => cmd.run(),
            Commands::Platform(cmd) => cmd.run(),
            Commands::Pointer(cmd) => cmd.run(),
            Commands::OptionSet(cmd) => cmd.run(&config()),
            Commands::Guard(cmd) => cmd.run(),
            Commands::License(cmd) => cmd.run(&config()),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Upper-case the first character of a word
    Capitalize(CapitalizeCommand),

    /// Join words into a lowerCamelCase identifier
    Camel(CamelCommand),

    /// Print platform predicates for #if directives
    Platform(PlatformCommand),

    /// Print the raw-pointer accessor for a pointer type
    Pointer(PointerCommand),

    /// Print an OptionSet conformance body
    OptionSet(OptionSetCommand),

    /// Wrap source text in an #if block for a platform
    Guard(GuardCommand),

    /// Print the license header for generated files
    License(LicenseCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[swift]\naccess = \"internal\"\n").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.swift.access(), "internal");
    }

    #[test]
    fn test_load_missing_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(load_config(Some(missing.as_path())).is_err());
    }

    #[test]
    fn test_parse_pointer_args() {
        let cli =
            Cli::try_parse_from(["ckitgen", "pointer", "AnyBufferPointer", "--flavor", "raw-o"])
                .unwrap();
        assert!(matches!(cli.command, Commands::Pointer(_)));
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["ckitgen", "license", "--config", "other.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some(Path::new("other.toml")));
    }
}
