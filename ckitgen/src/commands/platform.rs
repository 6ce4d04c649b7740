use ckitgen_core::Platform;
use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PlatformCommand {
    /// Predicate to print (darwin, fbsd, bsd, 32bit, 64bit); lists all when omitted
    pub name: Option<Platform>,

    /// Print the list as JSON
    #[arg(long, conflicts_with = "name")]
    pub json: bool,
}

impl PlatformCommand {
    pub fn run(&self) -> Result<()> {
        if let Some(platform) = self.name {
            println!("{}", platform.predicate());
            return Ok(());
        }

        let report = ops::platforms();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
