use ckitgen_core::AccessorFlavor;
use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PointerCommand {
    /// Pointer type tag (AnyPointer, AnyMutablePointer, AnyBufferPointer,
    /// AnyMutableBufferPointer); unknown tags get the plain accessor
    #[arg(required_unless_present = "all")]
    pub tag: Option<String>,

    /// Accessor flavor: const-raw, raw or raw-o
    #[arg(short, long, default_value = "raw")]
    pub flavor: AccessorFlavor,

    /// Print the accessor table for every tag and flavor
    #[arg(long, conflicts_with = "tag")]
    pub all: bool,

    /// Print the table as JSON
    #[arg(long, requires = "all")]
    pub json: bool,
}

impl PointerCommand {
    pub fn run(&self) -> Result<()> {
        if let Some(tag) = &self.tag {
            println!("{}", self.flavor.accessor(tag));
            return Ok(());
        }

        let report = ops::pointers();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
