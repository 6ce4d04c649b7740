use std::{
    io::Read,
    path::{Path, PathBuf},
};

use ckitgen_codegen::{ConditionalBlock, Renderable};
use ckitgen_core::Platform;
use clap::Args;
use eyre::{Result, WrapErr};

#[derive(Args)]
pub struct GuardCommand {
    /// Platform predicate to guard with (darwin, fbsd, bsd, 32bit, 64bit)
    pub platform: Platform,

    /// Read the guarded body from a file instead of stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// File holding the #else branch
    #[arg(short, long)]
    pub otherwise: Option<PathBuf>,
}

impl GuardCommand {
    pub fn run(&self) -> Result<()> {
        let body = match &self.file {
            Some(path) => read_file(path)?,
            None => {
                let mut body = String::new();
                std::io::stdin()
                    .read_to_string(&mut body)
                    .wrap_err("failed to read body from stdin")?;
                body
            }
        };

        let mut block = ConditionalBlock::new(self.platform.predicate(), body);
        if let Some(path) = &self.otherwise {
            block = block.otherwise(read_file(path)?);
        }

        print!("{}", block.render());
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read '{}'", path.display()))
}
