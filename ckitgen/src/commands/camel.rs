use clap::Args;
use eyre::Result;

#[derive(Args)]
pub struct CamelCommand {
    /// Word fragments, in order (e.g. `mutable raw pointer`)
    pub fragments: Vec<String>,
}

impl CamelCommand {
    pub fn run(&self) -> Result<()> {
        println!("{}", ckitgen_core::camel(&self.fragments));
        Ok(())
    }
}
