use clap::Args;
use eyre::Result;

#[derive(Args)]
pub struct CapitalizeCommand {
    /// Word to capitalize
    pub word: String,
}

impl CapitalizeCommand {
    pub fn run(&self) -> Result<()> {
        println!("{}", ckitgen_core::capitalize(&self.word));
        Ok(())
    }
}
