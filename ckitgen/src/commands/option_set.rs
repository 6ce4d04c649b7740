use ckitgen_codegen::option_set_body;
use ckitgen_config::Config;
use clap::Args;
use eyre::Result;

#[derive(Args)]
pub struct OptionSetCommand {
    /// Access modifier (defaults to [swift].access, then "public")
    #[arg(short, long)]
    pub access: Option<String>,

    /// Raw storage type (defaults to [swift].raw_value, then "Int32")
    #[arg(short, long)]
    pub raw_value: Option<String>,
}

impl OptionSetCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let access = self.access.as_deref().unwrap_or(config.swift.access());
        let raw_value = self
            .raw_value
            .as_deref()
            .unwrap_or(config.swift.raw_value());

        print!("{}", option_set_body(access, raw_value));
        Ok(())
    }
}
