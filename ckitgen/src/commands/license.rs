use ckitgen_codegen::{LicenseHeader, Renderable};
use ckitgen_config::Config;
use clap::Args;
use eyre::Result;

#[derive(Args)]
pub struct LicenseCommand {
    /// Copyright holder (defaults to [license].holder)
    #[arg(long)]
    pub holder: Option<String>,

    /// Year of first publication (defaults to [license].since, then the year)
    #[arg(long)]
    pub since: Option<u16>,

    /// Copyright year (defaults to [license].year)
    #[arg(long)]
    pub year: Option<u16>,
}

impl LicenseCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let year = self.year.unwrap_or(config.license.year());
        let since = self
            .since
            .unwrap_or_else(|| config.license.since_or(year));
        let header = LicenseHeader::new(
            self.holder.as_deref().unwrap_or(config.license.holder()),
            year,
        )
        .since(since);

        print!("{}", header.render());
        Ok(())
    }
}
