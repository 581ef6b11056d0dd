use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use kiln_manifest::Manifest;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InstallCommand {
    /// Path to kiln.toml (defaults to ./kiln.toml; missing file means defaults)
    #[arg(short, long, default_value = "kiln.toml")]
    pub config: PathBuf,
}

impl InstallCommand {
    /// Install the toolchain packages through the OS package manager
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::load(&self.config).unwrap_or_exit();

        let report = ops::install(&manifest)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
