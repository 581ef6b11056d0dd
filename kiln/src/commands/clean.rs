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
pub struct CleanCommand {
    /// Path to kiln.toml (defaults to ./kiln.toml; missing file means defaults)
    #[arg(short, long, default_value = "kiln.toml")]
    pub config: PathBuf,

    /// Preview what would be removed without removing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::load(&self.config).unwrap_or_exit();

        let report = ops::clean(
            &manifest,
            ops::clean::CleanOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
