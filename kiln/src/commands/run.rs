use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use kiln_manifest::Manifest;
use kiln_pipeline::BuildSelection;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RunCommand {
    /// Path to kiln.toml (defaults to ./kiln.toml; missing file means defaults)
    #[arg(short, long, default_value = "kiln.toml")]
    pub config: PathBuf,
}

impl RunCommand {
    /// Build the disk image and boot it; assumes the kernel is already linked
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::load(&self.config).unwrap_or_exit();

        let report = ops::build(
            &manifest,
            ops::build::BuildOptions {
                selection: BuildSelection::none().with_run(),
                extra: &[],
                dry_run: false,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        if !report.success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
