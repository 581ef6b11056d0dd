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
pub struct BuildRunCommand {
    /// Path to kiln.toml (defaults to ./kiln.toml; missing file means defaults)
    #[arg(short, long, default_value = "kiln.toml")]
    pub config: PathBuf,

    /// Print the planned commands without running anything
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildRunCommand {
    /// Run the full pipeline, then the image builder and the emulator
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::load(&self.config).unwrap_or_exit();

        let report = ops::build(
            &manifest,
            ops::build::BuildOptions {
                selection: BuildSelection::all().with_run(),
                extra: &[],
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        if !report.success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
