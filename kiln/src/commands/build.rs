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
pub struct BuildCommand {
    /// Path to kiln.toml (defaults to ./kiln.toml; missing file means defaults)
    #[arg(short, long, default_value = "kiln.toml")]
    pub config: PathBuf,

    /// Run only the transpile stage (combinable with the other stage flags)
    #[arg(long)]
    pub transpile: bool,

    /// Run only the compile stage
    #[arg(long)]
    pub compile: bool,

    /// Run only the assemble stage
    #[arg(long)]
    pub assemble: bool,

    /// Run only the link stage
    #[arg(long)]
    pub link: bool,

    /// Extra source file to include (repeatable; kind inferred from extension)
    #[arg(long, value_name = "PATH")]
    pub extra: Vec<PathBuf>,

    /// Print the planned commands without running anything
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildCommand {
    /// Run the build command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::load(&self.config).unwrap_or_exit();

        let report = ops::build(
            &manifest,
            ops::build::BuildOptions {
                selection: self.selection(),
                extra: &self.extra,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        if !report.success() {
            std::process::exit(1);
        }
        Ok(())
    }

    /// No stage flag means every stage; any stage flag means exactly the
    /// flagged subset. This carries the desktop form's per-stage checkboxes.
    fn selection(&self) -> BuildSelection {
        if !(self.transpile || self.compile || self.assemble || self.link) {
            return BuildSelection::all();
        }
        BuildSelection {
            transpile: self.transpile,
            compile: self.compile,
            assemble: self.assemble,
            link: self.link,
            run: false,
        }
    }
}
