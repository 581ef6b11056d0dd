mod build;
mod build_run;
mod clean;
mod completions;
mod install;
mod run;

use build::BuildCommand;
use build_run::BuildRunCommand;
use clap::{Parser, Subcommand};
use clean::CleanCommand;
use completions::CompletionsCommand;
use eyre::Result;
use install::InstallCommand;
use run::RunCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for kiln_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "kiln")]
#[command(version)]
#[command(about = "Drive the kernel-image build toolchain")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Build(cmd) => cmd.run(),
            Commands::BuildRun(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
            Commands::Run(cmd) => cmd.run(),
            Commands::Install(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the build pipeline: transpile, compile, assemble, link
    Build(BuildCommand),

    /// Build, then create the disk image and boot it
    #[command(name = "build-run", alias = "build_run")]
    BuildRun(BuildRunCommand),

    /// Remove the build directory, the kernel binary, and the disk image
    Clean(CleanCommand),

    /// Create the disk image and boot it in the emulator, without building
    Run(RunCommand),

    /// Install the OS packages the toolchain needs
    Install(InstallCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
