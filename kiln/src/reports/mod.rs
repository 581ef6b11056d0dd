//! Report data structures for commands.
//!
//! Ops collect results into reports; commands render them to an Output
//! target. Keeping data and rendering apart keeps the ops testable.

mod build;
mod clean;
mod install;
mod output;

pub use build::{BuildReport, CommandReport, CommandStatus, StageSection};
pub use clean::CleanReport;
pub use install::InstallReport;
pub use output::{Output, Report, TerminalOutput};
