//! Build pipeline driver for kiln.
//!
//! The pipeline turns a [`SourceSet`] and a [`BuildSelection`] into a
//! [`BuildPlan`] of external-tool commands (transpile, compile, assemble,
//! link, plus the image/emulator follow-ons), then executes the plan through
//! a [`Toolchain`] and aggregates every exit status into a [`BuildOutcome`].
//!
//! Planning is pure: no command derivation touches the disk. Execution is
//! sequential and non-gating — every selected stage runs even if an earlier
//! one failed, and the caller decides what to do with the failures.

pub mod clean;
mod command;
mod driver;
mod project;
mod selection;
mod source_set;
mod stages;

pub use clean::{CleanOutcome, clean, preview_clean};
pub use command::{CommandResult, SystemToolchain, ToolCommand, Toolchain};
pub use driver::{BuildOutcome, BuildPlan, StageOutcome, StagePlan, execute, plan};
pub use project::{Layout, Project};
pub use selection::BuildSelection;
pub use source_set::{SourceKind, SourceSet};
pub use stages::Stage;
