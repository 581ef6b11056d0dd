//! Core operations.
//!
//! The business logic behind the kiln subcommands, separated from argument
//! parsing and output rendering. Each op takes a manifest plus options and
//! returns a typed report for the command layer to render.

pub mod build;
pub mod clean;
pub mod install;

pub use build::build;
pub use clean::clean;
pub use install::install;
