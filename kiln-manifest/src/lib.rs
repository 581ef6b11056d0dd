// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `kiln.toml`, the optional project
//! configuration. Every field defaults to the conventional value, so a
//! project without a kiln.toml builds with the stock layout, tools, and
//! flag sets.

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{Flags, Manifest, ProjectConfig, Tools};
