//! Stage planners.
//!
//! Each planner maps (project, sources) to the commands of one stage. The
//! planners are pure: output paths are derived by transformation, never by
//! looking at what exists on disk.

pub(crate) mod assemble;
pub(crate) mod compile;
pub(crate) mod link;
pub(crate) mod transpile;

use std::fmt;
use std::path::Path;

/// One phase of the pipeline, in execution order.
///
/// `Image` and `Emulate` are the run follow-ons rather than build stages
/// proper; they have no source inputs and produce fixed artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Transpile,
    Compile,
    Assemble,
    Link,
    Image,
    Emulate,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Transpile => "transpile",
            Stage::Compile => "compile",
            Stage::Assemble => "assemble",
            Stage::Link => "link",
            Stage::Image => "image",
            Stage::Emulate => "emulate",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render a path as a command-line argument.
pub(crate) fn path_arg(path: &Path) -> String {
    path.display().to_string()
}
