//! Per-invocation selection of stages and follow-on actions.

/// Which stages (and the run follow-on) one invocation requested.
///
/// Stage toggles are independent: no stage implies another, and a stage's
/// failure never unselects a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSelection {
    pub transpile: bool,
    pub compile: bool,
    pub assemble: bool,
    pub link: bool,
    /// Build the disk image and boot it in the emulator afterwards.
    pub run: bool,
}

impl BuildSelection {
    /// All four stages, no follow-on.
    pub fn all() -> Self {
        Self {
            transpile: true,
            compile: true,
            assemble: true,
            link: true,
            run: false,
        }
    }

    /// Nothing selected. Useful as a base for single-stage or run-only
    /// invocations.
    pub fn none() -> Self {
        Self {
            transpile: false,
            compile: false,
            assemble: false,
            link: false,
            run: false,
        }
    }

    /// The same selection with the run follow-on enabled.
    pub fn with_run(mut self) -> Self {
        self.run = true;
        self
    }

    /// Whether any of the four build stages is selected.
    pub fn any_stage(&self) -> bool {
        self.transpile || self.compile || self.assemble || self.link
    }
}

impl Default for BuildSelection {
    fn default() -> Self {
        Self::all()
    }
}
