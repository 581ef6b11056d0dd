//! Clean command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from removing build outputs.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Paths removed (or that would be removed).
    pub removed: Vec<PathBuf>,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if self.removed.is_empty() {
            out.line("Nothing to clean.");
            return;
        }

        if self.dry_run {
            out.section("Would remove");
        } else {
            out.section("Removed");
        }
        for path in &self.removed {
            out.removed_item(&path.display().to_string());
        }
    }
}
