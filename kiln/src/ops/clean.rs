//! Clean operation - remove build outputs.

use eyre::{Result, WrapErr};
use kiln_manifest::Manifest;
use kiln_pipeline::Project;

use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions {
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Removes the build directory, the linked binary, and the disk image.
/// Targets that do not exist are skipped silently.
pub fn clean(manifest: &Manifest, opts: CleanOptions) -> Result<CleanReport> {
    let project = Project::from_manifest(manifest);

    let outcome = if opts.dry_run {
        kiln_pipeline::preview_clean(&project.layout)
    } else {
        kiln_pipeline::clean(&project.layout).wrap_err("Failed to remove build outputs")?
    };

    Ok(CleanReport {
        dry_run: opts.dry_run,
        removed: outcome.removed,
    })
}
