//! Build operation - plan the pipeline and drive the toolchain.

use std::path::PathBuf;

use eyre::{Result, WrapErr, eyre};
use kiln_manifest::Manifest;
use kiln_pipeline::{BuildSelection, Project, SourceSet, SystemToolchain};

use crate::reports::BuildReport;

/// Options for the build operation.
pub struct BuildOptions<'a> {
    /// Which stages and follow-ons to run.
    pub selection: BuildSelection,
    /// Extra source files appended to the scanned set.
    pub extra: &'a [PathBuf],
    /// Whether to plan without executing.
    pub dry_run: bool,
}

/// Execute the build operation.
///
/// Scans the source tree, plans the selected stages, and (unless this is a
/// dry run) drives every planned command through the system toolchain.
pub fn build(manifest: &Manifest, opts: BuildOptions) -> Result<BuildReport> {
    let project = Project::from_manifest(manifest);

    let mut sources = SourceSet::scan(&project.layout);
    for path in opts.extra {
        let kind = SourceSet::kind_of(&project.layout, path).ok_or_else(|| {
            eyre!(
                "no stage accepts '{}': expected a .{}, .c, or .asm file",
                path.display(),
                project.layout.source_ext
            )
        })?;
        sources.add(kind, path.clone());
    }

    let plan = kiln_pipeline::plan(&project, &sources, opts.selection);

    if opts.dry_run {
        return Ok(BuildReport::planned(&plan));
    }

    let mut toolchain = SystemToolchain;
    let outcome = kiln_pipeline::execute(&project, &plan, &mut toolchain)
        .wrap_err("Build pipeline failed")?;

    Ok(BuildReport::executed(&outcome))
}
