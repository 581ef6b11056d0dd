//! Link stage: every derived object into the kernel binary.

use std::path::PathBuf;

use crate::command::ToolCommand;
use crate::project::Project;
use crate::source_set::{SourceKind, SourceSet};
use crate::stages::{Stage, path_arg};

/// Exactly one linker invocation: the fixed flag set, every object path,
/// then `-o <binary>`.
///
/// Object paths are re-derived from the source lists, not from what the
/// earlier stages actually produced, so the plan is identical whether or
/// not those stages ran or succeeded. Transpile sources contribute their
/// generated-C path with `.o` appended (`build/a.c.o`), C sources their
/// base name with `.o` appended, assembly sources their stem.
pub(crate) fn plan(project: &Project, sources: &SourceSet) -> Vec<ToolCommand> {
    let objects = object_paths(project, sources);

    let mut args = project.link_flags.clone();
    args.extend(objects.iter().map(|p| path_arg(p)));
    args.push("-o".to_string());
    args.push(path_arg(&project.layout.binary));

    vec![ToolCommand::new(Stage::Link, &project.linker, args)]
}

fn object_paths(project: &Project, sources: &SourceSet) -> Vec<PathBuf> {
    let layout = &project.layout;
    let transpiled = sources
        .files(SourceKind::Transpile)
        .iter()
        .map(|p| layout.link_object_for_transpiled(p));
    let compiled = sources
        .files(SourceKind::Compile)
        .iter()
        .map(|p| layout.link_object_for_c(p));
    let assembled = sources
        .files(SourceKind::Assemble)
        .iter()
        .map(|p| layout.assembled_object(p));
    transpiled.chain(compiled).chain(assembled).collect()
}
