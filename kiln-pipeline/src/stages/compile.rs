//! Compile stage: generated C sources to object files.

use crate::command::ToolCommand;
use crate::project::Project;
use crate::source_set::{SourceKind, SourceSet};
use crate::stages::{Stage, path_arg};

/// One compiler invocation per C source: the fixed flag set, then
/// `<file> -c -o <file>.o`. No mtime or hash check is consulted; every
/// plan recompiles every listed file.
pub(crate) fn plan(project: &Project, sources: &SourceSet) -> Vec<ToolCommand> {
    sources
        .files(SourceKind::Compile)
        .iter()
        .map(|input| {
            let output = project.layout.compiled_object(input);
            let mut args = project.compile_flags.clone();
            args.push(path_arg(input));
            args.push("-c".to_string());
            args.push("-o".to_string());
            args.push(path_arg(&output));
            ToolCommand::new(Stage::Compile, &project.compiler, args)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_flags_precede_input_and_output() {
        let project = Project::from_manifest(&kiln_manifest::Manifest::default());
        let mut sources = SourceSet::default();
        sources.add(SourceKind::Compile, PathBuf::from("build/main.c"));

        let commands = plan(&project, &sources);
        assert_eq!(commands.len(), 1);
        let cmd = &commands[0];
        assert_eq!(cmd.program, "gcc");
        assert!(cmd.args.starts_with(&["-O2".to_string(), "-Wall".to_string()]));
        assert!(
            cmd.args.ends_with(&[
                "build/main.c".to_string(),
                "-c".to_string(),
                "-o".to_string(),
                "build/main.c.o".to_string(),
            ])
        );
    }

    #[test]
    fn test_object_suffix_appended_not_replaced() {
        let project = Project::from_manifest(&kiln_manifest::Manifest::default());
        let mut sources = SourceSet::default();
        sources.add(SourceKind::Compile, PathBuf::from("build/irq.c"));

        let commands = plan(&project, &sources);
        let output = commands[0].args.last().unwrap();
        assert_eq!(output, "build/irq.c.o");
    }
}
