//! Assemble stage: assembly sources to 64-bit ELF objects.

use crate::command::ToolCommand;
use crate::project::Project;
use crate::source_set::{SourceKind, SourceSet};
use crate::stages::{Stage, path_arg};

/// One assembler invocation per assembly source, object placed in the build
/// directory under the input's stem. Always rebuilds, like compile.
pub(crate) fn plan(project: &Project, sources: &SourceSet) -> Vec<ToolCommand> {
    sources
        .files(SourceKind::Assemble)
        .iter()
        .map(|input| {
            let output = project.layout.assembled_object(input);
            let mut args = project.assemble_flags.clone();
            args.push(path_arg(input));
            args.push("-o".to_string());
            args.push(path_arg(&output));
            ToolCommand::new(Stage::Assemble, &project.assembler, args)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_object_placed_in_build_dir_by_stem() {
        let project = Project::from_manifest(&kiln_manifest::Manifest::default());
        let mut sources = SourceSet::default();
        sources.add(SourceKind::Assemble, PathBuf::from("src/boot.asm"));

        let commands = plan(&project, &sources);
        assert_eq!(commands.len(), 1);
        assert_eq!(
            commands[0].to_string(),
            "nasm -felf64 src/boot.asm -o build/boot.o"
        );
    }
}
