//! Transpile stage: high-level sources to generated C.

use crate::command::ToolCommand;
use crate::project::Project;
use crate::source_set::{SourceKind, SourceSet};
use crate::stages::{Stage, path_arg};

/// One transpiler invocation per high-level source, with exactly two
/// positional arguments: input path, output path.
pub(crate) fn plan(project: &Project, sources: &SourceSet) -> Vec<ToolCommand> {
    sources
        .files(SourceKind::Transpile)
        .iter()
        .map(|input| {
            let output = project.layout.transpiled_source(input);
            ToolCommand::new(
                Stage::Transpile,
                &project.transpiler,
                vec![path_arg(input), path_arg(&output)],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn project() -> Project {
        Project::from_manifest(&kiln_manifest::Manifest::default())
    }

    #[test]
    fn test_one_command_per_source() {
        let project = project();
        let mut sources = SourceSet::default();
        sources.add(SourceKind::Transpile, PathBuf::from("src/a.py"));
        sources.add(SourceKind::Transpile, PathBuf::from("src/b.py"));

        let commands = plan(&project, &sources);
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].args, ["src/a.py", "build/a.c"]);
        assert_eq!(commands[1].args, ["src/b.py", "build/b.c"]);
    }

    #[test]
    fn test_output_follows_layout() {
        let mut project = project();
        project.layout.build_dir = PathBuf::from("out");
        let mut sources = SourceSet::default();
        sources.add(SourceKind::Transpile, PathBuf::from("src/kernel.py"));

        let commands = plan(&project, &sources);
        assert_eq!(commands[0].args[1], "out/kernel.c");
    }
}
