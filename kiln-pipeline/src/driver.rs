//! The pipeline driver: plan stages in fixed order, execute sequentially.

use std::fs;

use eyre::{Result, WrapErr};

use crate::command::{CommandResult, ToolCommand, Toolchain};
use crate::project::Project;
use crate::selection::BuildSelection;
use crate::source_set::SourceSet;
use crate::stages::{self, Stage, path_arg};

/// The planned commands of one stage.
#[derive(Debug, Clone)]
pub struct StagePlan {
    pub stage: Stage,
    pub commands: Vec<ToolCommand>,
}

/// The full ordered plan of one invocation.
#[derive(Debug, Clone, Default)]
pub struct BuildPlan {
    pub stages: Vec<StagePlan>,
}

impl BuildPlan {
    /// Every planned command, across stages, in execution order.
    pub fn commands(&self) -> impl Iterator<Item = &ToolCommand> {
        self.stages.iter().flat_map(|s| s.commands.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.stages.iter().all(|s| s.commands.is_empty())
    }
}

/// Compute the plan for a selection. Pure: nothing here reads the disk.
///
/// Stages appear in the fixed order transpile, compile, assemble, link,
/// then image and emulate when the run follow-on is selected. Unselected
/// stages are skipped entirely; selected ones are planned regardless of
/// what any other stage would do.
pub fn plan(project: &Project, sources: &SourceSet, selection: BuildSelection) -> BuildPlan {
    let mut stages = Vec::new();

    if selection.transpile {
        stages.push(StagePlan {
            stage: Stage::Transpile,
            commands: stages::transpile::plan(project, sources),
        });
    }
    if selection.compile {
        stages.push(StagePlan {
            stage: Stage::Compile,
            commands: stages::compile::plan(project, sources),
        });
    }
    if selection.assemble {
        stages.push(StagePlan {
            stage: Stage::Assemble,
            commands: stages::assemble::plan(project, sources),
        });
    }
    if selection.link {
        stages.push(StagePlan {
            stage: Stage::Link,
            commands: stages::link::plan(project, sources),
        });
    }
    if selection.run {
        stages.push(StagePlan {
            stage: Stage::Image,
            commands: vec![ToolCommand::new(Stage::Image, &project.image_builder, vec![])],
        });
        let mut args = project.emulator_flags.clone();
        args.push("-cdrom".to_string());
        args.push(path_arg(&project.layout.image));
        stages.push(StagePlan {
            stage: Stage::Emulate,
            commands: vec![ToolCommand::new(Stage::Emulate, &project.emulator, args)],
        });
    }

    BuildPlan { stages }
}

/// The captured results of one stage.
#[derive(Debug)]
pub struct StageOutcome {
    pub stage: Stage,
    pub results: Vec<CommandResult>,
}

/// The aggregated results of executing a plan.
#[derive(Debug, Default)]
pub struct BuildOutcome {
    pub stages: Vec<StageOutcome>,
}

impl BuildOutcome {
    /// Whether every command ran and exited zero.
    pub fn success(&self) -> bool {
        self.results().all(CommandResult::success)
    }

    /// Every command result, in execution order.
    pub fn results(&self) -> impl Iterator<Item = &CommandResult> {
        self.stages.iter().flat_map(|s| s.results.iter())
    }

    /// The failed commands, paired with their stage.
    pub fn failures(&self) -> impl Iterator<Item = (Stage, &CommandResult)> {
        self.stages
            .iter()
            .flat_map(|s| s.results.iter().map(move |r| (s.stage, r)))
            .filter(|(_, r)| !r.success())
    }
}

/// Execute every planned command through the toolchain, in order.
///
/// The build directory is created first (idempotent) so output paths have
/// somewhere to land. Execution never short-circuits: a failing command
/// does not stop its stage, and a failing stage does not stop the next.
/// Every exit status ends up in the outcome for the caller to report.
pub fn execute(
    project: &Project,
    plan: &BuildPlan,
    toolchain: &mut dyn Toolchain,
) -> Result<BuildOutcome> {
    if !plan.is_empty() {
        fs::create_dir_all(&project.layout.build_dir).wrap_err_with(|| {
            format!(
                "failed to create build directory '{}'",
                project.layout.build_dir.display()
            )
        })?;
    }

    let mut outcome = BuildOutcome::default();
    for stage_plan in &plan.stages {
        let results = stage_plan
            .commands
            .iter()
            .map(|command| toolchain.invoke(command))
            .collect();
        outcome.stages.push(StageOutcome {
            stage: stage_plan.stage,
            results,
        });
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::source_set::SourceKind;

    /// Toolchain fake that records every command and fails the programs it
    /// was told to fail.
    struct FakeToolchain {
        invoked: Vec<String>,
        failing_program: Option<String>,
    }

    impl FakeToolchain {
        fn new() -> Self {
            Self {
                invoked: Vec::new(),
                failing_program: None,
            }
        }

        fn failing(program: &str) -> Self {
            Self {
                invoked: Vec::new(),
                failing_program: Some(program.to_string()),
            }
        }
    }

    impl Toolchain for FakeToolchain {
        fn invoke(&mut self, command: &ToolCommand) -> CommandResult {
            self.invoked.push(command.to_string());
            let failed = self.failing_program.as_deref() == Some(command.program.as_str());
            CommandResult {
                command: command.to_string(),
                exit_code: Some(if failed { 1 } else { 0 }),
                stdout: String::new(),
                stderr: if failed { "boom".to_string() } else { String::new() },
            }
        }
    }

    fn project() -> Project {
        Project::from_manifest(&kiln_manifest::Manifest::default())
    }

    fn sources() -> SourceSet {
        let mut sources = SourceSet::default();
        sources.add(SourceKind::Transpile, PathBuf::from("src/a.py"));
        sources.add(SourceKind::Compile, PathBuf::from("build/a.c"));
        sources.add(SourceKind::Assemble, PathBuf::from("src/boot.asm"));
        sources
    }

    #[test]
    fn test_stages_planned_in_fixed_order() {
        let plan = plan(&project(), &sources(), BuildSelection::all().with_run());
        let order: Vec<Stage> = plan.stages.iter().map(|s| s.stage).collect();
        assert_eq!(
            order,
            [
                Stage::Transpile,
                Stage::Compile,
                Stage::Assemble,
                Stage::Link,
                Stage::Image,
                Stage::Emulate,
            ]
        );
    }

    #[test]
    fn test_single_stage_selection_plans_only_that_stage() {
        let selection = BuildSelection {
            assemble: true,
            ..BuildSelection::none()
        };
        let plan = plan(&project(), &sources(), selection);
        assert_eq!(plan.stages.len(), 1);
        assert_eq!(plan.stages[0].stage, Stage::Assemble);
        assert_eq!(plan.stages[0].commands.len(), 1);
    }

    #[test]
    fn test_run_only_selection_plans_image_then_emulator() {
        let plan = plan(&project(), &sources(), BuildSelection::none().with_run());
        let order: Vec<Stage> = plan.stages.iter().map(|s| s.stage).collect();
        assert_eq!(order, [Stage::Image, Stage::Emulate]);
        assert_eq!(plan.stages[0].commands[0].to_string(), "scripts/make_image.py");
        assert_eq!(
            plan.stages[1].commands[0].to_string(),
            "qemu-system-x86_64 -M q35 -m 2G -cdrom kernel.iso"
        );
    }

    #[test]
    fn test_execute_runs_every_command_in_order() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let mut project = project();
        project.layout.build_dir = tmp.path().join("build");

        let plan = plan(&project, &sources(), BuildSelection::all());
        let mut toolchain = FakeToolchain::new();
        let outcome = execute(&project, &plan, &mut toolchain).expect("execute");

        assert!(outcome.success());
        assert_eq!(toolchain.invoked.len(), plan.commands().count());
        assert!(project.layout.build_dir.is_dir());
    }

    #[test]
    fn test_failure_does_not_gate_later_stages() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let mut project = project();
        project.layout.build_dir = tmp.path().join("build");

        // The transpiler fails; compile, assemble, and link must still run.
        let plan = plan(&project, &sources(), BuildSelection::all());
        let mut toolchain = FakeToolchain::failing(&project.transpiler);
        let outcome = execute(&project, &plan, &mut toolchain).expect("execute");

        assert!(!outcome.success());
        assert_eq!(toolchain.invoked.len(), plan.commands().count());

        let failures: Vec<_> = outcome.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, Stage::Transpile);
        assert_eq!(failures[0].1.stderr, "boom");
    }
}
