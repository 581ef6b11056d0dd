//! Build command report data structures.

use kiln_pipeline::{BuildOutcome, BuildPlan};

use super::output::{Output, Report};

/// How one planned command ended up.
#[derive(Debug)]
pub enum CommandStatus {
    /// Dry run: nothing was executed.
    Planned,
    /// Executed; zero exit.
    Succeeded,
    /// Executed; non-zero exit, or the tool never launched.
    Failed { exit_code: Option<i32> },
}

/// One command of one stage.
#[derive(Debug)]
pub struct CommandReport {
    /// The rendered command line.
    pub line: String,
    pub status: CommandStatus,
    /// Captured tool stderr (compiler warnings land here too).
    pub stderr: String,
    /// Captured tool stdout.
    pub stdout: String,
}

/// The commands of one stage.
#[derive(Debug)]
pub struct StageSection {
    pub name: &'static str,
    pub commands: Vec<CommandReport>,
}

/// Report data from planning or running the pipeline.
#[derive(Debug)]
pub struct BuildReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    pub stages: Vec<StageSection>,
}

impl BuildReport {
    /// Build a report from a plan alone (dry run).
    pub fn planned(plan: &BuildPlan) -> Self {
        let stages = plan
            .stages
            .iter()
            .map(|stage| StageSection {
                name: stage.stage.name(),
                commands: stage
                    .commands
                    .iter()
                    .map(|command| CommandReport {
                        line: command.to_string(),
                        status: CommandStatus::Planned,
                        stderr: String::new(),
                        stdout: String::new(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            dry_run: true,
            stages,
        }
    }

    /// Build a report from an executed outcome.
    pub fn executed(outcome: &BuildOutcome) -> Self {
        let stages = outcome
            .stages
            .iter()
            .map(|stage| StageSection {
                name: stage.stage.name(),
                commands: stage
                    .results
                    .iter()
                    .map(|result| CommandReport {
                        line: result.command.clone(),
                        status: if result.success() {
                            CommandStatus::Succeeded
                        } else {
                            CommandStatus::Failed {
                                exit_code: result.exit_code,
                            }
                        },
                        stderr: result.stderr.clone(),
                        stdout: result.stdout.clone(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            dry_run: false,
            stages,
        }
    }

    /// Whether nothing failed (a dry run always succeeds).
    pub fn success(&self) -> bool {
        self.failure_count() == 0
    }

    pub fn failure_count(&self) -> usize {
        self.stages
            .iter()
            .flat_map(|s| s.commands.iter())
            .filter(|c| matches!(c.status, CommandStatus::Failed { .. }))
            .count()
    }

    fn command_count(&self) -> usize {
        self.stages.iter().map(|s| s.commands.len()).sum()
    }
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        for stage in &self.stages {
            if stage.commands.is_empty() {
                continue;
            }
            out.section(stage.name);
            for command in &stage.commands {
                match command.status {
                    CommandStatus::Planned | CommandStatus::Succeeded => {
                        out.list_item(&command.line);
                    }
                    CommandStatus::Failed { exit_code } => {
                        out.list_item(&command.line);
                        match exit_code {
                            Some(code) => out.failure(&format!(
                                "{} exited with code {}",
                                stage.name, code
                            )),
                            None => out.failure(&format!("{} did not run", stage.name)),
                        }
                    }
                }
                // Everything the tools printed gets shown; nothing is
                // swallowed.
                if !command.stdout.is_empty() {
                    out.tool_output(&command.stdout);
                }
                if !command.stderr.is_empty() {
                    out.tool_output(&command.stderr);
                }
            }
        }

        out.newline();
        if self.dry_run {
            out.line(&format!("{} commands would run", self.command_count()));
            return;
        }

        let failed = self.failure_count();
        if failed == 0 {
            out.line(&format!("{} commands, all succeeded", self.command_count()));
        } else {
            out.failure(&format!(
                "{} of {} commands failed",
                failed,
                self.command_count()
            ));
        }
    }
}
