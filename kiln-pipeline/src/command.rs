//! External-tool commands and the toolchain seam.

use std::fmt;
use std::io;
use std::process;

use crate::stages::Stage;

/// One planned invocation of an external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    /// The stage this command belongs to.
    pub stage: Stage,
    /// Program to invoke.
    pub program: String,
    /// Arguments, in order.
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(stage: Stage, program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            stage,
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// The captured outcome of one external-tool invocation.
///
/// A tool that ran and exited carries its exit code; a tool that could not
/// be launched at all (not installed, not executable) carries `None` and
/// the launch error in `stderr`. Either way nothing is discarded.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// The rendered command line, for reporting.
    pub command: String,
    /// Exit code, or `None` if the process was killed by a signal or never
    /// launched.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    /// Whether the tool ran and exited zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    fn launch_failure(command: String, err: &io::Error) -> Self {
        Self {
            command,
            exit_code: None,
            stdout: String::new(),
            stderr: format!("failed to launch: {err}"),
        }
    }
}

/// The boundary between the driver and the external toolchain.
///
/// The driver only ever hands a [`ToolCommand`] across this seam and reads
/// back a [`CommandResult`]; tests substitute a recording fake.
pub trait Toolchain {
    fn invoke(&mut self, command: &ToolCommand) -> CommandResult;
}

/// Toolchain that runs commands as real subprocesses, blocking until each
/// exits and capturing its output.
pub struct SystemToolchain;

impl Toolchain for SystemToolchain {
    fn invoke(&mut self, command: &ToolCommand) -> CommandResult {
        let rendered = command.to_string();
        match process::Command::new(&command.program)
            .args(&command.args)
            .output()
        {
            Ok(output) => CommandResult {
                command: rendered,
                exit_code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(err) => CommandResult::launch_failure(rendered, &err),
        }
    }
}
