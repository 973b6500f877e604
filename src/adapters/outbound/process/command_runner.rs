use crate::shared::error::PruneError;
use crate::shared::Result;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

/// Result of one finished subprocess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    /// Raw stdout bytes; empty when stdio was inherited
    pub stdout: Vec<u8>,
    /// Captured stderr; empty when stdio was inherited
    pub stderr: String,
}

impl CommandOutput {
    fn from_status(status: ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
            stdout: Vec::new(),
            stderr: String::new(),
        }
    }

    /// Short description of a failed exit for error messages
    pub fn failure_details(&self) -> String {
        let status = match self.code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        };
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            status
        } else {
            format!("{}\n{}", status, stderr)
        }
    }
}

/// CommandRunner abstracts subprocess execution for the process adapters
///
/// Every call blocks until the child exits.
pub trait CommandRunner {
    /// Runs a program capturing stdout and stderr
    fn run_captured(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;

    /// Runs a program with the parent's stdin, stdout and stderr
    fn run_inherited(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;

    /// Runs a program with the parent's stderr, its stdout redirected there
    /// too so stdout keeps only the report
    fn run_to_stderr(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;
}

/// CommandRunner backed by std::process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run_captured(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    fn run_inherited(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let status = Command::new(program).args(args).status()?;
        Ok(CommandOutput::from_status(status))
    }

    fn run_to_stderr(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(io::stderr()))
            .status()?;
        Ok(CommandOutput::from_status(status))
    }
}

/// Renders a command line for error messages
pub fn describe_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs a captured command and returns its stdout, failing on spawn errors
/// or a non-zero exit
///
/// # Arguments
/// * `step` - Description of the external step, used in error messages
pub fn run_step<R: CommandRunner + ?Sized>(
    runner: &R,
    program: &str,
    args: &[&str],
    step: &str,
) -> Result<Vec<u8>> {
    let output = runner
        .run_captured(program, args)
        .map_err(|e| spawn_error(program, args, step, e))?;

    if !output.success {
        return Err(PruneError::ExternalToolFailed {
            step: step.to_string(),
            command: describe_command(program, args),
            details: output.failure_details(),
        }
        .into());
    }

    Ok(output.stdout)
}

/// Runs a command with inherited stdio, failing on spawn errors or a
/// non-zero exit
pub fn run_interactive_step<R: CommandRunner + ?Sized>(
    runner: &R,
    program: &str,
    args: &[&str],
    step: &str,
) -> Result<()> {
    let output = runner
        .run_inherited(program, args)
        .map_err(|e| spawn_error(program, args, step, e))?;
    check_status(&output, program, args, step)
}

/// Runs a command whose output all goes to stderr, failing on spawn errors
/// or a non-zero exit
pub fn run_background_step<R: CommandRunner + ?Sized>(
    runner: &R,
    program: &str,
    args: &[&str],
    step: &str,
) -> Result<()> {
    let output = runner
        .run_to_stderr(program, args)
        .map_err(|e| spawn_error(program, args, step, e))?;
    check_status(&output, program, args, step)
}

fn check_status(output: &CommandOutput, program: &str, args: &[&str], step: &str) -> Result<()> {
    if !output.success {
        return Err(PruneError::ExternalToolFailed {
            step: step.to_string(),
            command: describe_command(program, args),
            details: output.failure_details(),
        }
        .into());
    }

    Ok(())
}

pub(super) fn spawn_error(
    program: &str,
    args: &[&str],
    step: &str,
    error: io::Error,
) -> anyhow::Error {
    PruneError::ExternalToolFailed {
        step: step.to_string(),
        command: describe_command(program, args),
        details: format!("failed to start process: {}", error),
    }
    .into()
}
