// src/system/executor.rs

//! Runs the final argument vector as a child process.

use std::io::ErrorKind;
use std::process::{Command as StdCommand, ExitStatus, Stdio};
use thiserror::Error;

/// Errors raised before the child process could run.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The expanded argument vector was empty.
    #[error("No command specified to run.")]
    EmptyCommand,
    /// The child could not be started.
    #[error("Command '{program}' could not be executed: {source}")]
    Spawn {
        /// The program that failed to start.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ExecutionError {
    /// The exit code a shell would report for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Spawn { source, .. } if source.kind() == ErrorKind::NotFound => 127,
            Self::Spawn { .. } => 126,
            Self::EmptyCommand => 1,
        }
    }
}

/// Runs a final argument vector and reports the child's exit code.
pub trait Runner {
    /// Runs `argv` (program first) and returns its exit code.
    fn run(&self, argv: &[String]) -> Result<i32, ExecutionError>;
}

/// Spawns real child processes with inherited standard streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    /// Blocks until the child exits. The child's exit code is returned as-is,
    /// whether it is zero or not.
    fn run(&self, argv: &[String]) -> Result<i32, ExecutionError> {
        let (program, args) = argv.split_first().ok_or(ExecutionError::EmptyCommand)?;

        let status = StdCommand::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ExecutionError::Spawn {
                program: program.clone(),
                source,
            })?;

        let code = exit_code_of(status);
        log::debug!("'{}' exited with code {}", program, code);
        Ok(code)
    }
}

#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    // Killed by a signal: report it the way a shell does.
    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
