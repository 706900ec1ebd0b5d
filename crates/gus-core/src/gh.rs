//! External tool invoker for the `gh` CLI
//!
//! All network access and authentication are delegated to `gh`. Every call
//! spawns exactly one process and blocks until it exits; retries are the
//! caller's business.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use thiserror::Error;
use tracing::{debug, trace};

/// Default program name looked up on `PATH`
pub const GH_PROGRAM: &str = "gh";

/// Captured output of a successful `gh` run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GhOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl GhOutput {
    pub fn new(stdout: impl Into<Vec<u8>>, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// Errors raised while locating or running `gh`
#[derive(Debug, Error)]
pub enum GhError {
    /// The binary could not be located
    #[error("could not find {program}. Is it installed? Install from https://cli.github.com/ ({source})")]
    NotFound {
        program: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The process could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited unsuccessfully
    #[error("{program} command failed ({status}), stderr: {stderr}")]
    ExecutionFailed {
        program: String,
        status: String,
        stderr: String,
    },
}

impl GhError {
    /// Captured stderr of a failed run, if any
    pub fn stderr(&self) -> Option<&str> {
        match self {
            GhError::ExecutionFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GhError::NotFound { .. })
    }
}

/// Runs `gh` with an argument vector
///
/// Implemented by [`GhCli`] for real processes; tests substitute a fake that
/// returns canned output.
pub trait GhRunner: std::fmt::Debug {
    /// Run and capture stdout/stderr. Non-zero exit is an error.
    fn run(&self, args: &[String]) -> Result<GhOutput, GhError>;

    /// Run with the caller's stdin/stdout/stderr attached, for flows that
    /// need a human (e.g. `gh auth refresh`). Output is not captured.
    fn run_interactive(&self, args: &[String]) -> Result<(), GhError>;
}

impl<T: GhRunner + ?Sized> GhRunner for &T {
    fn run(&self, args: &[String]) -> Result<GhOutput, GhError> {
        (**self).run(args)
    }

    fn run_interactive(&self, args: &[String]) -> Result<(), GhError> {
        (**self).run_interactive(args)
    }
}

/// [`GhRunner`] backed by the real `gh` executable
#[derive(Debug, Clone)]
pub struct GhCli {
    program: PathBuf,
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GhCli {
    /// Look `gh` up on `PATH` at each call
    pub fn new() -> Self {
        Self {
            program: PathBuf::from(GH_PROGRAM),
        }
    }

    /// Use an explicit program name or path instead of `gh`
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    /// Resolve the program to an executable path
    fn locate(&self) -> Result<PathBuf, GhError> {
        which::which(&self.program).map_err(|e| GhError::NotFound {
            program: self.program_name(),
            source: Box::new(e),
        })
    }

    fn spawn_error(&self, e: std::io::Error) -> GhError {
        if e.kind() == std::io::ErrorKind::NotFound {
            GhError::NotFound {
                program: self.program_name(),
                source: Box::new(e),
            }
        } else {
            GhError::Spawn {
                program: self.program_name(),
                source: e,
            }
        }
    }
}

impl GhRunner for GhCli {
    fn run(&self, args: &[String]) -> Result<GhOutput, GhError> {
        let bin = self.locate()?;
        debug!(bin = %bin.display(), args = %display_args(args), "running gh");

        let output = Command::new(&bin)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        trace!(status = %output.status, stdout_len = output.stdout.len(), "gh exited");

        if !output.status.success() {
            return Err(GhError::ExecutionFailed {
                program: self.program_name(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        Ok(GhOutput {
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }

    fn run_interactive(&self, args: &[String]) -> Result<(), GhError> {
        let bin = self.locate()?;
        debug!(bin = %bin.display(), args = %display_args(args), "running gh interactively");

        // Inherited handles belong to the child only until it is reaped.
        let status = Command::new(&bin)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| self.spawn_error(e))?;

        if !status.success() {
            return Err(GhError::ExecutionFailed {
                program: self.program_name(),
                status: status.to_string(),
                stderr: String::new(),
            });
        }
        Ok(())
    }
}

/// Render an argument vector for logs with GraphQL documents elided
pub(crate) fn display_args(args: &[String]) -> String {
    args.iter()
        .map(|arg| match arg.strip_prefix("query=") {
            Some(query) => format!("query=<{} bytes>", query.len()),
            None => arg.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
