//! Compiler process execution.
//!
//! The builder hands a fully-resolved [`Invocation`] to an [`Executor`]. The
//! production executor spawns the process with the caller's own stdio; tests
//! substitute a closure that records what it was given.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::build::BuildError;

/// A single compiler run, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub program: PathBuf,
  pub args: Vec<OsString>,
  /// The complete environment; nothing else is inherited.
  pub env: Vec<(OsString, OsString)>,
  pub cwd: Option<PathBuf>,
}

impl Invocation {
  /// Returns the value the process will see for `key`.
  pub fn env_var(&self, key: &str) -> Option<&OsString> {
    self.env.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v)
  }
}

/// Runs a compiler invocation to completion.
pub trait Executor {
  fn execute(&self, invocation: &Invocation) -> Result<(), BuildError>;
}

impl<F> Executor for F
where
  F: Fn(&Invocation) -> Result<(), BuildError>,
{
  fn execute(&self, invocation: &Invocation) -> Result<(), BuildError> {
    self(invocation)
  }
}

/// Spawns the compiler as a child process and blocks until it exits.
///
/// Standard streams are inherited so diagnostics reach the terminal as they
/// are produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
  fn execute(&self, invocation: &Invocation) -> Result<(), BuildError> {
    info!(program = %invocation.program.display(), "invoking compiler");

    let mut command = Command::new(&invocation.program);
    command
      .args(&invocation.args)
      .env_clear()
      .envs(invocation.env.iter().map(|(k, v)| (k, v)))
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit());

    if let Some(dir) = &invocation.cwd {
      command.current_dir(dir);
    }

    debug!(args = ?invocation.args, cwd = ?invocation.cwd, "spawning process");

    let status = command.status().map_err(|source| BuildError::Spawn {
      program: invocation.program.clone(),
      source,
    })?;

    if !status.success() {
      return Err(BuildError::CompilerFailed {
        program: invocation.program.clone(),
        code: status.code(),
      });
    }

    Ok(())
  }
}
