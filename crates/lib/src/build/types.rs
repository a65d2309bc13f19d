//! Types for kernel image builds.
//!
//! This module defines the caller-facing configuration and the error type
//! returned from every stage of a build.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// What the caller wants built.
///
/// Immutable for the duration of one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
  /// Directory the compiler runs in. Inherits the current directory when unset.
  pub work_dir: Option<PathBuf>,

  /// Toolchain installation used to locate the compiler binary.
  pub go_root: Option<PathBuf>,

  /// Scratch directory owned by the caller.
  ///
  /// When unset, the builder creates a temporary one and removes it when the
  /// build returns.
  pub base_dir: Option<PathBuf>,

  /// Build a test harness binary instead of an executable.
  pub build_test: bool,

  /// Kernel compatibility marker, carried through untouched.
  pub kernel_version: Option<String>,

  /// Arguments appended after the builder's own, in order.
  pub go_args: Vec<String>,

  /// Source files to substitute for this build only (file -> replacement).
  pub overlay: BTreeMap<PathBuf, PathBuf>,
}

impl Config {
  pub fn with_work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.work_dir = Some(dir.into());
    self
  }

  pub fn with_go_root(mut self, root: impl Into<PathBuf>) -> Self {
    self.go_root = Some(root.into());
    self
  }

  pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.base_dir = Some(dir.into());
    self
  }

  pub fn with_build_test(mut self, build_test: bool) -> Self {
    self.build_test = build_test;
    self
  }

  pub fn with_kernel_version(mut self, version: impl Into<String>) -> Self {
    self.kernel_version = Some(version.into());
    self
  }

  pub fn with_go_args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.go_args = args.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_replacement(mut self, file: impl Into<PathBuf>, replacement: impl Into<PathBuf>) -> Self {
    self.overlay.insert(file.into(), replacement.into());
    self
  }

  /// Returns the scratch directory override, treating an empty path as unset.
  pub(crate) fn base_dir_override(&self) -> Option<&PathBuf> {
    self.base_dir.as_ref().filter(|p| !p.as_os_str().is_empty())
  }
}

/// Errors that can occur while building a kernel image.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The temporary scratch directory could not be created.
  #[error("failed to create scratch directory: {0}")]
  ScratchDir(#[source] io::Error),

  /// Scratch-dependent preparation failed before the compiler ran.
  #[error("failed to prepare {path}: {source}")]
  Prepare {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The overlay descriptor could not be serialized.
  #[error("failed to encode overlay descriptor: {0}")]
  Overlay(#[source] serde_json::Error),

  /// The compiler process could not be started.
  #[error("failed to start {program}: {source}")]
  Spawn {
    program: PathBuf,
    #[source]
    source: io::Error,
  },

  /// The compiler ran and exited unsuccessfully.
  #[error("{program} exited with status {}", describe_status(.code))]
  CompilerFailed { program: PathBuf, code: Option<i32> },
}

impl BuildError {
  /// Exit code of the compiler, when it ran and reported one.
  pub fn exit_code(&self) -> Option<i32> {
    match self {
      BuildError::CompilerFailed { code, .. } => *code,
      _ => None,
    }
  }
}

fn describe_status(code: &Option<i32>) -> String {
  match code {
    Some(code) => code.to_string(),
    None => "unknown".to_string(),
  }
}
