//! The kernel image builder.
//!
//! A build runs in three steps: resolve a scratch directory, prepare the
//! files that live in it, then run the compiler. An owned scratch directory
//! is removed when the build returns, whatever the outcome.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info_span};

use crate::build::args::compiler_args;
use crate::build::execute::{Executor, Invocation, ProcessExecutor};
use crate::build::{BuildError, Config};
use crate::consts::SCRATCH_PREFIX;
use crate::overlay::OverlayDescriptor;
use crate::target::Target;
use crate::toolchain::compiler_path;

/// Scratch space for one build.
enum Scratch {
  /// Created by the builder; deleted when dropped.
  Owned { _dir: TempDir, path: PathBuf },
  /// Supplied by the caller, who owns its lifecycle.
  Borrowed(PathBuf),
}

impl Scratch {
  fn resolve(config: &Config) -> Result<Self, BuildError> {
    if let Some(dir) = config.base_dir_override() {
      std::fs::create_dir_all(dir).map_err(|source| BuildError::Prepare {
        path: dir.clone(),
        source,
      })?;
      return Ok(Scratch::Borrowed(dir.clone()));
    }

    let dir = tempfile::Builder::new()
      .prefix(SCRATCH_PREFIX)
      .tempdir()
      .map_err(BuildError::ScratchDir)?;
    let path = dunce::canonicalize(dir.path()).unwrap_or_else(|_| dir.path().to_path_buf());
    Ok(Scratch::Owned { _dir: dir, path })
  }

  fn path(&self) -> &Path {
    match self {
      Scratch::Owned { path, .. } => path,
      Scratch::Borrowed(path) => path,
    }
  }
}

/// Builds one kernel image from a [`Config`].
///
/// A builder is consumed by [`Builder::build`]; construct a new one per build.
pub struct Builder<E = ProcessExecutor> {
  config: Config,
  executor: E,
}

impl Builder<ProcessExecutor> {
  pub fn new(config: Config) -> Self {
    Self::with_executor(config, ProcessExecutor)
  }
}

impl<E: Executor> Builder<E> {
  /// Creates a builder that runs the compiler through `executor`.
  pub fn with_executor(config: Config, executor: E) -> Self {
    Self { config, executor }
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Prepares scratch space and runs the compiler.
  ///
  /// Returns the first error encountered. An owned scratch directory is
  /// removed before this returns, on every path.
  pub fn build(self) -> Result<(), BuildError> {
    let span = info_span!(
      "build",
      test = self.config.build_test,
      kernel_version = self.config.kernel_version.as_deref().unwrap_or("unset"),
    );
    let _enter = span.enter();

    let scratch = Scratch::resolve(&self.config)?;
    debug!(
      path = %scratch.path().display(),
      owned = matches!(scratch, Scratch::Owned { .. }),
      "resolved scratch directory"
    );

    let overlay = self.prepare(scratch.path())?;
    self.build_pkg(&overlay)
    // `scratch` drops here, removing an owned directory
  }

  /// Materializes everything the compiler reads from the scratch directory.
  fn prepare(&self, scratch: &Path) -> Result<PathBuf, BuildError> {
    OverlayDescriptor::new(self.config.overlay.clone()).write_to(scratch)
  }

  fn build_pkg(&self, overlay: &Path) -> Result<(), BuildError> {
    let invocation = self.invocation(overlay, std::env::vars_os());
    self.executor.execute(&invocation)
  }

  /// Resolves the compiler invocation against an ambient environment.
  pub fn invocation<I, K, V>(&self, overlay: &Path, ambient: I) -> Invocation
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<std::ffi::OsString>,
    V: Into<std::ffi::OsString>,
  {
    let env = Target::kernel().apply_env(ambient);
    let goflags = env
      .iter()
      .find(|(k, _)| k == "GOFLAGS")
      .and_then(|(_, v)| v.to_str())
      .map(str::to_string);

    Invocation {
      program: compiler_path(self.config.go_root.as_deref()),
      args: compiler_args(&self.config, overlay, goflags.as_deref()),
      env,
      cwd: self.config.work_dir.clone().filter(|p| !p.as_os_str().is_empty()),
    }
  }
}
