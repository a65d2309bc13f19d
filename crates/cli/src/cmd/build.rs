//! Implementation of the `prana build` command.
//!
//! This command turns its flags into a build configuration and runs a single
//! build. Compiler output goes straight to the terminal.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use prana_lib::{Builder, Config};

use crate::output::{format_duration, print_success};

#[derive(Debug, Args)]
pub struct BuildArgs {
  /// Build a test harness binary instead of an executable
  #[arg(short, long)]
  pub test: bool,

  /// Directory to run the compiler in
  #[arg(short = 'C', long)]
  pub work_dir: Option<PathBuf>,

  /// Toolchain root to resolve the compiler from (default: go on PATH)
  #[arg(long)]
  pub goroot: Option<PathBuf>,

  /// Scratch directory to use instead of a temporary one; left in place afterwards
  #[arg(long)]
  pub basedir: Option<PathBuf>,

  /// Kernel compatibility marker
  #[arg(long)]
  pub kernel_version: Option<String>,

  /// Substitute a source file for this build only (FILE=REPLACEMENT)
  #[arg(long = "replace", value_name = "FILE=REPLACEMENT", value_parser = parse_replacement)]
  pub replacements: Vec<(PathBuf, PathBuf)>,

  /// Arguments passed to the compiler after prana's own
  #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
  pub go_args: Vec<String>,
}

impl BuildArgs {
  pub fn into_config(self) -> Config {
    Config {
      work_dir: self.work_dir,
      go_root: self.goroot,
      base_dir: self.basedir,
      build_test: self.test,
      kernel_version: self.kernel_version,
      go_args: self.go_args,
      overlay: self.replacements.into_iter().collect(),
    }
  }
}

fn parse_replacement(value: &str) -> Result<(PathBuf, PathBuf), String> {
  match value.split_once('=') {
    Some((file, replacement)) if !file.is_empty() => Ok((PathBuf::from(file), PathBuf::from(replacement))),
    _ => Err(format!("expected FILE=REPLACEMENT, got '{}'", value)),
  }
}

/// Execute the build command.
pub fn cmd_build(args: BuildArgs) -> Result<()> {
  let config = args.into_config();
  let what = if config.build_test { "test harness" } else { "kernel image" };
  debug!(?config, "starting build");

  let started = Instant::now();
  Builder::new(config)
    .build()
    .with_context(|| format!("Failed to build {}", what))?;

  print_success(&format!("Built {} in {}", what, format_duration(started.elapsed())));
  Ok(())
}
