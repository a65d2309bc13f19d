//! Compiler argument assembly.
//!
//! Order matters to the toolchain: mode verb, tags, linker flags, overlay,
//! then the caller's own arguments. The caller can add to the builder's
//! directives but they always appear first.

use std::ffi::OsString;
use std::path::Path;

use tracing::debug;

use crate::build::Config;
use crate::build::tags::{TagPlan, plan_tags};
use crate::consts::{KERNEL_BUILD_TAG, KERNEL_ENTRY_SYMBOL, KERNEL_LOAD_ADDRESS};

/// What the compiler produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
  /// A bootable executable.
  Executable,
  /// A test harness binary, compiled but not run.
  TestHarness,
}

impl BuildMode {
  pub fn from_config(config: &Config) -> Self {
    if config.build_test {
      Self::TestHarness
    } else {
      Self::Executable
    }
  }

  /// Leading arguments selecting this mode.
  pub fn verb(&self) -> &'static [&'static str] {
    match self {
      Self::Executable => &["build"],
      Self::TestHarness => &["test", "-c"],
    }
  }
}

/// Linker flags that move the entry point to the kernel bootstrap routine and
/// link the image at its physical load address.
pub fn kernel_ldflags() -> String {
  format!("-E {} -T {:#x}", KERNEL_ENTRY_SYMBOL, KERNEL_LOAD_ADDRESS)
}

/// Assembles the full compiler argument list.
///
/// `goflags` is the ambient `GOFLAGS` value, consulted only to decide how the
/// kernel build tag is supplied.
pub fn compiler_args(config: &Config, overlay: &Path, goflags: Option<&str>) -> Vec<OsString> {
  let mode = BuildMode::from_config(config);
  let mut args: Vec<OsString> = mode.verb().iter().map(OsString::from).collect();

  let mut caller_args = config.go_args.clone();
  match plan_tags(&caller_args, goflags, KERNEL_BUILD_TAG) {
    TagPlan::Present => {}
    TagPlan::Merge { index, value } => caller_args[index] = value,
    TagPlan::Inject(value) => {
      args.push("-tags".into());
      args.push(value.into());
    }
  }

  args.push("-ldflags".into());
  args.push(kernel_ldflags().into());
  args.push("-overlay".into());
  args.push(overlay.into());
  args.extend(caller_args.into_iter().map(OsString::from));

  debug!(?mode, args = ?args, "assembled compiler arguments");
  args
}
