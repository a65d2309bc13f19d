//! Test utilities for prana-lib.
//!
//! Helpers for tests that need to run a process without a real toolchain
//! installed.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::build::Invocation;

/// Returns an invocation that runs `script` through `/bin/sh` with an empty environment.
///
/// Only shell builtins are reachable, since `PATH` is unset.
pub fn shell_invocation(script: &str) -> Invocation {
  Invocation {
    program: PathBuf::from("/bin/sh"),
    args: vec![OsString::from("-c"), OsString::from(script)],
    env: Vec::new(),
    cwd: None,
  }
}
