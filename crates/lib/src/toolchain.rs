use std::path::{Path, PathBuf};

use crate::consts::COMPILER_NAME;

/// Returns the compiler binary to invoke.
///
/// With a toolchain root override this is `<root>/bin/go`; otherwise the bare
/// name is returned and resolved through `PATH` when the process is spawned.
pub fn compiler_path(go_root: Option<&Path>) -> PathBuf {
  match go_root {
    Some(root) => root
      .join("bin")
      .join(format!("{}{}", COMPILER_NAME, std::env::consts::EXE_SUFFIX)),
    None => PathBuf::from(COMPILER_NAME),
  }
}
