//! Shared test helpers for CLI integration tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own temporary directory holding a fake go toolchain
/// that records how it was invoked.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Create an environment whose compiler exits with `exit_code`.
  pub fn with_compiler(exit_code: i32) -> Self {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("go").join("bin");
    fs::create_dir_all(&bin).unwrap();
    fs::create_dir_all(temp.path().join("record")).unwrap();

    let record = temp.path().join("record");
    let r = record.display();
    let script = format!(
      r#"#!/bin/sh
printf '%s\n' "$@" > "{r}/args"
printf 'GOOS=%s\nGOARCH=%s\nCGO_ENABLED=%s\n' "$GOOS" "$GOARCH" "$CGO_ENABLED" > "{r}/env"
pwd > "{r}/cwd"
echo "fake compiler diagnostics" >&2
exit {exit_code}
"#
    );
    let program = bin.join("go");
    fs::write(&program, script).unwrap();
    fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();

    Self { temp }
  }

  pub fn go_root(&self) -> PathBuf {
    self.temp.path().join("go")
  }

  pub fn path(&self) -> &Path {
    self.temp.path()
  }

  /// Arguments the fake compiler received, one per line.
  pub fn recorded(&self, name: &str) -> Vec<String> {
    fs::read_to_string(self.temp.path().join("record").join(name))
      .unwrap_or_default()
      .lines()
      .map(str::to_string)
      .collect()
  }

  /// Get a pre-configured `prana build` command using the fake toolchain.
  pub fn build_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("prana");
    cmd.arg("build").arg("--goroot").arg(self.go_root());
    cmd
  }
}
