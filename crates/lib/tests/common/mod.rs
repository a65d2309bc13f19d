//! Shared helpers for prana-lib integration tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// A shell script standing in for the go toolchain.
///
/// It writes its arguments, a few environment variables and a copy of the
/// overlay descriptor under `record/`, then exits with a fixed code.
pub struct FakeToolchain {
  pub go_root: PathBuf,
  record: PathBuf,
}

impl FakeToolchain {
  pub fn install(root: &Path, exit_code: i32) -> Self {
    let go_root = root.join("go");
    let bin = go_root.join("bin");
    let record = root.join("record");
    fs::create_dir_all(&bin).unwrap();
    fs::create_dir_all(&record).unwrap();

    let r = record.display();
    let script = format!(
      r#"#!/bin/sh
printf '%s\n' "$@" > "{r}/args"
printf 'GOOS=%s\nGOARCH=%s\nCGO_ENABLED=%s\nPRANA_PASSTHROUGH=%s\n' "$GOOS" "$GOARCH" "$CGO_ENABLED" "$PRANA_PASSTHROUGH" > "{r}/env"
prev=""
for arg in "$@"; do
  if [ "$prev" = "-overlay" ]; then
    printf '%s\n' "$arg" > "{r}/overlay_path"
    [ -f "$arg" ] && printf 'yes\n' > "{r}/overlay_present"
  fi
  prev="$arg"
done
exit {exit_code}
"#
    );

    let program = bin.join("go");
    fs::write(&program, script).unwrap();
    fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();

    Self { go_root, record }
  }

  pub fn args(&self) -> Vec<String> {
    self.lines("args")
  }

  pub fn env(&self) -> Vec<String> {
    self.lines("env")
  }

  pub fn overlay_path(&self) -> PathBuf {
    PathBuf::from(self.lines("overlay_path").concat())
  }

  pub fn overlay_was_present(&self) -> bool {
    self.record.join("overlay_present").exists()
  }

  fn lines(&self, name: &str) -> Vec<String> {
    fs::read_to_string(self.record.join(name))
      .unwrap_or_default()
      .lines()
      .map(str::to_string)
      .collect()
  }
}
