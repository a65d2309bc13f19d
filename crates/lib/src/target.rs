//! The platform kernel images are cross-compiled for.
//!
//! The host's own OS and architecture never leak into a build: every image
//! targets the same freestanding environment, expressed here in the
//! toolchain's own vocabulary.

use std::ffi::OsString;
use std::fmt;

/// Operating system identifiers understood by the go toolchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetOs {
  Linux,
}

impl TargetOs {
  /// Returns the `GOOS` value for this OS
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
    }
  }
}

impl fmt::Display for TargetOs {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// CPU architecture identifiers understood by the go toolchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetArch {
  Amd64,
}

impl TargetArch {
  /// Returns the `GOARCH` value for this architecture
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Amd64 => "amd64",
    }
  }
}

impl fmt::Display for TargetArch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Target platform combining OS and architecture (e.g., "linux/amd64")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
  pub os: TargetOs,
  pub arch: TargetArch,
}

impl Target {
  pub const OS_VAR: &'static str = "GOOS";
  pub const ARCH_VAR: &'static str = "GOARCH";
  pub const CGO_VAR: &'static str = "CGO_ENABLED";

  /// The platform every kernel image is built for
  pub fn kernel() -> Self {
    Self {
      os: TargetOs::Linux,
      arch: TargetArch::Amd64,
    }
  }

  /// Environment variables that pin the toolchain to this target.
  ///
  /// Native interop is always disabled; there is no C runtime to link against.
  pub fn env_overrides(&self) -> [(&'static str, &'static str); 3] {
    [
      (Self::OS_VAR, self.os.as_str()),
      (Self::ARCH_VAR, self.arch.as_str()),
      (Self::CGO_VAR, "0"),
    ]
  }

  /// Copies `ambient` and forces the target variables over whatever it held.
  ///
  /// The ambient environment itself is never touched.
  pub fn apply_env<I, K, V>(&self, ambient: I) -> Vec<(OsString, OsString)>
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<OsString>,
    V: Into<OsString>,
  {
    let overrides = self.env_overrides();
    let mut env: Vec<(OsString, OsString)> = ambient
      .into_iter()
      .map(|(k, v)| (k.into(), v.into()))
      .filter(|(k, _)| !overrides.iter().any(|(key, _)| k == key))
      .collect();
    env.extend(overrides.iter().map(|(k, v)| (OsString::from(k), OsString::from(v))));
    env
  }
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.os, self.arch)
  }
}
