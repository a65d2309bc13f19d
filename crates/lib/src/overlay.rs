//! Overlay descriptors.
//!
//! An overlay tells the compiler to read a replacement file wherever it would
//! otherwise read a given source file. The caller's tree is never modified;
//! the substitution exists only for the duration of one build.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::build::BuildError;
use crate::consts::OVERLAY_FILENAME;

/// The toolchain's JSON overlay format: `{"Replace": {"<file>": "<replacement>"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayDescriptor {
  #[serde(rename = "Replace")]
  pub replace: BTreeMap<PathBuf, PathBuf>,
}

impl OverlayDescriptor {
  pub fn new(replace: BTreeMap<PathBuf, PathBuf>) -> Self {
    Self { replace }
  }

  /// Location of the descriptor inside a scratch directory.
  pub fn path_in(dir: &Path) -> PathBuf {
    dir.join(OVERLAY_FILENAME)
  }

  /// Serializes the descriptor into `dir` and returns the file path.
  pub fn write_to(&self, dir: &Path) -> Result<PathBuf, BuildError> {
    let path = Self::path_in(dir);
    let json = serde_json::to_string_pretty(self).map_err(BuildError::Overlay)?;
    fs::write(&path, json).map_err(|source| BuildError::Prepare {
      path: path.clone(),
      source,
    })?;

    debug!(path = %path.display(), entries = self.replace.len(), "wrote overlay descriptor");
    Ok(path)
  }
}
