//! Error taxonomy shared by scanning, configuration and artifact output.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::KeyCollision;

/// Result alias used across the crate.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Failures raised while generating the icon manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
  /// Reading the icon tree or writing an artifact failed.
  #[error("failed to access {}: {source}", path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },

  /// The configured root exists but is not a directory.
  #[error("icon root {} is not a directory", path.display())]
  NotADirectory {
    /// Offending root path.
    path: PathBuf,
  },

  /// The configuration file exists but could not be parsed.
  #[error("failed to parse {}: {source}", path.display())]
  Config {
    /// Configuration file path.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },

  /// The configured class name cannot be used as a TypeScript identifier.
  #[error("class name '{name}' is not a valid identifier")]
  InvalidClassName {
    /// Rejected class name.
    name: String,
  },

  /// Several files map onto the same resource key or field identifier.
  #[error("{} resource key collision(s): {}", collisions.len(), describe(collisions))]
  KeyCollision {
    /// Every collision found in the scanned tree.
    collisions: Vec<KeyCollision>,
  },
}

impl ManifestError {
  pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
    Self::Io {
      path: path.to_path_buf(),
      source,
    }
  }
}

fn describe(collisions: &[KeyCollision]) -> String {
  collisions
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join("; ")
}
