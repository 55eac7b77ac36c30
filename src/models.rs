//! Data structures produced while generating the icon manifest.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{ManifestError, ManifestResult};

/// Base name of one file discovered beneath the icon root, extension included.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileNameEntry(String);

impl FileNameEntry {
  /// Wrap a discovered file name.
  pub fn new(name: impl Into<String>) -> Self {
    Self(name.into())
  }

  /// Borrow the file name.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for FileNameEntry {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl From<String> for FileNameEntry {
  fn from(value: String) -> Self {
    Self(value)
  }
}

impl fmt::Display for FileNameEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Key derived from a file name, used as CSS selector and generated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceKey {
  /// CSS class name, also emitted as the field's string value.
  pub class_name: String,
  /// Upper-cased field identifier in the generated class.
  pub identifier: String,
}

/// Which derived value two or more entries share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CollisionKind {
  /// Entries render the same CSS selector.
  ClassName,
  /// Entries render the same static field name.
  Identifier,
}

impl fmt::Display for CollisionKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::ClassName => f.write_str("class name"),
      Self::Identifier => f.write_str("identifier"),
    }
  }
}

/// A derived value claimed by more than one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
  /// Which derived value clashes.
  pub kind: CollisionKind,
  /// The shared value.
  pub value: String,
  /// File names producing the value, in render order.
  pub entries: Vec<String>,
}

impl fmt::Display for KeyCollision {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} '{}' produced by {}",
      self.kind,
      self.value,
      self.entries.join(", ")
    )
  }
}

/// One rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
  /// Destination path.
  pub path: PathBuf,
  /// Complete file contents.
  pub contents: String,
}

impl GeneratedArtifact {
  /// Overwrite the destination, creating parent directories on demand.
  pub fn write(&self) -> ManifestResult<()> {
    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent).map_err(|err| ManifestError::io(parent, err))?;
    }
    fs::write(&self.path, &self.contents).map_err(|err| ManifestError::io(&self.path, err))?;
    info!(
      "wrote {} ({} bytes)",
      self.path.display(),
      self.contents.len()
    );
    Ok(())
  }

  /// Returns `true` when the file on disk already matches the rendered contents.
  pub fn is_current(&self) -> ManifestResult<bool> {
    match fs::read(&self.path) {
      Ok(existing) => Ok(existing == self.contents.as_bytes()),
      Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
      Err(err) => Err(ManifestError::io(&self.path, err)),
    }
  }
}

/// Complete manifest produced by [`crate::ManifestBuilder`].
#[derive(Debug, Clone)]
pub struct ManifestArtifacts {
  /// File names the artifacts were generated from, in render order.
  pub entries: Vec<FileNameEntry>,
  /// Themed stylesheet.
  pub stylesheet: GeneratedArtifact,
  /// Resource key class source.
  pub code: GeneratedArtifact,
  /// Collisions tolerated under the `warn` policy.
  pub collisions: Vec<KeyCollision>,
}

impl ManifestArtifacts {
  /// Write the stylesheet, then the class source.
  pub fn write(&self) -> ManifestResult<()> {
    self.stylesheet.write()?;
    self.code.write()
  }

  /// Artifacts whose on-disk contents differ from the rendered output.
  pub fn stale_paths(&self) -> ManifestResult<Vec<&Path>> {
    let mut stale = Vec::new();
    for artifact in [&self.stylesheet, &self.code] {
      if !artifact.is_current()? {
        stale.push(artifact.path.as_path());
      }
    }
    Ok(stale)
  }
}
