//! Manifest orchestrator: scan the icon tree, render both artifacts and write them.

use log::{info, warn};

use crate::config::{CollisionPolicy, ManifestConfig};
use crate::error::{ManifestError, ManifestResult};
use crate::manifest::{collect_file_names, find_collisions};
use crate::models::{GeneratedArtifact, ManifestArtifacts};
use crate::render::{render_code, render_css};

/// High-level helper generating the themed stylesheet and resource key class.
pub struct ManifestBuilder<'a> {
  config: &'a ManifestConfig,
}

impl<'a> ManifestBuilder<'a> {
  /// Create a builder for the provided configuration.
  pub fn new(config: &'a ManifestConfig) -> Self {
    Self { config }
  }

  /// Scan the icon root and render both artifacts in memory.
  ///
  /// Nothing is written; under [`CollisionPolicy::Error`] a clash aborts here so that a failed
  /// run never leaves half-updated outputs behind.
  pub fn build(&self) -> ManifestResult<ManifestArtifacts> {
    let config = self.config;
    config.validate()?;

    let mut entries = collect_file_names(&config.root_dir)?;
    if config.sort_entries {
      entries.sort();
    }

    let collisions = find_collisions(&entries);
    if !collisions.is_empty() {
      match config.on_collision {
        CollisionPolicy::Error => return Err(ManifestError::KeyCollision { collisions }),
        CollisionPolicy::Warn => {
          for collision in &collisions {
            warn!("resource key collision: {collision}");
          }
        }
      }
    }

    let stylesheet = GeneratedArtifact {
      path: config.css_output.clone(),
      contents: render_css(&entries, &config.css_template()),
    };
    let code = GeneratedArtifact {
      path: config.code_output.clone(),
      contents: render_code(&entries, &config.code_template()),
    };

    info!(
      "rendered {} resource key(s) from {}",
      entries.len(),
      config.root_dir.display()
    );

    Ok(ManifestArtifacts {
      entries,
      stylesheet,
      code,
      collisions,
    })
  }

  /// Build the manifest and overwrite both output files.
  pub fn run(&self) -> ManifestResult<ManifestArtifacts> {
    let artifacts = self.build()?;
    artifacts.write()?;
    Ok(artifacts)
  }
}
