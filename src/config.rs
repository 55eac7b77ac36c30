//! Generator configuration replacing the hard-coded paths of the manifest script.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{ManifestError, ManifestResult};
use crate::manifest::is_valid_identifier;
use crate::render::{CodeTemplate, CssTemplate};

/// Configuration file name searched for by [`ManifestConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "icon-manifest.config.json";

/// What to do when several files derive the same class name or identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Abort before any artifact is written.
    #[default]
    Error,
    /// Log each collision and render every entry anyway.
    Warn,
}

/// Discoverable configuration describing the icon tree and generated outputs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Directory scanned recursively for icon files.
    pub root_dir: PathBuf,
    /// Path the themed stylesheet is written to.
    pub css_output: PathBuf,
    /// Path the resource key class is written to.
    pub code_output: PathBuf,
    /// Name of the exported class.
    pub class_name: String,
    /// URL prefix of images used by the dark themes.
    pub light_url_prefix: String,
    /// URL prefix of images used by the light theme.
    pub dark_url_prefix: String,
    /// Optional module imported at the top of the class source.
    pub stylesheet_import: Option<String>,
    /// Behaviour when derived keys clash.
    pub on_collision: CollisionPolicy,
    /// Sort file names so output does not depend on directory traversal order.
    pub sort_entries: bool,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            root_dir: "./light/component".into(),
            css_output: "test.css".into(),
            code_output: "testCode.ts".into(),
            class_name: "PropertyResource".into(),
            light_url_prefix: "light/component".into(),
            dark_url_prefix: "dark/component".into(),
            stylesheet_import: None,
            on_collision: CollisionPolicy::Error,
            sort_entries: true,
        }
    }
}

impl ManifestConfig {
    /// Load the configuration file from `dir`, falling back to defaults when it is absent.
    pub fn discover(dir: &Path) -> ManifestResult<Self> {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        match fs::metadata(&candidate) {
            Ok(_) => Self::from_path(&candidate),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no {} in {}, using defaults", DEFAULT_CONFIG_FILE, dir.display());
                Ok(Self::default())
            }
            Err(err) => Err(ManifestError::io(&candidate, err)),
        }
    }

    /// Read configuration from a specific JSON file.
    ///
    /// Relative paths inside the file are resolved against the file's directory.
    pub fn from_path(path: &Path) -> ManifestResult<Self> {
        let content = fs::read_to_string(path).map_err(|err| ManifestError::io(path, err))?;
        let mut config: Self =
            serde_json::from_str(&content).map_err(|source| ManifestError::Config {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(base) = path.parent().filter(|base| !base.as_os_str().is_empty()) {
            config.root_dir = base.join(&config.root_dir);
            config.css_output = base.join(&config.css_output);
            config.code_output = base.join(&config.code_output);
        }

        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reject settings that would render unusable output.
    pub fn validate(&self) -> ManifestResult<()> {
        if !is_valid_identifier(&self.class_name) {
            return Err(ManifestError::InvalidClassName {
                name: self.class_name.clone(),
            });
        }
        Ok(())
    }

    /// Stylesheet template parameters.
    pub fn css_template(&self) -> CssTemplate<'_> {
        CssTemplate {
            light_url_prefix: &self.light_url_prefix,
            dark_url_prefix: &self.dark_url_prefix,
        }
    }

    /// Class template parameters.
    pub fn code_template(&self) -> CodeTemplate<'_> {
        CodeTemplate {
            class_name: &self.class_name,
            stylesheet_import: self.stylesheet_import.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_the_legacy_constants() {
        let config = ManifestConfig::default();
        assert_eq!(config.root_dir, PathBuf::from("./light/component"));
        assert_eq!(config.css_output, PathBuf::from("test.css"));
        assert_eq!(config.code_output, PathBuf::from("testCode.ts"));
        assert_eq!(config.class_name, "PropertyResource");
        assert_eq!(config.on_collision, CollisionPolicy::Error);
        assert_eq!(config.css_template(), CssTemplate::default());
        assert_eq!(config.code_template(), CodeTemplate::default());
    }

    #[test]
    fn discover_returns_defaults_for_missing_file() {
        let dir = tempdir().unwrap();
        let config = ManifestConfig::discover(dir.path()).unwrap();
        assert_eq!(config, ManifestConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{"class_name": "IconResource", "on_collision": "warn"}"#,
        )
        .unwrap();

        let config = ManifestConfig::discover(dir.path()).unwrap();

        assert_eq!(config.class_name, "IconResource");
        assert_eq!(config.on_collision, CollisionPolicy::Warn);
        assert_eq!(config.light_url_prefix, "light/component");
        assert!(config.sort_entries);
    }

    #[test]
    fn resolves_relative_paths_against_config_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            r#"{"root_dir": "icons", "css_output": "out/icons.css", "code_output": "/abs/Icons.ts"}"#,
        )
        .unwrap();

        let config = ManifestConfig::from_path(&path).unwrap();

        assert_eq!(config.root_dir, dir.path().join("icons"));
        assert_eq!(config.css_output, dir.path().join("out/icons.css"));
        assert_eq!(config.code_output, PathBuf::from("/abs/Icons.ts"));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();

        assert!(matches!(
            ManifestConfig::discover(dir.path()),
            Err(ManifestError::Config { .. })
        ));
    }

    #[test]
    fn explicit_missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            ManifestConfig::from_path(&dir.path().join("missing.json")),
            Err(ManifestError::Io { .. })
        ));
    }

    #[test]
    fn rejects_invalid_class_names() {
        let config = ManifestConfig {
            class_name: "property-resource".into(),
            ..ManifestConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ManifestError::InvalidClassName { .. })
        ));
        assert!(ManifestConfig::default().validate().is_ok());
    }
}
