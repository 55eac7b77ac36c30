#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod render;

pub use builder::ManifestBuilder;
pub use config::{CollisionPolicy, ManifestConfig};
pub use error::{ManifestError, ManifestResult};
pub use models::{FileNameEntry, GeneratedArtifact, ManifestArtifacts, ResourceKey};
