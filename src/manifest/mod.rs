//! Icon discovery and key derivation broken into focused submodules for easier testing.

mod keys;
mod scanning;

pub use keys::{
    derive_resource_key, file_stem, find_collisions, is_valid_css_class, is_valid_identifier,
    sanitize_class_name, sanitize_identifier,
};
pub use scanning::collect_file_names;
