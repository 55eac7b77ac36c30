//! Resource key derivation and validation.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::models::{CollisionKind, FileNameEntry, KeyCollision, ResourceKey};

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("invalid identifier regex")
    })
}

fn css_class_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^-?[_A-Za-z][_A-Za-z0-9-]*$").expect("invalid CSS class regex")
    })
}

/// Returns `true` when `value` can be used as a CSS class selector.
pub fn is_valid_css_class(value: &str) -> bool {
    css_class_pattern().is_match(value)
}

/// Returns `true` when `value` can be used as a TypeScript identifier.
pub fn is_valid_identifier(value: &str) -> bool {
    identifier_pattern().is_match(value)
}

/// Strip the final extension from a file name.
///
/// A leading dot is part of the name rather than an extension delimiter, so `.hidden` is
/// returned unchanged while `icon.min.svg` becomes `icon.min`.
pub fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) if index > 0 => &name[..index],
        _ => name,
    }
}

/// Replace every character that cannot appear in a CSS class selector with `_`.
///
/// Names that would still not parse as a class selector, such as `3d` or `-1`, gain a leading
/// `_`.
pub fn sanitize_class_name(stem: &str) -> String {
    let base = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>();

    if is_valid_css_class(&base) {
        base
    } else {
        format!("_{base}")
    }
}

/// Generate the upper-cased static field name for a class name.
pub fn sanitize_identifier(class_name: &str) -> String {
    let mut base = class_name
        .to_uppercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>();

    while base.contains("__") {
        base = base.replace("__", "_");
    }

    if base.is_empty() || base.starts_with(|c: char| c.is_ascii_digit()) {
        base = format!("_{}", base);
    }

    base
}

/// Derive the CSS class name and field identifier for a discovered file.
pub fn derive_resource_key(entry: &FileNameEntry) -> ResourceKey {
    let class_name = sanitize_class_name(file_stem(entry.as_str()));
    let identifier = sanitize_identifier(&class_name);
    ResourceKey {
        class_name,
        identifier,
    }
}

/// Find every class name or identifier shared by more than one entry.
///
/// Collisions are reported sorted by kind and value so repeated runs describe them
/// identically.
pub fn find_collisions(entries: &[FileNameEntry]) -> Vec<KeyCollision> {
    let mut claimed: BTreeMap<(CollisionKind, String), Vec<String>> = BTreeMap::new();

    for entry in entries {
        let key = derive_resource_key(entry);
        debug!("{entry} -> .{} / {}", key.class_name, key.identifier);
        claimed
            .entry((CollisionKind::ClassName, key.class_name))
            .or_default()
            .push(entry.to_string());
        claimed
            .entry((CollisionKind::Identifier, key.identifier))
            .or_default()
            .push(entry.to_string());
    }

    claimed
        .into_iter()
        .filter(|(_, owners)| owners.len() > 1)
        .map(|((kind, value), entries)| KeyCollision {
            kind,
            value,
            entries,
        })
        .collect()
}
