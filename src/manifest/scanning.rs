//! Directory scanning utilities for harvesting icon file names.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{ManifestError, ManifestResult};
use crate::models::FileNameEntry;

/// Walk `root` recursively and return the base name of every regular file beneath it.
///
/// Names are returned in traversal order, which depends on the filesystem. Directories never
/// appear in the result, and symlinked directories are not descended into.
pub fn collect_file_names(root: &Path) -> ManifestResult<Vec<FileNameEntry>> {
    let metadata = fs::metadata(root).map_err(|err| ManifestError::io(root, err))?;
    if !metadata.is_dir() {
        return Err(ManifestError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut names = Vec::new();
    collect_recursively(root, &mut names)?;
    debug!("found {} file(s) beneath {}", names.len(), root.display());
    Ok(names)
}

fn collect_recursively(dir: &Path, names: &mut Vec<FileNameEntry>) -> ManifestResult<()> {
    let entries = fs::read_dir(dir).map_err(|err| ManifestError::io(dir, err))?;

    for entry in entries {
        let entry = entry.map_err(|err| ManifestError::io(dir, err))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|err| ManifestError::io(&path, err))?;

        if file_type.is_dir() {
            collect_recursively(&path, names)?;
            continue;
        }

        let is_file = if file_type.is_symlink() {
            // dangling links are skipped
            fs::metadata(&path).is_ok_and(|target| target.is_file())
        } else {
            file_type.is_file()
        };

        if is_file {
            let name = entry.file_name().to_string_lossy().into_owned();
            debug!("discovered {name}");
            names.push(FileNameEntry::new(name));
        }
    }

    Ok(())
}
