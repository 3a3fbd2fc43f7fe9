//! Source discovery and atomic file replacement.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::PatchError;

/// Expand `paths` into the source files to patch, sorted and deduplicated.
///
/// Files are taken as given; directories are searched recursively for files
/// with extension `ext`, skipping hidden entries.
pub fn collect_sources(paths: &[PathBuf], ext: &str) -> Result<Vec<PathBuf>, PatchError> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            collect_recursive(path, ext, &mut files)?;
        } else {
            files.push(path.clone());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn collect_recursive(dir: &Path, ext: &str, files: &mut Vec<PathBuf>) -> Result<(), PatchError> {
    let walk_error = |source| PatchError::Walk {
        path: dir.to_path_buf(),
        source,
    };
    for entry in fs::read_dir(dir).map_err(walk_error)? {
        let path = entry.map_err(walk_error)?.path();

        if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.starts_with('.'))
        {
            continue;
        }

        if path.is_dir() {
            collect_recursive(&path, ext, files)?;
        } else if path.extension().is_some_and(|e| e == ext) {
            files.push(path);
        }
    }
    Ok(())
}

pub fn read_source(path: &Path) -> Result<String, PatchError> {
    fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the contents of `path` with `text`.
///
/// The text goes to a temporary file in the same directory which is then
/// renamed over `path`, so readers never observe a partial file and a failed
/// write leaves the original intact.
pub fn replace_contents(path: &Path, text: &str) -> Result<(), PatchError> {
    let write_error = |source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
    temp.write_all(text.as_bytes()).map_err(write_error)?;
    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(write_error)?;
    }
    temp.persist(path).map_err(|err| write_error(err.error))?;
    Ok(())
}
