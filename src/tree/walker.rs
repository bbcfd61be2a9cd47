//! Directory listing and the has-subdirectories probe

use std::fs;
use std::path::Path;

/// A single named child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_dir: bool,
}

/// The immediate children of one directory, split by kind.
///
/// Both lists keep the native enumeration order returned by the filesystem;
/// no re-sorting is applied.
#[derive(Debug, Default)]
pub struct DirectoryListing {
    pub dirs: Vec<DirectoryEntry>,
    pub files: Vec<DirectoryEntry>,
}

/// Name of the synthetic spacer entry appended after the last file, so the
/// renderer emits a blank line before the folder section begins.
pub const SPACER_NAME: &str = " ";

/// List the immediate children of `path`.
///
/// Files are collected only when `show_files` is set; if at least one file
/// was found, a trailing spacer entry is appended. A path that cannot be
/// opened yields an empty listing, so an unreadable directory simply
/// renders as a leaf and the walk continues with its siblings.
///
/// Symlinks are never followed: a symlink to a directory is reported as a
/// plain file, which keeps the walk free of cycles.
pub fn list_children(path: &Path, show_files: bool) -> DirectoryListing {
    let mut listing = DirectoryListing::default();

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(_) => return listing,
    };

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            listing.dirs.push(DirectoryEntry { name, is_dir: true });
        } else if show_files {
            listing.files.push(DirectoryEntry {
                name,
                is_dir: false,
            });
        }
    }

    if show_files && !listing.files.is_empty() {
        listing.files.push(DirectoryEntry {
            name: SPACER_NAME.to_string(),
            is_dir: false,
        });
    }

    listing
}

/// Whether `path` contains at least one subdirectory.
///
/// Stops at the first hit. An unopenable path counts as having none, and
/// entries whose file type cannot be determined are ignored.
pub fn has_subdirectories(path: &Path) -> bool {
    match fs::read_dir(path) {
        Ok(entries) => entries
            .flatten()
            .any(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false)),
        Err(_) => false,
    }
}
