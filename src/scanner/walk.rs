use crate::error::Error;
use std::path::{Path, PathBuf};
use tracing::error;
use walkdir::WalkDir;

/// Enumerate every regular file under `root`, returned as absolute paths.
/// Directories are traversed, not recorded; symlinks are not followed.
/// Unreadable entries are logged and skipped rather than aborting the walk.
pub fn list_files_recursive(root: &Path) -> Result<Vec<PathBuf>, Error> {
    if !root.is_dir() {
        return Err(Error::DirectoryNotFound(root.to_path_buf()));
    }

    let root = std::path::absolute(root)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(&root).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                error!("Error reading entry under {}: {}", root.display(), err);
                continue;
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
