use crate::catalog::CatalogStore;
use crate::error::Error;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Tally of a best-effort recursive erase.
#[derive(Debug, Default, Clone, Copy)]
pub struct EraseSummary {
    pub removed: usize,
    pub failed: usize,
}

/// Recursively delete everything beneath `root`, leaving `root` itself in
/// place. Individual removal failures are logged and counted; siblings and
/// ancestors are still attempted, and partial failure never raises an
/// error.
pub fn erase_directory_tree(root: &Path) -> Result<EraseSummary, Error> {
    if !root.is_dir() {
        return Err(Error::DirectoryNotFound(root.to_path_buf()));
    }

    let mut summary = EraseSummary::default();

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Could not read {}: {}", root.display(), err);
            summary.failed += 1;
            return Ok(summary);
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Could not read entry under {}: {}", root.display(), err);
                summary.failed += 1;
                continue;
            }
        };
        remove_tree(&entry.path(), &mut summary);
    }

    debug!(
        "Erased {} entries under {} ({} failures)",
        summary.removed,
        root.display(),
        summary.failed,
    );
    Ok(summary)
}

// Depth-first, children before parents: a directory cannot be removed
// while non-empty.
fn remove_tree(path: &Path, summary: &mut EraseSummary) {
    if path.is_dir() {
        match fs::read_dir(path) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    remove_tree(&entry.path(), summary);
                }
            }
            Err(err) => warn!("Could not read {}: {}", path.display(), err),
        }
    }

    let result = if path.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => summary.removed += 1,
        Err(err) => {
            warn!("Could not delete {}: {}", path.display(), err);
            summary.failed += 1;
        }
    }
}

/// Delete every catalog entry, then erase the submissions tree. The root
/// must exist before any catalog mutation happens; a store failure aborts
/// with the tree untouched, and leaf failures during the erase are
/// warnings only.
pub fn purge_all<S: CatalogStore + ?Sized>(
    catalog: &S,
    submissions_root: &Path,
) -> Result<EraseSummary, Error> {
    if !submissions_root.is_dir() {
        return Err(Error::DirectoryNotFound(submissions_root.to_path_buf()));
    }

    let removed = catalog.delete_all()?;
    info!("Deleted {} catalog entries", removed);

    erase_directory_tree(submissions_root)
}

/// Delete one submission: its catalog entry and its containing directory.
/// Each submission lives in its own directory, so removing "one file"
/// takes every sibling in that directory with it.
///
/// The catalog entry is deleted first and is not restored if the directory
/// removal later fails.
pub fn delete_submission<S: CatalogStore + ?Sized>(
    catalog: &S,
    file_name: &str,
    file_path: &Path,
) -> Result<(), Error> {
    let removed = catalog.delete_by_name(file_name)?;
    debug!("Deleted {} catalog entries named '{}'", removed, file_name);

    let parent = match file_path.parent() {
        Some(parent) if parent.is_dir() => parent,
        _ => {
            warn!(
                "Parent directory not found for file: {}",
                file_path.display()
            );
            return Ok(());
        }
    };

    let mut summary = EraseSummary::default();
    match fs::read_dir(parent) {
        Ok(entries) => {
            for entry in entries.flatten() {
                remove_tree(&entry.path(), &mut summary);
            }
        }
        Err(err) => warn!("Could not read {}: {}", parent.display(), err),
    }
    if summary.failed > 0 {
        warn!(
            "{} entries under {} could not be deleted",
            summary.failed,
            parent.display(),
        );
    }

    if let Err(err) = fs::remove_dir(parent) {
        warn!("Could not delete {}: {}", parent.display(), err);
        return Err(Error::DirectoryDeletion(parent.to_path_buf()));
    }

    info!("Deleted submission directory {}", parent.display());
    Ok(())
}
