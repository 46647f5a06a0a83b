use crate::catalog::{CatalogStore, NewSubmission};
use crate::error::Error;
use crate::scanner;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of one reconciliation pass.
#[derive(Debug, Default)]
pub struct ReconcileReport {
    /// Base names of files newly recorded in the catalog.
    pub added: Vec<String>,
    /// Names of entries dropped because their file is gone from disk.
    pub removed: Vec<String>,
    pub files_on_disk: usize,
    pub duration: Duration,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Brings the catalog into agreement with the files actually present under
/// the submissions root, without requiring a re-upload.
pub struct Reconciler<'a, S: CatalogStore + ?Sized> {
    catalog: &'a S,
    submissions_root: PathBuf,
}

impl<'a, S: CatalogStore + ?Sized> Reconciler<'a, S> {
    pub fn new(catalog: &'a S, submissions_root: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            submissions_root: submissions_root.into(),
        }
    }

    /// Prune entries whose files are gone, then record files the catalog
    /// has never seen. Matching in both phases is exact string equality
    /// between the stored locator and the on-disk absolute path; case,
    /// separators, and symlinks are not normalized.
    ///
    /// Store mutations are independent: a failure part-way through leaves
    /// the earlier deletes and inserts applied.
    pub fn reconcile(&self) -> Result<ReconcileReport, Error> {
        if !self.submissions_root.is_dir() {
            return Err(Error::DirectoryNotFound(self.submissions_root.clone()));
        }

        let start = Instant::now();

        let existing = self.catalog.list_all()?;
        let on_disk = scanner::list_files_recursive(&self.submissions_root)?;
        debug!(
            "Reconciling {} catalog entries against {} files on disk",
            existing.len(),
            on_disk.len(),
        );

        let on_disk_paths: HashSet<&str> =
            on_disk.iter().filter_map(|p| p.to_str()).collect();

        let mut report = ReconcileReport {
            files_on_disk: on_disk.len(),
            ..Default::default()
        };

        // Prune phase: drop entries whose locator no longer matches a file.
        for entry in &existing {
            if !on_disk_paths.contains(entry.file_path.as_str()) {
                self.catalog.delete_by_name(&entry.file_name)?;
                info!("Removed missing file from catalog: {}", entry.file_name);
                report.removed.push(entry.file_name.clone());
            }
        }

        // Add phase: record files no entry points at.
        for path in &on_disk {
            let path_str = path.to_string_lossy();
            let known = existing.iter().any(|e| e.file_path == path_str);
            if !known {
                let entry = NewSubmission::from_path(path)?;
                let name = entry.file_name.clone();
                self.catalog.insert_many(std::slice::from_ref(&entry))?;
                info!("Added new file to catalog: {}", name);
                report.added.push(name);
            }
        }

        report.duration = start.elapsed();
        Ok(report)
    }
}
