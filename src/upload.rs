use crate::catalog::{CatalogStore, NewSubmission};
use crate::error::Error;
use std::path::PathBuf;
use tracing::info;

/// Record uploaded files in the catalog: base name, absolute path, and
/// derived extension per file, inserted in one batch.
pub fn record_uploads<S: CatalogStore + ?Sized>(
    catalog: &S,
    files: &[PathBuf],
) -> Result<usize, Error> {
    let mut entries = Vec::with_capacity(files.len());
    for file in files {
        entries.push(NewSubmission::from_path(file)?);
    }

    let count = catalog.insert_many(&entries)?;
    info!("Recorded {} uploaded files", count);
    Ok(count)
}
