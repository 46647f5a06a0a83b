pub mod models;
mod queries;
mod sqlite;

pub use models::{NewSubmission, SubmissionEntry};
pub use sqlite::Database;

use crate::error::Error;

/// Persistent table of submitted files, keyed informally by file name.
///
/// The store does not enforce name uniqueness; callers treat the first
/// match by name as canonical. Each call is atomic in isolation only —
/// there is no cross-call transaction or locking contract, so callers that
/// mutate the catalog from several places must serialize access themselves.
pub trait CatalogStore {
    fn list_all(&self) -> Result<Vec<SubmissionEntry>, Error>;

    fn insert_many(&self, entries: &[NewSubmission]) -> Result<usize, Error>;

    /// Delete every entry with the given file name. Returns rows removed.
    fn delete_by_name(&self, file_name: &str) -> Result<usize, Error>;

    fn delete_all(&self) -> Result<usize, Error>;
}
