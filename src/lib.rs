//! Submission catalog management for a plagiarism-detection pipeline:
//! records uploads in a persistent catalog, reconciles the catalog against
//! the submissions directory tree, deletes submissions, and pulls files in
//! from a cloud-drive folder.
//!
//! Everything here is synchronous and single-threaded; no mutual exclusion
//! is provided. Callers must serialize calls that mutate the catalog or
//! the submissions tree.

pub mod catalog;
pub mod config;
pub mod deletion;
pub mod drive;
pub mod error;
pub mod reconciler;
pub mod scanner;
pub mod upload;
pub mod utils;

pub use catalog::{CatalogStore, Database, NewSubmission, SubmissionEntry};
pub use config::AppConfig;
pub use error::Error;
pub use reconciler::{ReconcileReport, Reconciler};
