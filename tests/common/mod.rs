#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use subsync::{CatalogStore, Error, NewSubmission, SubmissionEntry};

/// In-memory catalog fake. Counts mutating calls so tests can assert that
/// failed preconditions leave the store untouched.
#[derive(Default)]
pub struct MemoryCatalog {
    entries: RefCell<Vec<SubmissionEntry>>,
    next_id: Cell<i64>,
    pub mutations: Cell<usize>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            ..Default::default()
        }
    }

    pub fn with_entries(seed: Vec<(&str, &str)>) -> Self {
        let catalog = Self::new();
        for (name, path) in seed {
            let id = catalog.next_id.replace(catalog.next_id.get() + 1);
            catalog.entries.borrow_mut().push(SubmissionEntry {
                id,
                file_name: name.to_string(),
                file_path: path.to_string(),
                file_extension: None,
                uploaded_at: String::new(),
            });
        }
        catalog
    }

    pub fn names(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|e| e.file_name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl CatalogStore for MemoryCatalog {
    fn list_all(&self) -> Result<Vec<SubmissionEntry>, Error> {
        Ok(self.entries.borrow().clone())
    }

    fn insert_many(&self, new: &[NewSubmission]) -> Result<usize, Error> {
        self.mutations.set(self.mutations.get() + 1);
        let mut entries = self.entries.borrow_mut();
        for submission in new {
            let id = self.next_id.replace(self.next_id.get() + 1);
            entries.push(SubmissionEntry {
                id,
                file_name: submission.file_name.clone(),
                file_path: submission.file_path.clone(),
                file_extension: submission.file_extension.clone(),
                uploaded_at: String::new(),
            });
        }
        Ok(new.len())
    }

    fn delete_by_name(&self, file_name: &str) -> Result<usize, Error> {
        self.mutations.set(self.mutations.get() + 1);
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|e| e.file_name != file_name);
        Ok(before - entries.len())
    }

    fn delete_all(&self) -> Result<usize, Error> {
        self.mutations.set(self.mutations.get() + 1);
        let mut entries = self.entries.borrow_mut();
        let removed = entries.len();
        entries.clear();
        Ok(removed)
    }
}
