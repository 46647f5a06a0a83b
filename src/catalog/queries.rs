use super::models::{NewSubmission, SubmissionEntry};
use super::sqlite::Database;
use super::CatalogStore;
use crate::error::Error;
use rusqlite::params;
use tracing::debug;

impl CatalogStore for Database {
    fn list_all(&self) -> Result<Vec<SubmissionEntry>, Error> {
        let mut stmt = self.connection().prepare(
            "SELECT id, file_name, file_path, file_extension, uploaded_at \
             FROM submission ORDER BY id",
        )?;
        let entries = stmt
            .query_map([], |row| {
                Ok(SubmissionEntry {
                    id: row.get(0)?,
                    file_name: row.get(1)?,
                    file_path: row.get(2)?,
                    file_extension: row.get(3)?,
                    uploaded_at: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    fn insert_many(&self, entries: &[NewSubmission]) -> Result<usize, Error> {
        let tx = self.connection().unchecked_transaction()?;
        let mut count = 0;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO submission (file_name, file_path, file_extension, uploaded_at) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            let now = chrono::Utc::now().to_rfc3339();
            for entry in entries {
                count += stmt.execute(params![
                    entry.file_name,
                    entry.file_path,
                    entry.file_extension,
                    now,
                ])?;
            }
        }
        tx.commit()?;
        debug!("Inserted {} submission entries", count);
        Ok(count)
    }

    fn delete_by_name(&self, file_name: &str) -> Result<usize, Error> {
        let removed = self.connection().execute(
            "DELETE FROM submission WHERE file_name = ?1",
            params![file_name],
        )?;
        debug!("Deleted {} entries named '{}'", removed, file_name);
        Ok(removed)
    }

    fn delete_all(&self) -> Result<usize, Error> {
        let removed = self
            .connection()
            .execute("DELETE FROM submission", [])?;
        debug!("Deleted all {} submission entries", removed);
        Ok(removed)
    }
}
