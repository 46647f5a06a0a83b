use crate::utils::path::extract_path_parts;
use std::io;
use std::path::Path;

/// A catalog row describing one submitted file.
#[derive(Debug, Clone)]
pub struct SubmissionEntry {
    pub id: i64,
    pub file_name: String,
    /// Absolute path of the file at the time it was recorded, stored
    /// verbatim. Matching against the directory tree is exact string
    /// equality on this field, so nothing is normalized here.
    pub file_path: String,
    pub file_extension: Option<String>,
    pub uploaded_at: String,
}

/// A submission about to be inserted into the catalog.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub file_name: String,
    pub file_path: String,
    pub file_extension: Option<String>,
}

impl NewSubmission {
    /// Build an entry from an on-disk path. The locator is the absolute
    /// path; the extension is kept as a separate derived column.
    pub fn from_path(path: &Path) -> io::Result<NewSubmission> {
        let absolute = std::path::absolute(path)?;
        let parts = extract_path_parts(&absolute);
        Ok(NewSubmission {
            file_name: parts.file_name,
            file_path: absolute.to_string_lossy().into_owned(),
            file_extension: parts.extension,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_stores_absolute_locator() {
        let entry = NewSubmission::from_path(Path::new("/subs/bob/essay.txt")).unwrap();
        assert_eq!(entry.file_name, "essay.txt");
        assert_eq!(entry.file_path, "/subs/bob/essay.txt");
        assert_eq!(entry.file_extension.as_deref(), Some("txt"));
    }

    #[test]
    fn test_from_path_resolves_relative_input() {
        let entry = NewSubmission::from_path(Path::new("essay.txt")).unwrap();
        assert!(Path::new(&entry.file_path).is_absolute());
        assert_eq!(entry.file_name, "essay.txt");
    }
}
