use std::path::Path;

#[derive(Debug, Clone)]
pub struct PathParts {
    pub file_name: String,
    pub extension: Option<String>,
    pub parent_dir: String,
}

/// Split a path into the components the catalog cares about. The extension
/// is the text after the last dot of the base name; dotfiles and names
/// without a dot have none.
pub fn extract_path_parts(path: &Path) -> PathParts {
    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .unwrap_or_default();

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string());

    let parent_dir = path
        .parent()
        .and_then(|p| p.to_str())
        .map(String::from)
        .unwrap_or_default();

    PathParts {
        file_name,
        extension,
        parent_dir,
    }
}
