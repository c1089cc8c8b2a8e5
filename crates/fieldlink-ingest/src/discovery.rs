//! Directory discovery shared by the file-backed providers.

use std::path::{Path, PathBuf};

use crate::error::IngestError;

/// List files in `dir` with the given extension (case-insensitive),
/// sorted by file name so enumeration order is stable.
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, IngestError> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(extension))
            .unwrap_or(false);
        if matches {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Source name for a file: its stem, falling back to the full file name.
pub fn source_name(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .and_then(|v| v.to_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_matching_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.csv"), "name\n").unwrap();
        std::fs::write(dir.path().join("a.CSV"), "name\n").unwrap();
        std::fs::write(dir.path().join("c.xml"), "<t/>").unwrap();

        let files = list_files_with_extension(dir.path(), "csv").unwrap();
        let names: Vec<String> = files.iter().map(|p| source_name(p)).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let result = list_files_with_extension(Path::new("/nonexistent/fieldlink"), "csv");
        assert!(matches!(
            result,
            Err(IngestError::DirectoryNotFound { .. })
        ));
    }
}
