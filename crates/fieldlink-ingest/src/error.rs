use std::path::PathBuf;

use thiserror::Error;

/// Provider-level ingest failures.
///
/// Enumeration failures surface through these variants and abort a run;
/// per-file parse failures stay `anyhow` errors on the individual source so
/// the engine can skip just that source.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
