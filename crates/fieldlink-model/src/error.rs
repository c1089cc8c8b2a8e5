use thiserror::Error;

/// Failures that cross the `analyze` boundary.
///
/// Per-source read failures never appear here: they are absorbed into the
/// report metadata as skipped-source entries and the run continues.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The provider could not enumerate its sources at all. Nothing is
    /// returned; callers should present this as an error.
    #[error("data source provider unavailable: {0}")]
    ProviderUnavailable(String),
    /// The cancellation predicate fired. No partial report exists; callers
    /// should present this as a user-initiated stop, not a bug.
    #[error("analysis cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, ScanError>;
