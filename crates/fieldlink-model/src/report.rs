//! Externally visible analysis results.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One discovered relationship between two candidate fields.
///
/// The underlying pair is symmetric; "source" and "target" are assignment
/// labels only. The side with the larger distinct-value count is labelled
/// source, with the lexicographically smaller `(file, field)` winning ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipSnapshot {
    pub source_file: String,
    pub source_field: String,
    pub target_file: String,
    pub target_field: String,
    /// Exact number of distinct normalized values both fields contain.
    pub match_count: usize,
    /// `match_count / source distinct count`, in `[0, 1]`.
    pub source_coverage: f64,
    /// `match_count / target distinct count`, in `[0, 1]`.
    pub target_coverage: f64,
    /// Composite ranking score in `[0, 1]`.
    pub confidence: f64,
    /// Jaccard similarity of the two field-name token sets, in `[0, 1]`.
    pub name_similarity: f64,
    /// Up to five shared normalized values, for display.
    pub sample_values: Vec<String>,
}

/// A source that could not be read and was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSource {
    pub source: String,
    pub reason: String,
}

/// Run-level counters attached to a successful report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub sources_scanned: usize,
    pub candidate_fields: usize,
    pub skipped_sources: Vec<SkippedSource>,
    pub elapsed: Duration,
}

/// Immutable result of one analysis run.
///
/// Snapshots are ordered by confidence descending, match count descending,
/// then source file/field lexicographically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipReport {
    snapshots: Vec<RelationshipSnapshot>,
    metadata: ReportMetadata,
}

impl RelationshipReport {
    pub fn new(snapshots: Vec<RelationshipSnapshot>, metadata: ReportMetadata) -> Self {
        Self {
            snapshots,
            metadata,
        }
    }

    pub fn snapshots(&self) -> &[RelationshipSnapshot] {
        &self.snapshots
    }

    pub fn metadata(&self) -> &ReportMetadata {
        &self.metadata
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}
