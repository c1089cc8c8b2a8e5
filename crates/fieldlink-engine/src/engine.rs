//! Run lifecycle: scanning, aggregation, scoring, report assembly.

use std::time::Instant;

use fieldlink_model::{
    AnalysisOptions, RelationshipReport, RelationshipSnapshot, ReportMetadata, Result, ScanError,
    SkippedSource, SourceProvider,
};

use crate::cooccur;
use crate::extract::{self, CandidateField};
use crate::patterns::NameFilter;
use crate::score;

/// Stateless entry point over one provider.
///
/// Holds only the candidate-field filter; every `analyze` call is an
/// independent, read-only run. Independent analyzers may run in parallel
/// against different providers.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    filter: NameFilter,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: NameFilter) -> Self {
        Self { filter }
    }

    /// Run one analysis pass.
    ///
    /// Cancellation is polled before each source and before the aggregation
    /// and scoring phases; it is all-or-nothing, no partial report escapes.
    /// A source that fails to read is skipped and recorded in the report
    /// metadata; only provider enumeration failure aborts the run.
    pub fn analyze(
        &self,
        provider: &dyn SourceProvider,
        mut options: AnalysisOptions,
    ) -> Result<RelationshipReport> {
        let started = Instant::now();

        let sources = provider
            .list_sources()
            .map_err(|error| ScanError::ProviderUnavailable(format!("{error:#}")))?;
        tracing::debug!(sources = sources.len(), "scanning sources");

        let mut candidates: Vec<CandidateField> = Vec::new();
        let mut skipped: Vec<SkippedSource> = Vec::new();
        let mut sources_scanned = 0usize;

        for source in &sources {
            if options.is_cancelled() {
                return Err(ScanError::Cancelled);
            }
            options.report_progress(source.name());
            match source.read() {
                Ok(data) => {
                    candidates.extend(extract::candidate_fields(&data, &self.filter));
                    sources_scanned += 1;
                }
                Err(error) => {
                    tracing::warn!(
                        source = source.name(),
                        error = %error,
                        "skipping unreadable source"
                    );
                    skipped.push(SkippedSource {
                        source: source.name().to_string(),
                        reason: format!("{error:#}"),
                    });
                }
            }
        }

        // Fix enumeration order before pairing so pair identities, sample
        // order, and the final report are reproducible.
        candidates.sort_by(|x, y| {
            (x.source.as_str(), x.field.as_str()).cmp(&(y.source.as_str(), y.field.as_str()))
        });

        if options.is_cancelled() {
            return Err(ScanError::Cancelled);
        }
        tracing::debug!(candidate_fields = candidates.len(), "aggregating co-occurrences");
        let pairs = cooccur::aggregate(&candidates);

        if options.is_cancelled() {
            return Err(ScanError::Cancelled);
        }
        tracing::debug!(pairs = pairs.len(), "scoring pairs");
        let mut snapshots: Vec<RelationshipSnapshot> = Vec::new();
        for pair in pairs {
            let (a, b) = (&candidates[pair.a], &candidates[pair.b]);
            if let Some(snapshot) =
                score::score(a, b, pair, options.min_match_count, options.min_confidence)
            {
                snapshots.push(snapshot);
            }
        }

        snapshots.sort_by(|x, y| {
            y.confidence
                .total_cmp(&x.confidence)
                .then_with(|| y.match_count.cmp(&x.match_count))
                .then_with(|| x.source_file.cmp(&y.source_file))
                .then_with(|| x.source_field.cmp(&y.source_field))
                .then_with(|| x.target_file.cmp(&y.target_file))
                .then_with(|| x.target_field.cmp(&y.target_field))
        });

        let metadata = ReportMetadata {
            sources_scanned,
            candidate_fields: candidates.len(),
            skipped_sources: skipped,
            elapsed: started.elapsed(),
        };
        tracing::debug!(
            snapshots = snapshots.len(),
            sources_scanned = metadata.sources_scanned,
            skipped = metadata.skipped_sources.len(),
            "analysis complete"
        );
        Ok(RelationshipReport::new(snapshots, metadata))
    }
}

/// Run one analysis with the standard name-like filter.
pub fn analyze(
    provider: &dyn SourceProvider,
    options: AnalysisOptions,
) -> Result<RelationshipReport> {
    Analyzer::new().analyze(provider, options)
}
