//! Command implementations.

use std::time::{Duration, Instant};

use fieldlink_engine::analyze;
use fieldlink_ingest::{CsvDirectoryProvider, XmlDirectoryProvider};
use fieldlink_model::{AnalysisOptions, RelationshipReport, ScanError, SourceProvider};

use crate::cli::{InputFormatArg, ScanArgs};

/// Run one scan over the requested directory.
///
/// A `--timeout-secs` deadline is composed as a cancellation predicate; the
/// engine itself has no built-in timeout.
pub fn run_scan(args: &ScanArgs) -> Result<RelationshipReport, ScanError> {
    let provider: Box<dyn SourceProvider> = match args.input {
        InputFormatArg::Csv => Box::new(CsvDirectoryProvider::new(&args.data_dir)),
        InputFormatArg::Xml => Box::new(XmlDirectoryProvider::new(&args.data_dir)),
    };

    let mut options = AnalysisOptions::default()
        .with_min_match_count(args.min_match_count)
        .with_min_confidence(args.min_confidence)
        .with_progress(Box::new(|source: &str| {
            tracing::info!(source, "scanning source");
        }));

    if let Some(secs) = args.timeout_secs {
        let deadline = Instant::now() + Duration::from_secs(secs);
        options = options.with_cancel(Box::new(move || Instant::now() >= deadline));
    }

    analyze(provider.as_ref(), options)
}
