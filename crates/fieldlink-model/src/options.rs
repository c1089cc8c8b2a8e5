//! Per-run analysis configuration.

/// Invoked synchronously with the name of the source about to be scanned.
/// Called from the analysis thread; callers needing UI-thread marshalling
/// do that themselves.
pub type ProgressFn = Box<dyn FnMut(&str)>;

/// Polled between sources and between phases. Returning `true` stops the
/// run with [`crate::ScanError::Cancelled`].
pub type CancelFn = Box<dyn Fn() -> bool>;

/// Default for [`AnalysisOptions::min_match_count`].
pub const DEFAULT_MIN_MATCH_COUNT: usize = 2;

/// Default for [`AnalysisOptions::min_confidence`].
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.3;

/// Options recognized by one `analyze` invocation.
pub struct AnalysisOptions {
    /// Pairs sharing fewer distinct values than this are dropped.
    pub min_match_count: usize,
    /// Pairs scoring below this confidence are dropped.
    pub min_confidence: f64,
    /// Optional progress callback, one call per scanned source.
    pub progress: Option<ProgressFn>,
    /// Optional cooperative cancellation predicate.
    pub cancel: Option<CancelFn>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_match_count: DEFAULT_MIN_MATCH_COUNT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            progress: None,
            cancel: None,
        }
    }
}

impl AnalysisOptions {
    #[must_use]
    pub fn with_min_match_count(mut self, count: usize) -> Self {
        self.min_match_count = count;
        self
    }

    #[must_use]
    pub fn with_min_confidence(mut self, confidence: f64) -> Self {
        self.min_confidence = confidence;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ProgressFn) -> Self {
        self.progress = Some(progress);
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelFn) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// True when the cancellation predicate exists and fires.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|cancel| cancel())
    }

    /// Report a source to the progress callback, if any.
    pub fn report_progress(&mut self, source: &str) {
        if let Some(progress) = self.progress.as_mut() {
            progress(source);
        }
    }
}

impl std::fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("min_match_count", &self.min_match_count)
            .field("min_confidence", &self.min_confidence)
            .field("progress", &self.progress.is_some())
            .field("cancel", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_thresholds() {
        let options = AnalysisOptions::default();
        assert_eq!(options.min_match_count, 2);
        assert!((options.min_confidence - 0.3).abs() < f64::EPSILON);
        assert!(!options.is_cancelled());
    }

    #[test]
    fn cancel_predicate_is_polled() {
        let options = AnalysisOptions::default().with_cancel(Box::new(|| true));
        assert!(options.is_cancelled());
    }
}
