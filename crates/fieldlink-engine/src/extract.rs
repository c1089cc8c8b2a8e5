//! Candidate field extraction from one materialized source.

use fieldlink_model::SourceData;

use crate::index::ValueIndex;
use crate::patterns::NameFilter;

/// A `(source, field)` pair accepted by the name filter, owning the value
/// index built from its raw column.
#[derive(Debug, Clone)]
pub struct CandidateField {
    pub source: String,
    pub field: String,
    pub index: ValueIndex,
}

impl CandidateField {
    /// Display label, `source.field`.
    pub fn label(&self) -> String {
        format!("{}.{}", self.source, self.field)
    }
}

/// Build candidate fields for one source.
///
/// Fields whose index is empty after normalization are dropped: they cannot
/// participate in any match. A source never yields two candidates for the
/// same field name; the first column wins if a provider hands us duplicates.
pub fn candidate_fields(data: &SourceData, filter: &NameFilter) -> Vec<CandidateField> {
    let mut seen: Vec<String> = Vec::new();
    let mut candidates = Vec::new();
    for (field, values) in &data.fields {
        if !filter.matches(field) {
            continue;
        }
        // Same Unicode fold as the filter and value normalization.
        let folded = field.to_lowercase();
        if seen.contains(&folded) {
            continue;
        }
        seen.push(folded);
        let index = ValueIndex::from_raw_values(values.iter().map(Option::as_deref));
        if index.is_empty() {
            continue;
        }
        candidates.push(CandidateField {
            source: data.name.clone(),
            field: field.clone(),
            index,
        });
    }
    candidates
}
