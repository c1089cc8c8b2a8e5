//! Per-field value index: a normalized multiset of string values.

use std::collections::BTreeMap;

/// Normalize a raw cell for matching: trim, lowercase, drop blanks.
///
/// Returns `None` for null and whitespace-only input so blank cells can
/// never form a match bucket.
pub fn normalize_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Multiset of normalized values for one candidate field.
///
/// Built once per field per run and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueIndex {
    counts: BTreeMap<String, usize>,
    total: usize,
}

impl ValueIndex {
    /// Build an index from raw values, discarding nulls and blanks.
    pub fn from_raw_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut index = Self::default();
        for raw in values.into_iter().flatten() {
            index.insert(raw);
        }
        index
    }

    fn insert(&mut self, raw: &str) {
        if let Some(value) = normalize_value(raw) {
            *self.counts.entry(value).or_insert(0) += 1;
            self.total += 1;
        }
    }

    /// Number of distinct normalized values.
    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    /// Number of non-blank occurrences, duplicates included.
    pub fn total_count(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.counts.contains_key(value)
    }

    pub fn occurrences(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Distinct normalized values in lexicographic order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}
