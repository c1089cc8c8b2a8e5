//! Pairwise overlap via a single inverted-index pass.
//!
//! Comparing every pair of N candidate value sets directly is O(N²·V).
//! Instead, one pass builds value -> [field] buckets, then each bucket of
//! size k contributes to its k·(k-1)/2 unordered pairs. Name-like fields
//! have high cardinality, so buckets stay small in practice; blank values
//! were already pruned at extraction.

use std::collections::BTreeMap;

use crate::extract::CandidateField;

/// Maximum shared values retained per pair, for display sampling.
pub const SAMPLE_CAP: usize = 5;

/// An unordered pair of candidate fields (indexes into the candidate list,
/// `a < b`) with its exact intersection size and a capped sample of shared
/// values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMatch {
    pub a: usize,
    pub b: usize,
    pub match_count: usize,
    pub samples: Vec<String>,
}

/// Derive one [`PairMatch`] per pair of fields from different sources that
/// share at least one normalized value.
///
/// The result is a pure set computation: for a fixed candidate list it is
/// identical regardless of how the provider enumerated sources. Samples are
/// accumulated in lexicographic value order for the same reason.
pub fn aggregate(fields: &[CandidateField]) -> Vec<PairMatch> {
    // value -> indexes of fields containing it
    let mut inverted: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, field) in fields.iter().enumerate() {
        for value in field.index.values() {
            inverted.entry(value).or_default().push(idx);
        }
    }

    let mut pairs: BTreeMap<(usize, usize), PairMatch> = BTreeMap::new();
    for (value, bucket) in inverted {
        if bucket.len() < 2 {
            continue;
        }
        for (pos, &a) in bucket.iter().enumerate() {
            for &b in &bucket[pos + 1..] {
                // Self-pairs within one source carry no relationship signal.
                if fields[a].source == fields[b].source {
                    continue;
                }
                let entry = pairs.entry((a, b)).or_insert_with(|| PairMatch {
                    a,
                    b,
                    match_count: 0,
                    samples: Vec::new(),
                });
                entry.match_count += 1;
                if entry.samples.len() < SAMPLE_CAP {
                    entry.samples.push(value.to_string());
                }
            }
        }
    }

    pairs.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::ValueIndex;

    fn field(source: &str, name: &str, values: &[&str]) -> CandidateField {
        CandidateField {
            source: source.to_string(),
            field: name.to_string(),
            index: ValueIndex::from_raw_values(values.iter().copied().map(Some)),
        }
    }

    #[test]
    fn overlapping_fields_produce_one_pair_with_exact_count() {
        let fields = vec![
            field("item", "name", &["sword", "shield", "potion"]),
            field("drop", "item_name", &["sword", "shield", "bow"]),
        ];
        let pairs = aggregate(&fields);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].match_count, 2);
        assert_eq!(pairs[0].samples, vec!["shield", "sword"]);
    }

    #[test]
    fn disjoint_fields_produce_no_pair() {
        let fields = vec![
            field("item", "name", &["sword"]),
            field("drop", "item_name", &["potion"]),
        ];
        assert!(aggregate(&fields).is_empty());
    }

    #[test]
    fn same_source_pairs_are_excluded() {
        let fields = vec![
            field("item", "name", &["sword"]),
            field("item", "vendor_name", &["sword"]),
        ];
        assert!(aggregate(&fields).is_empty());
    }

    #[test]
    fn samples_are_capped() {
        let values: Vec<String> = (0..10).map(|i| format!("v{i:02}")).collect();
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let fields = vec![field("a", "name", &refs), field("b", "name", &refs)];
        let pairs = aggregate(&fields);
        assert_eq!(pairs[0].match_count, 10);
        assert_eq!(pairs[0].samples.len(), SAMPLE_CAP);
        assert_eq!(pairs[0].samples[0], "v00");
    }

    #[test]
    fn three_way_overlap_produces_all_cross_source_pairs() {
        let fields = vec![
            field("a", "name", &["x"]),
            field("b", "name", &["x"]),
            field("c", "name", &["x"]),
        ];
        let pairs = aggregate(&fields);
        let keys: Vec<(usize, usize)> = pairs.iter().map(|p| (p.a, p.b)).collect();
        assert_eq!(keys, vec![(0, 1), (0, 2), (1, 2)]);
    }
}
