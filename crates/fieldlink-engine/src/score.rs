//! Coverage, name similarity, and confidence for one field pair.

use std::collections::BTreeSet;

use fieldlink_model::RelationshipSnapshot;

use crate::cooccur::PairMatch;
use crate::extract::CandidateField;

/// Base weight of coverage in the confidence formula.
const COVERAGE_WEIGHT: f64 = 0.7;

/// Bounded modifier contributed by name similarity.
const NAME_WEIGHT: f64 = 0.3;

/// Tokenize a field name on `_` and camel-case boundaries into a set of
/// lower-cased tokens. `item_name` -> {item, name}; `itemName` -> same.
pub fn tokenize_field_name(name: &str) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for part in name.split(['_', '-', ' ', '.']) {
        let mut current = String::new();
        let mut prev_lower = false;
        for ch in part.chars() {
            if ch.is_uppercase() && prev_lower && !current.is_empty() {
                tokens.insert(current.to_lowercase());
                current.clear();
            }
            prev_lower = ch.is_lowercase();
            current.push(ch);
        }
        if !current.is_empty() {
            tokens.insert(current.to_lowercase());
        }
    }
    tokens
}

/// Jaccard similarity of the two field-name token sets.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    let tokens_a = tokenize_field_name(a);
    let tokens_b = tokenize_field_name(b);
    let union = tokens_a.union(&tokens_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = tokens_a.intersection(&tokens_b).count();
    intersection as f64 / union as f64
}

/// Score a pair, or drop it when it misses the thresholds.
///
/// Confidence is dominated by the weaker side's coverage; name similarity
/// only modulates within `[0.7, 1.0]`, so a coincidental name match with
/// poor data overlap cannot rank high on its own. The field with the larger
/// distinct-value count is labelled source; ties keep the lexicographically
/// smaller `(source, field)` on the source side.
pub fn score(
    a: &CandidateField,
    b: &CandidateField,
    pair: PairMatch,
    min_match_count: usize,
    min_confidence: f64,
) -> Option<RelationshipSnapshot> {
    if pair.match_count < min_match_count {
        return None;
    }

    // `a` precedes `b` in (source, field) order, so on equal cardinality
    // keeping `a` as source is the documented tie-break.
    let (source, target) = if b.index.distinct_count() > a.index.distinct_count() {
        (b, a)
    } else {
        (a, b)
    };

    let source_coverage = pair.match_count as f64 / source.index.distinct_count() as f64;
    let target_coverage = pair.match_count as f64 / target.index.distinct_count() as f64;
    let similarity = name_similarity(&source.field, &target.field);
    let confidence =
        source_coverage.min(target_coverage) * (COVERAGE_WEIGHT + NAME_WEIGHT * similarity);

    if confidence < min_confidence {
        return None;
    }

    Some(RelationshipSnapshot {
        source_file: source.source.clone(),
        source_field: source.field.clone(),
        target_file: target.source.clone(),
        target_field: target.field.clone(),
        match_count: pair.match_count,
        source_coverage,
        target_coverage,
        confidence,
        name_similarity: similarity,
        sample_values: pair.samples,
    })
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

    fn pair(match_count: usize) -> PairMatch {
        PairMatch {
            a: 0,
            b: 1,
            match_count,
            samples: vec!["shield".to_string(), "sword of fire".to_string()],
        }
    }

    #[test]
    fn tokenizes_underscores_and_camel_case() {
        let tokens = tokenize_field_name("item_name");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("item"));
        assert!(tokens.contains("name"));

        let camel = tokenize_field_name("itemName");
        assert_eq!(camel, tokens);

        let upper = tokenize_field_name("NAME");
        assert_eq!(upper.len(), 1);
        assert!(upper.contains("name"));
    }

    #[test]
    fn jaccard_similarity_of_name_and_item_name() {
        assert!((name_similarity("name", "item_name") - 0.5).abs() < 1e-9);
        assert!((name_similarity("name", "name") - 1.0).abs() < 1e-9);
        assert!((name_similarity("name", "vendor_id") - 0.0).abs() < 1e-9);
    }

    #[test]
    fn scores_match_worked_example() {
        // item.name has 2 distinct values, drop.item_name has 3, overlap 2.
        let drop = field("drop", "item_name", &["sword of fire", "shield", "potion"]);
        let item = field("item", "name", &["sword of fire", "shield"]);

        let snapshot = score(&drop, &item, pair(2), 2, 0.3).expect("pair passes thresholds");
        assert_eq!(snapshot.source_file, "drop");
        assert_eq!(snapshot.target_file, "item");
        assert!((snapshot.source_coverage - 2.0 / 3.0).abs() < 1e-9);
        assert!((snapshot.target_coverage - 1.0).abs() < 1e-9);
        assert!((snapshot.name_similarity - 0.5).abs() < 1e-9);
        assert!((snapshot.confidence - (2.0 / 3.0) * 0.85).abs() < 1e-9);
    }

    #[test]
    fn larger_cardinality_side_becomes_source() {
        let small = field("a", "name", &["x", "y"]);
        let large = field("b", "name", &["x", "y", "z"]);
        let snapshot = score(&small, &large, pair(2), 2, 0.0).unwrap();
        assert_eq!(snapshot.source_file, "b");
        assert_eq!(snapshot.target_file, "a");
    }

    #[test]
    fn equal_cardinality_keeps_first_field_as_source() {
        let first = field("alpha", "name", &["x", "y"]);
        let second = field("beta", "name", &["x", "y"]);
        let snapshot = score(&first, &second, pair(2), 2, 0.0).unwrap();
        assert_eq!(snapshot.source_file, "alpha");
    }

    #[test]
    fn thresholds_drop_weak_pairs() {
        let a = field("a", "name", &["x", "y"]);
        let b = field("b", "name", &["x", "y"]);
        assert!(score(&a, &b, pair(1), 2, 0.0).is_none());

        let sparse_a = field("a", "name", &["x", "y", "1", "2", "3", "4", "5", "6"]);
        let sparse_b = field("b", "name", &["x", "y", "7", "8", "9", "10", "11", "12"]);
        assert!(score(&sparse_a, &sparse_b, pair(2), 2, 0.3).is_none());
    }
}
