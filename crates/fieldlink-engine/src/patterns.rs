//! Field-name filter selecting candidates for relationship analysis.

/// Pure predicate over field names. The default accepts `name` and any
/// `*_name` field, case-insensitively; both lists can be replaced without
/// touching aggregation or scoring.
#[derive(Debug, Clone)]
pub struct NameFilter {
    exact: Vec<String>,
    suffixes: Vec<String>,
}

impl NameFilter {
    pub fn new(exact: Vec<String>, suffixes: Vec<String>) -> Self {
        Self {
            exact: exact.into_iter().map(|s| s.to_lowercase()).collect(),
            suffixes: suffixes.into_iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// The standard name-like filter: `name` or `*_name`.
    pub fn name_like() -> Self {
        Self::new(vec!["name".to_string()], vec!["_name".to_string()])
    }

    pub fn matches(&self, field: &str) -> bool {
        let field = field.to_lowercase();
        self.exact.iter().any(|e| field == *e)
            || self.suffixes.iter().any(|s| field.ends_with(s.as_str()))
    }
}

impl Default for NameFilter {
    fn default() -> Self {
        Self::name_like()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_like_filter_is_case_insensitive() {
        let filter = NameFilter::name_like();
        assert!(filter.matches("name"));
        assert!(filter.matches("NAME"));
        assert!(filter.matches("item_name"));
        assert!(filter.matches("Item_Name"));
        assert!(!filter.matches("id"));
        assert!(!filter.matches("namespace"));
    }
}
