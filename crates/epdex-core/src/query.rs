//! Outgoing query shape for list endpoints.
//!
//! [`QuerySpec`] is the serialized form of one fetch: pagination is always
//! present, the search term only when non-empty, and named filters only when
//! they constrain anything (the [`FILTER_ALL`] sentinel is omitted, never
//! sent literally).

/// Sentinel filter value meaning "no constraint on this axis".
///
/// A filter holding this value is omitted from the outgoing query entirely.
pub const FILTER_ALL: &str = "all";

/// Query parameter name for the page number.
pub const PARAM_PAGE: &str = "page";
/// Query parameter name for the page size.
pub const PARAM_PAGE_SIZE: &str = "page_size";
/// Query parameter name for the search term.
pub const PARAM_SEARCH: &str = "search";

/// One fetch worth of query parameters, fully resolved.
///
/// Built by the controller from the latest filter-state snapshot and the
/// committed (debounced) search term at the moment the fetch is initiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    /// Page number, 1-based.
    pub page: u32,
    /// Fixed page size for this list instance.
    pub page_size: u32,
    /// Committed search term; `None` when empty.
    pub search: Option<String>,
    /// Active named filters in declaration order, sentinel values excluded.
    pub filters: Vec<(String, String)>,
}

impl QuerySpec {
    /// Render the query as ordered key/value pairs ready for URL encoding.
    ///
    /// `page` and `page_size` are always present; `search` and filters only
    /// when active.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(3 + self.filters.len());
        pairs.push((PARAM_PAGE.to_owned(), self.page.to_string()));
        pairs.push((PARAM_PAGE_SIZE.to_owned(), self.page_size.to_string()));
        if let Some(search) = &self.search {
            pairs.push((PARAM_SEARCH.to_owned(), search.clone()));
        }
        for (key, value) in &self.filters {
            pairs.push((key.clone(), value.clone()));
        }
        pairs
    }

    /// Whether a named filter is active on this query.
    #[must_use]
    pub fn has_filter(&self, key: &str) -> bool {
        self.filters.iter().any(|(k, _)| k == key)
    }

    /// Active value of a named filter, if any.
    #[must_use]
    pub fn filter_value(&self, key: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> QuerySpec {
        QuerySpec {
            page: 2,
            page_size: 10,
            search: Some("acme".into()),
            filters: vec![
                ("classification".into(), "cement".into()),
                ("year".into(), "2024".into()),
            ],
        }
    }

    #[test]
    fn pairs_always_include_pagination() {
        let pairs = QuerySpec {
            page: 1,
            page_size: 9,
            search: None,
            filters: Vec::new(),
        }
        .to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page".to_owned(), "1".to_owned()),
                ("page_size".to_owned(), "9".to_owned()),
            ]
        );
    }

    #[test]
    fn search_present_only_when_set() {
        let pairs = spec().to_pairs();
        assert!(pairs.contains(&("search".to_owned(), "acme".to_owned())));
        let no_search = QuerySpec {
            search: None,
            ..spec()
        };
        assert!(!no_search.to_pairs().iter().any(|(k, _)| k == "search"));
    }

    #[test]
    fn filters_preserve_declaration_order() {
        let pairs = spec().to_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["page", "page_size", "search", "classification", "year"]);
    }

    #[test]
    fn filter_lookup() {
        let spec = spec();
        assert!(spec.has_filter("year"));
        assert_eq!(spec.filter_value("classification"), Some("cement"));
        assert_eq!(spec.filter_value("status"), None);
    }
}
