//! Query-pair construction.
//!
//! Filtered fetches and filtered exports must produce byte-identical query
//! strings, so both consume the same ordered pair list. Empty values are
//! omitted entirely rather than sent as empty strings; multi-valued keys
//! append one pair per value.

use url::Url;

/// An ordered list of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key=value` unless the value is empty.
    pub fn push_nonempty(&mut self, key: &'static str, value: &str) {
        if !value.is_empty() {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Appends `key=value` for every value, as repeated parameters.
    pub fn push_repeated<I, S>(&mut self, key: &'static str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.pairs.push((key, value.into()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// Sets this pair list as the query string of `url`.
    ///
    /// A pair list with no entries leaves the URL without a query string
    /// instead of a dangling `?`.
    pub fn apply_to(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            url.set_query(None);
            return;
        }
        let mut serializer = url.query_pairs_mut();
        serializer.clear();
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
    }
}
