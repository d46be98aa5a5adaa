//! Incoming query-parameter extraction.
//!
//! Mirrors what a bridge page sees in `location.search`: an ordered set of
//! decoded key/value pairs where a repeated key keeps only its last value.
//! Parsing never fails; malformed percent sequences fall through verbatim.

use url::form_urlencoded;

/// Ordered mapping from parameter name to decoded string value.
///
/// Keys are unique. Re-inserting an existing key overwrites its value in
/// place, so the key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    pairs: Vec<(String, String)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse a raw query string (with or without a leading `?`).
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut map = Self::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            map.insert(&key, &value);
        }
        map
    }

    /// Extract parameters from a full page URL.
    ///
    /// Takes the text between the first `?` and any `#` fragment, the same
    /// slice a browser exposes as `location.search`. A URL without a query
    /// component yields an empty map.
    pub fn from_page_url(page_url: &str) -> Self {
        let Some((_, after)) = page_url.split_once('?') else {
            return Self::new();
        };
        let query = after.split('#').next().unwrap_or(after);
        Self::from_query(query)
    }

    /// Insert a pair; an existing key is overwritten in place (last wins).
    pub fn insert(&mut self, key: &str, value: &str) {
        if let Some(pair) = self.pairs.iter_mut().find(|(k, _)| k == key) {
            pair.1 = value.to_string();
        } else {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a key, returning its value when present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize back to an `application/x-www-form-urlencoded` query string.
    ///
    /// Byte-stable for a given map; spaces become `+`, reserved characters
    /// are percent-encoded.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.iter() {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
