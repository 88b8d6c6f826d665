//! Response cache
//!
//! Exact-key memoization of oracle responses so repeated queries for the
//! same term skip the network. Process lifetime, unbounded, no eviction;
//! the term space is small and user-driven, so this stays a plain map
//! rather than a production cache.

use std::collections::HashMap;

/// Memoization table keyed by normalized term text
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, String>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized cache key: trimmed, lowercase
    fn key(term: &str) -> String {
        term.trim().to_ascii_lowercase()
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(&Self::key(term)).map(String::as_str)
    }

    pub fn insert(&mut self, term: &str, response: String) {
        self.entries.insert(Self::key(term), response);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
