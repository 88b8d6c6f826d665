//! Cache-through explanation fetching
//!
//! Thin facade over the provider and the response cache: one blocking
//! round trip per uncached term, verbatim replay for cached ones. Only
//! successful responses are cached; errors surface to the caller every
//! time so a transient failure is not replayed forever.

use super::cache::ResponseCache;
use super::prompt;
use super::provider::{OracleError, OracleProvider};
use super::related::related_terms;
use crate::catalog::TermCatalog;

/// Provider plus response cache, owned by the session
#[derive(Debug)]
pub struct Explainer {
    provider: OracleProvider,
    cache: ResponseCache,
}

impl Explainer {
    pub fn new(provider: OracleProvider) -> Self {
        Self {
            provider,
            cache: ResponseCache::new(),
        }
    }

    /// Fetch the explanation for a term, consulting the cache first
    ///
    /// The returned flag is true when the response came from the cache.
    pub fn explain(&mut self, term: &str) -> Result<(String, bool), OracleError> {
        if let Some(hit) = self.cache.get(term) {
            log::debug!("cache hit for {term:?}");
            return Ok((hit.to_string(), true));
        }

        let text = self
            .provider
            .complete(prompt::SYSTEM_PROMPT, &prompt::explain_prompt(term))?;
        self.cache.insert(term, text.clone());
        Ok((text, false))
    }

    /// Related terms for the side pane, oracle-assisted
    pub fn related(&self, term: &str, catalog: &TermCatalog) -> Vec<String> {
        related_terms(term, catalog, Some(&self.provider))
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}
