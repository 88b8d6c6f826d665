//! Oracle integration
//!
//! Everything that talks to the external language model: the provider
//! abstraction and its blocking HTTP client, prompt templates, the
//! process-lifetime response cache, and the related-terms lookup. The
//! oracle is treated as an opaque text generator; whatever it returns is
//! handed to the sectionizer as-is.

mod cache;
mod explainer;
mod prompt;
mod provider;
mod related;

pub use cache::ResponseCache;
pub use explainer::Explainer;
pub use prompt::{SYSTEM_PROMPT, explain_prompt, related_prompt};
pub use provider::{AnthropicClient, OracleError, OracleProvider};
pub use related::{MAX_RELATED, related_terms};



#[cfg(test)]
#[path = "oracle/related_tests.rs"]
mod related_tests;
