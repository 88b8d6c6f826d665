//! Core library for medterm, an interactive medical terminology explainer.
//!
//! The two leaf components live in [`suggest`] (prefix + fuzzy term
//! suggestions over the built-in catalog) and [`sections`] (heuristic
//! splitting of oracle free text into labeled sections). Everything else is
//! supporting machinery: the static term catalog, the blocking oracle
//! client with its response cache, configuration, and the fuzzy catalog
//! browser used by the TUI.
//!
//! All explanations are informational only, never medical advice.

pub mod browser;
pub mod catalog;
pub mod config;
pub mod error;
pub mod oracle;
pub mod sections;
pub mod suggest;

pub use error::MedtermError;
