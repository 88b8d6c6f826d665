//! Command-line interface and one-shot modes
//!
//! The one-shot flags exercise the core without the TUI: `--suggest` is
//! fully offline, `--explain` performs a single oracle round trip and
//! prints the sectioned result to stdout.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;

use medterm::catalog::{SystemFilter, TermCatalog};
use medterm::config::{self, Config};
use medterm::oracle::{Explainer, OracleProvider, related_terms};
use medterm::sections::{MAX_RELATED_CHIPS, SectionKey, sectionize};
use medterm::suggest::suggest;

/// Interactive medical terminology explainer (informational only, not medical advice)
#[derive(Debug, Parser)]
#[command(name = "medterm", version, about)]
pub struct Cli {
    /// Term to preload into the search bar
    pub term: Option<String>,

    /// Print suggestions for a partial term and exit (offline)
    #[arg(long, value_name = "PARTIAL")]
    pub suggest: Option<String>,

    /// Print the sectioned explanation for a term and exit
    #[arg(long, value_name = "TERM", conflicts_with = "suggest")]
    pub explain: Option<String>,

    /// Restrict candidates to a body system (repeatable)
    #[arg(long = "system", value_name = "NAME")]
    pub systems: Vec<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        Ok(match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load()?,
        })
    }

    /// Parse --system flags into a filter
    pub fn filter(&self) -> Result<SystemFilter> {
        let mut filter = SystemFilter::none();
        for name in &self.systems {
            filter.insert(name.parse()?);
        }
        Ok(filter)
    }
}

/// Print suggestions for a partial query, one per line
pub fn run_suggest(partial: &str, config: &Config, filter: &SystemFilter) {
    let catalog = TermCatalog::builtin();
    for name in suggest(partial, catalog, filter, config.suggest.limit) {
        println!("{name}");
    }
}

/// One oracle round trip: fetch, sectionize, print
pub fn run_explain(term: &str, config: &Config, filter: &SystemFilter) -> Result<()> {
    let catalog = TermCatalog::builtin();
    let provider = OracleProvider::from_config(&config.oracle)?;
    let mut explainer = Explainer::new(provider);

    if let Some(entry) = catalog.get(term)
        && !filter.allows(entry.system)
    {
        println!("note: the term exists but is outside the selected body system filter\n");
    }

    let text = match explainer.explain(term) {
        Ok((text, _cached)) => text,
        Err(e) => format!("Error from model: {e}"),
    };
    let map = sectionize(&text);

    if map.fallback_used() {
        // No recognized structure, print the response as-is
        println!("{}", text.trim());
        return Ok(());
    }

    for (key, chunk) in map.iter() {
        if key == SectionKey::Related {
            continue;
        }
        println!("{}\n{chunk}\n", key.title());
    }

    let chips = map.related_chips();
    if !chips.is_empty() {
        let shown: Vec<&str> = chips
            .iter()
            .map(String::as_str)
            .take(MAX_RELATED_CHIPS)
            .collect();
        println!("{}\n{}\n", SectionKey::Related.title(), shown.join(", "));
    }

    // Side-pane heuristic, kept offline in one-shot mode
    let related = related_terms(term, catalog, None);
    if !related.is_empty() {
        println!("See also: {}", related.join(", "));
    }

    Ok(())
}
