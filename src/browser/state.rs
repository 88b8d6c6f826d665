use super::matcher::CatalogMatcher;
use crate::catalog::TermCatalog;

/// State of the catalog browser popup
///
/// Holds the filter query, the matching catalog indices, and the current
/// selection. Rendering lives in the UI layer; this struct is plain data
/// plus navigation rules.
#[derive(Debug)]
pub struct BrowserState {
    visible: bool,
    query: String,
    matches: Vec<usize>,
    selected: usize,
    matcher: CatalogMatcher,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserState {
    pub fn new() -> Self {
        Self {
            visible: false,
            query: String::new(),
            matches: Vec::new(),
            selected: 0,
            matcher: CatalogMatcher::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Open the popup with an empty filter over the full catalog
    pub fn open(&mut self, catalog: &TermCatalog) {
        self.visible = true;
        self.query.clear();
        self.selected = 0;
        self.refresh(catalog);
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn push_char(&mut self, c: char, catalog: &TermCatalog) {
        self.query.push(c);
        self.selected = 0;
        self.refresh(catalog);
    }

    pub fn pop_char(&mut self, catalog: &TermCatalog) {
        self.query.pop();
        self.selected = 0;
        self.refresh(catalog);
    }

    pub fn select_next(&mut self) {
        if !self.matches.is_empty() {
            self.selected = (self.selected + 1) % self.matches.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.matches.is_empty() {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.matches.len() - 1);
        }
    }

    /// Matching term names, best first
    pub fn matching_names<'a>(&self, catalog: &'a TermCatalog) -> Vec<&'a str> {
        let names: Vec<&str> = catalog.names().collect();
        self.matches.iter().map(|&idx| names[idx]).collect()
    }

    /// Index of the selected row within the match list
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Name of the currently selected term, if any
    pub fn selected_name<'a>(&self, catalog: &'a TermCatalog) -> Option<&'a str> {
        let names: Vec<&str> = catalog.names().collect();
        self.matches.get(self.selected).map(|&idx| names[idx])
    }

    fn refresh(&mut self, catalog: &TermCatalog) {
        let names: Vec<&str> = catalog.names().collect();
        self.matches = self.matcher.filter(&self.query, &names);
    }
}
