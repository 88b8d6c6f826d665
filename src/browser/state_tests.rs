//! Tests for browser popup state

use super::state::BrowserState;
use crate::catalog::TermCatalog;

fn catalog() -> &'static TermCatalog {
    TermCatalog::builtin()
}

#[test]
fn test_starts_hidden() {
    let state = BrowserState::new();
    assert!(!state.is_visible());
}

#[test]
fn test_open_shows_full_catalog() {
    let mut state = BrowserState::new();
    state.open(catalog());

    assert!(state.is_visible());
    assert_eq!(state.matching_names(catalog()).len(), catalog().len());
    assert_eq!(state.selected_name(catalog()), Some("anaphylaxis"));
}

#[test]
fn test_typing_narrows_matches() {
    let mut state = BrowserState::new();
    state.open(catalog());
    for c in "stroke".chars() {
        state.push_char(c, catalog());
    }

    assert_eq!(state.query(), "stroke");
    assert_eq!(state.selected_name(catalog()), Some("stroke"));
}

#[test]
fn test_backspace_widens_matches_again() {
    let mut state = BrowserState::new();
    state.open(catalog());
    state.push_char('q', catalog());
    state.push_char('q', catalog());
    assert!(state.matching_names(catalog()).is_empty());
    assert_eq!(state.selected_name(catalog()), None);

    state.pop_char(catalog());
    state.pop_char(catalog());
    assert_eq!(state.matching_names(catalog()).len(), catalog().len());
}

#[test]
fn test_selection_wraps_around() {
    let mut state = BrowserState::new();
    state.open(catalog());

    let count = state.matching_names(catalog()).len();
    for _ in 0..count {
        state.select_next();
    }
    assert_eq!(state.selected_index(), 0);

    state.select_prev();
    assert_eq!(state.selected_index(), count - 1);
}

#[test]
fn test_reopen_resets_query() {
    let mut state = BrowserState::new();
    state.open(catalog());
    state.push_char('s', catalog());
    state.close();

    state.open(catalog());
    assert_eq!(state.query(), "");
    assert_eq!(state.matching_names(catalog()).len(), catalog().len());
}
