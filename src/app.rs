//! Application state and rendering
//!
//! Single-threaded event loop state: one search box, the suggestion row,
//! the explanation pane, and the sidebar. Submitting a term performs one
//! blocking oracle round trip (cache-through); there is never more than
//! one interaction in flight.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tui_textarea::TextArea;

use medterm::browser::BrowserState;
use medterm::catalog::{BodySystem, SystemFilter, TermCatalog};
use medterm::config::Config;
use medterm::oracle::{Explainer, OracleProvider, related_terms};
use medterm::sections::{MAX_RELATED_CHIPS, SectionKey, SectionMap, sectionize};
use medterm::suggest::suggest;

use crate::layout;

/// Cosmetic minimum fetch duration, so cache hits still read as a lookup
const MIN_FETCH_DELAY: Duration = Duration::from_millis(200);

const DISCLAIMER: &str =
    "Not medical advice. Informational definitions only; consult a licensed professional.";

/// Application state
pub struct App {
    should_quit: bool,
    catalog: &'static TermCatalog,
    config: Config,
    filter: SystemFilter,
    input: TextArea<'static>,
    suggestions: Vec<&'static str>,
    selected_suggestion: Option<usize>,
    explainer: Option<Explainer>,
    oracle_notice: Option<String>,
    current_term: Option<String>,
    sections: Option<SectionMap>,
    related: Vec<String>,
    status: Option<String>,
    browser: BrowserState,
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config, filter: SystemFilter, initial_term: Option<String>) -> Self {
        let (explainer, oracle_notice) = match OracleProvider::from_config(&config.oracle) {
            Ok(provider) => (Some(Explainer::new(provider)), None),
            Err(e) => {
                log::debug!("oracle provider unavailable: {e}");
                (None, Some(e.to_string()))
            }
        };

        let mut input = TextArea::default();
        input.set_cursor_line_style(Style::default());
        input.set_placeholder_text("e.g. myocardial infarction, appendicitis, concussion...");
        input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search medical term ")
                .border_style(Style::default().fg(Color::Cyan)),
        );

        let mut app = Self {
            should_quit: false,
            catalog: TermCatalog::builtin(),
            config,
            filter,
            input,
            suggestions: Vec::new(),
            selected_suggestion: None,
            explainer,
            oracle_notice,
            current_term: None,
            sections: None,
            related: Vec::new(),
            status: None,
            browser: BrowserState::new(),
        };

        if let Some(term) = initial_term {
            app.set_input(&term);
            app.refresh_suggestions();
        }

        app
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current search bar text
    pub fn query_text(&self) -> String {
        self.input
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or_default()
            .to_string()
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    pub fn current_sections(&self) -> Option<&SectionMap> {
        self.sections.as_ref()
    }

    pub fn filter(&self) -> &SystemFilter {
        &self.filter
    }

    pub fn browser(&self) -> &BrowserState {
        &self.browser
    }

    /// Handle a key press
    pub fn on_key(&mut self, key: KeyEvent) {
        if self.browser.is_visible() {
            self.on_browser_key(key);
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('b') if ctrl => self.browser.open(self.catalog),
            KeyCode::Char('f') if ctrl => self.cycle_filter(),
            KeyCode::Tab => self.cycle_suggestion(),
            KeyCode::Enter => self.submit(),
            _ => {
                if self.input.input(key) {
                    self.selected_suggestion = None;
                    self.refresh_suggestions();
                }
            }
        }
    }

    fn on_browser_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.browser.close(),
            KeyCode::Enter => {
                if let Some(name) = self.browser.selected_name(self.catalog) {
                    self.set_input(name);
                }
                self.browser.close();
                self.refresh_suggestions();
            }
            KeyCode::Down => self.browser.select_next(),
            KeyCode::Up => self.browser.select_prev(),
            KeyCode::Backspace => self.browser.pop_char(self.catalog),
            KeyCode::Char(c) => self.browser.push_char(c, self.catalog),
            _ => {}
        }
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = suggest(
            &self.query_text(),
            self.catalog,
            &self.filter,
            self.config.suggest.limit,
        );
    }

    /// Tab-complete through the suggestion row
    fn cycle_suggestion(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let next = match self.selected_suggestion {
            None => 0,
            Some(idx) => (idx + 1) % self.suggestions.len(),
        };
        self.selected_suggestion = Some(next);
        let name = self.suggestions[next];
        self.set_input(name);
    }

    /// Cycle the body-system filter: unrestricted, then each system in turn
    fn cycle_filter(&mut self) {
        let next = match self.filter.systems().next() {
            None => Some(BodySystem::ALL[0]),
            Some(current) => {
                let idx = BodySystem::ALL
                    .iter()
                    .position(|s| *s == current)
                    .unwrap_or(0);
                BodySystem::ALL.get(idx + 1).copied()
            }
        };
        self.filter = match next {
            Some(system) => SystemFilter::only(system),
            None => SystemFilter::none(),
        };
        self.refresh_suggestions();
    }

    /// Submit the current query: one blocking fetch, then sectionize
    fn submit(&mut self) {
        let term = self.query_text().trim().to_ascii_lowercase();
        if term.is_empty() {
            return;
        }

        self.status = None;
        if let Some(entry) = self.catalog.get(&term)
            && !self.filter.allows(entry.system)
        {
            self.status = Some(
                "Note: the term exists but is outside the selected body system filter."
                    .to_string(),
            );
        }

        let started = Instant::now();
        let text = match self.explainer.as_mut() {
            Some(explainer) => match explainer.explain(&term) {
                Ok((text, cached)) => {
                    if cached {
                        log::debug!("served {term:?} from cache");
                    }
                    text
                }
                Err(e) => format!("Error from model: {e}"),
            },
            None => {
                let notice = self
                    .oracle_notice
                    .as_deref()
                    .unwrap_or("oracle not configured");
                format!("Error from model: {notice}")
            }
        };

        // Cosmetic minimum duration so instant cache hits still read as a fetch
        if let Some(remaining) = MIN_FETCH_DELAY.checked_sub(started.elapsed()) {
            std::thread::sleep(remaining);
        }

        self.related = match &self.explainer {
            Some(explainer) => explainer.related(&term, self.catalog),
            None => related_terms(&term, self.catalog, None),
        };
        self.sections = Some(sectionize(&text));
        self.current_term = Some(term);
    }

    fn set_input(&mut self, text: &str) {
        self.input.select_all();
        self.input.cut();
        self.input.insert_str(text);
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let layout = layout::compute(frame.area());

        frame.render_widget(&self.input, layout.search);
        self.render_suggestions(frame, layout.suggestions);
        self.render_content(frame, layout.content);
        self.render_sidebar(frame, layout.sidebar);
        self.render_status(frame, layout.status);

        if self.browser.is_visible() {
            self.render_browser(frame);
        }
    }

    /// Render the suggestion chip row
    fn render_suggestions(&self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();
        for (idx, name) in self.suggestions.iter().enumerate() {
            let icon = self
                .catalog
                .get(name)
                .map(|entry| entry.icon)
                .unwrap_or("🩺");
            let style = if self.selected_suggestion == Some(idx) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            spans.push(Span::styled(format!(" {icon} {} ", title_case(name)), style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Render the explanation pane
    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Explanation ")
            .border_style(Style::default().fg(Color::Cyan));

        let mut lines: Vec<Line> = Vec::new();
        match (&self.current_term, &self.sections) {
            (Some(term), Some(sections)) => {
                let (icon, system) = match self.catalog.get(term) {
                    Some(entry) => (entry.icon, entry.system.label()),
                    None => ("🩺", "General"),
                };
                lines.push(Line::from(Span::styled(
                    format!("🔬 {}", title_case(term)),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(format!("{icon} {system}")));
                lines.push(Line::from(Span::styled(
                    DISCLAIMER,
                    Style::default().fg(Color::Yellow),
                )));
                lines.push(Line::default());

                for (key, chunk) in sections.iter() {
                    if key == SectionKey::Related {
                        continue;
                    }
                    lines.push(Line::from(Span::styled(
                        key.title(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )));
                    lines.push(Line::from(chunk.to_string()));
                    lines.push(Line::default());
                }

                let chips = sections.related_chips();
                if !chips.is_empty() {
                    lines.push(Line::from(Span::styled(
                        SectionKey::Related.title(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )));
                    let shown: Vec<String> = chips
                        .iter()
                        .take(MAX_RELATED_CHIPS)
                        .map(|chip| format!("[{}]", title_case(chip)))
                        .collect();
                    lines.push(Line::from(shown.join(" ")));
                }
            }
            _ => {
                lines.push(Line::from("🔎 Start by searching a medical term."));
                lines.push(Line::default());
                lines.push(Line::from(
                    "Try: myocardial infarction, appendicitis, concussion.",
                ));
            }
        }

        let content = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(content, area);
    }

    /// Render related terms and body-system counts
    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Related & Systems ")
            .border_style(Style::default().fg(Color::DarkGray));

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            "🔗 Related",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        if self.current_term.is_some() {
            if self.related.is_empty() {
                lines.push(Line::from("No related terms found."));
            } else {
                for name in &self.related {
                    lines.push(Line::from(format!("• {}", title_case(name))));
                }
            }
        } else {
            lines.push(Line::from("Popular terms:"));
            for name in ["myocardial infarction", "stroke", "appendicitis", "concussion"] {
                lines.push(Line::from(format!("• {}", title_case(name))));
            }
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "🧭 Body Systems",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for (system, count) in self.catalog.system_counts() {
            lines.push(Line::from(format!("• {} ({count})", system.label())));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Render the status line: filter state, notices, key hints
    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let filter_label = if self.filter.is_empty() {
            "all systems".to_string()
        } else {
            self.filter
                .systems()
                .map(|system| system.label().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };

        let text = match &self.status {
            Some(note) => format!(" {note} "),
            None => format!(
                " Filter: {filter_label} · Tab complete · Enter search · Ctrl+B browse · Ctrl+F filter · Esc quit "
            ),
        };

        let style = if self.status.is_some() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(Paragraph::new(text).style(style), area);
    }

    /// Render the catalog browser popup
    fn render_browser(&self, frame: &mut Frame) {
        let area = layout::centered_rect(44, 14, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Catalog · filter: {} ", self.browser.query()))
            .border_style(Style::default().fg(Color::Cyan));

        let names = self.browser.matching_names(self.catalog);
        let selected = self.browser.selected_index();
        let visible_rows = area.height.saturating_sub(2) as usize;
        let offset = selected.saturating_sub(visible_rows.saturating_sub(1));

        let mut lines: Vec<Line> = Vec::new();
        for (idx, name) in names.iter().enumerate().skip(offset).take(visible_rows) {
            let icon = self
                .catalog
                .get(name)
                .map(|entry| entry.icon)
                .unwrap_or("🩺");
            let style = if idx == selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("{icon} {}", title_case(name)),
                style,
            )));
        }
        if names.is_empty() {
            lines.push(Line::from("No matching terms."));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Uppercase the first letter of each word, for display only
fn title_case(term: &str) -> String {
    term.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
