//! Layout computations for the main screen

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen regions of the main view
pub struct AppLayout {
    pub search: Rect,
    pub suggestions: Rect,
    pub content: Rect,
    pub sidebar: Rect,
    pub status: Rect,
}

/// Split the terminal area into the fixed regions
pub fn compute(area: Rect) -> AppLayout {
    let rows = Layout::vertical([
        Constraint::Length(3), // Search bar
        Constraint::Length(1), // Suggestion chips
        Constraint::Min(5),    // Content + sidebar
        Constraint::Length(1), // Status line
    ])
    .split(area);

    let columns =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).split(rows[2]);

    AppLayout {
        search: rows[0],
        suggestions: rows[1],
        content: columns[0],
        sidebar: columns[1],
        status: rows[3],
    }
}

/// Centered rectangle for popups, clamped to the surrounding area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
