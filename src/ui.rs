//! The UI renders the application state into panes.
//!
//! The draw function lays out a navigation sidebar, the document pane, and a
//! help bar. The active marker and the cursor selection are styles applied
//! here and nowhere else; the state layer only flips booleans and never
//! knows what "active" looks like.

use crate::app_state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Style rendered for sections holding the active marker.
fn active_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Renders the full frame: navigation sidebar, document pane, help bar.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(0)])
        .split(rows[0]);

    draw_nav(f, app, panes[0]);
    draw_document(f, app, panes[1]);
    draw_help(f, app, rows[1]);
}

fn draw_nav(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .nav_entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let indent = "  ".repeat(app.sections[i].level.saturating_sub(1));
            let line = Line::from(vec![
                Span::raw(indent),
                Span::raw(entry.label.clone()),
            ]);

            // Selection wins over the active marker so the cursor stays visible.
            let style = if i == app.selected_entry {
                Style::default().add_modifier(Modifier::REVERSED)
            } else if app.is_active(i) {
                active_style()
            } else {
                Style::default()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!("Navigation ({} sections)", app.nav_entries.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_document(f: &mut Frame, app: &mut AppState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Document");
    let inner = block.inner(area);
    f.render_widget(block, area);

    // The pane's rendered height is the viewport height the observer
    // measures against; adopt it before slicing.
    app.resize(usize::from(inner.height));

    let top = app.viewport.top;
    let bottom = app.viewport.bottom().min(app.lines.len());

    let lines: Vec<Line> = app.lines[top..bottom]
        .iter()
        .enumerate()
        .map(|(offset, text)| {
            let absolute = top + offset;
            let heading_of_active = app
                .sections
                .iter()
                .enumerate()
                .any(|(i, section)| section.line_start == absolute && app.is_active(i));

            if heading_of_active {
                Line::from(Span::styled(text.clone(), active_style()))
            } else {
                Line::from(Span::raw(text.clone()))
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let help = if app.pending_scroll.is_some() {
        "Scrolling... | Esc: Stop | q: Quit"
    } else {
        "↑/↓: Select | Enter: Go to section | j/k: Scroll | PgUp/PgDn: Page | Home/End: Top/Bottom | q: Quit"
    };

    let text = app.message.clone().unwrap_or_else(|| help.to_string());
    let widget = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}
