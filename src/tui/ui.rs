use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::components::render_dropdown;
use super::theme::*;
use crate::app::App;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Regions are rebuilt from scratch every frame
    app.interactions.clear();

    let main_layout = Layout::vertical([
        Constraint::Length(2), // Title + spacing
        Constraint::Length(1), // Current selection
        Constraint::Length(1), // Spacing
        Constraint::Min(0),    // Dropdown
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::styled(" selectbox", Style::new().fg(ACCENT_MINT).bold())),
        main_layout[0],
    );

    render_status(frame, main_layout[1], app);
    render_hotkeys(frame, main_layout[4], app);

    let dropdown_area = Rect {
        x: main_layout[3].x + 1,
        width: main_layout[3].width.saturating_sub(1),
        ..main_layout[3]
    };
    render_dropdown(frame, dropdown_area, app);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(" Selected: ", Style::new().fg(TEXT_DIM))];
    match app.current() {
        Some(item) => {
            spans.push(Span::styled(item.label.as_str(), Style::new().fg(TEXT_WHITE)));
            spans.push(Span::raw(" "));
            spans.push(Span::raw(item.icon.as_str()));
            spans.push(Span::styled(
                format!("  (id {})", item.id),
                Style::new().fg(TEXT_DIM),
            ));
        }
        None => spans.push(Span::styled("nothing", Style::new().fg(TEXT_DIM).italic())),
    }
    spans.push(Span::styled(
        format!("  · {} items", app.items.len()),
        Style::new().fg(TEXT_DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let keys: &[(&str, &str)] = if app.dropdown.is_open() {
        &[("[Enter]", " add · "), ("[Esc]", " close · "), ("[click]", " select")]
    } else {
        &[("[Enter]", " open · "), ("[click]", " toggle · "), ("[q]", " quit")]
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, desc) in keys {
        spans.push(Span::styled(*key, Style::new().fg(TEXT_WHITE)));
        spans.push(Span::styled(*desc, Style::new().fg(TEXT_DIM)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
