//! Dropdown selector component.

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::events::Action;
use crate::item::{Item, is_selected};
use crate::tui::interaction::{ClickRegion, InteractiveRegion};
use crate::tui::theme::*;

/// Word placed before a selected label in the open list.
pub const DECORATION_PREFIX: &str = "Yeeeah";
/// Hint shown in the empty draft field.
pub const DRAFT_HINT: &str = "Type and press Enter to add...";

const HEADER_HEIGHT: u16 = 3;
const DRAFT_PROMPT: &str = "› ";

/// Text for the closed header: the selected label, plain, or the placeholder.
///
/// Returns the text and whether it is the placeholder.
pub fn header_label<'a>(selected: &'a [Item], placeholder: &'a str) -> (&'a str, bool) {
    match selected.first() {
        Some(item) => (item.label.as_str(), false),
        None => (placeholder, true),
    }
}

/// Text for a row of the open list. Selected rows read `Yeeeah, <label>!`.
pub fn option_label(item: &Item, selected: &[Item]) -> String {
    if is_selected(item, selected) {
        format!("{}, {}!", DECORATION_PREFIX, item.label)
    } else {
        item.label.clone()
    }
}

fn option_spans<'a>(item: &'a Item, selected: &[Item]) -> Vec<Span<'a>> {
    if !is_selected(item, selected) {
        return vec![
            Span::styled("  ", Style::new()),
            Span::styled(item.label.as_str(), Style::new().fg(TEXT_WHITE)),
            Span::raw(" "),
            Span::raw(item.icon.as_str()),
        ];
    }

    let label = option_label(item, selected);
    let rest = label[DECORATION_PREFIX.len()..].to_string();
    let row = Style::new().bg(SELECTED_BG);
    vec![
        Span::styled("  ", row),
        Span::styled(DECORATION_PREFIX, row.fg(ACCENT_GOLD).bold()),
        Span::styled(rest, row.fg(TEXT_WHITE).bold()),
        Span::styled(" ", row),
        Span::styled(item.icon.as_str(), row),
        Span::styled(" ✓", row.fg(ACCENT_MINT).bold()),
    ]
}

/// Render the dropdown at the top of `area` and register its hit regions.
pub fn render_dropdown(frame: &mut Frame, area: Rect, app: &mut App) {
    let width = app.width.min(area.width);
    let header_area = Rect::new(area.x, area.y, width, HEADER_HEIGHT.min(area.height));
    let is_open = app.dropdown.is_open();

    // Header / trigger
    let (title, is_placeholder) = header_label(&app.selected, &app.placeholder);
    let title_style = if is_placeholder {
        Style::new().fg(TEXT_DIM)
    } else {
        Style::new().fg(TEXT_WHITE)
    };
    let arrow = if is_open { "▲" } else { "▼" };
    let arrow_span = Span::styled(arrow, Style::new().fg(ACCENT_BLUE));
    let inner_width = header_area.width.saturating_sub(2) as usize;
    let title_span = Span::styled(title, title_style);
    let gap = inner_width.saturating_sub(title_span.width() + arrow_span.width() + 2);

    let border_color = if is_open { ACCENT_MINT } else { TEXT_DIM };
    let header = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        title_span,
        Span::raw(" ".repeat(gap)),
        arrow_span,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(border_color)),
    );
    frame.render_widget(header, header_area);

    app.interactions
        .register_click("dropdown_trigger", header_area.into(), Action::ToggleTrigger);

    if !is_open {
        app.dropdown.set_bounds(header_area.into());
        return;
    }

    // Open list: draft field, then one row per item
    let below = area.height.saturating_sub(header_area.height);
    // Borders plus draft field plus one row per item, clamped to the cell range
    let wanted = u16::try_from(app.items.len().saturating_add(3)).unwrap_or(u16::MAX);
    let panel_area = Rect::new(area.x, header_area.bottom(), width, wanted.min(below));
    let rows_visible = panel_area.height.saturating_sub(3) as usize;

    // Keep the selected row in view when the list is taller than the panel
    let selected_idx = app.items.iter().position(|i| is_selected(i, &app.selected));
    let start = match selected_idx {
        Some(idx) if idx >= rows_visible => idx + 1 - rows_visible,
        _ => 0,
    };

    let draft = app.dropdown.draft();
    let mut lines: Vec<Line> = vec![];
    if draft.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(DRAFT_PROMPT, Style::new().fg(ACCENT_CORAL)),
            Span::styled(DRAFT_HINT, Style::new().fg(TEXT_DIM).italic()),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled(DRAFT_PROMPT, Style::new().fg(ACCENT_CORAL)),
            Span::styled(draft.text(), Style::new().fg(TEXT_WHITE)),
        ]));
    }

    let mut option_regions = vec![];
    for (row, (idx, item)) in app
        .items
        .iter()
        .enumerate()
        .skip(start)
        .take(rows_visible)
        .enumerate()
    {
        lines.push(Line::from(option_spans(item, &app.selected)));

        let y = panel_area.y + 2 + row as u16;
        option_regions.push((idx, ClickRegion::new(panel_area.x, y, panel_area.width, 1)));
    }

    // Cursor inside the draft field
    let before_cursor: String = draft.text().chars().take(draft.cursor()).collect();
    let typed_width = u16::try_from(Span::raw(before_cursor).width()).unwrap_or(u16::MAX);
    let cursor_x = panel_area
        .x
        .saturating_add(1 + Span::raw(DRAFT_PROMPT).width() as u16)
        .saturating_add(typed_width);
    let cursor_y = panel_area.y + 1;

    frame.render_widget(Clear, panel_area);
    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(ACCENT_MINT)),
    );
    frame.render_widget(panel, panel_area);

    if panel_area.height > 2 {
        frame.set_cursor_position(Position::new(
            cursor_x.min(panel_area.right().saturating_sub(2)),
            cursor_y,
        ));
    }

    for (idx, bounds) in option_regions {
        app.interactions.register(
            InteractiveRegion::clickable("dropdown_option", bounds, Action::SelectItem(idx))
                .with_priority(1),
        );
    }

    app.dropdown
        .set_bounds(header_area.union(panel_area).into());
}
