//! Module checklist screen

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::state::ChecklistState;
use crate::cli::tui::theme::Theme;

/// Render the checklist screen
pub fn render(frame: &mut Frame, state: &ChecklistState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    render_module_list(frame, chunks[0], state, theme);
    render_help_bar(frame, chunks[1], theme);
}

fn render_module_list(frame: &mut Frame, area: Rect, state: &ChecklistState, theme: &Theme) {
    let items: Vec<ListItem> = state
        .items
        .iter()
        .enumerate()
        .map(|(idx, module)| {
            let is_checked = state.is_checked(idx);
            let checkbox = if is_checked {
                Span::styled("[✓] ", theme.success)
            } else {
                Span::styled("[ ] ", theme.muted)
            };
            let name = if is_checked {
                Span::styled(module.clone(), theme.success)
            } else {
                Span::raw(module.clone())
            };
            ListItem::new(Line::from(vec![checkbox, name]))
        })
        .collect();

    let title = match state.selected_count() {
        0 => " Select modules ".to_string(),
        count => format!(" {} of {} selected ", count, state.items.len()),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(theme.border),
        )
        .highlight_style(theme.selected);

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_help_bar(frame: &mut Frame, area: Rect, theme: &Theme) {
    let mut spans = vec![Span::raw(" ")];
    for (idx, (key, action)) in [
        ("↑↓", "Move"),
        ("Space", "Toggle"),
        ("a", "All"),
        ("Enter", "Confirm"),
        ("Esc", "Cancel"),
    ]
    .into_iter()
    .enumerate()
    {
        if idx > 0 {
            spans.push(Span::styled("  •  ", theme.muted));
        }
        spans.push(Span::styled(key, theme.highlight));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let help = Paragraph::new(Line::from(spans)).style(theme.help_bar);
    frame.render_widget(help, area);
}
