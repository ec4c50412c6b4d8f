use crate::app::AppState;
use crate::domain::{format_seconds, HistoryEntry};
use crate::ui::styles::{
    achieved_style, border_style, default_style, hint_style, missed_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Create the two display lines for one history entry
fn create_entry_lines(entry: &HistoryEntry) -> Vec<Line<'static>> {
    let marker = if entry.achieved {
        Span::styled("✓ ", achieved_style())
    } else {
        Span::styled("○ ", missed_style())
    };

    vec![
        Line::from(vec![
            marker,
            Span::styled(entry.goal.clone(), default_style()),
            Span::raw("  "),
            Span::styled(entry.completed_at.clone(), hint_style()),
        ]),
        Line::from(Span::styled(
            format!(
                "   target {}m · actual {}",
                entry.target_minutes,
                format_seconds(entry.actual_time_seconds)
            ),
            hint_style(),
        )),
    ]
}

/// Render the completed-session history, newest-first
pub fn render_history_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let count = app.history.len();

    let title = if app.history_scroll_offset > 0 {
        format!(
            " Study History ({}) [scrolled +{}] ",
            count, app.history_scroll_offset
        )
    } else {
        format!(" Study History ({}) ", count)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if app.history.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(
                "  No completed sessions yet",
                hint_style(),
            )),
        ])
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .history
        .list()
        .iter()
        .skip(app.history_scroll_offset)
        .map(|entry| ListItem::new(create_entry_lines(entry)))
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}
