use crate::app::AppState;
use crate::domain::format_seconds;
use crate::ui::styles::{
    border_style, default_style, error_style, gauge_style, reached_style, title_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the running session: goal, progress gauge, elapsed/remaining
pub fn render_study_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(session) = &app.session else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Studying ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Goal
            Constraint::Length(1), // Gauge
            Constraint::Min(0),    // Time readouts
        ])
        .split(inner);

    // Goal line
    let goal = Paragraph::new(Line::from(vec![
        Span::styled("Goal: ", title_style()),
        Span::styled(session.goal.clone(), default_style()),
    ]));
    f.render_widget(goal, chunks[0]);

    // Progress gauge, clamped at 100
    let progress = session.progress_percent();
    let gauge = Gauge::default()
        .block(Block::default())
        .gauge_style(gauge_style())
        .percent(progress as u16)
        .label(format!("{:.0}%", progress));
    f.render_widget(gauge, chunks[1]);

    // Time readouts
    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Elapsed:   ", title_style()),
        Span::raw(format_seconds(session.elapsed_seconds)),
    ]));

    let remaining_line = if session.is_target_reached() {
        Line::from(vec![
            Span::styled("Remaining: ", title_style()),
            Span::styled("Target reached!", reached_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled("Remaining: ", title_style()),
            Span::raw(format_seconds(session.remaining_seconds())),
        ])
    };
    lines.push(remaining_line);

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Target:    ", title_style()),
        Span::raw(format!("{} minutes", session.target_minutes)),
    ]));

    if let Some(warning) = &app.warning {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", warning),
            error_style(),
        )));
    }

    f.render_widget(Paragraph::new(lines), chunks[2]);
}
