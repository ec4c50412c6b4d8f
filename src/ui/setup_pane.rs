use crate::app::AppState;
use crate::ui::styles::{border_style, error_style, modal_title_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the goal/target setup form
pub fn render_setup_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let form = &app.form;
    let mut lines = Vec::new();

    lines.push(Line::raw(""));

    // Goal field
    let goal_label = if form.editing_field == 0 {
        "Goal: (editing)"
    } else {
        "Goal:"
    };
    lines.push(Line::raw(goal_label));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(form.goal.clone(), modal_title_style()),
        if form.editing_field == 0 {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]));
    lines.push(Line::raw(""));

    // Target minutes field
    let target_label = if form.editing_field == 1 {
        "Target (minutes): (editing)"
    } else {
        "Target (minutes):"
    };
    lines.push(Line::raw(target_label));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(form.target_minutes.clone(), modal_title_style()),
        if form.editing_field == 1 {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]));
    lines.push(Line::raw(""));

    // Blocked-start warning, if any
    if let Some(warning) = &app.warning {
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", warning),
            error_style(),
        )));
        lines.push(Line::raw(""));
    }

    lines.push(Line::raw("Tab to switch fields  ·  Enter to start"));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Set a Study Goal ", title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
