use crate::app::AppState;
use crate::domain::{Screen, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar for the current screen
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = match (app.screen, app.ui_mode) {
        (Screen::Setup, _) => Line::from(vec![
            Span::raw(" Tab switch field   "),
            Span::raw("Enter start   "),
            Span::raw("Ctrl+h history   "),
            Span::raw("Esc quit"),
        ]),
        (Screen::Study, UiMode::Normal) => Line::from(vec![
            Span::raw(" c/Enter complete   "),
            Span::raw("g/Esc give up   "),
            Span::raw("q quit"),
        ]),
        (Screen::Study, UiMode::ConfirmGiveUp) => Line::from(vec![
            Span::raw(" y confirm give up   "),
            Span::raw("n keep studying"),
        ]),
        (Screen::History, _) => Line::from(vec![
            Span::raw(" ↑/↓ scroll   "),
            Span::raw("Esc back   "),
            Span::raw("q quit"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
