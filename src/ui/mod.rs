pub mod history_pane;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod setup_pane;
pub mod study_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::{Screen, UiMode};
use history_pane::render_history_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_give_up_modal;
use ratatui::Frame;
use setup_pane::render_setup_pane;
use study_pane::render_study_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, app, layout.keybindings_area);

    // Render the current screen
    match app.screen {
        Screen::Setup => render_setup_pane(f, app, layout.content_area),
        Screen::Study => render_study_pane(f, app, layout.content_area),
        Screen::History => render_history_pane(f, app, layout.content_area),
    }

    // Render the give-up confirmation on top of the study screen
    if app.ui_mode == UiMode::ConfirmGiveUp {
        render_give_up_modal(f, size);
    }
}
