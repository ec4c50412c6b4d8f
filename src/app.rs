use crate::domain::{Screen, Session, StartError, UiMode};
use crate::persistence::HistoryStore;
use chrono::Local;

/// Input form state for the setup screen
#[derive(Debug, Clone, Default)]
pub struct SetupForm {
    pub goal: String,
    pub target_minutes: String,
    pub editing_field: usize, // 0 = goal, 1 = target minutes
}

/// Main application state. Owns the session state machine and the history
/// store; the event loop drives it, the UI only reads from it.
pub struct AppState {
    pub screen: Screen,
    pub ui_mode: UiMode,
    pub form: SetupForm,
    /// The running session. `Some` exactly while the study screen is active.
    pub session: Option<Session>,
    pub history: HistoryStore,
    /// User-facing warning line: blocked start, or a best-effort history
    /// write that failed.
    pub warning: Option<String>,
    pub history_scroll_offset: usize,
}

impl AppState {
    pub fn new(history: HistoryStore) -> Self {
        Self {
            screen: Screen::Setup,
            ui_mode: UiMode::Normal,
            form: SetupForm::default(),
            session: None,
            history,
            warning: None,
            history_scroll_offset: 0,
        }
    }

    /// Store candidate goal/target values (for testing and programmatic use).
    /// No validation happens until `start_session`.
    pub fn configure(&mut self, goal: &str, target_minutes: &str) {
        self.form.goal = goal.to_string();
        self.form.target_minutes = target_minutes.to_string();
    }

    /// Switch between the goal and target fields
    pub fn form_toggle_field(&mut self) {
        self.form.editing_field = (self.form.editing_field + 1) % 2;
    }

    /// Add character to the active form field
    pub fn form_add_char(&mut self, c: char) {
        match self.form.editing_field {
            0 => self.form.goal.push(c),
            1 => self.form.target_minutes.push(c),
            _ => {}
        }
    }

    /// Backspace in the active form field
    pub fn form_backspace(&mut self) {
        match self.form.editing_field {
            0 => {
                self.form.goal.pop();
            }
            1 => {
                self.form.target_minutes.pop();
            }
            _ => {}
        }
    }

    /// Validate the form: goal non-empty, target a whole number of minutes > 0
    fn validate_form(&self) -> Result<(String, u32), StartError> {
        let goal = self.form.goal.trim();
        if goal.is_empty() {
            return Err(StartError::EmptyGoal);
        }

        let target: u32 = self
            .form
            .target_minutes
            .trim()
            .parse()
            .map_err(|_| StartError::InvalidTarget)?;
        if target == 0 {
            return Err(StartError::InvalidTarget);
        }

        Ok((goal.to_string(), target))
    }

    /// Start a session from the form. A blocked start leaves all state
    /// unchanged apart from the warning line, so the user can fix the form
    /// and retry.
    pub fn start_session(&mut self) {
        if self.screen != Screen::Setup {
            return;
        }

        match self.validate_form() {
            Ok((goal, target_minutes)) => {
                self.session = Some(Session::start(goal, target_minutes));
                self.screen = Screen::Study;
                self.ui_mode = UiMode::Normal;
                self.warning = None;
            }
            Err(e) => {
                self.warning = Some(e.to_string());
            }
        }
    }

    /// Refresh derived time values. No-op unless a session is running; the
    /// give-up confirmation is a sub-state of running, so the timer keeps
    /// ticking underneath the dialog.
    pub fn tick(&mut self) {
        if self.screen != Screen::Study {
            return;
        }
        if let Some(session) = &mut self.session {
            session.tick();
        }
    }

    /// Ask for give-up confirmation
    pub fn request_give_up(&mut self) {
        if self.screen == Screen::Study && self.ui_mode == UiMode::Normal {
            self.ui_mode = UiMode::ConfirmGiveUp;
        }
    }

    /// Discard the running session. Nothing is written to history; the form
    /// keeps its candidate values for a retry.
    pub fn confirm_give_up(&mut self) {
        if self.ui_mode != UiMode::ConfirmGiveUp {
            return;
        }
        self.session = None;
        self.ui_mode = UiMode::Normal;
        self.screen = Screen::Setup;
    }

    /// Dismiss the confirmation and keep studying
    pub fn cancel_give_up(&mut self) {
        if self.ui_mode == UiMode::ConfirmGiveUp {
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Resolve the running session as completed. Allowed at any elapsed time;
    /// `achieved` records whether the target was met. The history write is
    /// synchronous and best-effort: a failure surfaces as a warning, never
    /// blocks returning to the setup screen.
    pub fn complete_session(&mut self) {
        if self.screen != Screen::Study || self.ui_mode != UiMode::Normal {
            return;
        }

        if let Some(mut session) = self.session.take() {
            session.tick();
            let entry = session.resolve(Local::now());

            if let Err(e) = self.history.append(entry) {
                self.warning = Some(format!("History not saved: {}", e));
            } else {
                self.warning = None;
            }

            self.form = SetupForm::default();
            self.screen = Screen::Setup;
        }
    }

    /// Open the history screen (from setup only)
    pub fn open_history(&mut self) {
        if self.screen == Screen::Setup {
            self.screen = Screen::History;
            self.history_scroll_offset = 0;
        }
    }

    /// Return from the history screen to setup
    pub fn close_history(&mut self) {
        if self.screen == Screen::History {
            self.screen = Screen::Setup;
        }
    }

    pub fn scroll_history_up(&mut self) {
        self.history_scroll_offset = self.history_scroll_offset.saturating_sub(1);
    }

    pub fn scroll_history_down(&mut self) {
        if self.history_scroll_offset + 1 < self.history.len() {
            self.history_scroll_offset += 1;
        }
    }
}
