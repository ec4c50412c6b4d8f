use thiserror::Error;

/// Which screen the application is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Goal/target input form. Initial state, returned to on every resolution.
    Setup,
    /// A session is running and the timer is ticking.
    Study,
    /// Read-only view of completed sessions.
    History,
}

/// UI mode within a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Pending give-up confirmation. Only reachable from the study screen;
    /// the session keeps running underneath.
    ConfirmGiveUp,
}

/// Why a session could not be started
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("Enter a goal before starting")]
    EmptyGoal,
    #[error("Target must be a whole number of minutes greater than zero")]
    InvalidTarget,
}
