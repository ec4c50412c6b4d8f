use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One timed attempt at a user-declared goal. Exists only in memory while
/// running; elapsed time is always derived from `started_at`, never
/// accumulated.
#[derive(Debug, Clone)]
pub struct Session {
    pub goal: String,
    pub target_minutes: u32,
    /// Wall-clock start timestamp. Immutable once set.
    pub started_at: DateTime<Local>,
    /// Derived cache, refreshed by `tick()`. Whole seconds, floored.
    pub elapsed_seconds: u64,
}

impl Session {
    /// Start a new session now. Callers validate goal/target first.
    pub fn start(goal: String, target_minutes: u32) -> Self {
        Self::start_at(goal, target_minutes, Local::now())
    }

    /// Start a session with an explicit start timestamp (for testing and
    /// programmatic use)
    pub fn start_at(goal: String, target_minutes: u32, started_at: DateTime<Local>) -> Self {
        Self {
            goal,
            target_minutes,
            started_at,
            elapsed_seconds: 0,
        }
    }

    /// Recompute elapsed time from the start timestamp
    pub fn tick(&mut self) {
        self.tick_at(Local::now());
    }

    /// Recompute elapsed time against an explicit "now"
    pub fn tick_at(&mut self, now: DateTime<Local>) {
        let secs = (now - self.started_at).num_seconds();
        self.elapsed_seconds = secs.max(0) as u64;
    }

    pub fn target_seconds(&self) -> u64 {
        u64::from(self.target_minutes) * 60
    }

    /// Seconds until the target is met, clamped at zero
    pub fn remaining_seconds(&self) -> u64 {
        self.target_seconds().saturating_sub(self.elapsed_seconds)
    }

    /// Progress toward the target, clamped at 100
    pub fn progress_percent(&self) -> f64 {
        let target = self.target_seconds();
        if target == 0 {
            return 100.0;
        }
        (self.elapsed_seconds as f64 / target as f64 * 100.0).min(100.0)
    }

    /// Whether the target has been met. Display-only: the session never
    /// auto-resolves.
    pub fn is_target_reached(&self) -> bool {
        self.remaining_seconds() == 0
    }

    /// Build the history record for a completed session
    pub fn resolve(&self, completed_at: DateTime<Local>) -> HistoryEntry {
        HistoryEntry {
            id: completed_at.timestamp_millis(),
            goal: self.goal.clone(),
            target_minutes: self.target_minutes,
            actual_time_seconds: self.elapsed_seconds,
            completed_at: completed_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            achieved: self.elapsed_seconds >= self.target_seconds(),
        }
    }
}

/// A completed session as persisted in history.json. Created exactly once at
/// completion, never mutated afterwards. Field names match the on-disk
/// layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: i64,
    pub goal: String,
    pub target_minutes: u32,
    pub actual_time_seconds: u64,
    pub completed_at: String,
    pub achieved: bool,
}

/// Format whole seconds as "Xh Ym Zs", dropping the hour part when zero
pub fn format_seconds(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else {
        format!("{}m {}s", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn backdated(goal: &str, target_minutes: u32, elapsed_secs: i64) -> Session {
        let now = Local::now();
        let mut session =
            Session::start_at(goal.to_string(), target_minutes, now - Duration::seconds(elapsed_secs));
        session.tick_at(now);
        session
    }

    #[test]
    fn test_fresh_session_has_zero_elapsed() {
        let mut session = Session::start("Read chapter 3".to_string(), 25);
        session.tick();
        assert_eq!(session.elapsed_seconds, 0);
        assert_eq!(session.remaining_seconds(), 25 * 60);
        assert_eq!(session.progress_percent(), 0.0);
        assert!(!session.is_target_reached());
    }

    #[test]
    fn test_elapsed_derived_from_start_timestamp() {
        let session = backdated("Practice scales", 10, 300);
        assert_eq!(session.elapsed_seconds, 300);
        assert_eq!(session.remaining_seconds(), 300);
        assert!((session.progress_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_target_reached_exactly_at_target() {
        // Advance the clock by exactly the target duration
        let session = backdated("Finish homework", 25, 1500);
        assert_eq!(session.remaining_seconds(), 0);
        assert_eq!(session.progress_percent(), 100.0);
        assert!(session.is_target_reached());
    }

    #[test]
    fn test_remaining_clamped_at_zero_past_target() {
        let session = backdated("Review notes", 1, 90);
        assert_eq!(session.remaining_seconds(), 0);
        assert_eq!(session.progress_percent(), 100.0);
    }

    #[test]
    fn test_elapsed_never_negative_on_clock_skew() {
        let now = Local::now();
        let mut session =
            Session::start_at("Skewed".to_string(), 5, now + Duration::seconds(30));
        session.tick_at(now);
        assert_eq!(session.elapsed_seconds, 0);
    }

    #[test]
    fn test_progress_monotonic_over_ticks() {
        let now = Local::now();
        let mut session = Session::start_at("Essay draft".to_string(), 5, now);
        let mut last = session.progress_percent();
        for s in 1..=400 {
            session.tick_at(now + Duration::seconds(s));
            let pct = session.progress_percent();
            assert!(pct >= last);
            assert!(pct <= 100.0);
            last = pct;
        }
    }

    #[test]
    fn test_resolve_before_target_is_not_achieved() {
        let session = backdated("Flashcards", 10, 300);
        let entry = session.resolve(Local::now());
        assert_eq!(entry.goal, "Flashcards");
        assert_eq!(entry.target_minutes, 10);
        assert_eq!(entry.actual_time_seconds, 300);
        assert!(!entry.achieved);
    }

    #[test]
    fn test_resolve_achieved_boundary() {
        // achieved iff actual >= target*60, boundary inclusive
        let at_target = backdated("At target", 5, 300);
        assert!(at_target.resolve(Local::now()).achieved);

        let just_under = backdated("Just under", 5, 299);
        assert!(!just_under.resolve(Local::now()).achieved);

        let over = backdated("Over", 5, 301);
        assert!(over.resolve(Local::now()).achieved);
    }

    #[test]
    fn test_resolve_id_from_completion_timestamp() {
        let session = backdated("Id check", 5, 10);
        let completed_at = Local::now();
        let entry = session.resolve(completed_at);
        assert_eq!(entry.id, completed_at.timestamp_millis());
        assert_eq!(
            entry.completed_at,
            completed_at.format("%Y-%m-%d %H:%M:%S").to_string()
        );
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0), "0m 0s");
        assert_eq!(format_seconds(59), "0m 59s");
        assert_eq!(format_seconds(60), "1m 0s");
        assert_eq!(format_seconds(1500), "25m 0s");
        assert_eq!(format_seconds(3600), "1h 0m 0s");
        assert_eq!(format_seconds(3725), "1h 2m 5s");
    }
}
