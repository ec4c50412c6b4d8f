use std::time::Duration;

/// Tick interval in milliseconds. Elapsed time is derived from the start
/// timestamp on every tick, so the cadence only bounds display staleness.
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}
