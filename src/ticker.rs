use std::time::Duration;

/// Event poll interval in milliseconds
pub const DEFAULT_POLL_MS: u64 = 250;

/// Countdown granularity in seconds
pub const TIMER_TICK_SECS: u64 = 1;

/// Get the event poll duration
pub fn poll_duration() -> Duration {
    Duration::from_millis(DEFAULT_POLL_MS)
}

/// Get the countdown tick duration
pub fn timer_tick() -> Duration {
    Duration::from_secs(TIMER_TICK_SECS)
}
