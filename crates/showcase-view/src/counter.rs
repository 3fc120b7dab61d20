//! # Count-Up Animation Schedule
//!
//! Leaderboard vote counts are rendered as `0` and counted up in the
//! browser. The timing lives here so the page script and the tests read
//! the same numbers: each leaderboard row carries its start offset and
//! step as `data-*` attributes and the script only follows them.
//!
//! ```text
//! row i starts at  START_DELAY + i × STAGGER
//! every TICK:      shown += step(target), clamped at target
//! step(target)  =  max(1, ceil(target / STEPS))
//! ```

use std::time::Duration;

/// Delay before the first row starts counting.
pub const START_DELAY: Duration = Duration::from_millis(300);
/// Extra delay per leaderboard row.
pub const STAGGER: Duration = Duration::from_millis(100);
/// Interval between displayed values.
pub const TICK: Duration = Duration::from_millis(50);
/// Nominal number of ticks to reach the target.
pub const STEPS: u64 = 30;

/// Increment per tick for a counter ending at `target`.
pub fn step(target: u64) -> u64 {
    target.div_ceil(STEPS).max(1)
}

/// When the counter on row `index` (zero-based) starts.
pub fn start_offset(index: usize) -> Duration {
    START_DELAY + STAGGER * u32::try_from(index).unwrap_or(u32::MAX)
}

/// Values shown on successive ticks. Always ends exactly at `target`.
pub fn counter_frames(target: u64) -> Vec<u64> {
    let inc = step(target);
    let mut frames = Vec::with_capacity((target / inc + 1) as usize);
    let mut current = 0u64;
    loop {
        current = current.saturating_add(inc);
        if current >= target {
            frames.push(target);
            return frames;
        }
        frames.push(current);
    }
}
