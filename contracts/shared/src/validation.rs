//! Fixed-width casts for proposal schedules
//!
//! Timepoints are stored in 48 bits and durations in 32 bits. Values that do
//! not fit are rejected rather than truncated.

use crate::constants::MAX_TIMEPOINT;

/// Narrow a timepoint to 48 bits
pub fn to_timepoint(value: u64) -> Option<u64> {
    if value > MAX_TIMEPOINT {
        None
    } else {
        Some(value)
    }
}

/// Narrow a duration to 32 bits
pub fn to_duration(value: u64) -> Option<u32> {
    u32::try_from(value).ok()
}

/// Compute `(vote_start, vote_duration)` for a proposal created at `now`.
pub fn schedule(now: u64, voting_delay: u64, voting_period: u64) -> Option<(u64, u32)> {
    let start = to_timepoint(now.checked_add(voting_delay)?)?;
    let duration = to_duration(voting_period)?;
    Some((start, duration))
}

/// Last timepoint at which votes are accepted
pub fn vote_end(vote_start: u64, vote_duration: u32) -> u64 {
    // vote_start fits in 48 bits, so this cannot overflow
    vote_start + vote_duration as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_matches_reference_scenario() {
        let (start, duration) = schedule(1_000, 7_200, 50_400).unwrap();
        assert_eq!(start, 8_200);
        assert_eq!(duration, 50_400);
        assert_eq!(vote_end(start, duration), 58_600);
    }

    #[test]
    fn test_schedule_rejects_wide_values() {
        assert_eq!(schedule(MAX_TIMEPOINT, 1, 10), None);
        assert_eq!(schedule(u64::MAX, 1, 10), None);
        assert_eq!(schedule(0, 0, u32::MAX as u64 + 1), None);
        assert_eq!(schedule(MAX_TIMEPOINT, 0, u32::MAX as u64), Some((MAX_TIMEPOINT, u32::MAX)));
    }
}
