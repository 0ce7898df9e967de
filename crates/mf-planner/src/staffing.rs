//! Ticket checker scheduling over shift intervals.

use tracing::debug;

/// A shift from `start` to `end`. Endpoints may be negative and may coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shift {
    pub start: i64,
    pub end: i64,
}

impl Shift {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// Number of ticket checkers hired for `schedule`.
///
/// Shifts are taken earliest end first (ties in input order); a shift is
/// taken when it starts no earlier than the last taken shift ended, so
/// back-to-back and zero-length shifts each count.
pub fn hire_ticket_checkers(schedule: &[Shift]) -> usize {
    let mut by_end = schedule.to_vec();
    by_end.sort_by_key(|shift| shift.end);

    let mut last_end: Option<i64> = None;
    let mut hired = 0;
    for shift in by_end {
        if last_end.is_none_or(|end| end <= shift.start) {
            last_end = Some(shift.end);
            hired += 1;
        }
    }

    debug!(shifts = schedule.len(), hired, "scheduled ticket checkers");
    hired
}
