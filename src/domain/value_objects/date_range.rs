//! Date range value object
//!
//! Half-open interval `[start, end)` over UTC timestamps. The end bound
//! is exclusive, which is what makes back-to-back bookings legal: a stay
//! ending on the 5th does not collide with one starting on the 5th.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::error::{DomainError, DomainResult};

const SECONDS_PER_DAY: i64 = 86_400;

/// Half-open `[start, end)` stay interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Create a range. The end must be strictly after the start; empty
    /// and inverted ranges are rejected.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> DomainResult<Self> {
        if end <= start {
            return Err(DomainError::Validation(
                "End date must be after start date".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end
    }

    /// Number of nights covered, i.e. the day difference rounded up.
    /// A partial final day still counts as a night.
    pub fn number_of_nights(&self) -> i64 {
        // Stable equivalent of `i64::div_ceil` (unstable `int_roundings`)
        let seconds = (self.end - self.start).num_seconds();
        seconds.div_euclid(SECONDS_PER_DAY) + i64::from(seconds.rem_euclid(SECONDS_PER_DAY) != 0)
    }

    /// Whether two ranges share at least one instant. Touching ranges
    /// (one's end equals the other's start) do NOT overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether an instant falls inside the range. The end bound itself
    /// is excluded.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────
