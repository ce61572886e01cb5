use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What kind of commitment blocks a unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IntervalKind {
    /// A guest booking.
    Booking,
    /// A unit-specific administrative block.
    UnitBlock,
    /// A block applying to every unit (e.g. site-wide closure).
    GlobalBlock,
}

impl std::fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Booking => write!(f, "booking"),
            Self::UnitBlock => write!(f, "unit block"),
            Self::GlobalBlock => write!(f, "global block"),
        }
    }
}

/// An existing commitment against a unit, read for conflict detection only.
/// Dates follow the half-open "checkout day is free" convention: the interval
/// occupies `[start, end)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservedInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub kind: IntervalKind,
}

impl ReservedInterval {
    /// Standard half-open overlap test. Back-to-back stays (checkout day
    /// equal to the next check-in day) do not conflict.
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        self.start < check_out && self.end > check_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(start: &str, end: &str) -> ReservedInterval {
        ReservedInterval {
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
            kind: IntervalKind::Booking,
        }
    }

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn back_to_back_stays_do_not_overlap() {
        let existing = booking("2025-07-01", "2025-07-08");
        assert!(!existing.overlaps(d("2025-07-08"), d("2025-07-15")));
    }

    #[test]
    fn preceding_stay_ending_on_check_in_does_not_overlap() {
        let existing = booking("2025-07-08", "2025-07-15");
        assert!(!existing.overlaps(d("2025-07-01"), d("2025-07-08")));
    }

    #[test]
    fn one_shared_night_overlaps() {
        let existing = booking("2025-07-01", "2025-07-08");
        assert!(existing.overlaps(d("2025-07-07"), d("2025-07-09")));
    }

    #[test]
    fn containment_overlaps() {
        let existing = booking("2025-07-01", "2025-07-31");
        assert!(existing.overlaps(d("2025-07-10"), d("2025-07-12")));
    }

    #[test]
    fn surrounding_request_overlaps() {
        let existing = booking("2025-07-10", "2025-07-12");
        assert!(existing.overlaps(d("2025-07-01"), d("2025-07-31")));
    }

    #[test]
    fn kind_display() {
        assert_eq!(IntervalKind::Booking.to_string(), "booking");
        assert_eq!(IntervalKind::UnitBlock.to_string(), "unit block");
        assert_eq!(IntervalKind::GlobalBlock.to_string(), "global block");
    }
}
