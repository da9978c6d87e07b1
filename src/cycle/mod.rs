//! Cycle prediction engine
//!
//! Pure date arithmetic over a recorded period start and an average cycle
//! length. None of these functions validate their input: a zero or negative
//! cycle length propagates through the arithmetic, and a query date before
//! the period start still yields a day count. Dates past the calendar range
//! saturate at `NaiveDate::MIN`/`NaiveDate::MAX` instead of panicking. Use
//! [`CycleState`] when input must be checked.
//!
//! ## Model
//!
//! ```text
//!  start                    ovulation                 next period
//!    |----------------------------|------- 14 days -------|
//!                     |<- 5 ->|   |<1>|
//!                     fertile window (6 days inclusive)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use femcare_core::cycle::{self, CyclePhase};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
//!
//! assert_eq!(cycle::ovulation_date(start, 28), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
//! let day = cycle::cycle_day(today, start);
//! assert_eq!(day, 12);
//! assert_eq!(cycle::cycle_phase(day, 28), CyclePhase::Follicular);
//! assert!(cycle::is_in_fertile_window(today, start, 28));
//! ```

mod phase;
mod prediction;
mod state;

pub use phase::CyclePhase;
pub use prediction::Prediction;
pub use state::{CycleState, MAX_CYCLE_LENGTH, MIN_CYCLE_LENGTH};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days between ovulation and the next period (constant luteal phase).
pub const LUTEAL_PHASE_DAYS: i64 = 14;

/// Days of the fertile window that precede ovulation.
pub const FERTILE_DAYS_BEFORE_OVULATION: i64 = 5;

/// Days of the fertile window that follow ovulation.
pub const FERTILE_DAYS_AFTER_OVULATION: i64 = 1;

/// Inclusive date range considered most likely to result in pregnancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FertileWindow {
    /// First fertile day (ovulation - 5 days)
    pub start: NaiveDate,
    /// Last fertile day (ovulation + 1 day)
    pub end: NaiveDate,
}

impl FertileWindow {
    /// Check whether `date` falls inside the window, both ends inclusive.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Shift `date` by `days`, saturating at the ends of the calendar.
fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Predicted start of the next period: `start + cycle_length` days.
#[must_use]
pub fn next_period_date(start: NaiveDate, cycle_length: i32) -> NaiveDate {
    shift(start, i64::from(cycle_length))
}

/// Predicted ovulation: 14 days before the next period.
///
/// For short cycle lengths this lands before `start`.
#[must_use]
pub fn ovulation_date(start: NaiveDate, cycle_length: i32) -> NaiveDate {
    shift(next_period_date(start, cycle_length), -LUTEAL_PHASE_DAYS)
}

/// Fertile window around the predicted ovulation.
#[must_use]
pub fn fertile_window(start: NaiveDate, cycle_length: i32) -> FertileWindow {
    let ovulation = ovulation_date(start, cycle_length);
    FertileWindow {
        start: shift(ovulation, -FERTILE_DAYS_BEFORE_OVULATION),
        end: shift(ovulation, FERTILE_DAYS_AFTER_OVULATION),
    }
}

/// Whether `query` lies in the fertile window of the given cycle.
#[must_use]
pub fn is_in_fertile_window(query: NaiveDate, start: NaiveDate, cycle_length: i32) -> bool {
    fertile_window(start, cycle_length).contains(query)
}

/// 1-indexed day of the cycle that `query` falls on.
///
/// Elapsed time is taken as an absolute value, so a query before `start`
/// returns the same count as one equally far after it. The result saturates
/// at `u32::MAX`.
#[must_use]
pub fn cycle_day(query: NaiveDate, start: NaiveDate) -> u32 {
    let elapsed = (query - start).num_days().unsigned_abs();
    u32::try_from(elapsed)
        .unwrap_or(u32::MAX)
        .saturating_add(1)
}

/// Phase for a cycle day.
///
/// Thresholds are fixed at 5/13/15 and do not scale with `cycle_length`.
#[must_use]
pub fn cycle_phase(cycle_day: u32, _cycle_length: i32) -> CyclePhase {
    CyclePhase::from_day(cycle_day)
}

/// Whole days from `today` until `target`; negative once `target` has passed.
#[must_use]
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_period_date() {
        assert_eq!(next_period_date(date(2024, 1, 1), 28), date(2024, 1, 29));
        assert_eq!(next_period_date(date(2024, 2, 10), 30), date(2024, 3, 11));
    }

    #[test]
    fn test_ovulation_date() {
        assert_eq!(ovulation_date(date(2024, 1, 1), 28), date(2024, 1, 15));
        assert_eq!(ovulation_date(date(2024, 1, 1), 35), date(2024, 1, 22));
    }

    #[test]
    fn test_ovulation_before_start_for_short_cycle() {
        // Accepted approximation: nothing is clamped.
        assert_eq!(ovulation_date(date(2024, 1, 20), 10), date(2024, 1, 16));
    }

    #[test]
    fn test_fertile_window() {
        let window = fertile_window(date(2024, 1, 1), 28);
        assert_eq!(window.start, date(2024, 1, 10));
        assert_eq!(window.end, date(2024, 1, 16));
    }

    #[test]
    fn test_fertile_window_endpoints() {
        let start = date(2024, 1, 1);
        assert!(is_in_fertile_window(date(2024, 1, 10), start, 28));
        assert!(is_in_fertile_window(date(2024, 1, 16), start, 28));
        assert!(!is_in_fertile_window(date(2024, 1, 9), start, 28));
        assert!(!is_in_fertile_window(date(2024, 1, 17), start, 28));
    }

    #[test]
    fn test_cycle_day_same_day_is_one() {
        let start = date(2024, 1, 1);
        assert_eq!(cycle_day(start, start), 1);
    }

    #[test]
    fn test_cycle_day_is_symmetric() {
        let start = date(2024, 1, 10);
        assert_eq!(cycle_day(date(2024, 1, 14), start), 5);
        assert_eq!(cycle_day(date(2024, 1, 6), start), 5);
    }

    #[test]
    fn test_cycle_phase_ignores_length() {
        for length in [21, 28, 35, 0, -3] {
            assert_eq!(cycle_phase(16, length), CyclePhase::Luteal);
            assert_eq!(cycle_phase(1, length), CyclePhase::Menstrual);
        }
    }

    #[test]
    fn test_days_until() {
        let today = date(2024, 1, 12);
        assert_eq!(days_until(date(2024, 1, 29), today), 17);
        assert_eq!(days_until(date(2024, 1, 10), today), -2);
        assert_eq!(days_until(today, today), 0);
    }

    #[test]
    fn test_zero_length_propagates() {
        let start = date(2024, 1, 1);
        assert_eq!(next_period_date(start, 0), start);
        assert_eq!(ovulation_date(start, 0), date(2023, 12, 18));
    }

    #[test]
    fn test_huge_length_saturates() {
        let start = date(2024, 1, 1);
        assert_eq!(next_period_date(start, 100_000_000), NaiveDate::MAX);
        assert_eq!(next_period_date(start, i32::MIN), NaiveDate::MIN);

        let window = fertile_window(start, i32::MAX);
        assert_eq!(window.end, NaiveDate::MAX - Duration::days(13));
        assert_eq!((window.end - window.start).num_days(), 6);

        let window = fertile_window(start, i32::MIN);
        assert_eq!(window.start, NaiveDate::MIN);
        assert!(!is_in_fertile_window(start, start, i32::MIN));
    }
}
