//! Bundled predictions for the current cycle

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CyclePhase, FertileWindow};
use crate::records::CycleRecord;

/// Every prediction derived from one cycle record and a query date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Predicted next period start.
    pub next_period: NaiveDate,
    /// Predicted ovulation day.
    pub ovulation: NaiveDate,
    /// Predicted fertile window.
    pub fertile_window: FertileWindow,
    /// Cycle day of the query date.
    pub cycle_day: u32,
    /// Phase of the query date.
    pub phase: CyclePhase,
    /// Whether the query date is fertile.
    pub is_in_fertile_window: bool,
    /// Days until the next period; zero or negative when due.
    pub days_until_period: i64,
    /// Days until ovulation; negative once it has passed.
    pub days_until_ovulation: i64,
}

impl Prediction {
    /// Compute predictions for a cycle starting on `start` as seen on `today`.
    ///
    /// Unchecked: follows the same garbage-in rules as the free functions.
    #[must_use]
    pub fn for_cycle(start: NaiveDate, cycle_length: i32, today: NaiveDate) -> Self {
        let next_period = super::next_period_date(start, cycle_length);
        let ovulation = super::ovulation_date(start, cycle_length);
        let fertile_window = super::fertile_window(start, cycle_length);
        let cycle_day = super::cycle_day(today, start);

        Self {
            next_period,
            ovulation,
            fertile_window,
            cycle_day,
            phase: super::cycle_phase(cycle_day, cycle_length),
            is_in_fertile_window: fertile_window.contains(today),
            days_until_period: super::days_until(next_period, today),
            days_until_ovulation: super::days_until(ovulation, today),
        }
    }

    /// Predict from the most recently logged cycle (the last element).
    ///
    /// Returns `None` when no cycle has been logged.
    #[must_use]
    pub fn from_latest(cycles: &[CycleRecord], today: NaiveDate) -> Option<Self> {
        cycles
            .last()
            .map(|latest| Self::for_cycle(latest.start_date(), latest.cycle_length(), today))
    }

    /// Whether the next period is due (today or overdue).
    #[must_use]
    pub const fn is_period_due(&self) -> bool {
        self.days_until_period <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_for_cycle_scenario() {
        let prediction = Prediction::for_cycle(date(2024, 1, 1), 28, date(2024, 1, 12));
        assert_eq!(prediction.next_period, date(2024, 1, 29));
        assert_eq!(prediction.ovulation, date(2024, 1, 15));
        assert_eq!(prediction.cycle_day, 12);
        assert_eq!(prediction.phase, CyclePhase::Follicular);
        assert!(prediction.is_in_fertile_window);
        assert_eq!(prediction.days_until_period, 17);
        assert_eq!(prediction.days_until_ovulation, 3);
        assert!(!prediction.is_period_due());
    }

    #[test]
    fn test_from_latest_empty() {
        assert!(Prediction::from_latest(&[], date(2024, 1, 1)).is_none());
    }

    #[test]
    fn test_from_latest_uses_last_record() {
        let cycles = vec![
            CycleRecord::new("a", date(2024, 2, 1), 28),
            CycleRecord::new("b", date(2024, 1, 1), 30),
        ];
        let prediction = Prediction::from_latest(&cycles, date(2024, 1, 31)).unwrap();
        assert_eq!(prediction.next_period, date(2024, 1, 31));
        assert!(prediction.is_period_due());
        assert_eq!(prediction.phase, CyclePhase::Luteal);
    }
}
