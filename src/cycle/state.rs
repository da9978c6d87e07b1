//! Validated per-cycle state
//!
//! `CycleState` is computed once when a period is logged and then queried.
//! Unlike the free functions in [`crate::cycle`], it rejects implausible
//! cycle lengths and query dates that precede the period start.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CyclePhase, FertileWindow};
use crate::records::CycleRecord;
use crate::{Error, Result};

/// Shortest cycle length accepted by checked operations.
pub const MIN_CYCLE_LENGTH: i32 = 10;

/// Longest cycle length accepted by checked operations.
pub const MAX_CYCLE_LENGTH: i32 = 60;

/// Reference period start plus cycle length, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleState {
    reference_start: NaiveDate,
    length: i32,
}

impl CycleState {
    /// Create a cycle state.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `length` is outside
    /// [`MIN_CYCLE_LENGTH`]..=[`MAX_CYCLE_LENGTH`].
    pub fn new(reference_start: NaiveDate, length: i32) -> Result<Self> {
        if !(MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH).contains(&length) {
            return Err(Error::InvalidInput(format!(
                "cycle length {length} outside {MIN_CYCLE_LENGTH}..={MAX_CYCLE_LENGTH} days"
            )));
        }
        Ok(Self {
            reference_start,
            length,
        })
    }

    /// Create a cycle state, clamping `length` into the accepted range.
    #[must_use]
    pub fn clamped(reference_start: NaiveDate, length: i32) -> Self {
        Self {
            reference_start,
            length: length.clamp(MIN_CYCLE_LENGTH, MAX_CYCLE_LENGTH),
        }
    }

    /// Create a cycle state from a stored cycle record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the record's cycle length is out of range.
    pub fn from_record(record: &CycleRecord) -> Result<Self> {
        Self::new(record.start_date(), record.cycle_length())
    }

    /// First day of the reference period.
    #[must_use]
    pub const fn reference_start(&self) -> NaiveDate {
        self.reference_start
    }

    /// Cycle length in days.
    #[must_use]
    pub const fn length(&self) -> i32 {
        self.length
    }

    /// Predicted start of the next period.
    #[must_use]
    pub fn next_period(&self) -> NaiveDate {
        super::next_period_date(self.reference_start, self.length)
    }

    /// Predicted ovulation day.
    #[must_use]
    pub fn ovulation(&self) -> NaiveDate {
        super::ovulation_date(self.reference_start, self.length)
    }

    /// Predicted fertile window.
    #[must_use]
    pub fn fertile_window(&self) -> FertileWindow {
        super::fertile_window(self.reference_start, self.length)
    }

    /// Whether `query` lies in the fertile window.
    #[must_use]
    pub fn is_fertile(&self, query: NaiveDate) -> bool {
        self.fertile_window().contains(query)
    }

    /// Signed whole days from the reference start to `query`.
    #[must_use]
    pub fn days_since_start(&self, query: NaiveDate) -> i64 {
        (query - self.reference_start).num_days()
    }

    /// 1-indexed cycle day of `query`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `query` precedes the reference start.
    pub fn try_cycle_day(&self, query: NaiveDate) -> Result<u32> {
        let offset = self.days_since_start(query);
        if offset < 0 {
            return Err(Error::InvalidInput(format!(
                "query date {query} precedes cycle start {}",
                self.reference_start
            )));
        }
        u32::try_from(offset + 1)
            .map_err(|_| Error::InvalidInput(format!("query date {query} too far from start")))
    }

    /// Phase of the cycle on `query`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `query` precedes the reference start.
    pub fn try_phase(&self, query: NaiveDate) -> Result<CyclePhase> {
        self.try_cycle_day(query)
            .map(|day| super::cycle_phase(day, self.length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_out_of_range_length() {
        let start = date(2024, 1, 1);
        assert!(CycleState::new(start, 0).is_err());
        assert!(CycleState::new(start, 9).is_err());
        assert!(CycleState::new(start, 61).is_err());
        assert!(CycleState::new(start, -28).is_err());
        assert!(CycleState::new(start, 10).is_ok());
        assert!(CycleState::new(start, 60).is_ok());
    }

    #[test]
    fn test_clamped() {
        let start = date(2024, 1, 1);
        assert_eq!(CycleState::clamped(start, 3).length(), MIN_CYCLE_LENGTH);
        assert_eq!(CycleState::clamped(start, 400).length(), MAX_CYCLE_LENGTH);
        assert_eq!(CycleState::clamped(start, 28).length(), 28);
    }

    #[test]
    fn test_milestones_match_free_functions() {
        let state = CycleState::new(date(2024, 1, 1), 28).unwrap();
        assert_eq!(state.next_period(), date(2024, 1, 29));
        assert_eq!(state.ovulation(), date(2024, 1, 15));
        assert_eq!(state.fertile_window().start, date(2024, 1, 10));
        assert!(state.is_fertile(date(2024, 1, 12)));
    }

    #[test]
    fn test_try_cycle_day_rejects_earlier_query() {
        let state = CycleState::new(date(2024, 1, 10), 28).unwrap();
        let err = state.try_cycle_day(date(2024, 1, 9)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(state.days_since_start(date(2024, 1, 9)), -1);
    }

    #[test]
    fn test_try_cycle_day_and_phase() {
        let state = CycleState::new(date(2024, 1, 1), 28).unwrap();
        assert_eq!(state.try_cycle_day(date(2024, 1, 1)).unwrap(), 1);
        assert_eq!(state.try_cycle_day(date(2024, 1, 12)).unwrap(), 12);
        assert_eq!(
            state.try_phase(date(2024, 1, 14)).unwrap(),
            CyclePhase::Ovulation
        );
    }

    #[test]
    fn test_from_record() {
        let record = CycleRecord::new("c-1", date(2024, 3, 1), 31);
        let state = CycleState::from_record(&record).unwrap();
        assert_eq!(state.reference_start(), date(2024, 3, 1));
        assert_eq!(state.length(), 31);

        let bad = CycleRecord::new("c-2", date(2024, 3, 1), 0);
        assert!(CycleState::from_record(&bad).is_err());
    }
}
