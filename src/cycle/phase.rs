//! Cycle phase classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Last cycle day of the menstrual phase.
const MENSTRUAL_LAST_DAY: u32 = 5;
/// Last cycle day of the follicular phase.
const FOLLICULAR_LAST_DAY: u32 = 13;
/// Last cycle day of the ovulation phase.
const OVULATION_LAST_DAY: u32 = 15;

/// Qualitative phase of a menstrual cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CyclePhase {
    /// Days 1-5.
    Menstrual,
    /// Days 6-13.
    Follicular,
    /// Days 14-15.
    Ovulation,
    /// Day 16 onward.
    Luteal,
}

impl CyclePhase {
    /// Classify a 1-indexed cycle day. Day 0 classifies as menstrual.
    #[must_use]
    pub const fn from_day(cycle_day: u32) -> Self {
        if cycle_day <= MENSTRUAL_LAST_DAY {
            Self::Menstrual
        } else if cycle_day <= FOLLICULAR_LAST_DAY {
            Self::Follicular
        } else if cycle_day <= OVULATION_LAST_DAY {
            Self::Ovulation
        } else {
            Self::Luteal
        }
    }

    /// Display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Menstrual => "Menstrual",
            Self::Follicular => "Follicular",
            Self::Ovulation => "Ovulation",
            Self::Luteal => "Luteal",
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(CyclePhase::from_day(5), CyclePhase::Menstrual);
        assert_eq!(CyclePhase::from_day(6), CyclePhase::Follicular);
        assert_eq!(CyclePhase::from_day(13), CyclePhase::Follicular);
        assert_eq!(CyclePhase::from_day(14), CyclePhase::Ovulation);
        assert_eq!(CyclePhase::from_day(15), CyclePhase::Ovulation);
        assert_eq!(CyclePhase::from_day(16), CyclePhase::Luteal);
    }

    #[test]
    fn test_phase_extremes() {
        assert_eq!(CyclePhase::from_day(0), CyclePhase::Menstrual);
        assert_eq!(CyclePhase::from_day(u32::MAX), CyclePhase::Luteal);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(CyclePhase::Ovulation.to_string(), "Ovulation");
        assert_eq!(format!("{}", CyclePhase::Luteal), "Luteal");
    }

    #[test]
    fn test_phase_serializes_as_label() {
        let json = serde_json::to_string(&CyclePhase::Follicular).unwrap();
        assert_eq!(json, "\"Follicular\"");
    }
}
