//! Tracked record types
//!
//! Each record type lives in its own storage collection: the whole
//! collection is serialized as one JSON array under a fixed key.
//!
//! ## Collections
//!
//! ```text
//! femcare_cycles       -> [CycleRecord]
//! femcare_reminders    -> [Reminder]
//! femcare_health_logs  -> [HealthLog]
//! femcare_questions    -> [Question ──< Answer]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use femcare_core::records::{Collection, CycleRecord};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let record = CycleRecord::builder("cycle-001", start)
//!     .cycle_length(30)
//!     .symptom("Cramps")
//!     .build();
//!
//! assert_eq!(record.cycle_length(), 30);
//! assert_eq!(CycleRecord::KEY, "femcare_cycles");
//! ```

mod cycle_record;
mod health_log;
mod question;
mod reminder;

pub use cycle_record::{
    CycleRecord, CycleRecordBuilder, DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH,
};
pub use health_log::{HealthLog, HealthLogBuilder};
pub use question::{Answer, Question};
pub use reminder::{Frequency, Reminder, ReminderKind};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage keys, one per collection.
pub mod keys {
    /// Logged menstrual cycles.
    pub const CYCLES: &str = "femcare_cycles";
    /// Birth-control reminders.
    pub const REMINDERS: &str = "femcare_reminders";
    /// Daily health logs.
    pub const HEALTH_LOGS: &str = "femcare_health_logs";
    /// Community questions with their answers.
    pub const QUESTIONS: &str = "femcare_questions";
}

/// A record type stored as one collection under a fixed key.
pub trait Collection: Serialize + DeserializeOwned + Send + Sync {
    /// Storage key of the collection.
    const KEY: &'static str;

    /// Human-readable record kind, used in errors and logs.
    const KIND: &'static str;

    /// Record identifier, unique within the collection.
    fn id(&self) -> &str;
}
