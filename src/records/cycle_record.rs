//! Cycle Record - one logged menstrual period

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Collection;

/// Cycle length assumed when the user does not provide one.
pub const DEFAULT_CYCLE_LENGTH: i32 = 28;

/// Period length assumed when the user does not provide one.
pub const DEFAULT_PERIOD_LENGTH: i32 = 5;

/// A logged menstrual period and the user's cycle estimate at that time.
///
/// Only `start_date` and `cycle_length` feed the prediction engine; the
/// remaining fields are kept for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CycleRecord {
    id: String,
    start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_date: Option<NaiveDate>,
    cycle_length: i32,
    #[serde(default = "default_period_length")]
    period_length: i32,
    #[serde(default)]
    symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

const fn default_period_length() -> i32 {
    DEFAULT_PERIOD_LENGTH
}

impl CycleRecord {
    /// Create a cycle record with default period length and no symptoms.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier for the record
    /// * `start_date` - First day of flow
    /// * `cycle_length` - Estimated full cycle length in days
    #[must_use]
    pub fn new(id: impl Into<String>, start_date: NaiveDate, cycle_length: i32) -> Self {
        Self::builder(id, start_date).cycle_length(cycle_length).build()
    }

    /// Create a builder for constructing a cycle record with optional fields.
    #[must_use]
    pub fn builder(id: impl Into<String>, start_date: NaiveDate) -> CycleRecordBuilder {
        CycleRecordBuilder::new(id, start_date)
    }

    /// Get the record ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the first day of flow.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Get the last day of flow, if recorded.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Get the estimated cycle length in days.
    #[must_use]
    pub const fn cycle_length(&self) -> i32 {
        self.cycle_length
    }

    /// Get the estimated period length in days.
    #[must_use]
    pub const fn period_length(&self) -> i32 {
        self.period_length
    }

    /// Get the symptoms noted for this period.
    #[must_use]
    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    /// Get the free-form notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Collection for CycleRecord {
    const KEY: &'static str = super::keys::CYCLES;
    const KIND: &'static str = "cycle";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Builder for `CycleRecord`.
#[derive(Debug)]
pub struct CycleRecordBuilder {
    id: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    cycle_length: i32,
    period_length: i32,
    symptoms: Vec<String>,
    notes: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl CycleRecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            start_date,
            end_date: None,
            cycle_length: DEFAULT_CYCLE_LENGTH,
            period_length: DEFAULT_PERIOD_LENGTH,
            symptoms: Vec::new(),
            notes: None,
            created_at: None,
        }
    }

    /// Set the last day of flow.
    #[must_use]
    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Set the cycle length.
    #[must_use]
    pub fn cycle_length(mut self, days: i32) -> Self {
        self.cycle_length = days;
        self
    }

    /// Set the period length.
    #[must_use]
    pub fn period_length(mut self, days: i32) -> Self {
        self.period_length = days;
        self
    }

    /// Add one symptom.
    #[must_use]
    pub fn symptom(mut self, symptom: impl Into<String>) -> Self {
        self.symptoms.push(symptom.into());
        self
    }

    /// Replace the symptom list.
    #[must_use]
    pub fn symptoms(mut self, symptoms: Vec<String>) -> Self {
        self.symptoms = symptoms;
        self
    }

    /// Set notes. Blank notes are dropped.
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        let trimmed = notes.trim();
        self.notes = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Override the creation timestamp (defaults to now).
    #[must_use]
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the `CycleRecord`.
    #[must_use]
    pub fn build(self) -> CycleRecord {
        CycleRecord {
            id: self.id,
            start_date: self.start_date,
            end_date: self.end_date,
            cycle_length: self.cycle_length,
            period_length: self.period_length,
            symptoms: self.symptoms,
            notes: self.notes,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}
