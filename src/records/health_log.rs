//! Health Log - one day of weight, mood and symptom tracking

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Collection;

/// Daily health entry. At most one log exists per calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthLog {
    id: String,
    date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<f64>,
    #[serde(default)]
    symptoms: Vec<String>,
    mood: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl HealthLog {
    /// Create a builder for a health log on `date` with the given mood.
    #[must_use]
    pub fn builder(
        id: impl Into<String>,
        date: NaiveDate,
        mood: impl Into<String>,
    ) -> HealthLogBuilder {
        HealthLogBuilder::new(id, date, mood)
    }

    /// Get the log ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the calendar date the log describes.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Get the recorded weight, if any.
    #[must_use]
    pub const fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Get the symptoms.
    #[must_use]
    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    /// Get the mood label.
    #[must_use]
    pub fn mood(&self) -> &str {
        &self.mood
    }

    /// Get the notes, if any.
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

impl Collection for HealthLog {
    const KEY: &'static str = super::keys::HEALTH_LOGS;
    const KIND: &'static str = "health log";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Builder for `HealthLog`.
#[derive(Debug)]
pub struct HealthLogBuilder {
    id: String,
    date: NaiveDate,
    weight: Option<f64>,
    symptoms: Vec<String>,
    mood: String,
    notes: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl HealthLogBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(id: impl Into<String>, date: NaiveDate, mood: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date,
            weight: None,
            symptoms: Vec::new(),
            mood: mood.into(),
            notes: None,
            created_at: None,
        }
    }

    /// Set the weight.
    #[must_use]
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
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

    /// Build the `HealthLog`.
    #[must_use]
    pub fn build(self) -> HealthLog {
        HealthLog {
            id: self.id,
            date: self.date,
            weight: self.weight,
            symptoms: self.symptoms,
            mood: self.mood,
            notes: self.notes,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}
