//! Tracking workflows over the record collections
//!
//! `Tracker` owns a [`RecordRepository`] and performs the read-modify-write
//! cycles behind logging a period, managing reminders, keeping one health
//! log per day, and community Q&A. Derived views (predictions, upcoming
//! reminders, health trends) are computed from freshly loaded collections.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use femcare_core::kv::MemoryKvStore;
//! use femcare_core::tracker::{NewCycle, Tracker};
//!
//! # async fn example() -> femcare_core::Result<()> {
//! let tracker = Tracker::builder().build(MemoryKvStore::new())?;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! tracker.log_cycle(NewCycle::starting(start)).await?;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
//! let prediction = tracker.predictions(today).await?.expect("one cycle logged");
//! assert_eq!(prediction.cycle_day, 12);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::TrackerConfig;
use crate::cycle::Prediction;
use crate::kv::KvStore;
use crate::records::{
    Answer, CycleRecord, Frequency, HealthLog, Question, Reminder, ReminderKind,
};
use crate::repository::RecordRepository;
use crate::{Error, Result};

/// Number of most frequent symptoms reported by [`HealthTrends`].
const TOP_SYMPTOM_COUNT: usize = 3;

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Input for [`Tracker::log_cycle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCycle {
    /// First day of flow.
    pub start_date: NaiveDate,
    /// Last day of flow, if known.
    pub end_date: Option<NaiveDate>,
    /// Cycle length; the configured default when `None`.
    pub cycle_length: Option<i32>,
    /// Period length; the configured default when `None`.
    pub period_length: Option<i32>,
    /// Symptoms noted for this period.
    pub symptoms: Vec<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl NewCycle {
    /// A cycle starting on `start_date` with every other field defaulted.
    #[must_use]
    pub const fn starting(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date: None,
            cycle_length: None,
            period_length: None,
            symptoms: Vec::new(),
            notes: None,
        }
    }
}

/// Input for [`Tracker::add_reminder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReminder {
    /// What the reminder is for.
    pub kind: ReminderKind,
    /// Title shown to the user.
    pub title: String,
    /// Time of day.
    pub time: NaiveTime,
    /// Repeat frequency.
    pub frequency: Frequency,
}

/// Input for [`Tracker::upsert_health_log`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewHealthLog {
    /// Day the log describes.
    pub date: NaiveDate,
    /// Weight, if measured.
    pub weight: Option<f64>,
    /// Symptoms noted that day.
    pub symptoms: Vec<String>,
    /// Mood label; required.
    pub mood: String,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Counts over the reminder collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderStats {
    /// All reminders.
    pub total: usize,
    /// Reminders currently active.
    pub active: usize,
    /// Pill reminders.
    pub pills: usize,
    /// Reminders taken at least once.
    pub taken: usize,
}

/// Summary of the most recent health logs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthTrends {
    /// Mean weight of the logs that record a nonzero one.
    pub average_weight: Option<f64>,
    /// Most frequent mood; ties go to the mood seen in the newer log.
    pub most_common_mood: Option<String>,
    /// Up to three most frequent symptoms with their counts.
    pub top_symptoms: Vec<(String, usize)>,
    /// Number of logs summarized.
    pub total_entries: usize,
}

/// Builder for [`Tracker`].
#[derive(Debug, Default)]
pub struct TrackerBuilder {
    config: TrackerConfig,
}

impl TrackerBuilder {
    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Cycle length used when a new cycle omits one.
    #[must_use]
    pub const fn default_cycle_length(mut self, days: i32) -> Self {
        self.config.default_cycle_length = days;
        self
    }

    /// Period length used when a new cycle omits one.
    #[must_use]
    pub const fn default_period_length(mut self, days: i32) -> Self {
        self.config.default_period_length = days;
        self
    }

    /// How many active reminders the upcoming list shows.
    #[must_use]
    pub const fn upcoming_reminder_limit(mut self, limit: usize) -> Self {
        self.config.upcoming_reminder_limit = limit;
        self
    }

    /// How many of the newest health logs feed the trend summary.
    #[must_use]
    pub const fn health_trend_window(mut self, window: usize) -> Self {
        self.config.health_trend_window = window;
        self
    }

    /// Build a tracker over `store`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the configuration is inconsistent.
    pub fn build<S: KvStore>(self, store: S) -> Result<Tracker<S>> {
        self.config.validate()?;
        Ok(Tracker {
            repo: RecordRepository::new(store),
            config: self.config,
        })
    }
}

/// Cycle, reminder, health-log and Q&A workflows.
#[derive(Debug)]
pub struct Tracker<S> {
    repo: RecordRepository<S>,
    config: TrackerConfig,
}

impl Tracker<()> {
    /// Create a tracker builder with default configuration.
    #[must_use]
    pub fn builder() -> TrackerBuilder {
        TrackerBuilder::default()
    }
}

impl<S: KvStore> Tracker<S> {
    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &RecordRepository<S> {
        &self.repo
    }

    // ----- cycles -----

    /// Log a new period and append it as the latest cycle.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for lengths outside the configured ranges or
    /// an end date before the start date, or any storage error.
    pub async fn log_cycle(&self, new: NewCycle) -> Result<CycleRecord> {
        let cycle_length = new.cycle_length.unwrap_or(self.config.default_cycle_length);
        let period_length = new
            .period_length
            .unwrap_or(self.config.default_period_length);

        if !self.config.cycle_length_range.contains(&cycle_length) {
            return Err(Error::InvalidInput(format!(
                "cycle length {cycle_length} outside {:?}",
                self.config.cycle_length_range
            )));
        }
        if !self.config.period_length_range.contains(&period_length) {
            return Err(Error::InvalidInput(format!(
                "period length {period_length} outside {:?}",
                self.config.period_length_range
            )));
        }
        if let Some(end) = new.end_date {
            if end < new.start_date {
                return Err(Error::InvalidInput(format!(
                    "period end {end} precedes start {}",
                    new.start_date
                )));
            }
        }

        let mut builder = CycleRecord::builder(generate_id(), new.start_date)
            .cycle_length(cycle_length)
            .period_length(period_length)
            .symptoms(new.symptoms);
        if let Some(end) = new.end_date {
            builder = builder.end_date(end);
        }
        if let Some(notes) = new.notes {
            builder = builder.notes(notes);
        }
        let record = builder.build();

        self.repo.push(record.clone()).await?;
        info!(id = record.id(), start = %record.start_date(), cycle_length, "logged cycle");
        Ok(record)
    }

    /// All logged cycles in logging order.
    ///
    /// # Errors
    ///
    /// Returns any storage error.
    pub async fn cycles(&self) -> Result<Vec<CycleRecord>> {
        self.repo.load().await
    }

    /// Delete a logged cycle.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or any storage error.
    pub async fn delete_cycle(&self, id: &str) -> Result<()> {
        self.repo.remove::<CycleRecord>(id).await?;
        info!(id, "deleted cycle");
        Ok(())
    }

    /// Predictions for `today` from the latest logged cycle.
    ///
    /// Returns `None` when no cycle has been logged.
    ///
    /// # Errors
    ///
    /// Returns any storage error.
    pub async fn predictions(&self, today: NaiveDate) -> Result<Option<Prediction>> {
        let cycles: Vec<CycleRecord> = self.repo.load().await?;
        Ok(Prediction::from_latest(&cycles, today))
    }

    // ----- reminders -----

    /// Add an active reminder.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank title, or any storage error.
    pub async fn add_reminder(&self, new: NewReminder) -> Result<Reminder> {
        let title = new.title.trim();
        if title.is_empty() {
            return Err(Error::InvalidInput("reminder title is empty".to_string()));
        }
        let reminder = Reminder::new(generate_id(), new.kind, title, new.time, new.frequency);
        self.repo.push(reminder.clone()).await?;
        info!(id = reminder.id(), kind = ?reminder.kind(), "added reminder");
        Ok(reminder)
    }

    /// All reminders in creation order.
    ///
    /// # Errors
    ///
    /// Returns any storage error.
    pub async fn reminders(&self) -> Result<Vec<Reminder>> {
        self.repo.load().await
    }

    /// Flip a reminder between active and inactive.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or any storage error.
    pub async fn toggle_reminder(&self, id: &str) -> Result<Reminder> {
        let reminder = self.repo.update(id, Reminder::toggle).await?;
        info!(id, active = reminder.is_active(), "toggled reminder");
        Ok(reminder)
    }

    /// Record that a reminder was taken at `at`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or any storage error.
    pub async fn mark_reminder_taken(&self, id: &str, at: DateTime<Utc>) -> Result<Reminder> {
        let reminder = self
            .repo
            .update(id, |reminder: &mut Reminder| reminder.mark_taken(at))
            .await?;
        info!(id, %at, "marked reminder taken");
        Ok(reminder)
    }

    /// Delete a reminder.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or any storage error.
    pub async fn delete_reminder(&self, id: &str) -> Result<()> {
        self.repo.remove::<Reminder>(id).await?;
        info!(id, "deleted reminder");
        Ok(())
    }

    /// The first active reminders, up to the configured limit.
    ///
    /// # Errors
    ///
    /// Returns any storage error.
    pub async fn upcoming_reminders(&self) -> Result<Vec<Reminder>> {
        let reminders: Vec<Reminder> = self.repo.load().await?;
        Ok(reminders
            .into_iter()
            .filter(Reminder::is_active)
            .take(self.config.upcoming_reminder_limit)
            .collect())
    }

    /// Counts over all reminders.
    ///
    /// # Errors
    ///
    /// Returns any storage error.
    pub async fn reminder_stats(&self) -> Result<ReminderStats> {
        let reminders: Vec<Reminder> = self.repo.load().await?;
        Ok(ReminderStats {
            total: reminders.len(),
            active: reminders.iter().filter(|r| r.is_active()).count(),
            pills: reminders
                .iter()
                .filter(|r| r.kind() == ReminderKind::Pill)
                .count(),
            taken: reminders.iter().filter(|r| r.last_taken().is_some()).count(),
        })
    }

    // ----- health logs -----

    /// Save the log for `new.date`, replacing an existing log for that day.
    ///
    /// A replaced log keeps its id and creation time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank mood, or any storage error.
    pub async fn upsert_health_log(&self, new: NewHealthLog) -> Result<HealthLog> {
        let mood = new.mood.trim();
        if mood.is_empty() {
            return Err(Error::InvalidInput("mood is required".to_string()));
        }

        let mut logs: Vec<HealthLog> = self.repo.load().await?;
        let existing = logs.iter().position(|log| log.date() == new.date);

        let (id, created_at) = existing.map_or_else(
            || (generate_id(), Utc::now()),
            |index| (logs[index].id().to_string(), logs[index].created_at()),
        );
        let mut builder = HealthLog::builder(id, new.date, mood)
            .symptoms(new.symptoms)
            .created_at(created_at);
        if let Some(weight) = new.weight {
            builder = builder.weight(weight);
        }
        if let Some(notes) = new.notes {
            builder = builder.notes(notes);
        }
        let log = builder.build();

        match existing {
            Some(index) => logs[index] = log.clone(),
            None => logs.push(log.clone()),
        }
        self.repo.save(&logs).await?;
        info!(
            id = log.id(),
            date = %log.date(),
            replaced = existing.is_some(),
            "saved health log"
        );
        Ok(log)
    }

    /// Delete a health log.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or any storage error.
    pub async fn delete_health_log(&self, id: &str) -> Result<()> {
        self.repo.remove::<HealthLog>(id).await?;
        info!(id, "deleted health log");
        Ok(())
    }

    /// Up to `limit` health logs, newest date first.
    ///
    /// # Errors
    ///
    /// Returns any storage error.
    pub async fn recent_health_logs(&self, limit: usize) -> Result<Vec<HealthLog>> {
        let mut logs: Vec<HealthLog> = self.repo.load().await?;
        logs.sort_by(|a, b| b.date().cmp(&a.date()));
        logs.truncate(limit);
        Ok(logs)
    }

    /// Trends over the newest logs in the configured window.
    ///
    /// Returns `None` when no health log exists.
    ///
    /// # Errors
    ///
    /// Returns any storage error.
    pub async fn health_trends(&self) -> Result<Option<HealthTrends>> {
        let recent = self
            .recent_health_logs(self.config.health_trend_window)
            .await?;
        if recent.is_empty() {
            return Ok(None);
        }
        Ok(Some(summarize(&recent)))
    }

    // ----- community -----

    /// Post a question.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for blank text, or any storage error.
    pub async fn ask_question(&self, text: &str, is_anonymous: bool) -> Result<Question> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidInput("question is empty".to_string()));
        }
        let question = Question::new(generate_id(), text, is_anonymous);
        self.repo.push(question.clone()).await?;
        info!(id = question.id(), is_anonymous, "posted question");
        Ok(question)
    }

    /// Append an answer to a question.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for blank text, `NotFound` for an unknown
    /// question, or any storage error.
    pub async fn answer_question(
        &self,
        question_id: &str,
        text: &str,
        is_anonymous: bool,
    ) -> Result<Question> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::InvalidInput("answer is empty".to_string()));
        }
        let answer = Answer::new(generate_id(), text, is_anonymous);
        let answer_id = answer.id().to_string();
        let question = self
            .repo
            .update(question_id, |question: &mut Question| {
                question.add_answer(answer);
            })
            .await?;
        info!(question_id, answer_id = %answer_id, "posted answer");
        Ok(question)
    }

    /// All questions in posting order.
    ///
    /// # Errors
    ///
    /// Returns any storage error.
    pub async fn questions(&self) -> Result<Vec<Question>> {
        self.repo.load().await
    }

    /// Delete a question with its answers.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or any storage error.
    pub async fn delete_question(&self, id: &str) -> Result<()> {
        self.repo.remove::<Question>(id).await?;
        info!(id, "deleted question");
        Ok(())
    }
}

/// Count occurrences, keeping first-seen order, then sort by count descending.
///
/// The sort is stable, so ties keep first-seen order.
fn ranked<'a>(items: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    for item in items {
        match index.get(item) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(item, order.len());
                order.push((item.to_string(), 1));
            }
        }
    }
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
}

/// Summarize logs ordered newest first.
#[allow(clippy::cast_precision_loss)]
fn summarize(logs: &[HealthLog]) -> HealthTrends {
    // Zero and NaN count as "not recorded".
    let weights: Vec<f64> = logs
        .iter()
        .filter_map(HealthLog::weight)
        .filter(|weight| weight.abs() > 0.0)
        .collect();
    let average_weight =
        (!weights.is_empty()).then(|| weights.iter().sum::<f64>() / weights.len() as f64);

    let most_common_mood = ranked(logs.iter().map(HealthLog::mood))
        .into_iter()
        .next()
        .map(|(mood, _)| mood);

    let mut top_symptoms = ranked(
        logs.iter()
            .flat_map(|log| log.symptoms().iter().map(String::as_str)),
    );
    top_symptoms.truncate(TOP_SYMPTOM_COUNT);

    HealthTrends {
        average_weight,
        most_common_mood,
        top_symptoms,
        total_entries: logs.len(),
    }
}
