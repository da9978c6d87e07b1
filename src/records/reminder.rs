//! Reminder - recurring birth-control reminder

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::Collection;

/// What the reminder is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    /// Birth control pill.
    Pill,
    /// Contraceptive injection.
    Injection,
    /// Condom supply.
    Condom,
    /// Anything else.
    Other,
}

/// How often the reminder repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every day.
    Daily,
    /// Every week.
    Weekly,
    /// Every month.
    Monthly,
    /// User-defined schedule.
    Custom,
}

/// `"HH:MM"` on the wire; seconds are dropped on write and accepted on read.
mod time_of_day {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(de::Error::custom)
    }
}

/// A recurring reminder with an active flag and the last time it was taken.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    id: String,
    #[serde(rename = "type")]
    kind: ReminderKind,
    title: String,
    #[serde(with = "time_of_day")]
    time: NaiveTime,
    frequency: Frequency,
    is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_taken: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl Reminder {
    /// Create an active reminder that has never been taken.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        kind: ReminderKind,
        title: impl Into<String>,
        time: NaiveTime,
        frequency: Frequency,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            time,
            frequency,
            is_active: true,
            last_taken: None,
            created_at: Utc::now(),
        }
    }

    /// Get the reminder ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the reminder kind.
    #[must_use]
    pub const fn kind(&self) -> ReminderKind {
        self.kind
    }

    /// Get the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the time of day.
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// Get the repeat frequency.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Whether the reminder is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// When the reminder was last marked as taken.
    #[must_use]
    pub const fn last_taken(&self) -> Option<DateTime<Utc>> {
        self.last_taken
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Flip the active flag.
    pub fn toggle(&mut self) {
        self.is_active = !self.is_active;
    }

    /// Record that the reminder was taken at `at`.
    pub fn mark_taken(&mut self, at: DateTime<Utc>) {
        self.last_taken = Some(at);
    }
}

impl Collection for Reminder {
    const KEY: &'static str = super::keys::REMINDERS;
    const KIND: &'static str = "reminder";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pill() -> Reminder {
        Reminder::new(
            "r-1",
            ReminderKind::Pill,
            "Morning pill",
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            Frequency::Daily,
        )
    }

    #[test]
    fn test_reminder_lifecycle() {
        let mut reminder = pill();
        assert!(reminder.is_active());
        assert!(reminder.last_taken().is_none());

        reminder.toggle();
        assert!(!reminder.is_active());
        reminder.toggle();
        assert!(reminder.is_active());

        let at = Utc::now();
        reminder.mark_taken(at);
        assert_eq!(reminder.last_taken(), Some(at));
    }

    #[test]
    fn test_reminder_json_shape() {
        let value = serde_json::to_value(pill()).unwrap();
        assert_eq!(value["type"], "pill");
        assert_eq!(value["frequency"], "daily");
        assert_eq!(value["isActive"], true);
        assert_eq!(value["time"], "08:00");
        assert!(value.get("lastTaken").is_none());
    }

    #[test]
    fn test_reminder_time_formats() {
        let mut value = serde_json::to_value(pill()).unwrap();

        value["time"] = "21:30".into();
        let reminder: Reminder = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(reminder.time(), NaiveTime::from_hms_opt(21, 30, 0).unwrap());

        value["time"] = "07:15:00".into();
        let reminder: Reminder = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(reminder.time(), NaiveTime::from_hms_opt(7, 15, 0).unwrap());

        value["time"] = "7pm".into();
        assert!(serde_json::from_value::<Reminder>(value).is_err());
    }
}
