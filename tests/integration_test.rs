//! End-to-end tracker tests over the directory-backed store

use chrono::{NaiveDate, NaiveTime, Utc};
use femcare_core::kv::{FileKvStore, KvStore};
use femcare_core::records::{keys, CycleRecord, Frequency, ReminderKind};
use femcare_core::tracker::{NewCycle, NewHealthLog, NewReminder, Tracker};
use femcare_core::{CyclePhase, Error, RecordRepository};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let store = FileKvStore::open(dir.path()).await.unwrap();
        let tracker = Tracker::builder().build(store).unwrap();
        tracker
            .log_cycle(NewCycle {
                cycle_length: Some(30),
                symptoms: vec!["Cramps".to_string()],
                ..NewCycle::starting(date(2024, 1, 1))
            })
            .await
            .unwrap();
        tracker
            .add_reminder(NewReminder {
                kind: ReminderKind::Pill,
                title: "Pill".to_string(),
                time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                frequency: Frequency::Daily,
            })
            .await
            .unwrap();
    }

    let store = FileKvStore::open(dir.path()).await.unwrap();
    let tracker = Tracker::builder().build(store).unwrap();

    let cycles = tracker.cycles().await.unwrap();
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].cycle_length(), 30);
    assert_eq!(cycles[0].symptoms(), ["Cramps".to_string()]);

    let prediction = tracker.predictions(date(2024, 1, 16)).await.unwrap().unwrap();
    assert_eq!(prediction.ovulation, date(2024, 1, 17));
    assert_eq!(prediction.phase, CyclePhase::Luteal);
    assert!(prediction.is_in_fertile_window);

    assert_eq!(tracker.reminders().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_collections_stored_as_json_arrays() {
    let dir = TempDir::new().unwrap();
    let store = FileKvStore::open(dir.path()).await.unwrap();
    let tracker = Tracker::builder().build(store).unwrap();

    tracker
        .log_cycle(NewCycle::starting(date(2024, 2, 3)))
        .await
        .unwrap();

    let raw = std::fs::read_to_string(dir.path().join(format!("{}.json", keys::CYCLES))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["startDate"], "2024-02-03");
    assert_eq!(array[0]["cycleLength"], 28);
}

#[tokio::test]
async fn test_corrupt_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let store = FileKvStore::open(dir.path()).await.unwrap();
    store
        .set(keys::CYCLES, b"[{\"id\": 5}]".to_vec())
        .await
        .unwrap();

    let repo = RecordRepository::new(store);
    let err = repo.load::<CycleRecord>().await.unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
    assert!(repo.load_or_default::<CycleRecord>().await.is_empty());
}

#[tokio::test]
async fn test_health_and_questions_round_trip_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = FileKvStore::open(dir.path()).await.unwrap();
    let tracker = Tracker::builder().build(store).unwrap();

    tracker
        .upsert_health_log(NewHealthLog {
            date: date(2024, 5, 1),
            weight: Some(130.0),
            symptoms: vec!["Bloating".to_string()],
            mood: "calm".to_string(),
            notes: Some("  slept well ".to_string()),
        })
        .await
        .unwrap();
    let question = tracker.ask_question("First period tips?", true).await.unwrap();
    tracker
        .answer_question(question.id(), "Track it for a few months.", true)
        .await
        .unwrap();
    tracker
        .mark_reminder_taken("missing", Utc::now())
        .await
        .unwrap_err();

    let logs = tracker.recent_health_logs(5).await.unwrap();
    assert_eq!(logs[0].notes(), Some("slept well"));

    let questions = tracker.questions().await.unwrap();
    assert_eq!(questions[0].answers().len(), 1);
}
