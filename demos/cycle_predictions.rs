//! Cycle Tracking Demo
//!
//! Run with: `cargo run --example cycle_predictions`
//! Set `RUST_LOG=femcare_core=debug` to see storage events.
//!
//! Logs two cycles into a temporary data directory, then prints the
//! predictions a dashboard would show.

use chrono::{Duration, Local, NaiveDate, NaiveTime};
use femcare_core::kv::FileKvStore;
use femcare_core::records::{Frequency, ReminderKind};
use femcare_core::tracker::{NewCycle, NewHealthLog, NewReminder, Tracker};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    println!("=== femcare-core Cycle Tracking Demo ===\n");

    let data_dir = std::env::temp_dir().join("femcare-demo");
    let store = FileKvStore::open(&data_dir).await?;
    let tracker = Tracker::builder().build(store)?;

    let today = Local::now().date_naive();
    seed(&tracker, today).await?;

    match tracker.predictions(today).await? {
        Some(p) => {
            println!("1. Current Cycle");
            println!("   ---------------");
            println!("   Day {} ({})", p.cycle_day, p.phase);
            println!("   Next period:  {} ({} days)", p.next_period, p.days_until_period);
            println!("   Ovulation:    {} ({} days)", p.ovulation, p.days_until_ovulation);
            println!(
                "   Fertile:      {} .. {}{}",
                p.fertile_window.start,
                p.fertile_window.end,
                if p.is_in_fertile_window { " (today)" } else { "" }
            );
        }
        None => println!("No cycles logged yet."),
    }
    println!();

    println!("2. Upcoming Reminders");
    println!("   ------------------");
    for reminder in tracker.upcoming_reminders().await? {
        println!("   {} at {}", reminder.title(), reminder.time().format("%H:%M"));
    }
    println!();

    if let Some(trends) = tracker.health_trends().await? {
        println!("3. Health Trends");
        println!("   -------------");
        println!("   Entries: {}", trends.total_entries);
        if let Some(mood) = trends.most_common_mood {
            println!("   Most common mood: {mood}");
        }
        for (symptom, count) in trends.top_symptoms {
            println!("   {symptom}: {count}");
        }
    }

    println!("\nData stored in {}", data_dir.display());
    Ok(())
}

async fn seed(tracker: &Tracker<FileKvStore>, today: NaiveDate) -> anyhow::Result<()> {
    if !tracker.cycles().await?.is_empty() {
        return Ok(());
    }

    tracker
        .log_cycle(NewCycle::starting(today - Duration::days(40)))
        .await?;
    tracker
        .log_cycle(NewCycle {
            cycle_length: Some(29),
            symptoms: vec!["Cramps".to_string(), "Fatigue".to_string()],
            ..NewCycle::starting(today - Duration::days(11))
        })
        .await?;

    tracker
        .add_reminder(NewReminder {
            kind: ReminderKind::Pill,
            title: "Evening pill".to_string(),
            time: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
            frequency: Frequency::Daily,
        })
        .await?;

    for (offset, mood, symptoms) in [
        (2, "tired", vec!["Fatigue"]),
        (1, "calm", vec!["Bloating", "Fatigue"]),
        (0, "happy", vec![]),
    ] {
        tracker
            .upsert_health_log(NewHealthLog {
                date: today - Duration::days(offset),
                weight: None,
                symptoms: symptoms.into_iter().map(String::from).collect(),
                mood: mood.to_string(),
                notes: None,
            })
            .await?;
    }
    Ok(())
}
