//! # femcare-core: Cycle Prediction and Health Record Storage
//!
//! The engine behind a reproductive-health tracker. Users log menstrual
//! cycles, birth-control reminders, daily health logs and community
//! questions; the crate predicts where they are in their cycle.
//!
//! ## Layers
//!
//! - [`cycle`]: pure prediction functions (next period, ovulation, fertile
//!   window, cycle day, phase). No storage, no validation, no errors.
//! - [`records`]: serializable record types, one storage collection each.
//! - [`kv`]: key-value storage (`MemoryKvStore`, `FileKvStore`).
//! - [`repository`]: typed `load`/`save` of whole collections.
//! - [`tracker`]: logging workflows and derived views, configured by
//!   [`config::TrackerConfig`].
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use femcare_core::cycle::{self, CyclePhase};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//!
//! assert_eq!(cycle::next_period_date(start, 28), NaiveDate::from_ymd_opt(2024, 1, 29).unwrap());
//! assert_eq!(cycle::cycle_phase(cycle::cycle_day(today, start), 28), CyclePhase::Menstrual);
//! assert!(!cycle::is_in_fertile_window(today, start, 28));
//! ```
//!
//! Predictions follow a fixed heuristic (ovulation 14 days before the next
//! period, 6-day fertile window) and carry no medical-accuracy guarantee.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod cycle;
pub mod error;
pub mod kv;
pub mod records;
pub mod repository;
pub mod tracker;

pub use config::TrackerConfig;
pub use cycle::{CyclePhase, CycleState, FertileWindow, Prediction};
pub use error::{Error, Result};
pub use repository::RecordRepository;
pub use tracker::Tracker;
