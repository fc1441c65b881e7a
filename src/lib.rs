//! fitstats - distance, speed and calorie statistics for step records
//!
//! fitstats turns delimited text records into human-readable summaries through
//! a linear pipeline: record parsing → metrics computation → formatting.
//!
//! ## Record shapes
//!
//! - **Daily steps**: `<steps>,<duration>`, e.g. `1000,0h10m`
//! - **Training**: `<steps>,<activity>,<duration>`, e.g. `1000,Бег,0h10m`
//!
//! All functions are pure and stateless; concurrent calls need no
//! synchronization.

pub mod duration;
pub mod error;
pub mod metrics;
pub mod parser;
pub mod pipeline;
pub mod summary;
pub mod types;

pub use error::{ErrorKind, RecordError};
pub use pipeline::{
    daily_steps_outcome, daily_steps_summary, training_outcome, training_summary, Outcome,
};
pub use summary::UNRECOGNIZED_TRAINING;
pub use types::{
    ActivityKind, DailyStepsReport, StepRecord, TrainingRecord, TrainingReport, UserProfile,
};

/// fitstats version
pub const FITSTATS_VERSION: &str = env!("CARGO_PKG_VERSION");
