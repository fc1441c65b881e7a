//! Pipeline orchestration
//!
//! This module provides the public API for fitstats. Every call is a single
//! linear pass: parse → validate profile → void check → dispatch → compute.
//!
//! The `*_outcome` functions return an [`Outcome`] so callers can decide how
//! to report problems. The `*_summary` functions are the string entry points:
//! they log the failure and degrade to an empty or fixed string.

use std::fmt;

use crate::error::RecordError;
use crate::metrics::StatsDeriver;
use crate::parser::{DailyStepsParser, RecordParser, TrainingParser};
use crate::summary::UNRECOGNIZED_TRAINING;
use crate::types::{DailyStepsReport, TrainingReport, UserProfile};

/// Result of summarizing one line
#[derive(Debug)]
pub enum Outcome<R> {
    /// Metrics were computed
    Summary(R),
    /// The record had a zero or negative step count; nothing to report
    Void,
    /// The training label has no calorie formula
    UnrecognizedType(String),
    /// The line or the profile could not be used
    Invalid(RecordError),
}

impl<R> Outcome<R> {
    pub fn into_report(self) -> Option<R> {
        match self {
            Outcome::Summary(report) => Some(report),
            _ => None,
        }
    }

    pub fn is_summary(&self) -> bool {
        matches!(self, Outcome::Summary(_))
    }

    pub fn error(&self) -> Option<&RecordError> {
        match self {
            Outcome::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl<R: fmt::Display> Outcome<R> {
    /// Render to text. Void records render empty; unrecognized and invalid
    /// records render `on_failure`.
    pub fn render(&self, on_failure: &str) -> String {
        match self {
            Outcome::Summary(report) => report.to_string(),
            Outcome::Void => String::new(),
            Outcome::UnrecognizedType(_) | Outcome::Invalid(_) => on_failure.to_string(),
        }
    }
}

/// Summarize a `<steps>,<duration>` line.
///
/// # Example
/// ```
/// use fitstats::{daily_steps_outcome, UserProfile};
///
/// let outcome = daily_steps_outcome("1000,0h10m", &UserProfile::new(75.0, 175.0));
/// let report = outcome.into_report().unwrap();
/// assert_eq!(report.steps, 1000);
/// ```
pub fn daily_steps_outcome(line: &str, profile: &UserProfile) -> Outcome<DailyStepsReport> {
    let record = match DailyStepsParser.parse(line) {
        Ok(record) => record,
        Err(err) => return Outcome::Invalid(err),
    };
    if let Err(err) = profile.validate() {
        return Outcome::Invalid(err);
    }
    if record.steps <= 0 {
        return Outcome::Void;
    }

    Outcome::Summary(StatsDeriver::daily(&record, profile))
}

/// Summarize a `<steps>,<activity>,<duration>` line.
pub fn training_outcome(line: &str, profile: &UserProfile) -> Outcome<TrainingReport> {
    let record = match TrainingParser.parse(line) {
        Ok(record) => record,
        Err(err) => return Outcome::Invalid(err),
    };
    if let Err(err) = profile.validate() {
        return Outcome::Invalid(err);
    }
    if record.steps <= 0 {
        return Outcome::Void;
    }

    match StatsDeriver::training(&record, profile) {
        Some(report) => Outcome::Summary(report),
        None => Outcome::UnrecognizedType(record.activity),
    }
}

/// Daily steps summary text, or an empty string when there is nothing to
/// report. Invalid lines are logged.
pub fn daily_steps_summary(line: &str, weight: f64, height: f64) -> String {
    let outcome = daily_steps_outcome(line, &UserProfile::new(weight, height));
    log_outcome("daily_steps", line, &outcome);
    outcome.render("")
}

/// Training summary text. Invalid lines and unknown activity labels yield
/// the fixed unrecognized-type text; void records yield an empty string.
pub fn training_summary(line: &str, weight: f64, height: f64) -> String {
    let outcome = training_outcome(line, &UserProfile::new(weight, height));
    log_outcome("training", line, &outcome);
    outcome.render(UNRECOGNIZED_TRAINING)
}

fn log_outcome<R>(record_type: &'static str, line: &str, outcome: &Outcome<R>) {
    match outcome {
        Outcome::Summary(_) => {}
        Outcome::Void => {
            tracing::debug!(record_type, line, "non-positive step count, skipping record");
        }
        Outcome::UnrecognizedType(label) => {
            tracing::debug!(record_type, label = %label, "unrecognized training type");
        }
        Outcome::Invalid(err) => {
            tracing::warn!(
                record_type,
                line,
                kind = err.kind().as_str(),
                error = %err,
                "failed to summarize record"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::types::ActivityKind;

    fn profile() -> UserProfile {
        UserProfile::new(75.0, 175.0)
    }

    #[test]
    fn test_daily_steps_outcome() {
        let report = daily_steps_outcome("1000,0h10m", &profile())
            .into_report()
            .unwrap();
        assert_eq!(report.steps, 1000);
        assert!((report.distance_km - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_void_records() {
        for line in ["0,1h", "-100,1h", "-1,0"] {
            assert!(matches!(
                daily_steps_outcome(line, &profile()),
                Outcome::Void
            ));
        }
        assert!(matches!(
            training_outcome("0,Бег,1h", &profile()),
            Outcome::Void
        ));
    }

    #[test]
    fn test_training_dispatch() {
        let walking = training_outcome("1000,Ходьба,0h10m", &profile())
            .into_report()
            .unwrap();
        assert_eq!(walking.activity, ActivityKind::Walking);

        let running = training_outcome("1000,Бег,0h10m", &profile())
            .into_report()
            .unwrap();
        assert_eq!(running.activity, ActivityKind::Running);
        assert!(running.calories_kcal > walking.calories_kcal);
    }

    #[test]
    fn test_unrecognized_type() {
        match training_outcome("1000,Плавание,0h10m", &profile()) {
            Outcome::UnrecognizedType(label) => assert_eq!(label, "Плавание"),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_invalid_outcomes() {
        let outcome = daily_steps_outcome("1000", &profile());
        assert_eq!(outcome.error().map(RecordError::kind), Some(ErrorKind::Format));

        let outcome = daily_steps_outcome("abc,10m", &profile());
        assert_eq!(outcome.error().map(RecordError::kind), Some(ErrorKind::Type));

        let outcome = training_outcome("1000,Бег,soon", &profile());
        assert_eq!(outcome.error().map(RecordError::kind), Some(ErrorKind::Type));
    }

    #[test]
    fn test_invalid_profile() {
        let outcome = daily_steps_outcome("1000,10m", &UserProfile::new(75.0, 0.0));
        assert_eq!(
            outcome.error().map(RecordError::kind),
            Some(ErrorKind::Profile)
        );
        assert_eq!(daily_steps_summary("1000,10m", 75.0, 0.0), "");
        assert_eq!(
            training_summary("1000,Ходьба,10m", 75.0, -175.0),
            UNRECOGNIZED_TRAINING
        );
    }

    #[test]
    fn test_parse_errors_win_over_void() {
        assert!(daily_steps_outcome("0,garbage", &profile()).error().is_some());
    }

    #[test]
    fn test_render() {
        let outcome: Outcome<DailyStepsReport> = Outcome::Void;
        assert_eq!(outcome.render("fallback"), "");
        let outcome: Outcome<DailyStepsReport> = Outcome::UnrecognizedType("x".to_string());
        assert_eq!(outcome.render("fallback"), "fallback");
        assert!(!outcome.is_summary());
    }
}
