//! Metrics engine
//!
//! Pure formulas for distance, mean speed and calorie expenditure, plus the
//! deriver that turns a parsed record into a report.
//!
//! The formulas neither clamp results nor validate user attributes. Running
//! calories go negative at low speeds and a zero height makes the walking
//! formula divide by zero.

use chrono::Duration;

use crate::duration::hours;
use crate::types::{
    ActivityKind, DailyStepsReport, StepRecord, TrainingRecord, TrainingReport, UserProfile,
};

/// Assumed stride length (m)
pub const STEP_LENGTH_M: f64 = 0.65;

pub const METERS_PER_KM: f64 = 1000.0;

pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Multiplier applied to mean speed in the running formula
pub const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;

/// Shift subtracted from the scaled speed in the running formula
pub const RUNNING_SPEED_SHIFT: f64 = 20.0;

/// Weight multiplier in the walking formula
pub const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;

/// Multiplier of the speed²/height term in the walking formula
pub const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Distance covered (km)
pub fn distance(steps: i64) -> f64 {
    steps as f64 * STEP_LENGTH_M / METERS_PER_KM
}

/// Mean speed (km/h); zero for non-positive durations
pub fn mean_speed(steps: i64, duration: &Duration) -> f64 {
    if *duration <= Duration::zero() {
        return 0.0;
    }
    distance(steps) / hours(duration)
}

/// Calories spent running (kcal)
pub fn running_calories(steps: i64, weight: f64, duration: &Duration) -> f64 {
    (RUNNING_SPEED_MULTIPLIER * mean_speed(steps, duration) - RUNNING_SPEED_SHIFT) * weight
}

/// Calories spent walking (kcal)
pub fn walking_calories(steps: i64, weight: f64, height: f64, duration: &Duration) -> f64 {
    let speed = mean_speed(steps, duration);
    (WALKING_WEIGHT_MULTIPLIER * weight + (speed * speed / height) * WALKING_SPEED_HEIGHT_MULTIPLIER)
        * hours(duration)
        * MINUTES_PER_HOUR
}

/// Calories for an activity kind, `None` when the kind has no formula
pub fn calories(
    kind: &ActivityKind,
    steps: i64,
    profile: &UserProfile,
    duration: &Duration,
) -> Option<f64> {
    match kind {
        ActivityKind::Walking => Some(walking_calories(
            steps,
            profile.weight,
            profile.height,
            duration,
        )),
        ActivityKind::Running => Some(running_calories(steps, profile.weight, duration)),
        ActivityKind::Other(_) => None,
    }
}

/// Builds reports from parsed records
pub struct StatsDeriver;

impl StatsDeriver {
    /// Daily steps are always costed with the walking formula
    pub fn daily(record: &StepRecord, profile: &UserProfile) -> DailyStepsReport {
        DailyStepsReport {
            steps: record.steps,
            distance_km: distance(record.steps),
            calories_kcal: walking_calories(
                record.steps,
                profile.weight,
                profile.height,
                &record.duration,
            ),
        }
    }

    /// Returns `None` when the activity label is not recognized
    pub fn training(record: &TrainingRecord, profile: &UserProfile) -> Option<TrainingReport> {
        let kind = record.kind();
        let calories_kcal = calories(&kind, record.steps, profile, &record.duration)?;

        Some(TrainingReport {
            activity: kind,
            duration_hours: hours(&record.duration),
            distance_km: distance(record.steps),
            speed_kmh: mean_speed(record.steps, &record.duration),
            calories_kcal,
        })
    }
}
