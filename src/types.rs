//! Core types for fitstats
//!
//! Parsed records, user attributes and the computed reports that flow through
//! the parse → compute → format pipeline.

use chrono::Duration;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::RecordError;

/// Training label that selects the walking formula
pub const WALKING_LABEL: &str = "Ходьба";

/// Training label that selects the running formula
pub const RUNNING_LABEL: &str = "Бег";

/// Activity kind of a training session, resolved from its label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityKind {
    Walking,
    Running,
    /// Any label without a calorie formula
    Other(String),
}

impl ActivityKind {
    /// Resolve a label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Self {
        match label {
            WALKING_LABEL => ActivityKind::Walking,
            RUNNING_LABEL => ActivityKind::Running,
            other => ActivityKind::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ActivityKind::Walking => WALKING_LABEL,
            ActivityKind::Running => RUNNING_LABEL,
            ActivityKind::Other(label) => label,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ActivityKind::Other(_))
    }
}

impl Serialize for ActivityKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A "daily steps" record: `<steps>,<duration>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    /// Step count as parsed; zero or negative marks a void record
    pub steps: i64,
    /// Time spent walking
    #[serde(serialize_with = "serialize_seconds")]
    pub duration: Duration,
}

/// A training record: `<steps>,<activity>,<duration>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingRecord {
    pub steps: i64,
    /// Activity label, verbatim from the input
    pub activity: String,
    #[serde(serialize_with = "serialize_seconds")]
    pub duration: Duration,
}

impl TrainingRecord {
    pub fn kind(&self) -> ActivityKind {
        ActivityKind::from_label(&self.activity)
    }
}

/// User attributes supplied with every call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body weight (kg)
    pub weight: f64,
    /// Body height, used verbatim as the divisor of the walking formula
    pub height: f64,
}

impl UserProfile {
    pub fn new(weight: f64, height: f64) -> Self {
        Self { weight, height }
    }

    /// Check that both attributes are finite and positive
    pub fn validate(&self) -> Result<(), RecordError> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(RecordError::InvalidProfile(format!(
                "weight must be positive, got {}",
                self.weight
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(RecordError::InvalidProfile(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        Ok(())
    }

    /// Load a profile from JSON such as `{"weight": 75.0, "height": 175.0}`
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let profile: UserProfile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Computed statistics for a daily steps record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStepsReport {
    pub steps: i64,
    pub distance_km: f64,
    pub calories_kcal: f64,
}

/// Computed statistics for a training session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    pub activity: ActivityKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

fn serialize_seconds<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.num_milliseconds() as f64 / 1000.0)
}
