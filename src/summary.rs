//! Summary formatting
//!
//! Renders reports into the fixed multi-line templates shown to users.
//! Floating values are rounded to two decimals.

use std::fmt;

use crate::types::{DailyStepsReport, TrainingReport};

/// Text returned for a training record that cannot be summarized
pub const UNRECOGNIZED_TRAINING: &str = "неизвестный тип тренировки";

impl fmt::Display for DailyStepsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.",
            self.steps, self.distance_km, self.calories_kcal
        )
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}",
            self.activity.label(),
            self.duration_hours,
            self.distance_km,
            self.speed_kmh,
            self.calories_kcal
        )
    }
}
