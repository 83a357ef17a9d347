use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;

/// Daily training-readiness classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum ReadinessState {
    High,
    Moderate,
    Low,
    Recovery,
}

impl ReadinessState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessState::High => "HIGH",
            ReadinessState::Moderate => "MODERATE",
            ReadinessState::Low => "LOW",
            ReadinessState::Recovery => "RECOVERY",
        }
    }
}

impl std::fmt::Display for ReadinessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-user, per-day header row. The weight, meal and training writers keep
/// its counters current; at most one row exists per (user_id, date).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DailyLog {
    pub id: i64,
    pub user_id: i64,
    pub date: Date,
    pub body_weight_kg: Option<f64>,
    pub calories_in_kcal: Option<f64>,
    pub calories_out_training_kcal: Option<f64>,
    pub calculated_deficit_kcal: Option<f64>,
    pub readiness_state: Option<ReadinessState>,
    pub notes_day: Option<String>,
}

/// Manual edits to the header; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct DailyLogPatch {
    pub readiness_state: Option<ReadinessState>,
    pub calculated_deficit_kcal: Option<f64>,
    pub clear_deficit_override: bool,
    pub notes_day: Option<String>,
}
