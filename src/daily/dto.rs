use serde::Deserialize;
use time::Date;

use super::repo_types::{DailyLogPatch, ReadinessState};

/// Request body for `PUT /daily-log`.
#[derive(Debug, Deserialize)]
pub struct UpdateDailyLogRequest {
    pub user_id: i64,
    pub date: Date,
    #[serde(default)]
    pub readiness_state: Option<ReadinessState>,
    #[serde(default)]
    pub calculated_deficit_kcal: Option<f64>,
    /// Drop a stored deficit override so the summary computes it again.
    #[serde(default)]
    pub clear_deficit_override: bool,
    #[serde(default)]
    pub notes_day: Option<String>,
}

impl UpdateDailyLogRequest {
    pub fn patch(&self) -> DailyLogPatch {
        DailyLogPatch {
            readiness_state: self.readiness_state,
            calculated_deficit_kcal: self.calculated_deficit_kcal,
            clear_deficit_override: self.clear_deficit_override,
            notes_day: self.notes_day.clone(),
        }
    }
}
