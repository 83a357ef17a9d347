use serde::{Deserialize, Serialize};
use time::Date;

use super::repo_types::NewTrainingSession;

/// Request body for `POST /training`.
#[derive(Debug, Deserialize)]
pub struct LogTrainingRequest {
    pub user_id: i64,
    pub date: Date,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub duration_min: Option<f64>,
    #[serde(default)]
    pub avg_hr: Option<f64>,
    #[serde(default)]
    pub max_hr: Option<f64>,
    #[serde(default)]
    pub calories_kcal: Option<f64>,
    #[serde(default)]
    pub rpe: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl From<LogTrainingRequest> for NewTrainingSession {
    fn from(r: LogTrainingRequest) -> Self {
        Self {
            user_id: r.user_id,
            date: r.date,
            kind: r.kind.trim().to_string(),
            duration_min: r.duration_min,
            avg_hr: r.avg_hr,
            max_hr: r.max_hr,
            calories_kcal: r.calories_kcal,
            rpe: r.rpe,
            notes: r.notes,
            start_time: r.start_time,
            end_time: r.end_time,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoggedSessionResponse {
    pub status: &'static str,
    pub session_id: i64,
}
