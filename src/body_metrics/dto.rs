use serde::Deserialize;
use time::{Date, OffsetDateTime};

use super::repo_types::{NewBodyComposition, NewWeight, DEFAULT_WEIGHT_SOURCE};

/// Request body for `POST /weight`; a missing `date_time` means now.
#[derive(Debug, Deserialize)]
pub struct LogWeightRequest {
    pub user_id: i64,
    pub weight_kg: f64,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date_time: Option<OffsetDateTime>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl LogWeightRequest {
    pub fn into_new(self, now: OffsetDateTime) -> NewWeight {
        NewWeight {
            user_id: self.user_id,
            weight_kg: self.weight_kg,
            date_time: self.date_time.unwrap_or(now),
            source: Some(self.source.unwrap_or_else(|| DEFAULT_WEIGHT_SOURCE.to_string())),
            note: self.note,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LogBodyCompositionRequest {
    pub user_id: i64,
    pub date: Date,
    #[serde(default)]
    pub body_fat_percent: Option<f64>,
    #[serde(default)]
    pub muscle_mass_kg: Option<f64>,
    #[serde(default)]
    pub waist_cm: Option<f64>,
    #[serde(default)]
    pub hip_cm: Option<f64>,
}

impl From<LogBodyCompositionRequest> for NewBodyComposition {
    fn from(r: LogBodyCompositionRequest) -> Self {
        Self {
            user_id: r.user_id,
            date: r.date,
            body_fat_percent: r.body_fat_percent,
            muscle_mass_kg: r.muscle_mass_kg,
            waist_cm: r.waist_cm,
            hip_cm: r.hip_cm,
        }
    }
}
