use serde::Serialize;
use sqlx::FromRow;
use time::{Date, OffsetDateTime};

pub const DEFAULT_WEIGHT_SOURCE: &str = "manual";

/// One weigh-in; `log_date` is the calendar day it counts towards.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WeightLog {
    pub id: i64,
    pub user_id: i64,
    pub weight_kg: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
    pub log_date: Date,
    pub source: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewWeight {
    pub user_id: i64,
    pub weight_kg: f64,
    pub date_time: OffsetDateTime,
    pub source: Option<String>,
    pub note: Option<String>,
}

impl NewWeight {
    pub fn log_date(&self) -> Date {
        self.date_time.date()
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BodyComposition {
    pub id: i64,
    pub user_id: i64,
    pub date: Date,
    pub body_fat_percent: Option<f64>,
    pub muscle_mass_kg: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hip_cm: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct NewBodyComposition {
    pub user_id: i64,
    pub date: Date,
    pub body_fat_percent: Option<f64>,
    pub muscle_mass_kg: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hip_cm: Option<f64>,
}
