use serde::Serialize;
use sqlx::FromRow;
use time::{Date, OffsetDateTime};

/// Defaults written into every new settings row.
pub const DEFAULT_HRV_BASELINE: f64 = 41.0;
pub const DEFAULT_PROTEIN_TARGET_MIN_G: f64 = 160.0;
pub const DEFAULT_PROTEIN_TARGET_MAX_G: f64 = 190.0;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<Date>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Per-user nutrition and recovery baselines, one row per user.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserSettings {
    pub id: i64,
    pub user_id: i64,
    pub hrv_baseline: Option<f64>,
    pub weight_goal_kg: Option<f64>,
    pub protein_target_min_g: Option<f64>,
    pub protein_target_max_g: Option<f64>,
    pub default_maintenance_kcal: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Fields accepted when creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub birth_date: Option<Date>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
}

/// Partial settings update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub hrv_baseline: Option<f64>,
    pub weight_goal_kg: Option<f64>,
    pub protein_target_min_g: Option<f64>,
    pub protein_target_max_g: Option<f64>,
    pub default_maintenance_kcal: Option<f64>,
}
