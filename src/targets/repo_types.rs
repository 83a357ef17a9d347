use serde::Serialize;
use sqlx::FromRow;
use time::Date;

use crate::daily::ReadinessState;

/// Planned intake and recommendations for one user-day.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DailyTargets {
    pub id: i64,
    pub user_id: i64,
    pub date: Date,
    pub readiness_state: Option<ReadinessState>,
    pub target_protein_min_g: Option<f64>,
    pub target_protein_max_g: Option<f64>,
    pub target_carbs_g: Option<f64>,
    pub target_fat_g: Option<f64>,
    pub target_calories_kcal: Option<f64>,
    pub training_recommendation: Option<String>,
    pub recovery_recommendation: Option<String>,
}

/// Full replacement for a day's targets; unset fields are stored as NULL.
#[derive(Debug, Clone)]
pub struct TargetsInput {
    pub user_id: i64,
    pub date: Date,
    pub readiness_state: Option<ReadinessState>,
    pub target_protein_min_g: Option<f64>,
    pub target_protein_max_g: Option<f64>,
    pub target_carbs_g: Option<f64>,
    pub target_fat_g: Option<f64>,
    pub target_calories_kcal: Option<f64>,
    pub training_recommendation: Option<String>,
    pub recovery_recommendation: Option<String>,
}
