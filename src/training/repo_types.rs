use serde::Serialize;
use sqlx::FromRow;
use time::Date;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TrainingSession {
    pub id: i64,
    pub user_id: i64,
    pub date: Date,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub duration_min: Option<f64>,
    pub avg_hr: Option<f64>,
    pub max_hr: Option<f64>,
    pub calories_kcal: Option<f64>,
    pub rpe: Option<f64>,
    pub notes: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTrainingSession {
    pub user_id: i64,
    pub date: Date,
    pub kind: String,
    pub duration_min: Option<f64>,
    pub avg_hr: Option<f64>,
    pub max_hr: Option<f64>,
    pub calories_kcal: Option<f64>,
    pub rpe: Option<f64>,
    pub notes: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
