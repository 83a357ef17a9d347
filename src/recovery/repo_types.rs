use serde::Serialize;
use sqlx::FromRow;
use time::Date;

pub const DEFAULT_ANS_SOURCE: &str = "Polar";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SleepLog {
    pub id: i64,
    pub user_id: i64,
    pub date: Date,
    pub sleep_duration_min: Option<f64>,
    pub resting_hr: Option<f64>,
    pub hrv_ms: Option<f64>,
    pub recharge_status: Option<String>,
    pub sleep_score: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSleepLog {
    pub user_id: i64,
    pub date: Date,
    pub sleep_duration_min: Option<f64>,
    pub resting_hr: Option<f64>,
    pub hrv_ms: Option<f64>,
    pub recharge_status: Option<String>,
    pub sleep_score: Option<f64>,
    pub notes: Option<String>,
}

/// Autonomic nervous system reading from a wearable's overnight recharge.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AnsLog {
    pub id: i64,
    pub user_id: i64,
    pub date: Date,
    pub ans_change: Option<f64>,
    pub sleep_charge_score: Option<f64>,
    pub source: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewAnsLog {
    pub user_id: i64,
    pub date: Date,
    pub ans_change: Option<f64>,
    pub sleep_charge_score: Option<f64>,
    pub source: Option<String>,
}

/// Subjective ratings, each 1..=10 when present.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DailyFeel {
    pub id: i64,
    pub user_id: i64,
    pub date: Date,
    pub energy_1_10: Option<i64>,
    pub fatigue_1_10: Option<i64>,
    pub soreness_1_10: Option<i64>,
    pub mood_1_10: Option<i64>,
    pub performance_feeling_1_10: Option<i64>,
    pub stress_1_10: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewDailyFeel {
    pub user_id: i64,
    pub date: Date,
    pub energy_1_10: Option<i64>,
    pub fatigue_1_10: Option<i64>,
    pub soreness_1_10: Option<i64>,
    pub mood_1_10: Option<i64>,
    pub performance_feeling_1_10: Option<i64>,
    pub stress_1_10: Option<i64>,
    pub notes: Option<String>,
}

impl NewDailyFeel {
    pub fn ratings(&self) -> [(&'static str, Option<i64>); 6] {
        [
            ("energy_1_10", self.energy_1_10),
            ("fatigue_1_10", self.fatigue_1_10),
            ("soreness_1_10", self.soreness_1_10),
            ("mood_1_10", self.mood_1_10),
            ("performance_feeling_1_10", self.performance_feeling_1_10),
            ("stress_1_10", self.stress_1_10),
        ]
    }
}
