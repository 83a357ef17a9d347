use serde::Deserialize;
use time::Date;

use super::repo_types::{NewAnsLog, NewDailyFeel, NewSleepLog, DEFAULT_ANS_SOURCE};

#[derive(Debug, Deserialize)]
pub struct LogSleepRequest {
    pub user_id: i64,
    pub date: Date,
    #[serde(default)]
    pub sleep_duration_min: Option<f64>,
    #[serde(default)]
    pub resting_hr: Option<f64>,
    #[serde(default)]
    pub hrv_ms: Option<f64>,
    #[serde(default)]
    pub recharge_status: Option<String>,
    #[serde(default)]
    pub sleep_score: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<LogSleepRequest> for NewSleepLog {
    fn from(r: LogSleepRequest) -> Self {
        Self {
            user_id: r.user_id,
            date: r.date,
            sleep_duration_min: r.sleep_duration_min,
            resting_hr: r.resting_hr,
            hrv_ms: r.hrv_ms,
            recharge_status: r.recharge_status,
            sleep_score: r.sleep_score,
            notes: r.notes,
        }
    }
}

/// Request body for `POST /ans`; `source` defaults to `Polar`.
#[derive(Debug, Deserialize)]
pub struct LogAnsRequest {
    pub user_id: i64,
    pub date: Date,
    #[serde(default)]
    pub ans_change: Option<f64>,
    #[serde(default)]
    pub sleep_charge_score: Option<f64>,
    #[serde(default)]
    pub source: Option<String>,
}

impl From<LogAnsRequest> for NewAnsLog {
    fn from(r: LogAnsRequest) -> Self {
        Self {
            user_id: r.user_id,
            date: r.date,
            ans_change: r.ans_change,
            sleep_charge_score: r.sleep_charge_score,
            source: Some(r.source.unwrap_or_else(|| DEFAULT_ANS_SOURCE.to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LogDailyFeelRequest {
    pub user_id: i64,
    pub date: Date,
    #[serde(default)]
    pub energy_1_10: Option<i64>,
    #[serde(default)]
    pub fatigue_1_10: Option<i64>,
    #[serde(default)]
    pub soreness_1_10: Option<i64>,
    #[serde(default)]
    pub mood_1_10: Option<i64>,
    #[serde(default)]
    pub performance_feeling_1_10: Option<i64>,
    #[serde(default)]
    pub stress_1_10: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<LogDailyFeelRequest> for NewDailyFeel {
    fn from(r: LogDailyFeelRequest) -> Self {
        Self {
            user_id: r.user_id,
            date: r.date,
            energy_1_10: r.energy_1_10,
            fatigue_1_10: r.fatigue_1_10,
            soreness_1_10: r.soreness_1_10,
            mood_1_10: r.mood_1_10,
            performance_feeling_1_10: r.performance_feeling_1_10,
            stress_1_10: r.stress_1_10,
            notes: r.notes,
        }
    }
}
