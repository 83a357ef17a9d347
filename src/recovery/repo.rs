use anyhow::Context;
use sqlx::SqlitePool;
use time::Date;

use super::repo_types::{AnsLog, DailyFeel, NewAnsLog, NewDailyFeel, NewSleepLog, SleepLog};

const SLEEP_COLUMNS: &str = "id, user_id, date, sleep_duration_min, resting_hr, hrv_ms, \
     recharge_status, sleep_score, notes";
const ANS_COLUMNS: &str = "id, user_id, date, ans_change, sleep_charge_score, source";
const FEEL_COLUMNS: &str = "id, user_id, date, energy_1_10, fatigue_1_10, soreness_1_10, mood_1_10, \
     performance_feeling_1_10, stress_1_10, notes";

impl SleepLog {
    pub async fn insert(db: &SqlitePool, new: &NewSleepLog) -> anyhow::Result<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO sleep_log
                (user_id, date, sleep_duration_min, resting_hr, hrv_ms, recharge_status, sleep_score, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(new.user_id)
        .bind(new.date)
        .bind(new.sleep_duration_min)
        .bind(new.resting_hr)
        .bind(new.hrv_ms)
        .bind(&new.recharge_status)
        .bind(new.sleep_score)
        .bind(&new.notes)
        .fetch_one(db)
        .await
        .context("insert sleep log")?;
        Ok(id)
    }

    pub async fn list_for_day(db: &SqlitePool, user_id: i64, date: Date) -> anyhow::Result<Vec<SleepLog>> {
        let sql = format!("SELECT {SLEEP_COLUMNS} FROM sleep_log WHERE user_id = ? AND date = ? ORDER BY id");
        let rows = sqlx::query_as::<_, SleepLog>(&sql)
            .bind(user_id)
            .bind(date)
            .fetch_all(db)
            .await
            .context("list sleep logs for day")?;
        Ok(rows)
    }

    pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<SleepLog>> {
        let sql = format!("SELECT {SLEEP_COLUMNS} FROM sleep_log ORDER BY id");
        let rows = sqlx::query_as::<_, SleepLog>(&sql)
            .fetch_all(db)
            .await
            .context("dump sleep logs")?;
        Ok(rows)
    }
}

impl AnsLog {
    pub async fn insert(db: &SqlitePool, new: &NewAnsLog) -> anyhow::Result<i64> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO ans_log (user_id, date, ans_change, sleep_charge_score, source) \
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(new.user_id)
        .bind(new.date)
        .bind(new.ans_change)
        .bind(new.sleep_charge_score)
        .bind(&new.source)
        .fetch_one(db)
        .await
        .context("insert ans log")?;
        Ok(id)
    }

    pub async fn list_for_day(db: &SqlitePool, user_id: i64, date: Date) -> anyhow::Result<Vec<AnsLog>> {
        let sql = format!("SELECT {ANS_COLUMNS} FROM ans_log WHERE user_id = ? AND date = ? ORDER BY id");
        let rows = sqlx::query_as::<_, AnsLog>(&sql)
            .bind(user_id)
            .bind(date)
            .fetch_all(db)
            .await
            .context("list ans logs for day")?;
        Ok(rows)
    }

    pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<AnsLog>> {
        let sql = format!("SELECT {ANS_COLUMNS} FROM ans_log ORDER BY id");
        let rows = sqlx::query_as::<_, AnsLog>(&sql)
            .fetch_all(db)
            .await
            .context("dump ans logs")?;
        Ok(rows)
    }
}

impl DailyFeel {
    pub async fn insert(db: &SqlitePool, new: &NewDailyFeel) -> anyhow::Result<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO daily_feel
                (user_id, date, energy_1_10, fatigue_1_10, soreness_1_10, mood_1_10,
                 performance_feeling_1_10, stress_1_10, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(new.user_id)
        .bind(new.date)
        .bind(new.energy_1_10)
        .bind(new.fatigue_1_10)
        .bind(new.soreness_1_10)
        .bind(new.mood_1_10)
        .bind(new.performance_feeling_1_10)
        .bind(new.stress_1_10)
        .bind(&new.notes)
        .fetch_one(db)
        .await
        .context("insert daily feel")?;
        Ok(id)
    }

    pub async fn list_for_day(db: &SqlitePool, user_id: i64, date: Date) -> anyhow::Result<Vec<DailyFeel>> {
        let sql = format!("SELECT {FEEL_COLUMNS} FROM daily_feel WHERE user_id = ? AND date = ? ORDER BY id");
        let rows = sqlx::query_as::<_, DailyFeel>(&sql)
            .bind(user_id)
            .bind(date)
            .fetch_all(db)
            .await
            .context("list daily feel for day")?;
        Ok(rows)
    }

    pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<DailyFeel>> {
        let sql = format!("SELECT {FEEL_COLUMNS} FROM daily_feel ORDER BY id");
        let rows = sqlx::query_as::<_, DailyFeel>(&sql)
            .fetch_all(db)
            .await
            .context("dump daily feel")?;
        Ok(rows)
    }
}
