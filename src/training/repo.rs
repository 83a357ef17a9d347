use anyhow::Context;
use sqlx::{SqliteConnection, SqlitePool};
use time::Date;

use super::repo_types::{NewTrainingSession, TrainingSession};

const COLUMNS: &str = "id, user_id, date, type, duration_min, avg_hr, max_hr, calories_kcal, \
     rpe, notes, start_time, end_time";

impl TrainingSession {
    pub async fn insert_tx(conn: &mut SqliteConnection, new: &NewTrainingSession) -> anyhow::Result<TrainingSession> {
        let sql = format!(
            r#"
            INSERT INTO training_sessions
                (user_id, date, type, duration_min, avg_hr, max_hr, calories_kcal, rpe, notes, start_time, end_time)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, TrainingSession>(&sql)
            .bind(new.user_id)
            .bind(new.date)
            .bind(&new.kind)
            .bind(new.duration_min)
            .bind(new.avg_hr)
            .bind(new.max_hr)
            .bind(new.calories_kcal)
            .bind(new.rpe)
            .bind(&new.notes)
            .bind(&new.start_time)
            .bind(&new.end_time)
            .fetch_one(conn)
            .await
            .context("insert training session")?;
        Ok(row)
    }

    /// Sessions of one day, untimed ones first.
    pub async fn list_for_day(db: &SqlitePool, user_id: i64, date: Date) -> anyhow::Result<Vec<TrainingSession>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM training_sessions WHERE user_id = ? AND date = ? ORDER BY start_time, id"
        );
        let rows = sqlx::query_as::<_, TrainingSession>(&sql)
            .bind(user_id)
            .bind(date)
            .fetch_all(db)
            .await
            .context("list training sessions for day")?;
        Ok(rows)
    }

    pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<TrainingSession>> {
        let sql = format!("SELECT {COLUMNS} FROM training_sessions ORDER BY id");
        let rows = sqlx::query_as::<_, TrainingSession>(&sql)
            .fetch_all(db)
            .await
            .context("dump training sessions")?;
        Ok(rows)
    }
}
