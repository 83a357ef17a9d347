use anyhow::Context;
use sqlx::{Executor, Sqlite, SqlitePool};
use time::Date;

use super::repo_types::{DailyLog, DailyLogPatch};

const COLUMNS: &str = "id, user_id, date, body_weight_kg, calories_in_kcal, \
     calories_out_training_kcal, calculated_deficit_kcal, readiness_state, notes_day";

impl DailyLog {
    pub async fn find(db: &SqlitePool, user_id: i64, date: Date) -> anyhow::Result<Option<DailyLog>> {
        let sql = format!("SELECT {COLUMNS} FROM daily_log WHERE user_id = ? AND date = ?");
        let row = sqlx::query_as::<_, DailyLog>(&sql)
            .bind(user_id)
            .bind(date)
            .fetch_optional(db)
            .await
            .context("find daily log")?;
        Ok(row)
    }

    pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<DailyLog>> {
        let sql = format!("SELECT {COLUMNS} FROM daily_log ORDER BY user_id, date");
        let rows = sqlx::query_as::<_, DailyLog>(&sql)
            .fetch_all(db)
            .await
            .context("list daily logs")?;
        Ok(rows)
    }

    /// Create the day's row with `weight_kg` or overwrite the stored weight.
    pub async fn set_body_weight<'e, E>(db: E, user_id: i64, date: Date, weight_kg: f64) -> anyhow::Result<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO daily_log (user_id, date, body_weight_kg)
            VALUES (?, ?, ?)
            ON CONFLICT (user_id, date)
            DO UPDATE SET body_weight_kg = excluded.body_weight_kg
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(weight_kg)
        .execute(db)
        .await
        .context("upsert daily body weight")?;
        Ok(())
    }

    /// Add `kcal` to the day's intake counter, creating the row when missing.
    pub async fn add_calories_in<'e, E>(db: E, user_id: i64, date: Date, kcal: f64) -> anyhow::Result<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO daily_log (user_id, date, calories_in_kcal)
            VALUES (?, ?, ?)
            ON CONFLICT (user_id, date)
            DO UPDATE SET calories_in_kcal = COALESCE(daily_log.calories_in_kcal, 0) + excluded.calories_in_kcal
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(kcal)
        .execute(db)
        .await
        .context("upsert daily calories in")?;
        Ok(())
    }

    /// Add `kcal` to the day's training expenditure, creating the row when missing.
    pub async fn add_training_calories<'e, E>(db: E, user_id: i64, date: Date, kcal: f64) -> anyhow::Result<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
            INSERT INTO daily_log (user_id, date, calories_out_training_kcal)
            VALUES (?, ?, ?)
            ON CONFLICT (user_id, date)
            DO UPDATE SET calories_out_training_kcal =
                COALESCE(daily_log.calories_out_training_kcal, 0) + excluded.calories_out_training_kcal
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(kcal)
        .execute(db)
        .await
        .context("upsert daily training calories")?;
        Ok(())
    }

    pub async fn apply_patch(
        db: &SqlitePool,
        user_id: i64,
        date: Date,
        patch: &DailyLogPatch,
    ) -> anyhow::Result<DailyLog> {
        let deficit = if patch.clear_deficit_override {
            None
        } else {
            patch.calculated_deficit_kcal
        };
        let sql = format!(
            r#"
            INSERT INTO daily_log (user_id, date, readiness_state, calculated_deficit_kcal, notes_day)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT (user_id, date) DO UPDATE SET
                readiness_state = COALESCE(excluded.readiness_state, daily_log.readiness_state),
                calculated_deficit_kcal = CASE
                    WHEN ? THEN NULL
                    ELSE COALESCE(excluded.calculated_deficit_kcal, daily_log.calculated_deficit_kcal)
                END,
                notes_day = COALESCE(excluded.notes_day, daily_log.notes_day)
            RETURNING {COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, DailyLog>(&sql)
            .bind(user_id)
            .bind(date)
            .bind(patch.readiness_state)
            .bind(deficit)
            .bind(&patch.notes_day)
            .bind(patch.clear_deficit_override)
            .fetch_one(db)
            .await
            .context("upsert daily log header")?;
        Ok(row)
    }
}
