use anyhow::Context;
use sqlx::{SqliteConnection, SqlitePool};
use time::Date;

use super::repo_types::{BodyComposition, NewBodyComposition, NewWeight, WeightLog};

const WEIGHT_COLUMNS: &str = "id, user_id, weight_kg, date_time, log_date, source, note";
const COMPOSITION_COLUMNS: &str = "id, user_id, date, body_fat_percent, muscle_mass_kg, waist_cm, hip_cm";

impl WeightLog {
    pub async fn insert_tx(conn: &mut SqliteConnection, new: &NewWeight) -> anyhow::Result<WeightLog> {
        let sql = format!(
            "INSERT INTO weight_log (user_id, weight_kg, date_time, log_date, source, note) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {WEIGHT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, WeightLog>(&sql)
            .bind(new.user_id)
            .bind(new.weight_kg)
            .bind(new.date_time)
            .bind(new.log_date())
            .bind(&new.source)
            .bind(&new.note)
            .fetch_one(conn)
            .await
            .context("insert weight log")?;
        Ok(row)
    }

    pub async fn list_for_day(db: &SqlitePool, user_id: i64, date: Date) -> anyhow::Result<Vec<WeightLog>> {
        let sql = format!(
            "SELECT {WEIGHT_COLUMNS} FROM weight_log WHERE user_id = ? AND log_date = ? ORDER BY date_time, id"
        );
        let rows = sqlx::query_as::<_, WeightLog>(&sql)
            .bind(user_id)
            .bind(date)
            .fetch_all(db)
            .await
            .context("list weight logs for day")?;
        Ok(rows)
    }

    pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<WeightLog>> {
        let sql = format!("SELECT {WEIGHT_COLUMNS} FROM weight_log ORDER BY id");
        let rows = sqlx::query_as::<_, WeightLog>(&sql)
            .fetch_all(db)
            .await
            .context("dump weight logs")?;
        Ok(rows)
    }
}

impl BodyComposition {
    pub async fn insert(db: &SqlitePool, new: &NewBodyComposition) -> anyhow::Result<BodyComposition> {
        let sql = format!(
            "INSERT INTO body_composition (user_id, date, body_fat_percent, muscle_mass_kg, waist_cm, hip_cm) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {COMPOSITION_COLUMNS}"
        );
        let row = sqlx::query_as::<_, BodyComposition>(&sql)
            .bind(new.user_id)
            .bind(new.date)
            .bind(new.body_fat_percent)
            .bind(new.muscle_mass_kg)
            .bind(new.waist_cm)
            .bind(new.hip_cm)
            .fetch_one(db)
            .await
            .context("insert body composition")?;
        Ok(row)
    }

    pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<BodyComposition>> {
        let sql = format!("SELECT {COMPOSITION_COLUMNS} FROM body_composition ORDER BY id");
        let rows = sqlx::query_as::<_, BodyComposition>(&sql)
            .fetch_all(db)
            .await
            .context("dump body composition")?;
        Ok(rows)
    }
}
