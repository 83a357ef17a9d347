use anyhow::Context;
use sqlx::SqlitePool;
use time::Date;

use super::repo_types::{DailyTargets, TargetsInput};

const COLUMNS: &str = "id, user_id, date, readiness_state, target_protein_min_g, target_protein_max_g, \
     target_carbs_g, target_fat_g, target_calories_kcal, training_recommendation, recovery_recommendation";

impl DailyTargets {
    /// Insert or fully replace the (user_id, date) row.
    pub async fn upsert(db: &SqlitePool, input: &TargetsInput) -> anyhow::Result<DailyTargets> {
        let sql = format!(
            r#"
            INSERT INTO daily_targets
                (user_id, date, readiness_state, target_protein_min_g, target_protein_max_g,
                 target_carbs_g, target_fat_g, target_calories_kcal,
                 training_recommendation, recovery_recommendation)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (user_id, date) DO UPDATE SET
                readiness_state = excluded.readiness_state,
                target_protein_min_g = excluded.target_protein_min_g,
                target_protein_max_g = excluded.target_protein_max_g,
                target_carbs_g = excluded.target_carbs_g,
                target_fat_g = excluded.target_fat_g,
                target_calories_kcal = excluded.target_calories_kcal,
                training_recommendation = excluded.training_recommendation,
                recovery_recommendation = excluded.recovery_recommendation
            RETURNING {COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, DailyTargets>(&sql)
            .bind(input.user_id)
            .bind(input.date)
            .bind(input.readiness_state)
            .bind(input.target_protein_min_g)
            .bind(input.target_protein_max_g)
            .bind(input.target_carbs_g)
            .bind(input.target_fat_g)
            .bind(input.target_calories_kcal)
            .bind(&input.training_recommendation)
            .bind(&input.recovery_recommendation)
            .fetch_one(db)
            .await
            .context("upsert daily targets")?;
        Ok(row)
    }

    pub async fn find(db: &SqlitePool, user_id: i64, date: Date) -> anyhow::Result<Option<DailyTargets>> {
        let sql = format!("SELECT {COLUMNS} FROM daily_targets WHERE user_id = ? AND date = ?");
        let row = sqlx::query_as::<_, DailyTargets>(&sql)
            .bind(user_id)
            .bind(date)
            .fetch_optional(db)
            .await
            .context("find daily targets")?;
        Ok(row)
    }

    pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<DailyTargets>> {
        let sql = format!("SELECT {COLUMNS} FROM daily_targets ORDER BY user_id, date");
        let rows = sqlx::query_as::<_, DailyTargets>(&sql)
            .fetch_all(db)
            .await
            .context("dump daily targets")?;
        Ok(rows)
    }
}
