use anyhow::Context;
use sqlx::{Executor, Sqlite, SqlitePool};
use time::OffsetDateTime;
use tracing::warn;

use crate::error::AppError;

use super::repo_types::{
    NewUser, SettingsPatch, User, UserSettings, DEFAULT_HRV_BASELINE,
    DEFAULT_PROTEIN_TARGET_MAX_G, DEFAULT_PROTEIN_TARGET_MIN_G,
};

impl User {
    /// Insert the user and its default settings row in one transaction.
    pub async fn create_with_settings(db: &SqlitePool, new: &NewUser) -> anyhow::Result<User> {
        let now = OffsetDateTime::now_utc();
        let mut tx = db.begin().await.context("begin tx")?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, birth_date, gender, height_cm, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, birth_date, gender, height_cm, created_at
            "#,
        )
        .bind(&new.name)
        .bind(new.birth_date)
        .bind(&new.gender)
        .bind(new.height_cm)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .context("insert user")?;

        sqlx::query(
            r#"
            INSERT INTO user_settings
                (user_id, hrv_baseline, protein_target_min_g, protein_target_max_g, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id)
        .bind(DEFAULT_HRV_BASELINE)
        .bind(DEFAULT_PROTEIN_TARGET_MIN_G)
        .bind(DEFAULT_PROTEIN_TARGET_MAX_G)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .context("insert default settings")?;

        tx.commit().await.context("commit tx")?;
        Ok(user)
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, birth_date, gender, height_cm, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("find user by id")?;
        Ok(user)
    }

    /// Works against the pool or an open transaction.
    pub async fn exists<'e, E>(db: E, id: i64) -> anyhow::Result<bool>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("check user exists")?;
        Ok(row.is_some())
    }

    /// Fails with `404 User not found` for an unknown id.
    pub async fn require<'e, E>(db: E, id: i64) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        if Self::exists(db, id).await? {
            Ok(())
        } else {
            warn!(user_id = id, "unknown user");
            Err(AppError::user_not_found())
        }
    }

    pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            "SELECT id, name, birth_date, gender, height_cm, created_at FROM users ORDER BY id",
        )
        .fetch_all(db)
        .await
        .context("list users")?;
        Ok(rows)
    }
}

const SETTINGS_COLUMNS: &str = "id, user_id, hrv_baseline, weight_goal_kg, protein_target_min_g, \
     protein_target_max_g, default_maintenance_kcal, created_at, updated_at";

impl UserSettings {
    pub async fn find_by_user(db: &SqlitePool, user_id: i64) -> anyhow::Result<Option<UserSettings>> {
        let sql = format!("SELECT {SETTINGS_COLUMNS} FROM user_settings WHERE user_id = ?");
        let row = sqlx::query_as::<_, UserSettings>(&sql)
            .bind(user_id)
            .fetch_optional(db)
            .await
            .context("find settings by user")?;
        Ok(row)
    }

    /// Apply `patch`, returning the updated row or `None` when the user has no settings.
    pub async fn update(
        db: &SqlitePool,
        user_id: i64,
        patch: &SettingsPatch,
    ) -> anyhow::Result<Option<UserSettings>> {
        let sql = format!(
            r#"
            UPDATE user_settings
               SET hrv_baseline             = COALESCE(?, hrv_baseline),
                   weight_goal_kg           = COALESCE(?, weight_goal_kg),
                   protein_target_min_g     = COALESCE(?, protein_target_min_g),
                   protein_target_max_g     = COALESCE(?, protein_target_max_g),
                   default_maintenance_kcal = COALESCE(?, default_maintenance_kcal),
                   updated_at               = ?
             WHERE user_id = ?
            RETURNING {SETTINGS_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, UserSettings>(&sql)
            .bind(patch.hrv_baseline)
            .bind(patch.weight_goal_kg)
            .bind(patch.protein_target_min_g)
            .bind(patch.protein_target_max_g)
            .bind(patch.default_maintenance_kcal)
            .bind(OffsetDateTime::now_utc())
            .bind(user_id)
            .fetch_optional(db)
            .await
            .context("update settings")?;
        Ok(row)
    }

    pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<UserSettings>> {
        let sql = format!("SELECT {SETTINGS_COLUMNS} FROM user_settings ORDER BY id");
        let rows = sqlx::query_as::<_, UserSettings>(&sql)
            .fetch_all(db)
            .await
            .context("list settings")?;
        Ok(rows)
    }
}
