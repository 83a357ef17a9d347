use anyhow::Context;
use sqlx::SqlitePool;

use super::repo_types::{NewIntake, NewSupplement, Supplement, SupplementIntake};

const SUPPLEMENT_COLUMNS: &str = "id, name, description, has_iron, has_b12, has_folate";
const INTAKE_COLUMNS: &str = "id, user_id, supplement_id, date, dose, time, notes";

impl Supplement {
    pub async fn create(db: &SqlitePool, new: &NewSupplement) -> anyhow::Result<Supplement> {
        let sql = format!(
            "INSERT INTO supplements (name, description, has_iron, has_b12, has_folate) \
             VALUES (?, ?, ?, ?, ?) RETURNING {SUPPLEMENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Supplement>(&sql)
            .bind(&new.name)
            .bind(&new.description)
            .bind(new.has_iron)
            .bind(new.has_b12)
            .bind(new.has_folate)
            .fetch_one(db)
            .await
            .context("insert supplement")?;
        Ok(row)
    }

    pub async fn exists(db: &SqlitePool, id: i64) -> anyhow::Result<bool> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM supplements WHERE id = ?")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("check supplement exists")?;
        Ok(row.is_some())
    }

    pub async fn list(db: &SqlitePool) -> anyhow::Result<Vec<Supplement>> {
        let sql = format!("SELECT {SUPPLEMENT_COLUMNS} FROM supplements ORDER BY name COLLATE NOCASE, id");
        let rows = sqlx::query_as::<_, Supplement>(&sql)
            .fetch_all(db)
            .await
            .context("list supplements")?;
        Ok(rows)
    }

    pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<Supplement>> {
        let sql = format!("SELECT {SUPPLEMENT_COLUMNS} FROM supplements ORDER BY id");
        let rows = sqlx::query_as::<_, Supplement>(&sql)
            .fetch_all(db)
            .await
            .context("dump supplements")?;
        Ok(rows)
    }
}

impl SupplementIntake {
    pub async fn insert(db: &SqlitePool, new: &NewIntake) -> anyhow::Result<SupplementIntake> {
        let sql = format!(
            "INSERT INTO supplement_intake (user_id, supplement_id, date, dose, time, notes) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {INTAKE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, SupplementIntake>(&sql)
            .bind(new.user_id)
            .bind(new.supplement_id)
            .bind(new.date)
            .bind(&new.dose)
            .bind(&new.time)
            .bind(&new.notes)
            .fetch_one(db)
            .await
            .context("insert supplement intake")?;
        Ok(row)
    }

    pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<SupplementIntake>> {
        let sql = format!("SELECT {INTAKE_COLUMNS} FROM supplement_intake ORDER BY id");
        let rows = sqlx::query_as::<_, SupplementIntake>(&sql)
            .fetch_all(db)
            .await
            .context("dump supplement intake")?;
        Ok(rows)
    }
}
