use anyhow::Context;
use sqlx::SqlitePool;

use super::repo_types::{NewTrainingSession, TrainingSession};
use crate::{daily::DailyLog, error::AppError, users::User};

/// Store a session and add its calories to the day's training expenditure.
pub async fn log_session(db: &SqlitePool, new: &NewTrainingSession) -> Result<TrainingSession, AppError> {
    let mut tx = db.begin().await.context("begin tx")?;

    User::require(&mut *tx, new.user_id).await?;
    let session = TrainingSession::insert_tx(&mut tx, new).await?;
    let burned = new.calories_kcal.unwrap_or(0.0);
    DailyLog::add_training_calories(&mut *tx, new.user_id, new.date, burned).await?;

    tx.commit().await.context("commit tx")?;
    Ok(session)
}
