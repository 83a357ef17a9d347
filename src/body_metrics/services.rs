use anyhow::Context;
use sqlx::SqlitePool;

use super::repo_types::{NewWeight, WeightLog};
use crate::{daily::DailyLog, error::AppError, users::User};

/// Store a weigh-in and mirror it onto the day's header row.
///
/// The day's `body_weight_kg` is overwritten, so the latest weigh-in wins.
pub async fn log_weight(db: &SqlitePool, new: &NewWeight) -> Result<WeightLog, AppError> {
    let mut tx = db.begin().await.context("begin tx")?;

    User::require(&mut *tx, new.user_id).await?;
    let row = WeightLog::insert_tx(&mut tx, new).await?;
    DailyLog::set_body_weight(&mut *tx, new.user_id, row.log_date, new.weight_kg).await?;

    tx.commit().await.context("commit tx")?;
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::test_pool, users::repo_types::NewUser};
    use time::macros::datetime;

    async fn user(db: &SqlitePool) -> i64 {
        let new = NewUser {
            name: "Spy".into(),
            birth_date: None,
            gender: None,
            height_cm: None,
        };
        User::create_with_settings(db, &new).await.unwrap().id
    }

    fn weigh_in(user_id: i64, kg: f64) -> NewWeight {
        NewWeight {
            user_id,
            weight_kg: kg,
            date_time: datetime!(2024-05-10 07:30 UTC),
            source: Some("manual".into()),
            note: None,
        }
    }

    #[tokio::test]
    async fn latest_weigh_in_wins_for_the_day() {
        let db = test_pool().await;
        let uid = user(&db).await;

        log_weight(&db, &weigh_in(uid, 82.4)).await.unwrap();
        log_weight(&db, &weigh_in(uid, 81.9)).await.unwrap();

        let day = DailyLog::find(&db, uid, datetime!(2024-05-10 00:00 UTC).date())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(day.body_weight_kg, Some(81.9));

        let weights = WeightLog::list_for_day(&db, uid, day.date).await.unwrap();
        assert_eq!(weights.len(), 2);
    }

    #[tokio::test]
    async fn unknown_user_writes_nothing() {
        let db = test_pool().await;
        let err = log_weight(&db, &weigh_in(404, 80.0)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(WeightLog::list_all(&db).await.unwrap().is_empty());
    }
}
