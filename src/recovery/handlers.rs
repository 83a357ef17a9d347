use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use crate::{
    error::ApiResult,
    recovery::{
        dto::{LogAnsRequest, LogDailyFeelRequest, LogSleepRequest},
        repo_types::{AnsLog, DailyFeel, NewAnsLog, NewDailyFeel, NewSleepLog, SleepLog},
    },
    response::Ack,
    state::AppState,
    users::User,
    validation::{check_non_negative, check_rating},
};

pub fn recovery_routes() -> Router<AppState> {
    Router::new()
        .route("/sleep", post(log_sleep))
        .route("/ans", post(log_ans))
        .route("/daily-feel", post(log_daily_feel))
}

#[instrument(skip(state, payload), fields(user_id = payload.user_id))]
pub async fn log_sleep(
    State(state): State<AppState>,
    Json(payload): Json<LogSleepRequest>,
) -> ApiResult<Json<Ack>> {
    for (field, value) in [
        ("sleep_duration_min", payload.sleep_duration_min),
        ("resting_hr", payload.resting_hr),
        ("hrv_ms", payload.hrv_ms),
    ] {
        if let Some(v) = value {
            check_non_negative(field, v)?;
        }
    }

    User::require(&state.db, payload.user_id).await?;
    let new = NewSleepLog::from(payload);
    let id = SleepLog::insert(&state.db, &new).await?;

    info!(sleep_id = id, date = %new.date, "sleep logged");
    Ok(Json(Ack::ok(id)))
}

#[instrument(skip(state, payload), fields(user_id = payload.user_id))]
pub async fn log_ans(State(state): State<AppState>, Json(payload): Json<LogAnsRequest>) -> ApiResult<Json<Ack>> {
    User::require(&state.db, payload.user_id).await?;
    let new = NewAnsLog::from(payload);
    let id = AnsLog::insert(&state.db, &new).await?;

    info!(ans_id = id, date = %new.date, source = ?new.source, "ans logged");
    Ok(Json(Ack::ok(id)))
}

#[instrument(skip(state, payload), fields(user_id = payload.user_id))]
pub async fn log_daily_feel(
    State(state): State<AppState>,
    Json(payload): Json<LogDailyFeelRequest>,
) -> ApiResult<Json<Ack>> {
    let new = NewDailyFeel::from(payload);
    for (field, value) in new.ratings() {
        check_rating(field, value)?;
    }

    User::require(&state.db, new.user_id).await?;
    let id = DailyFeel::insert(&state.db, &new).await?;

    info!(feel_id = id, date = %new.date, "daily feel logged");
    Ok(Json(Ack::ok(id)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use time::macros::date;

    use crate::{
        recovery::{AnsLog, DailyFeel, SleepLog},
        test_support::{create_user, post_json, test_app},
    };

    #[tokio::test]
    async fn sleep_and_ans_are_stored() {
        let (app, state) = test_app().await;
        let uid = create_user(&app, "Spy").await;

        let (status, body) = post_json(
            &app,
            "/sleep",
            json!({"user_id": uid, "date": "2024-04-02", "sleep_duration_min": 452.0, "hrv_ms": 47.0,
                   "recharge_status": "OK", "sleep_score": 81.0}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, _) = post_json(&app, "/ans", json!({"user_id": uid, "date": "2024-04-02", "ans_change": -1.5})).await;
        assert_eq!(status, StatusCode::OK);

        let day = date!(2024 - 04 - 02);
        let sleep = SleepLog::list_for_day(&state.db, uid, day).await.unwrap();
        assert_eq!(sleep.len(), 1);
        assert_eq!(sleep[0].hrv_ms, Some(47.0));

        let ans = AnsLog::list_for_day(&state.db, uid, day).await.unwrap();
        assert_eq!(ans[0].source.as_deref(), Some("Polar"));
        assert_eq!(ans[0].ans_change, Some(-1.5));
    }

    #[tokio::test]
    async fn daily_feel_ratings_are_bounded() {
        let (app, state) = test_app().await;
        let uid = create_user(&app, "Spy").await;

        let (status, _) = post_json(
            &app,
            "/daily-feel",
            json!({"user_id": uid, "date": "2024-04-02", "energy_1_10": 7, "stress_1_10": 3, "notes": "ok"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        for bad in [0, 11] {
            let (status, body) = post_json(
                &app,
                "/daily-feel",
                json!({"user_id": uid, "date": "2024-04-02", "mood_1_10": bad}),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["detail"], "mood_1_10 must be between 1 and 10");
        }

        let feel = DailyFeel::list_for_day(&state.db, uid, date!(2024 - 04 - 02)).await.unwrap();
        assert_eq!(feel.len(), 1);
        assert_eq!(feel[0].energy_1_10, Some(7));
    }

    #[tokio::test]
    async fn unknown_user_is_404() {
        let (app, _) = test_app().await;
        for uri in ["/sleep", "/ans", "/daily-feel"] {
            let (status, _) = post_json(&app, uri, json!({"user_id": 99, "date": "2024-04-02"})).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }
    }
}
