use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    daily::{
        dto::UpdateDailyLogRequest,
        repo_types::DailyLog,
        services::{daily_summary, DailySummary},
    },
    error::{ApiResult, AppError},
    state::AppState,
    users::User,
    validation::parse_date,
};

pub fn daily_routes() -> Router<AppState> {
    Router::new()
        .route("/daily-log", put(update_daily_log))
        .route("/summary/daily/:user_id/:date", get(get_daily_summary))
}

#[instrument(skip(state, payload))]
pub async fn update_daily_log(
    State(state): State<AppState>,
    Json(payload): Json<UpdateDailyLogRequest>,
) -> ApiResult<Json<DailyLog>> {
    if payload.clear_deficit_override && payload.calculated_deficit_kcal.is_some() {
        return Err(AppError::BadRequest(
            "calculated_deficit_kcal and clear_deficit_override are mutually exclusive".into(),
        ));
    }
    User::require(&state.db, payload.user_id).await?;

    let row = DailyLog::apply_patch(&state.db, payload.user_id, payload.date, &payload.patch()).await?;
    info!(user_id = row.user_id, date = %row.date, "daily log updated");
    Ok(Json(row))
}

#[instrument(skip(state))]
pub async fn get_daily_summary(
    State(state): State<AppState>,
    Path((user_id, raw_date)): Path<(i64, String)>,
) -> ApiResult<Json<DailySummary>> {
    let date = parse_date(&raw_date)?;
    User::require(&state.db, user_id).await?;
    let summary = daily_summary(&state.db, user_id, date).await?;
    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_support::{assert_close, create_food, create_user, get_json, post_json, put_json, test_app};

    #[tokio::test]
    async fn summary_combines_meals_and_training() {
        let (app, _) = test_app().await;
        let uid = create_user(&app, "Spy").await;
        let chicken = create_food(&app, "Chicken breast", 31.0, 0.0, 3.6, 165.0).await;
        let rice = create_food(&app, "Rice, cooked", 2.7, 28.0, 0.3, 130.0).await;

        let (status, _) = post_json(
            &app,
            "/meals",
            json!({
                "user_id": uid, "date": "2024-06-01", "meal_type": "Lunch", "time": "13:00",
                "items": [
                    {"food_id": chicken, "quantity_g": 200.0},
                    {"food_id": rice, "quantity_g": 150.0}
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = post_json(
            &app,
            "/training",
            json!({"user_id": uid, "date": "2024-06-01", "type": "Zone 2 Run", "calories_kcal": 450.0}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get_json(&app, &format!("/summary/daily/{uid}/2024-06-01")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date"], "2024-06-01");
        // 31*2 + 2.7*1.5
        assert_close(&body["protein_g"], 66.05);
        assert_close(&body["carbs_g"], 42.0);
        assert_close(&body["fat_g"], 7.65);
        assert_close(&body["calories_in_kcal"], 525.0);
        assert_close(&body["training_calories_kcal"], 450.0);
        assert_close(&body["deficit_kcal"], 75.0);
        assert!(body["readiness_state"].is_null());
    }

    #[tokio::test]
    async fn summary_for_empty_day_is_zero() {
        let (app, _) = test_app().await;
        let uid = create_user(&app, "Spy").await;

        let (status, body) = get_json(&app, &format!("/summary/daily/{uid}/2024-06-02")).await;
        assert_eq!(status, StatusCode::OK);
        assert_close(&body["protein_g"], 0.0);
        assert_close(&body["calories_in_kcal"], 0.0);
        assert_close(&body["deficit_kcal"], 0.0);
    }

    #[tokio::test]
    async fn override_and_readiness_flow_into_summary() {
        let (app, _) = test_app().await;
        let uid = create_user(&app, "Spy").await;
        let oats = create_food(&app, "Oats", 13.0, 60.0, 7.0, 380.0).await;
        post_json(
            &app,
            "/meals",
            json!({"user_id": uid, "date": "2024-06-03", "meal_type": "Breakfast",
                   "items": [{"food_id": oats, "quantity_g": 100.0}]}),
        )
        .await;

        let (status, body) = put_json(
            &app,
            "/daily-log",
            json!({"user_id": uid, "date": "2024-06-03", "readiness_state": "LOW", "calculated_deficit_kcal": -500.0}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["readiness_state"], "LOW");

        let (_, body) = get_json(&app, &format!("/summary/daily/{uid}/2024-06-03")).await;
        assert_close(&body["deficit_kcal"], -500.0);
        assert_eq!(body["readiness_state"], "LOW");

        put_json(
            &app,
            "/daily-log",
            json!({"user_id": uid, "date": "2024-06-03", "clear_deficit_override": true}),
        )
        .await;
        let (_, body) = get_json(&app, &format!("/summary/daily/{uid}/2024-06-03")).await;
        assert_close(&body["deficit_kcal"], 380.0);
        assert_eq!(body["readiness_state"], "LOW");
    }

    #[tokio::test]
    async fn bad_inputs() {
        let (app, _) = test_app().await;
        let uid = create_user(&app, "Spy").await;

        let (status, _) = get_json(&app, &format!("/summary/daily/{uid}/June-1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_json(&app, "/summary/daily/999/2024-06-01").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = put_json(
            &app,
            "/daily-log",
            json!({"user_id": uid, "date": "2024-06-01", "readiness_state": "SUPERB"}),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = put_json(
            &app,
            "/daily-log",
            json!({"user_id": uid, "date": "2024-06-01", "calculated_deficit_kcal": 10.0, "clear_deficit_override": true}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn summary_counts_only_the_requested_user_and_day() {
        let (app, _) = test_app().await;
        let alice = create_user(&app, "Alice").await;
        let bob = create_user(&app, "Bob").await;
        let shake = create_food(&app, "Shake", 20.0, 5.0, 2.0, 200.0).await;

        let meals = [
            (alice, "2024-06-10", "Breakfast", 50.0),
            (alice, "2024-06-10", "Dinner", 50.0),
            (alice, "2024-06-11", "Lunch", 300.0),
            (bob, "2024-06-10", "Lunch", 400.0),
        ];
        for (uid, date, kind, qty) in meals {
            let (status, _) = post_json(
                &app,
                "/meals",
                json!({"user_id": uid, "date": date, "meal_type": kind,
                       "items": [{"food_id": shake, "quantity_g": qty}]}),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = get_json(&app, &format!("/summary/daily/{alice}/2024-06-10")).await;
        assert_eq!(status, StatusCode::OK);
        assert_close(&body["protein_g"], 20.0);
        assert_close(&body["carbs_g"], 5.0);
        assert_close(&body["fat_g"], 2.0);
        assert_close(&body["calories_in_kcal"], 200.0);

        let (_, body) = get_json(&app, &format!("/summary/daily/{alice}/2024-06-11")).await;
        assert_close(&body["protein_g"], 60.0);

        let (_, body) = get_json(&app, &format!("/summary/daily/{bob}/2024-06-10")).await;
        assert_close(&body["calories_in_kcal"], 800.0);
    }
}
