use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::{ApiResult, AppError},
    meals::{
        dto::{CreateMealRequest, CreatedMealResponse, MealDetails, MealListQuery},
        repo,
        repo_types::{Meal, NewMeal},
        services::{create_meal, meal_details},
    },
    state::AppState,
    validation::{check_clock_time, check_not_blank, check_positive, parse_date},
};

// --- public routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals))
        .route("/meals/:id", get(get_meal))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/meals", post(log_meal))
}

// --- handlers ---

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    Query(q): Query<MealListQuery>,
) -> ApiResult<Json<Vec<Meal>>> {
    let date = q.date.as_deref().map(parse_date).transpose()?;
    let limit = q.limit.clamp(1, 200);
    let offset = q.offset.max(0);
    let meals = repo::list_by_user(&state.db, q.user_id, date, limit, offset).await?;
    Ok(Json(meals))
}

#[instrument(skip(state))]
pub async fn get_meal(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<MealDetails>> {
    match meal_details(&state.db, id).await? {
        Some(details) => Ok(Json(details)),
        None => {
            warn!(meal_id = id, "meal not found");
            Err(AppError::NotFound("Meal not found".into()))
        }
    }
}

/// Items carry only `food_id` and `quantity_g`; macros come from the food table.
#[instrument(skip(state, payload), fields(user_id = payload.user_id))]
pub async fn log_meal(
    State(state): State<AppState>,
    Json(payload): Json<CreateMealRequest>,
) -> ApiResult<Json<CreatedMealResponse>> {
    check_not_blank("meal_type", &payload.meal_type)?;
    check_clock_time("time", payload.time.as_deref())?;
    for item in &payload.items {
        check_positive("quantity_g", item.quantity_g)?;
    }

    let meal = NewMeal::from(payload);
    let (meal_id, totals) = create_meal(&state.db, &meal).await?;

    info!(meal_id, user_id = meal.user_id, date = %meal.date, items = meal.items.len(), kcal = totals.kcal, "meal logged");
    Ok(Json(CreatedMealResponse {
        status: "ok",
        meal_id,
        totals,
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use sqlx::SqlitePool;

    use crate::test_support::{assert_close, create_food, create_user, get_json, post_json, test_app};

    async fn count(db: &SqlitePool, table: &str) -> i64 {
        let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(db)
            .await
            .unwrap();
        n
    }

    #[tokio::test]
    async fn logs_meal_and_credits_daily_intake() {
        let (app, state) = test_app().await;
        let uid = create_user(&app, "Spy").await;
        let egg = create_food(&app, "Egg", 13.0, 1.1, 11.0, 155.0).await;

        let (status, body) = post_json(
            &app,
            "/meals",
            json!({"user_id": uid, "date": "2024-07-01", "meal_type": "Breakfast", "time": "08:15",
                   "items": [{"food_id": egg, "quantity_g": 120.0}]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_close(&body["totals"]["kcal"], 186.0);
        let meal_id = body["meal_id"].as_i64().unwrap();

        let (status, meal) = get_json(&app, &format!("/meals/{meal_id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(meal["items"][0]["food_name"], "Egg");
        assert_close(&meal["items"][0]["protein_g"], 15.6);
        assert_close(&meal["totals"]["protein_g"], 15.6);

        let (calories_in,): (Option<f64>,) =
            sqlx::query_as("SELECT calories_in_kcal FROM daily_log WHERE user_id = ? AND date = '2024-07-01'")
                .bind(uid)
                .fetch_one(&state.db)
                .await
                .unwrap();
        assert_close(&json!(calories_in.unwrap()), 186.0);
    }

    #[tokio::test]
    async fn unknown_food_leaves_no_rows() {
        let (app, state) = test_app().await;
        let uid = create_user(&app, "Spy").await;
        let egg = create_food(&app, "Egg", 13.0, 1.1, 11.0, 155.0).await;

        let (status, body) = post_json(
            &app,
            "/meals",
            json!({"user_id": uid, "date": "2024-07-01", "meal_type": "Lunch",
                   "items": [{"food_id": egg, "quantity_g": 50.0}, {"food_id": 9999, "quantity_g": 80.0}]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Food item 9999 not found");

        assert_eq!(count(&state.db, "meals").await, 0);
        assert_eq!(count(&state.db, "meal_items").await, 0);
        assert_eq!(count(&state.db, "daily_log").await, 0);
    }

    #[tokio::test]
    async fn unknown_user_is_404() {
        let (app, _) = test_app().await;
        let (status, _) = post_json(
            &app,
            "/meals",
            json!({"user_id": 77, "date": "2024-07-01", "meal_type": "Lunch", "items": []}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn validates_payload() {
        let (app, _) = test_app().await;
        let uid = create_user(&app, "Spy").await;
        let egg = create_food(&app, "Egg", 13.0, 1.1, 11.0, 155.0).await;

        let (status, _) = post_json(
            &app,
            "/meals",
            json!({"user_id": uid, "date": "2024-07-01", "meal_type": "Lunch", "time": "noon",
                   "items": [{"food_id": egg, "quantity_g": 50.0}]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_json(
            &app,
            "/meals",
            json!({"user_id": uid, "date": "2024-07-01", "meal_type": "Lunch",
                   "items": [{"food_id": egg, "quantity_g": -5.0}]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_json(
            &app,
            "/meals",
            json!({"user_id": uid, "date": "not-a-date", "meal_type": "Lunch", "items": []}),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn lists_meals_by_day() {
        let (app, _) = test_app().await;
        let uid = create_user(&app, "Spy").await;
        for (date, kind) in [("2024-07-01", "Breakfast"), ("2024-07-01", "Dinner"), ("2024-07-02", "Lunch")] {
            let (status, _) = post_json(
                &app,
                "/meals",
                json!({"user_id": uid, "date": date, "meal_type": kind, "items": []}),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = get_json(&app, &format!("/meals?user_id={uid}&date=2024-07-01")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);

        let (_, body) = get_json(&app, &format!("/meals?user_id={uid}&limit=1")).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["date"], "2024-07-02");

        let (status, _) = get_json(&app, "/meals/12345").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
