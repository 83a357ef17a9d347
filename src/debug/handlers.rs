use anyhow::Context;
use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};

use crate::{
    debug::{
        render,
        services::{all_data, day_view, AllData},
    },
    error::ApiResult,
    state::AppState,
    validation::parse_date,
};

pub fn debug_routes() -> Router<AppState> {
    Router::new()
        .route("/debug/all-data", get(get_all_data))
        .route("/debug/daily/:user_id/:date", get(get_daily_page))
}

#[instrument(skip(state))]
pub async fn get_all_data(State(state): State<AppState>) -> ApiResult<Json<AllData>> {
    let data = all_data(&state.db).await?;
    debug!(users = data.users.len(), meals = data.meals.len(), "dumped all data");
    Ok(Json(data))
}

#[instrument(skip(state))]
pub async fn get_daily_page(
    State(state): State<AppState>,
    Path((user_id, raw_date)): Path<(i64, String)>,
) -> ApiResult<Html<String>> {
    let date = parse_date(&raw_date)?;
    let day = day_view(&state.db, user_id, date).await?;
    let page = render::day_page(&day).context("render daily debug page")?;
    Ok(Html(page))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_support::{create_food, create_user, get_json, get_text, post_json, test_app};

    #[tokio::test]
    async fn all_data_lists_every_table() {
        let (app, _) = test_app().await;
        let uid = create_user(&app, "Spy").await;
        let oats = create_food(&app, "Oats", 13.0, 60.0, 7.0, 380.0).await;
        post_json(
            &app,
            "/meals",
            json!({"user_id": uid, "date": "2024-03-01", "meal_type": "Breakfast",
                   "items": [{"food_id": oats, "quantity_g": 80.0}]}),
        )
        .await;

        let (status, body) = get_json(&app, "/debug/all-data").await;
        assert_eq!(status, StatusCode::OK);
        for key in [
            "users",
            "user_settings",
            "weight_log",
            "body_composition",
            "food_items",
            "meals",
            "meal_items",
            "training_sessions",
            "sleep_logs",
            "ans_logs",
            "daily_feel",
            "daily_targets",
            "daily_log",
            "supplements",
            "supplement_intake",
        ] {
            assert!(body[key].is_array(), "missing {key}");
        }
        assert_eq!(body["users"].as_array().unwrap().len(), 1);
        assert_eq!(body["user_settings"].as_array().unwrap().len(), 1);
        assert_eq!(body["meal_items"][0]["quantity_g"], 80.0);
        assert_eq!(body["daily_log"][0]["calories_in_kcal"], 304.0);
    }

    #[tokio::test]
    async fn daily_page_renders_and_escapes() {
        let (app, _) = test_app().await;
        let uid = create_user(&app, "Spy").await;
        let food = create_food(&app, "<script>alert(1)</script>", 31.0, 0.0, 3.6, 165.0).await;
        post_json(
            &app,
            "/meals",
            json!({"user_id": uid, "date": "2024-03-01", "meal_type": "Dinner", "time": "19:30",
                   "items": [{"food_id": food, "quantity_g": 200.0}]}),
        )
        .await;

        let (status, html) = get_text(&app, &format!("/debug/daily/{uid}/2024-03-01")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Spy Daily Debug: User"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<td>62.0</td>"));
        assert!(html.contains("<td>330</td>"));
        assert!(html.contains("No weight entries."));
        assert!(html.contains("No training sessions."));
        assert!(html.contains("No daily_targets."));
    }

    #[tokio::test]
    async fn empty_day_and_bad_date() {
        let (app, _) = test_app().await;
        let (status, html) = get_text(&app, "/debug/daily/1/2024-03-01").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("No daily_log row."));
        assert!(html.contains("No meals."));

        let (status, _) = get_text(&app, "/debug/daily/1/yesterday").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
