use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::{ApiResult, AppError},
    state::AppState,
    targets::{
        dto::SetTargetsRequest,
        repo_types::{DailyTargets, TargetsInput},
    },
    users::User,
    validation::{check_non_negative, parse_date},
};

pub fn target_routes() -> Router<AppState> {
    Router::new()
        .route("/daily-targets", post(set_daily_targets))
        .route("/daily-targets/:user_id/:date", get(get_daily_targets))
}

#[instrument(skip(state, payload), fields(user_id = payload.user_id))]
pub async fn set_daily_targets(
    State(state): State<AppState>,
    Json(payload): Json<SetTargetsRequest>,
) -> ApiResult<Json<DailyTargets>> {
    if let (Some(min), Some(max)) = (payload.target_protein_min_g, payload.target_protein_max_g) {
        if min > max {
            return Err(AppError::BadRequest(
                "target_protein_min_g must not exceed target_protein_max_g".into(),
            ));
        }
    }
    for (field, value) in [
        ("target_protein_min_g", payload.target_protein_min_g),
        ("target_protein_max_g", payload.target_protein_max_g),
        ("target_carbs_g", payload.target_carbs_g),
        ("target_fat_g", payload.target_fat_g),
        ("target_calories_kcal", payload.target_calories_kcal),
    ] {
        if let Some(v) = value {
            check_non_negative(field, v)?;
        }
    }

    User::require(&state.db, payload.user_id).await?;
    let row = DailyTargets::upsert(&state.db, &TargetsInput::from(payload)).await?;

    info!(targets_id = row.id, date = %row.date, "daily targets saved");
    Ok(Json(row))
}

#[instrument(skip(state))]
pub async fn get_daily_targets(
    State(state): State<AppState>,
    Path((user_id, raw_date)): Path<(i64, String)>,
) -> ApiResult<Json<DailyTargets>> {
    let date = parse_date(&raw_date)?;
    match DailyTargets::find(&state.db, user_id, date).await? {
        Some(row) => Ok(Json(row)),
        None => {
            warn!(user_id, %date, "daily targets not found");
            Err(AppError::NotFound("Daily targets not found".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_support::{create_user, get_json, post_json, test_app};

    #[tokio::test]
    async fn set_then_replace_targets() {
        let (app, _) = test_app().await;
        let uid = create_user(&app, "Spy").await;

        let (status, body) = post_json(
            &app,
            "/daily-targets",
            json!({"user_id": uid, "date": "2024-08-20", "readiness_state": "HIGH",
                   "target_protein_min_g": 170.0, "target_protein_max_g": 200.0,
                   "target_calories_kcal": 2800.0, "training_recommendation": "Tempo run"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["readiness_state"], "HIGH");

        let (status, _) = post_json(
            &app,
            "/daily-targets",
            json!({"user_id": uid, "date": "2024-08-20", "readiness_state": "RECOVERY",
                   "recovery_recommendation": "Walk"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get_json(&app, &format!("/daily-targets/{uid}/2024-08-20")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["readiness_state"], "RECOVERY");
        assert_eq!(body["recovery_recommendation"], "Walk");
        assert!(body["training_recommendation"].is_null());
        assert!(body["target_calories_kcal"].is_null());
    }

    #[tokio::test]
    async fn missing_and_invalid() {
        let (app, _) = test_app().await;
        let uid = create_user(&app, "Spy").await;

        let (status, _) = get_json(&app, &format!("/daily-targets/{uid}/2024-08-21")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = get_json(&app, &format!("/daily-targets/{uid}/21-08-2024")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_json(
            &app,
            "/daily-targets",
            json!({"user_id": uid, "date": "2024-08-20", "target_protein_min_g": 210.0, "target_protein_max_g": 180.0}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_json(
            &app,
            "/daily-targets",
            json!({"user_id": uid, "date": "2024-08-20", "readiness_state": "GREAT"}),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
