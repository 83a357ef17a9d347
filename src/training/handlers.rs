use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use crate::{
    error::{ApiResult, AppError},
    state::AppState,
    training::{
        dto::{LogTrainingRequest, LoggedSessionResponse},
        repo_types::NewTrainingSession,
        services::log_session,
    },
    validation::{check_clock_time, check_non_negative, check_not_blank},
};

pub fn training_routes() -> Router<AppState> {
    Router::new().route("/training", post(log_training))
}

#[instrument(skip(state, payload), fields(user_id = payload.user_id))]
pub async fn log_training(
    State(state): State<AppState>,
    Json(payload): Json<LogTrainingRequest>,
) -> ApiResult<Json<LoggedSessionResponse>> {
    check_not_blank("type", &payload.kind)?;
    check_clock_time("start_time", payload.start_time.as_deref())?;
    check_clock_time("end_time", payload.end_time.as_deref())?;
    for (field, value) in [
        ("duration_min", payload.duration_min),
        ("calories_kcal", payload.calories_kcal),
        ("avg_hr", payload.avg_hr),
        ("max_hr", payload.max_hr),
    ] {
        if let Some(v) = value {
            check_non_negative(field, v)?;
        }
    }
    if let Some(rpe) = payload.rpe {
        if !(0.0..=10.0).contains(&rpe) {
            return Err(AppError::BadRequest("rpe must be between 0 and 10".into()));
        }
    }

    let new = NewTrainingSession::from(payload);
    let session = log_session(&state.db, &new).await?;

    info!(session_id = session.id, date = %session.date, kcal = ?session.calories_kcal, "training logged");
    Ok(Json(LoggedSessionResponse {
        status: "ok",
        session_id: session.id,
    }))
}
