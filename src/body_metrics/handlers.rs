use axum::{extract::State, routing::post, Json, Router};
use time::OffsetDateTime;
use tracing::{info, instrument};

use crate::{
    body_metrics::{
        dto::{LogBodyCompositionRequest, LogWeightRequest},
        repo_types::{BodyComposition, NewBodyComposition},
        services::log_weight,
    },
    error::{ApiResult, AppError},
    response::Ack,
    state::AppState,
    users::User,
    validation::check_positive,
};

pub fn body_routes() -> Router<AppState> {
    Router::new()
        .route("/weight", post(record_weight))
        .route("/body-composition", post(record_body_composition))
}

#[instrument(skip(state, payload), fields(user_id = payload.user_id))]
pub async fn record_weight(
    State(state): State<AppState>,
    Json(payload): Json<LogWeightRequest>,
) -> ApiResult<Json<Ack>> {
    check_positive("weight_kg", payload.weight_kg)?;

    let new = payload.into_new(OffsetDateTime::now_utc());
    let row = log_weight(&state.db, &new).await?;

    info!(weight_id = row.id, date = %row.log_date, weight_kg = row.weight_kg, "weight logged");
    Ok(Json(Ack::ok(row.id)))
}

#[instrument(skip(state, payload), fields(user_id = payload.user_id))]
pub async fn record_body_composition(
    State(state): State<AppState>,
    Json(payload): Json<LogBodyCompositionRequest>,
) -> ApiResult<Json<Ack>> {
    if let Some(pct) = payload.body_fat_percent {
        if !(0.0..=100.0).contains(&pct) {
            return Err(AppError::BadRequest("body_fat_percent must be between 0 and 100".into()));
        }
    }
    for (field, value) in [
        ("muscle_mass_kg", payload.muscle_mass_kg),
        ("waist_cm", payload.waist_cm),
        ("hip_cm", payload.hip_cm),
    ] {
        if let Some(v) = value {
            check_positive(field, v)?;
        }
    }

    User::require(&state.db, payload.user_id).await?;
    let row = BodyComposition::insert(&state.db, &NewBodyComposition::from(payload)).await?;

    info!(composition_id = row.id, date = %row.date, "body composition logged");
    Ok(Json(Ack::ok(row.id)))
}
