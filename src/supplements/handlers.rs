use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::{ApiResult, AppError},
    state::AppState,
    supplements::{
        dto::{CreateSupplementRequest, LogIntakeRequest},
        repo_types::{NewIntake, NewSupplement, Supplement, SupplementIntake},
    },
    users::User,
    validation::{check_clock_time, check_not_blank},
};

pub fn supplement_routes() -> Router<AppState> {
    Router::new()
        .route("/supplements", get(list_supplements).post(create_supplement))
        .route("/supplement-intake", post(log_intake))
}

#[instrument(skip(state, payload))]
pub async fn create_supplement(
    State(state): State<AppState>,
    Json(payload): Json<CreateSupplementRequest>,
) -> ApiResult<(StatusCode, Json<Supplement>)> {
    check_not_blank("name", &payload.name)?;
    let row = Supplement::create(&state.db, &NewSupplement::from(payload)).await?;
    info!(supplement_id = row.id, name = %row.name, "supplement created");
    Ok((StatusCode::CREATED, Json(row)))
}

#[instrument(skip(state))]
pub async fn list_supplements(State(state): State<AppState>) -> ApiResult<Json<Vec<Supplement>>> {
    Ok(Json(Supplement::list(&state.db).await?))
}

#[instrument(skip(state, payload), fields(user_id = payload.user_id))]
pub async fn log_intake(
    State(state): State<AppState>,
    Json(payload): Json<LogIntakeRequest>,
) -> ApiResult<Json<SupplementIntake>> {
    check_clock_time("time", payload.time.as_deref())?;
    if let Some(dose) = payload.dose.as_deref() {
        check_not_blank("dose", dose)?;
    }

    User::require(&state.db, payload.user_id).await?;
    if !Supplement::exists(&state.db, payload.supplement_id).await? {
        warn!(supplement_id = payload.supplement_id, "intake for unknown supplement");
        return Err(AppError::BadRequest(format!(
            "Supplement {} not found",
            payload.supplement_id
        )));
    }

    let row = SupplementIntake::insert(&state.db, &NewIntake::from(payload)).await?;
    info!(intake_id = row.id, supplement_id = row.supplement_id, date = %row.date, "supplement intake logged");
    Ok(Json(row))
}
