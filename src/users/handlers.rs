use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::{ApiResult, AppError},
    state::AppState,
    users::{
        dto::{CreateUserRequest, UpdateSettingsRequest},
        repo_types::{NewUser, SettingsPatch, User, UserSettings},
    },
    validation::{check_not_blank, check_positive},
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", get(get_user))
        .route("/users/:id/settings", get(get_settings).put(update_settings))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, [(HeaderName, String); 1], Json<User>)> {
    check_not_blank("name", &payload.name)?;
    if let Some(h) = payload.height_cm {
        check_positive("height_cm", h)?;
    }

    let new_user = NewUser::from(payload);
    let user = User::create_with_settings(&state.db, &new_user).await?;

    info!(user_id = user.id, "user created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/{}", user.id))],
        Json(user),
    ))
}

#[instrument(skip(state))]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<User>> {
    match User::find_by_id(&state.db, id).await? {
        Some(user) => Ok(Json(user)),
        None => {
            warn!(user_id = id, "user not found");
            Err(AppError::user_not_found())
        }
    }
}

#[instrument(skip(state))]
pub async fn get_settings(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserSettings>> {
    UserSettings::find_by_user(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Settings not found".into()))
}

#[instrument(skip(state, payload))]
pub async fn update_settings(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> ApiResult<Json<UserSettings>> {
    let stored = UserSettings::find_by_user(&state.db, id)
        .await?
        .ok_or_else(AppError::user_not_found)?;
    let min = payload.protein_target_min_g.or(stored.protein_target_min_g);
    let max = payload.protein_target_max_g.or(stored.protein_target_max_g);
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(AppError::BadRequest(
                "protein_target_min_g must not exceed protein_target_max_g".into(),
            ));
        }
    }

    let patch = SettingsPatch::from(payload);
    let settings = UserSettings::update(&state.db, id, &patch)
        .await?
        .ok_or_else(AppError::user_not_found)?;

    info!(user_id = id, "settings updated");
    Ok(Json(settings))
}
