use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::{ApiResult, AppError},
    foods::{
        dto::CreateFoodRequest,
        repo_types::{FoodItem, NewFoodItem},
    },
    state::AppState,
    validation::{check_non_negative, check_not_blank},
};

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", get(list_foods).post(create_food))
        .route("/foods/:id", get(get_food))
}

#[instrument(skip(state, payload))]
pub async fn create_food(
    State(state): State<AppState>,
    Json(payload): Json<CreateFoodRequest>,
) -> ApiResult<(StatusCode, [(HeaderName, String); 1], Json<FoodItem>)> {
    check_not_blank("name", &payload.name)?;
    for (field, value) in [
        ("protein_g", payload.protein_g),
        ("carbs_g", payload.carbs_g),
        ("fat_g", payload.fat_g),
        ("kcal", payload.kcal),
    ] {
        check_non_negative(field, value)?;
    }

    let food = FoodItem::create(&state.db, &NewFoodItem::from(payload)).await?;

    info!(food_id = food.id, name = %food.name, "food item created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/foods/{}", food.id))],
        Json(food),
    ))
}

#[instrument(skip(state))]
pub async fn list_foods(State(state): State<AppState>) -> ApiResult<Json<Vec<FoodItem>>> {
    Ok(Json(FoodItem::list(&state.db).await?))
}

#[instrument(skip(state))]
pub async fn get_food(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<FoodItem>> {
    match FoodItem::find_by_id(&state.db, id).await? {
        Some(food) => Ok(Json(food)),
        None => {
            warn!(food_id = id, "food item not found");
            Err(AppError::NotFound("Food item not found".into()))
        }
    }
}
