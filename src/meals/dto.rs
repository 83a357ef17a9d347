use serde::{Deserialize, Serialize};
use time::Date;

use super::{
    repo_types::{NewMeal, NewMealItem},
    services::MacroTotals,
};

#[derive(Debug, Deserialize)]
pub struct MealItemRequest {
    pub food_id: i64,
    pub quantity_g: f64,
}

/// Request body for `POST /meals`.
#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub user_id: i64,
    pub date: Date,
    pub meal_type: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub items: Vec<MealItemRequest>,
}

impl From<CreateMealRequest> for NewMeal {
    fn from(r: CreateMealRequest) -> Self {
        Self {
            user_id: r.user_id,
            date: r.date,
            meal_type: r.meal_type.trim().to_string(),
            time: r.time,
            notes: r.notes,
            items: r
                .items
                .into_iter()
                .map(|i| NewMealItem {
                    food_id: i.food_id,
                    quantity_g: i.quantity_g,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedMealResponse {
    pub status: &'static str,
    pub meal_id: i64,
    pub totals: MacroTotals,
}

#[derive(Debug, Serialize)]
pub struct MealItemView {
    pub id: i64,
    pub food_id: i64,
    pub food_name: String,
    pub quantity_g: f64,
    #[serde(flatten)]
    pub macros: MacroTotals,
}

#[derive(Debug, Serialize)]
pub struct MealDetails {
    pub id: i64,
    pub user_id: i64,
    pub date: Date,
    pub meal_type: String,
    pub time: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<MealItemView>,
    pub totals: MacroTotals,
}

#[derive(Debug, Deserialize)]
pub struct MealListQuery {
    pub user_id: i64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}
fn default_limit() -> i64 { 20 }
