use serde::Serialize;
use sqlx::FromRow;

pub const DEFAULT_PER_UNIT: &str = "100g";

/// Food catalogue entry; macros are per 100 g.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    pub brand: Option<String>,
    pub per_unit: String,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub kcal: f64,
    pub tags: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewFoodItem {
    pub name: String,
    pub brand: Option<String>,
    pub per_unit: String,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub kcal: f64,
    pub tags: Option<String>,
}
