use serde::Deserialize;

use super::repo_types::{NewFoodItem, DEFAULT_PER_UNIT};

/// Request body for `POST /foods`; macros are per 100 g and default to 0.
#[derive(Debug, Deserialize)]
pub struct CreateFoodRequest {
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub per_unit: Option<String>,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub fat_g: f64,
    #[serde(default)]
    pub kcal: f64,
    #[serde(default)]
    pub tags: Option<String>,
}

impl From<CreateFoodRequest> for NewFoodItem {
    fn from(r: CreateFoodRequest) -> Self {
        Self {
            name: r.name.trim().to_string(),
            brand: r.brand,
            per_unit: r.per_unit.unwrap_or_else(|| DEFAULT_PER_UNIT.to_string()),
            protein_g: r.protein_g,
            carbs_g: r.carbs_g,
            fat_g: r.fat_g,
            kcal: r.kcal,
            tags: r.tags,
        }
    }
}
