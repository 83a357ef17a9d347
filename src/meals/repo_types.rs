use serde::Serialize;
use sqlx::FromRow;
use time::Date;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Meal {
    pub id: i64,
    pub user_id: i64,
    pub date: Date,
    pub meal_type: String,
    pub time: Option<String>,
    pub notes: Option<String>,
}

/// A meal line: only the food reference and the eaten quantity are stored.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MealItem {
    pub id: i64,
    pub meal_id: i64,
    pub food_id: i64,
    pub quantity_g: f64,
}

/// Eaten quantity joined with the food's per-100 g values.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ItemMacros {
    pub quantity_g: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub kcal: f64,
}

/// Meal line with the food's name and per-100 g values, used for meal views.
#[derive(Debug, Clone, FromRow)]
pub struct MealItemRow {
    pub id: i64,
    pub food_id: i64,
    pub food_name: String,
    pub quantity_g: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub kcal: f64,
}

impl MealItemRow {
    pub fn macros(&self) -> ItemMacros {
        ItemMacros {
            quantity_g: self.quantity_g,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
            kcal: self.kcal,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewMeal {
    pub user_id: i64,
    pub date: Date,
    pub meal_type: String,
    pub time: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<NewMealItem>,
}

#[derive(Debug, Clone, Copy)]
pub struct NewMealItem {
    pub food_id: i64,
    pub quantity_g: f64,
}
