use anyhow::Context;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::warn;

use super::{
    dto::{MealDetails, MealItemView},
    repo,
    repo_types::{ItemMacros, NewMeal},
};
use crate::{daily::DailyLog, error::AppError, users::User};

/// Amount contributed by `quantity_g` of a food listing `per_100g`.
pub fn scaled(per_100g: f64, quantity_g: f64) -> f64 {
    per_100g * quantity_g / 100.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroTotals {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub kcal: f64,
}

impl MacroTotals {
    pub fn add_item(&mut self, item: &ItemMacros) {
        let m = item.scaled();
        self.protein_g += m.protein_g;
        self.carbs_g += m.carbs_g;
        self.fat_g += m.fat_g;
        self.kcal += m.kcal;
    }

    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a ItemMacros>) -> Self {
        let mut totals = Self::default();
        for item in items {
            totals.add_item(item);
        }
        totals
    }
}

impl ItemMacros {
    pub fn scaled(&self) -> MacroTotals {
        MacroTotals {
            protein_g: scaled(self.protein_g, self.quantity_g),
            carbs_g: scaled(self.carbs_g, self.quantity_g),
            fat_g: scaled(self.fat_g, self.quantity_g),
            kcal: scaled(self.kcal, self.quantity_g),
        }
    }
}

/// Insert a meal with its items and credit its calories to the day's header.
///
/// Runs in one transaction: an unknown user or food leaves no rows behind.
pub async fn create_meal(db: &SqlitePool, meal: &NewMeal) -> Result<(i64, MacroTotals), AppError> {
    let mut tx = db.begin().await.context("begin tx")?;

    if !User::exists(&mut *tx, meal.user_id).await? {
        warn!(user_id = meal.user_id, "meal for unknown user");
        return Err(AppError::user_not_found());
    }

    let meal_id = repo::insert_meal_tx(&mut tx, meal).await?;

    let mut totals = MacroTotals::default();
    for item in &meal.items {
        let Some((protein_g, carbs_g, fat_g, kcal)) = repo::food_macros_tx(&mut tx, item.food_id).await? else {
            warn!(food_id = item.food_id, "meal references unknown food");
            return Err(AppError::BadRequest(format!("Food item {} not found", item.food_id)));
        };
        repo::insert_item_tx(&mut tx, meal_id, item.food_id, item.quantity_g).await?;
        totals.add_item(&ItemMacros {
            quantity_g: item.quantity_g,
            protein_g,
            carbs_g,
            fat_g,
            kcal,
        });
    }

    DailyLog::add_calories_in(&mut *tx, meal.user_id, meal.date, totals.kcal).await?;

    tx.commit().await.context("commit tx")?;
    Ok((meal_id, totals))
}

pub async fn meal_details(db: &SqlitePool, meal_id: i64) -> anyhow::Result<Option<MealDetails>> {
    let Some(meal) = repo::find_by_id(db, meal_id).await? else {
        return Ok(None);
    };
    let rows = repo::items_with_food(db, meal_id).await?;

    let mut totals = MacroTotals::default();
    let items: Vec<MealItemView> = rows
        .iter()
        .map(|row| {
            let macros = row.macros();
            totals.add_item(&macros);
            MealItemView {
                id: row.id,
                food_id: row.food_id,
                food_name: row.food_name.clone(),
                quantity_g: row.quantity_g,
                macros: macros.scaled(),
            }
        })
        .collect();

    Ok(Some(MealDetails {
        id: meal.id,
        user_id: meal.user_id,
        date: meal.date,
        meal_type: meal.meal_type,
        time: meal.time,
        notes: meal.notes,
        items,
        totals,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(q: f64, p: f64, c: f64, f: f64, k: f64) -> ItemMacros {
        ItemMacros {
            quantity_g: q,
            protein_g: p,
            carbs_g: c,
            fat_g: f,
            kcal: k,
        }
    }

    #[test]
    fn scaling_is_per_100g() {
        assert_eq!(scaled(31.0, 100.0), 31.0);
        assert_eq!(scaled(31.0, 200.0), 62.0);
        assert_eq!(scaled(10.0, 50.0), 5.0);
        assert_eq!(scaled(10.0, 0.0), 0.0);
    }

    #[test]
    fn totals_sum_scaled_items() {
        let items = vec![item(200.0, 31.0, 0.0, 3.6, 165.0), item(150.0, 2.7, 28.0, 0.3, 130.0)];
        let t = MacroTotals::from_items(&items);
        assert!((t.protein_g - 66.05).abs() < 1e-9);
        assert!((t.carbs_g - 42.0).abs() < 1e-9);
        assert!((t.fat_g - 7.65).abs() < 1e-9);
        assert!((t.kcal - 525.0).abs() < 1e-9);
    }

    #[test]
    fn empty_totals_are_zero() {
        let t = MacroTotals::from_items(&Vec::<ItemMacros>::new());
        assert_eq!(t, MacroTotals::default());
    }
}
