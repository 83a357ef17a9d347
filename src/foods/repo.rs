use anyhow::Context;
use sqlx::SqlitePool;

use super::repo_types::{FoodItem, NewFoodItem};

const COLUMNS: &str = "id, name, brand, per_unit, protein_g, carbs_g, fat_g, kcal, tags";

impl FoodItem {
    pub async fn create(db: &SqlitePool, new: &NewFoodItem) -> anyhow::Result<FoodItem> {
        let sql = format!(
            "INSERT INTO food_items (name, brand, per_unit, protein_g, carbs_g, fat_g, kcal, tags) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        );
        let food = sqlx::query_as::<_, FoodItem>(&sql)
            .bind(&new.name)
            .bind(&new.brand)
            .bind(&new.per_unit)
            .bind(new.protein_g)
            .bind(new.carbs_g)
            .bind(new.fat_g)
            .bind(new.kcal)
            .bind(&new.tags)
            .fetch_one(db)
            .await
            .context("insert food item")?;
        Ok(food)
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> anyhow::Result<Option<FoodItem>> {
        let sql = format!("SELECT {COLUMNS} FROM food_items WHERE id = ?");
        let food = sqlx::query_as::<_, FoodItem>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await
            .context("find food item")?;
        Ok(food)
    }

    /// Catalogue ordered by name, case-insensitively.
    pub async fn list(db: &SqlitePool) -> anyhow::Result<Vec<FoodItem>> {
        let sql = format!("SELECT {COLUMNS} FROM food_items ORDER BY name COLLATE NOCASE, id");
        let rows = sqlx::query_as::<_, FoodItem>(&sql)
            .fetch_all(db)
            .await
            .context("list food items")?;
        Ok(rows)
    }

    pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<FoodItem>> {
        let sql = format!("SELECT {COLUMNS} FROM food_items ORDER BY id");
        let rows = sqlx::query_as::<_, FoodItem>(&sql)
            .fetch_all(db)
            .await
            .context("dump food items")?;
        Ok(rows)
    }
}
