use anyhow::Context;
use sqlx::{SqliteConnection, SqlitePool};
use time::Date;

use super::repo_types::{ItemMacros, Meal, MealItem, MealItemRow, NewMeal};

pub async fn list_by_user(
    db: &SqlitePool,
    user_id: i64,
    date: Option<Date>,
    limit: i64,
    offset: i64,
) -> anyhow::Result<Vec<Meal>> {
    let rows = sqlx::query_as::<_, Meal>(
        r#"
        SELECT id, user_id, date, meal_type, time, notes
        FROM meals
        WHERE user_id = ? AND (? IS NULL OR date = ?)
        ORDER BY date DESC, time ASC, id ASC
        LIMIT ? OFFSET ?
    "#,
    )
    .bind(user_id)
    .bind(date)
    .bind(date)
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await
    .context("list meals by user")?;
    Ok(rows)
}

/// Meals of one day in display order.
pub async fn list_for_day(db: &SqlitePool, user_id: i64, date: Date) -> anyhow::Result<Vec<Meal>> {
    let rows = sqlx::query_as::<_, Meal>(
        r#"
        SELECT id, user_id, date, meal_type, time, notes
        FROM meals
        WHERE user_id = ? AND date = ?
        ORDER BY meal_type, id
        "#,
    )
    .bind(user_id)
    .bind(date)
    .fetch_all(db)
    .await
    .context("list meals for day")?;
    Ok(rows)
}

pub async fn find_by_id(db: &SqlitePool, meal_id: i64) -> anyhow::Result<Option<Meal>> {
    let meal = sqlx::query_as::<_, Meal>(
        r#"
            SELECT id, user_id, date, meal_type, time, notes
            FROM meals
            WHERE id = ?
            "#,
    )
    .bind(meal_id)
    .fetch_optional(db)
    .await
    .context("find meal")?;
    Ok(meal)
}

pub async fn items_with_food(db: &SqlitePool, meal_id: i64) -> anyhow::Result<Vec<MealItemRow>> {
    let rows = sqlx::query_as::<_, MealItemRow>(
        r#"
        SELECT mi.id, mi.food_id, f.name AS food_name, mi.quantity_g,
               f.protein_g, f.carbs_g, f.fat_g, f.kcal
          FROM meal_items mi
          JOIN food_items f ON f.id = mi.food_id
         WHERE mi.meal_id = ?
         ORDER BY mi.id
        "#,
    )
    .bind(meal_id)
    .fetch_all(db)
    .await
    .context("list meal items")?;
    Ok(rows)
}

/// Every meal item a user logged on `date`, joined with its food.
pub async fn items_for_day(db: &SqlitePool, user_id: i64, date: Date) -> anyhow::Result<Vec<ItemMacros>> {
    let rows = sqlx::query_as::<_, ItemMacros>(
        r#"
        SELECT mi.quantity_g, f.protein_g, f.carbs_g, f.fat_g, f.kcal
          FROM meals m
          JOIN meal_items mi ON mi.meal_id = m.id
          JOIN food_items f ON f.id = mi.food_id
         WHERE m.user_id = ? AND m.date = ?
        "#,
    )
    .bind(user_id)
    .bind(date)
    .fetch_all(db)
    .await
    .context("load meal items for day")?;
    Ok(rows)
}

/// Per-100 g values of `food_id`, or `None` when the food does not exist.
pub async fn food_macros_tx(
    conn: &mut SqliteConnection,
    food_id: i64,
) -> anyhow::Result<Option<(f64, f64, f64, f64)>> {
    let row = sqlx::query_as::<_, (f64, f64, f64, f64)>(
        "SELECT protein_g, carbs_g, fat_g, kcal FROM food_items WHERE id = ?",
    )
    .bind(food_id)
    .fetch_optional(conn)
    .await
    .context("load food macros")?;
    Ok(row)
}

pub async fn insert_meal_tx(conn: &mut SqliteConnection, meal: &NewMeal) -> anyhow::Result<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO meals (user_id, date, meal_type, time, notes)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(meal.user_id)
    .bind(meal.date)
    .bind(&meal.meal_type)
    .bind(&meal.time)
    .bind(&meal.notes)
    .fetch_one(conn)
    .await
    .context("insert meal")?;
    Ok(id)
}

pub async fn insert_item_tx(
    conn: &mut SqliteConnection,
    meal_id: i64,
    food_id: i64,
    quantity_g: f64,
) -> anyhow::Result<()> {
    sqlx::query("INSERT INTO meal_items (meal_id, food_id, quantity_g) VALUES (?, ?, ?)")
        .bind(meal_id)
        .bind(food_id)
        .bind(quantity_g)
        .execute(conn)
        .await
        .context("insert meal item")?;
    Ok(())
}

pub async fn list_all(db: &SqlitePool) -> anyhow::Result<Vec<Meal>> {
    let rows = sqlx::query_as::<_, Meal>(
        "SELECT id, user_id, date, meal_type, time, notes FROM meals ORDER BY id",
    )
    .fetch_all(db)
    .await
    .context("list meals")?;
    Ok(rows)
}

pub async fn list_all_items(db: &SqlitePool) -> anyhow::Result<Vec<MealItem>> {
    let rows = sqlx::query_as::<_, MealItem>(
        "SELECT id, meal_id, food_id, quantity_g FROM meal_items ORDER BY id",
    )
    .fetch_all(db)
    .await
    .context("list meal items")?;
    Ok(rows)
}
