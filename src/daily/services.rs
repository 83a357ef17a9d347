use serde::Serialize;
use sqlx::SqlitePool;
use time::Date;

use super::repo_types::{DailyLog, ReadinessState};
use crate::meals::{repo::items_for_day, services::MacroTotals};

/// Derived view of one user's day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: Date,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub calories_in_kcal: f64,
    pub training_calories_kcal: f64,
    pub deficit_kcal: f64,
    pub readiness_state: Option<ReadinessState>,
}

/// Combine the day's intake totals with its header row.
///
/// Training expenditure comes from the header counter (0 without a row). A
/// stored `calculated_deficit_kcal` overrides `kcal_in - kcal_out`.
pub fn summarize(date: Date, intake: &MacroTotals, header: Option<&DailyLog>) -> DailySummary {
    let kcal_out = header
        .and_then(|d| d.calories_out_training_kcal)
        .unwrap_or(0.0);
    let deficit = header
        .and_then(|d| d.calculated_deficit_kcal)
        .unwrap_or(intake.kcal - kcal_out);

    DailySummary {
        date,
        protein_g: intake.protein_g,
        carbs_g: intake.carbs_g,
        fat_g: intake.fat_g,
        calories_in_kcal: intake.kcal,
        training_calories_kcal: kcal_out,
        deficit_kcal: deficit,
        readiness_state: header.and_then(|d| d.readiness_state),
    }
}

pub async fn daily_summary(db: &SqlitePool, user_id: i64, date: Date) -> anyhow::Result<DailySummary> {
    let items = items_for_day(db, user_id, date).await?;
    let intake = MacroTotals::from_items(&items);
    let header = DailyLog::find(db, user_id, date).await?;
    Ok(summarize(date, &intake, header.as_ref()))
}
