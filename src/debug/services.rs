use serde::Serialize;
use sqlx::SqlitePool;
use time::Date;

use crate::{
    body_metrics::{BodyComposition, WeightLog},
    daily::DailyLog,
    foods::FoodItem,
    meals::{
        self,
        repo_types::{Meal, MealItem},
    },
    recovery::{AnsLog, DailyFeel, SleepLog},
    supplements::{Supplement, SupplementIntake},
    targets::DailyTargets,
    training::TrainingSession,
    users::{User, UserSettings},
};

/// Every table, keyed by its dump name.
#[derive(Debug, Serialize)]
pub struct AllData {
    pub users: Vec<User>,
    pub user_settings: Vec<UserSettings>,
    pub weight_log: Vec<WeightLog>,
    pub body_composition: Vec<BodyComposition>,
    pub food_items: Vec<FoodItem>,
    pub meals: Vec<Meal>,
    pub meal_items: Vec<MealItem>,
    pub training_sessions: Vec<TrainingSession>,
    pub sleep_logs: Vec<SleepLog>,
    pub ans_logs: Vec<AnsLog>,
    pub daily_feel: Vec<DailyFeel>,
    pub daily_targets: Vec<DailyTargets>,
    pub daily_log: Vec<DailyLog>,
    pub supplements: Vec<Supplement>,
    pub supplement_intake: Vec<SupplementIntake>,
}

pub async fn all_data(db: &SqlitePool) -> anyhow::Result<AllData> {
    Ok(AllData {
        users: User::list_all(db).await?,
        user_settings: UserSettings::list_all(db).await?,
        weight_log: WeightLog::list_all(db).await?,
        body_composition: BodyComposition::list_all(db).await?,
        food_items: FoodItem::list_all(db).await?,
        meals: meals::repo::list_all(db).await?,
        meal_items: meals::repo::list_all_items(db).await?,
        training_sessions: TrainingSession::list_all(db).await?,
        sleep_logs: SleepLog::list_all(db).await?,
        ans_logs: AnsLog::list_all(db).await?,
        daily_feel: DailyFeel::list_all(db).await?,
        daily_targets: DailyTargets::list_all(db).await?,
        daily_log: DailyLog::list_all(db).await?,
        supplements: Supplement::list_all(db).await?,
        supplement_intake: SupplementIntake::list_all(db).await?,
    })
}

/// Everything recorded for one user on one day.
#[derive(Debug)]
pub struct DayView {
    pub user_id: i64,
    pub date: Date,
    pub daily: Option<DailyLog>,
    pub weights: Vec<WeightLog>,
    pub meals: Vec<meals::dto::MealDetails>,
    pub training: Vec<TrainingSession>,
    pub sleep: Vec<SleepLog>,
    pub ans: Vec<AnsLog>,
    pub feel: Vec<DailyFeel>,
    pub targets: Option<DailyTargets>,
}

pub async fn day_view(db: &SqlitePool, user_id: i64, date: Date) -> anyhow::Result<DayView> {
    let mut meal_views = Vec::new();
    for meal in meals::repo::list_for_day(db, user_id, date).await? {
        if let Some(details) = meals::services::meal_details(db, meal.id).await? {
            meal_views.push(details);
        }
    }

    Ok(DayView {
        user_id,
        date,
        daily: DailyLog::find(db, user_id, date).await?,
        weights: WeightLog::list_for_day(db, user_id, date).await?,
        meals: meal_views,
        training: TrainingSession::list_for_day(db, user_id, date).await?,
        sleep: SleepLog::list_for_day(db, user_id, date).await?,
        ans: AnsLog::list_for_day(db, user_id, date).await?,
        feel: DailyFeel::list_for_day(db, user_id, date).await?,
        targets: DailyTargets::find(db, user_id, date).await?,
    })
}
