use serde::Deserialize;
use time::Date;

use super::repo_types::TargetsInput;
use crate::daily::ReadinessState;

/// Request body for `POST /daily-targets`; omitted fields are cleared.
#[derive(Debug, Deserialize)]
pub struct SetTargetsRequest {
    pub user_id: i64,
    pub date: Date,
    #[serde(default)]
    pub readiness_state: Option<ReadinessState>,
    #[serde(default)]
    pub target_protein_min_g: Option<f64>,
    #[serde(default)]
    pub target_protein_max_g: Option<f64>,
    #[serde(default)]
    pub target_carbs_g: Option<f64>,
    #[serde(default)]
    pub target_fat_g: Option<f64>,
    #[serde(default)]
    pub target_calories_kcal: Option<f64>,
    #[serde(default)]
    pub training_recommendation: Option<String>,
    #[serde(default)]
    pub recovery_recommendation: Option<String>,
}

impl From<SetTargetsRequest> for TargetsInput {
    fn from(r: SetTargetsRequest) -> Self {
        Self {
            user_id: r.user_id,
            date: r.date,
            readiness_state: r.readiness_state,
            target_protein_min_g: r.target_protein_min_g,
            target_protein_max_g: r.target_protein_max_g,
            target_carbs_g: r.target_carbs_g,
            target_fat_g: r.target_fat_g,
            target_calories_kcal: r.target_calories_kcal,
            training_recommendation: r.training_recommendation,
            recovery_recommendation: r.recovery_recommendation,
        }
    }
}
