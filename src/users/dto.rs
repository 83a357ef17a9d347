use serde::Deserialize;
use time::Date;

use super::repo_types::{NewUser, SettingsPatch};

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<Date>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub height_cm: Option<f64>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            name: r.name.trim().to_string(),
            birth_date: r.birth_date,
            gender: r.gender,
            height_cm: r.height_cm,
        }
    }
}

/// Request body for `PUT /users/:id/settings`; omitted fields stay as they are.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsRequest {
    pub hrv_baseline: Option<f64>,
    pub weight_goal_kg: Option<f64>,
    pub protein_target_min_g: Option<f64>,
    pub protein_target_max_g: Option<f64>,
    pub default_maintenance_kcal: Option<f64>,
}

impl From<UpdateSettingsRequest> for SettingsPatch {
    fn from(r: UpdateSettingsRequest) -> Self {
        Self {
            hrv_baseline: r.hrv_baseline,
            weight_goal_kg: r.weight_goal_kg,
            protein_target_min_g: r.protein_target_min_g,
            protein_target_max_g: r.protein_target_max_g,
            default_maintenance_kcal: r.default_maintenance_kcal,
        }
    }
}
