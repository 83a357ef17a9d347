use serde::Deserialize;
use time::Date;

use super::repo_types::{NewIntake, NewSupplement, DEFAULT_DOSE};

#[derive(Debug, Deserialize)]
pub struct CreateSupplementRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub has_iron: bool,
    #[serde(default)]
    pub has_b12: bool,
    #[serde(default)]
    pub has_folate: bool,
}

impl From<CreateSupplementRequest> for NewSupplement {
    fn from(r: CreateSupplementRequest) -> Self {
        Self {
            name: r.name.trim().to_string(),
            description: r.description,
            has_iron: r.has_iron,
            has_b12: r.has_b12,
            has_folate: r.has_folate,
        }
    }
}

/// Request body for `POST /supplement-intake`; `dose` defaults to `"1"`.
#[derive(Debug, Deserialize)]
pub struct LogIntakeRequest {
    pub user_id: i64,
    pub supplement_id: i64,
    pub date: Date,
    #[serde(default)]
    pub dose: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<LogIntakeRequest> for NewIntake {
    fn from(r: LogIntakeRequest) -> Self {
        Self {
            user_id: r.user_id,
            supplement_id: r.supplement_id,
            date: r.date,
            dose: r.dose.unwrap_or_else(|| DEFAULT_DOSE.to_string()),
            time: r.time,
            notes: r.notes,
        }
    }
}
