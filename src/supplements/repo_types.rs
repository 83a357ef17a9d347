use serde::Serialize;
use sqlx::FromRow;
use time::Date;

pub const DEFAULT_DOSE: &str = "1";

/// Catalogue entry; the flags mark micronutrients worth tracking.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Supplement {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub has_iron: bool,
    pub has_b12: bool,
    pub has_folate: bool,
}

#[derive(Debug, Clone)]
pub struct NewSupplement {
    pub name: String,
    pub description: Option<String>,
    pub has_iron: bool,
    pub has_b12: bool,
    pub has_folate: bool,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SupplementIntake {
    pub id: i64,
    pub user_id: i64,
    pub supplement_id: i64,
    pub date: Date,
    pub dose: String,
    pub time: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewIntake {
    pub user_id: i64,
    pub supplement_id: i64,
    pub date: Date,
    pub dose: String,
    pub time: Option<String>,
    pub notes: Option<String>,
}
