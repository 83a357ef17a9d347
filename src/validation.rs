use lazy_static::lazy_static;
use regex::Regex;
use time::{macros::format_description, Date};

use crate::error::AppError;

/// Parse an ISO `YYYY-MM-DD` path segment.
pub fn parse_date(raw: &str) -> Result<Date, AppError> {
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{raw}', expected YYYY-MM-DD")))
}

/// Wall-clock time as used for meals and sessions, e.g. `09:30`.
pub fn is_valid_clock_time(s: &str) -> bool {
    lazy_static! {
        static ref CLOCK_RE: Regex = Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap();
    }
    CLOCK_RE.is_match(s)
}

pub fn check_clock_time(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(v) if !is_valid_clock_time(v) => Err(AppError::BadRequest(format!(
            "{field} must be HH:MM, got '{v}'"
        ))),
        _ => Ok(()),
    }
}

pub fn check_rating(field: &str, value: Option<i64>) -> Result<(), AppError> {
    match value {
        Some(v) if !(1..=10).contains(&v) => Err(AppError::BadRequest(format!(
            "{field} must be between 1 and 10"
        ))),
        _ => Ok(()),
    }
}

pub fn check_positive(field: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("{field} must be greater than 0")))
    }
}

pub fn check_non_negative(field: &str, value: f64) -> Result<(), AppError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("{field} must not be negative")))
    }
}

pub fn check_not_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        Err(AppError::BadRequest(format!("{field} is required")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("2024-03-09").unwrap(), date!(2024 - 03 - 09));
        assert!(parse_date("2024-3-9").is_err());
        assert!(parse_date("09/03/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn clock_times() {
        assert!(is_valid_clock_time("09:30"));
        assert!(is_valid_clock_time("23:59"));
        assert!(is_valid_clock_time("00:00"));
        assert!(!is_valid_clock_time("24:00"));
        assert!(!is_valid_clock_time("9:30"));
        assert!(!is_valid_clock_time("09:60"));
        assert!(!is_valid_clock_time("morning"));
        assert!(check_clock_time("time", None).is_ok());
        assert!(check_clock_time("time", Some("7pm")).is_err());
    }

    #[test]
    fn ratings_are_one_to_ten() {
        assert!(check_rating("energy_1_10", None).is_ok());
        assert!(check_rating("energy_1_10", Some(1)).is_ok());
        assert!(check_rating("energy_1_10", Some(10)).is_ok());
        assert!(check_rating("energy_1_10", Some(0)).is_err());
        assert!(check_rating("energy_1_10", Some(11)).is_err());
    }

    #[test]
    fn numeric_bounds() {
        assert!(check_positive("quantity_g", 0.5).is_ok());
        assert!(check_positive("quantity_g", 0.0).is_err());
        assert!(check_positive("quantity_g", f64::NAN).is_err());
        assert!(check_non_negative("kcal", 0.0).is_ok());
        assert!(check_non_negative("kcal", -1.0).is_err());
        assert!(check_not_blank("name", "  ").is_err());
        assert!(check_not_blank("name", "Oats").is_ok());
    }
}
