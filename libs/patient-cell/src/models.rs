use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Registration record as stored in the `patients` table. The kiosk never
/// writes this table; rows come from the hospital's registration desk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub cr_number: String,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub doctor: String,
    pub department: String,
    #[serde(default, deserialize_with = "lenient_visit_date")]
    pub last_visit: Option<NaiveDate>,
}

/// Upstream data entry is messy: `last_visit` arrives as a date, a datetime,
/// null, or occasionally garbage. Anything unreadable collapses to `None` so
/// the row still loads and eligibility fails closed instead of erroring out.
fn lenient_visit_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(parse_visit_date(&value))
}

pub(crate) fn parse_visit_date(value: &serde_json::Value) -> Option<NaiveDate> {
    let raw = value.as_str()?.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime.date());
        }
    }
    None
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatientError {
    #[error("Patient not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}
