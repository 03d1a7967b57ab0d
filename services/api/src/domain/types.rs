use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use boxops_core::serde::{i64_lenient, opt_f64};

/// A warehouse user as stored in `users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub role: String,
}

/// Fields written by user create/update. Absent fields are bound as NULL
/// and left for the store to accept or reject.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub role: Option<String>,
}

/// One row of the user-details report: a user joined with each of their
/// weekly operations and the location it happened at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetail {
    pub user_id: i32,
    pub username: String,
    pub role: String,
    pub location_id: i32,
    pub location_type: String,
    pub number_of_boxes: i32,
    pub total_minutes: i32,
    #[serde(default, deserialize_with = "opt_f64")]
    pub average_boxes_per_minute: Option<f64>,
}

/// A weekly operation row as stored in `weekly_operations`.
///
/// The key is optional so an insert into a table without the
/// `weekly_operation_id` column still echoes the committed row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyOperation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_operation_id: Option<i32>,
    pub user_id: i32,
    pub product_id: i32,
    pub week_start: NaiveDate,
    pub number_of_boxes: i32,
    pub total_minutes: i32,
    #[serde(default, deserialize_with = "opt_f64")]
    pub average_boxes_per_minute: Option<f64>,
}

/// A validated weekly operation ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWeeklyOperation {
    pub user_id: i32,
    pub product_id: i32,
    pub week_start: NaiveDate,
    pub number_of_boxes: i32,
    pub total_minutes: i32,
}

impl NewWeeklyOperation {
    pub fn average_boxes_per_minute(&self) -> Option<f64> {
        average_boxes_per_minute(self.number_of_boxes, self.total_minutes)
    }
}

/// Per-week aggregate for one product, grouped by user and product type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyOperationSummary {
    pub username: String,
    pub product_type: String,
    pub week_start: NaiveDate,
    #[serde(deserialize_with = "i64_lenient")]
    pub total_boxes: i64,
    #[serde(deserialize_with = "i64_lenient")]
    pub total_minutes: i64,
    #[serde(default, deserialize_with = "opt_f64")]
    pub average_boxes_per_minute: Option<f64>,
}

/// Boxes per minute, or `None` when no minutes were worked.
pub fn average_boxes_per_minute(number_of_boxes: i32, total_minutes: i32) -> Option<f64> {
    (total_minutes != 0).then(|| f64::from(number_of_boxes) / f64::from(total_minutes))
}

/// Accept a JSON number with no fractional part that fits in an `i32`.
/// `50` and `50.0` pass; `"50"`, `50.5` and `null` do not.
pub fn integer_field(value: &JsonValue) -> Option<i32> {
    let n = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })?;
    i32::try_from(n).ok()
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a week start as a calendar date (`2024-03-04`, `2024/03/04`,
/// `March 4, 2024`), a local date-time (`2024-03-04 08:00`) or an RFC 3339
/// timestamp, keeping only its date.
pub fn parse_week_start(value: &JsonValue) -> Option<NaiveDate> {
    let raw = value.as_str()?.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
