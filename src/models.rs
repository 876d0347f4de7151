use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::INVALID_DATE;

/// A user record as returned by the service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Raw ISO-8601 timestamp; kept as text so bad values reach the renderer
    #[serde(rename = "createdAt", default, deserialize_with = "lenient_text")]
    pub created_at: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, created_at: impl Into<String>) -> Self {
        User {
            id: id.into(),
            name: name.into(),
            created_at: created_at.into(),
        }
    }

    /// Creation time like `Jan 1, 2024, 12:00:00 AM`, or `Invalid Date`
    pub fn formatted_created_at(&self) -> String {
        format_timestamp(&self.created_at)
    }

    /// Date part only, like `Jan 1`
    pub fn created_day(&self) -> String {
        match parse_timestamp(&self.created_at) {
            Some(ts) => ts.format("%b %-d").to_string(),
            None => INVALID_DATE.to_string(),
        }
    }
}

/// Accept any JSON value as text. `null` becomes empty; numbers, bools and
/// containers keep their JSON spelling and later render as `Invalid Date`.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Body sent to create a user
#[derive(Clone, Debug, Serialize)]
pub struct CreateUserRequest<'a> {
    pub name: &'a str,
}

/// Error body a failing endpoint may return
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Parse an ISO-8601 timestamp. Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn format_timestamp(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts.format("%b %-d, %Y, %I:%M:%S %p").to_string(),
        None => INVALID_DATE.to_string(),
    }
}
