use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use time::{macros::format_description, PrimitiveDateTime};

use crate::bmi::repo_types::BmiRecord;

/// Writes the timestamp as `YYYY-MM-DD HH:MM:SS`, dropping subseconds.
fn serialize_timestamp<S: Serializer>(ts: &PrimitiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let text = ts.format(format).map_err(serde::ser::Error::custom)?;
    s.serialize_str(&text)
}

/// Request body for `POST /calculate`. Fields stay loosely typed so that
/// numeric strings can be coerced and anything else reported as bad input.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub weight: Option<Value>, // kilograms
    #[serde(default)]
    pub height: Option<Value>, // centimeters
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub bmi: f64,
    pub category: String,
    pub color: String,
}

impl From<BmiRecord> for CalculateResponse {
    fn from(r: BmiRecord) -> Self {
        Self {
            bmi: r.bmi,
            category: r.category,
            color: r.color,
        }
    }
}

/// One entry of `GET /history`.
#[derive(Debug, Serialize)]
pub struct HistoryItem {
    pub id: i64,
    pub weight: f64,
    pub height: f64,
    pub bmi: f64,
    pub category: String,
    pub color: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: PrimitiveDateTime,
}

impl From<BmiRecord> for HistoryItem {
    fn from(r: BmiRecord) -> Self {
        Self {
            id: r.id,
            weight: r.weight,
            height: r.height,
            bmi: r.bmi,
            category: r.category,
            color: r.color,
            timestamp: r.timestamp,
        }
    }
}
