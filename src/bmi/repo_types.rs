use sqlx::FromRow;
use time::PrimitiveDateTime;

/// Row of `bmi_results`. Never updated once written.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct BmiRecord {
    pub id: i64, // assigned by sqlite, monotonic
    pub weight: f64, // kilograms
    pub height: f64, // meters
    pub bmi: f64, // rounded to 2 decimals
    pub category: String,
    pub color: String,
    pub timestamp: PrimitiveDateTime, // naive UTC, set on insert
}
