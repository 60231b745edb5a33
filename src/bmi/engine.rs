use serde::Serialize;
use serde_json::Value;

use crate::error::BmiError;

/// BMI category, checked top to bottom against the rounded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obesity")]
    Obesity,
}

impl Category {
    /// Values in [24.9, 25) match neither the normal nor the overweight band
    /// and land in `Obesity`.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Category::Underweight
        } else if (18.5..24.9).contains(&bmi) {
            Category::NormalWeight
        } else if (25.0..29.9).contains(&bmi) {
            Category::Overweight
        } else {
            Category::Obesity
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::NormalWeight => "Normal weight",
            Category::Overweight => "Overweight",
            Category::Obesity => "Obesity",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Underweight | Category::Overweight => WARNING_ORANGE,
            Category::NormalWeight => SUCCESS_GREEN,
            Category::Obesity => DANGER_RED,
        }
    }
}

pub const WARNING_ORANGE: &str = "#f0ad4e";
pub const SUCCESS_GREEN: &str = "#5cb85c";
pub const DANGER_RED: &str = "#d9534f";

/// Raw input, weight in kilograms and height in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl Measurement {
    /// Coerces loosely typed JSON fields. Numbers and numeric strings are
    /// accepted, anything else is `InvalidInput`.
    pub fn from_json(weight: Option<&Value>, height: Option<&Value>) -> Result<Self, BmiError> {
        Ok(Self {
            weight_kg: parse_number(weight)?,
            height_cm: parse_number(height)?,
        })
    }

    pub fn assess(&self) -> Result<Assessment, BmiError> {
        compute(self.weight_kg, self.height_cm)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: f64,
    pub category: Category,
}

impl Assessment {
    pub fn color(&self) -> &'static str {
        self.category.color()
    }
}

pub fn compute(weight_kg: f64, height_cm: f64) -> Result<Assessment, BmiError> {
    if !weight_kg.is_finite() || !height_cm.is_finite() {
        return Err(BmiError::InvalidInput);
    }

    let height_m = height_cm / 100.0;
    if height_m <= 0.0 || weight_kg <= 0.0 {
        return Err(BmiError::InvalidRange);
    }

    let bmi = round2(weight_kg / height_m.powi(2));
    // a vanishingly small height overflows the division
    if !bmi.is_finite() {
        return Err(BmiError::InvalidRange);
    }

    Ok(Assessment {
        weight_kg,
        height_m,
        bmi,
        category: Category::classify(bmi),
    })
}

/// Rounds to two decimals, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn parse_number(value: Option<&Value>) -> Result<f64, BmiError> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).ok_or(BmiError::InvalidInput)
}
