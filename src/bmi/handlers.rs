use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{instrument, warn};

use crate::{
    bmi::{
        dto::{CalculateRequest, CalculateResponse, HistoryItem},
        engine::Measurement,
        services::{calculate_and_record, recent_history},
    },
    error::BmiError,
    state::AppState,
};

pub fn calculate_routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}

pub fn history_routes() -> Router<AppState> {
    Router::new().route("/history", get(history))
}

#[instrument(skip(state, payload))]
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, BmiError> {
    let Json(body) = payload.map_err(|e| {
        warn!(error = %e, "unreadable calculate body");
        BmiError::InvalidInput
    })?;

    let measurement = Measurement::from_json(body.weight.as_ref(), body.height.as_ref())
        .map_err(|e| {
            warn!(weight = ?body.weight, height = ?body.height, "non-numeric measurement");
            e
        })?;

    let record = calculate_and_record(&state.store, measurement)
        .await
        .map_err(|e| {
            if matches!(e, BmiError::InvalidRange) {
                warn!(weight = measurement.weight_kg, height = measurement.height_cm, "measurement out of range");
            }
            e
        })?;

    Ok(Json(CalculateResponse::from(record)))
}

#[instrument(skip(state))]
pub async fn history(State(state): State<AppState>) -> Result<Json<Vec<HistoryItem>>, BmiError> {
    let items = recent_history(&state.store)
        .await?
        .into_iter()
        .map(HistoryItem::from)
        .collect();
    Ok(Json(items))
}
