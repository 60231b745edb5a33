use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum BmiError {
    /// Weight or height missing, or not a finite number.
    #[error("Invalid input. Please enter numeric values for weight and height.")]
    InvalidInput,

    /// Weight or height is zero or negative.
    #[error("Height and weight must be positive numbers.")]
    InvalidRange,

    /// The result store could not be reached or the write did not commit.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Body returned to the client for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl BmiError {
    pub fn status(&self) -> StatusCode {
        match self {
            BmiError::InvalidInput | BmiError::InvalidRange => StatusCode::BAD_REQUEST,
            BmiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BmiError {
    fn into_response(self) -> Response {
        let message = match &self {
            BmiError::Storage(e) => {
                error!(error = %e, "storage failure");
                "Could not save or load BMI results. Please try again later.".to_string()
            }
            other => other.to_string(),
        };
        (self.status(), Json(ErrorBody { error: message })).into_response()
    }
}
