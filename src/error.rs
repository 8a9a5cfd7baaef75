use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mealplanner_mealplan::PlanError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Meal plan error: {0}")]
    PlanError(#[from] PlanError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::PlanError(_) => StatusCode::BAD_REQUEST,
            AppError::IoError(_) | AppError::SerializationError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_error_is_bad_request() {
        let error = AppError::from(PlanError::NoRecipes);

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error.to_string(),
            "Meal plan error: no recipes available to plan"
        );
    }

    #[test]
    fn test_io_error_is_internal() {
        let error = AppError::from(std::io::Error::other("disk on fire"));

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
