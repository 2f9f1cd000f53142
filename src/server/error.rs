//! Error responses for the JSON API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::api::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or blank company name.
    #[error("Company name is required")]
    MissingCompanyName,

    /// Body could not be decoded as a search request.
    #[error("Invalid request body")]
    InvalidBody(String),

    /// Unexpected server-side failure. The detail is logged, never returned.
    #[error("Failed to fetch company information")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCompanyName | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(detail) => {
                tracing::error!("Error searching for company: {}", detail)
            }
            ApiError::InvalidBody(detail) => tracing::debug!("Rejected request body: {}", detail),
            ApiError::MissingCompanyName => {}
        }

        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}
