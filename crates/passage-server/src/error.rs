use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use passage_shared::{ApiResponse, ValidationError};
use passage_store::StoreError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid {resource} data")]
    Validation {
        resource: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Failed to {action}")]
    Storage {
        action: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Not found")]
    UnknownRoute,
}

impl ServerError {
    pub fn validation(resource: &'static str, source: ValidationError) -> Self {
        Self::Validation { resource, source }
    }

    /// Adapter for `map_err` on storage calls.
    pub fn storage(action: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Storage { action, source }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ServerError::Validation { source, .. } => (
                StatusCode::BAD_REQUEST,
                ApiResponse::failure(self.to_string()).with_details(source.issues.clone()),
            ),
            ServerError::NotFound(_) | ServerError::UnknownRoute => {
                (StatusCode::NOT_FOUND, ApiResponse::failure(self.to_string()))
            }
            ServerError::Storage { source, .. } => {
                // The envelope only names the failed action.
                tracing::error!(error = %source, "{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure(self.to_string()),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
