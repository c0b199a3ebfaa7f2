//! Maps registration errors onto HTTP responses.
//!
//! Client-input failures become 404/400 with a `{"detail": ...}` body;
//! store failures are logged server-side and surface as a generic 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::services::registration_service::RegistrationError;

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        let status = match &self {
            RegistrationError::ActivityNotFound => StatusCode::NOT_FOUND,
            RegistrationError::AlreadySignedUp
            | RegistrationError::ActivityFull
            | RegistrationError::NotRegistered => StatusCode::BAD_REQUEST,
            RegistrationError::Database(e) => {
                error!("Store error during registration request: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal server error" })),
                )
                    .into_response();
            }
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
