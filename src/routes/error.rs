use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// JSON error envelope `{"error": ...}` for every failed request.
#[derive(Debug)]
pub enum ApiError {
    ValidationFailed(BTreeMap<String, String>),
    NotFound,
    BadRequest(String),
    MethodNotAllowed,
    InternalServerError(anyhow::Error),
}

impl From<recipebook_recipe::Error> for ApiError {
    fn from(e: recipebook_recipe::Error) -> Self {
        use recipebook_recipe::Error;

        match e {
            Error::Validate(errors) => {
                ApiError::ValidationFailed(recipebook_recipe::messages(&errors))
            }
            Error::NotFound => ApiError::NotFound,
            Error::Usage(msg) => ApiError::BadRequest(msg),
            Error::Storage(e) => ApiError::InternalServerError(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::NotFound
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ValidationFailed(field_errors) => {
                tracing::debug!(errors = ?field_errors, "Validation failed");

                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": field_errors })),
                )
                    .into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "the requested resource could not be found" })),
            )
                .into_response(),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "error": "the method is not supported for this resource" })),
            )
                .into_response(),
            ApiError::InternalServerError(e) => {
                tracing::error!("Internal server error: {:?}", e);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "the server encountered a problem and could not process your request"
                    })),
                )
                    .into_response()
            }
        }
    }
}
