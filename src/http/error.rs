use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::errors::PortalError;

/// JSON envelope returned on every failed request:
/// `{"error":{"code":"...","message":"..."}}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Body parsed as JSON but did not fit the expected shape.
    pub(crate) fn unprocessable(message: String) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            code: "bad_request",
            message,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            code: "bad_request",
            message: rejection.body_text(),
        }
    }
}

impl From<PortalError> for ApiError {
    fn from(err: PortalError) -> Self {
        let (status, code) = match &err {
            PortalError::PurchaseNotFound(_)
            | PortalError::MovementOutOfRange(_)
            | PortalError::ProfileNotSet => (StatusCode::NOT_FOUND, "not_found"),
            PortalError::PurchaseExists(_) | PortalError::ProfileExists => {
                (StatusCode::CONFLICT, "conflict")
            }
            PortalError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage"),
        };
        Self {
            status,
            code,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = self.code, "{}", self.message);
        } else {
            tracing::warn!(code = self.code, "{}", self.message);
        }
        let body = Json(json!({"error": {"code": self.code, "message": self.message}}));
        (self.status, body).into_response()
    }
}
