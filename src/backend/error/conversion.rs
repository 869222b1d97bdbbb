/**
 * Error Conversion
 *
 * This module turns `BackendError` into HTTP responses and maps axum's
 * extractor rejections onto `BackendError`, so a malformed body, form, path
 * or query string produces the same JSON error shape as every other failure.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 422
 * }
 * ```
 *
 * 401 responses also carry `WWW-Authenticate: Bearer`.
 */

use axum::{
    extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;
use crate::shared::SharedError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                BackendError::handler(rejection.status(), rejection.body_text())
            }
            _ => SharedError::invalid_input(rejection.body_text()).into(),
        }
    }
}

impl From<FormRejection> for BackendError {
    fn from(rejection: FormRejection) -> Self {
        match rejection {
            FormRejection::InvalidFormContentType(_) => {
                BackendError::handler(rejection.status(), rejection.body_text())
            }
            _ => SharedError::invalid_input(rejection.body_text()).into(),
        }
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        SharedError::invalid_input(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        SharedError::invalid_input(rejection.body_text()).into()
    }
}
