//! Custom assertion macros
//!
//! Provides assertions over the JSON error body every failed request
//! returns.

/// Assert that a response is an API error with the given status
///
/// Checks the status line and the `{"error", "status"}` body.
#[macro_export]
macro_rules! assert_api_error {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status_code(),
            $status,
            "unexpected status, body: {}",
            response.text()
        );
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], $status.as_u16());
        assert!(body["error"].is_string(), "missing error message: {}", body);
    }};
    ($response:expr, $status:expr, $message:expr) => {{
        $crate::assert_api_error!($response, $status);
        let body: serde_json::Value = $response.json();
        assert_eq!(body["error"], $message);
    }};
}

/// Assert that a response was rejected by the bearer token gate
#[macro_export]
macro_rules! assert_unauthorized {
    ($response:expr) => {{
        $crate::assert_api_error!($response, axum::http::StatusCode::UNAUTHORIZED);
        assert_eq!(
            $response
                .headers()
                .get(axum::http::header::WWW_AUTHENTICATE)
                .expect("missing WWW-Authenticate header"),
            "Bearer"
        );
    }};
}
