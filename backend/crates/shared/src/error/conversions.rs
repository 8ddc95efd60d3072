//! Error conversions
//!
//! Rendering of [`AppError`] at the HTTP boundary.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl AppError {
    /// RFC 7807 problem document, extended with `code` and `action`.
    pub fn problem_body(&self) -> serde_json::Value {
        serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "code": self.code(),
            "detail": self.message(),
            "action": self.action(),
            "retryable": self.kind().is_retryable(),
        })
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.problem_body())).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;
    use axum::response::IntoResponse;

    #[test]
    fn test_problem_body_fields() {
        let err = AppError::new(ErrorKind::Conflict, "Round already finished")
            .with_code("SESSION_COMPLETED");
        let body = err.problem_body();

        assert_eq!(body["status"], 409);
        assert_eq!(body["title"], "Conflict");
        assert_eq!(body["code"], "SESSION_COMPLETED");
        assert_eq!(body["detail"], "Round already finished");
        assert!(body["action"].is_null());
        assert_eq!(body["retryable"], false);
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::service_unavailable("busy").into_response();
        assert_eq!(response.status().as_u16(), 503);
    }
}
