use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Error type returned by every handler.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A single request field failed validation.
    #[error("{message}")]
    Validation { field: &'static str, message: String },

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(&'static str),

    #[error("upstream service failed")]
    Upstream(#[source] anyhow::Error),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl ApiError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(e) => error!(error = %e, "request failed"),
            Self::Upstream(e) => error!(error = %e, "upstream request failed"),
            _ => {}
        }
        let field = match &self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        };
        let body = ErrorBody {
            error: self.to_string(),
            field,
        };
        (status, Json(body)).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Checks that `value` lies in `[min, max]`.
pub(crate) fn ensure_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ApiError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ApiError::validation(
            field,
            format!("{field} must be between {min} and {max}"),
        ));
    }
    Ok(())
}

pub(crate) fn ensure_min(field: &'static str, value: f64, min: f64) -> Result<(), ApiError> {
    if !value.is_finite() || value < min {
        return Err(ApiError::validation(
            field,
            format!("{field} must be greater than or equal to {min}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_names_the_field() {
        let response = ApiError::validation("start", "start must be on or before end").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["field"], "start");
        assert_eq!(json["error"], "start must be on or before end");
    }

    #[tokio::test]
    async fn internal_error_hides_the_cause() {
        let response = ApiError::Internal(anyhow::anyhow!("connection refused")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("connection refused"));
        assert!(!text.contains("field"));
    }

    #[test]
    fn range_checks() {
        assert!(ensure_range("total_calories", 0.0, 0.0, 5000.0).is_ok());
        assert!(ensure_range("total_calories", 5000.0, 0.0, 5000.0).is_ok());
        assert!(ensure_range("total_calories", -0.1, 0.0, 5000.0).is_err());
        assert!(ensure_range("total_calories", 5000.5, 0.0, 5000.0).is_err());
        assert!(ensure_range("total_calories", f64::NAN, 0.0, 5000.0).is_err());
        assert!(ensure_min("weight_kg", 1.0, 1.0).is_ok());
        assert!(ensure_min("weight_kg", 0.99, 1.0).is_err());
    }
}
