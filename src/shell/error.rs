// HTTP error mapping.
//
// Every handler returns ApiError, so all failures share one JSON shape:
// `{"code": "...", "message": "..."}`.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::shared::infrastructure::database::ProbeError;
use crate::shared::infrastructure::resource_store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "validation_error", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateIdentity { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "duplicate_identity", err.to_string())
            }
            StoreError::NotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "not_found", err.to_string())
            }
            StoreError::Backend(ref reason) => {
                tracing::error!(%reason, "store failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal error",
                )
            }
        }
    }
}

impl From<ProbeError> for ApiError {
    fn from(err: ProbeError) -> Self {
        tracing::warn!(error = %err, "database probe failed");
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "transport_error",
            err.to_string(),
        )
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

#[cfg(test)]
mod api_error_tests {
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    #[case(StoreError::DuplicateIdentity { kind: "Walk", id: Uuid::nil() }, StatusCode::BAD_REQUEST, "duplicate_identity", "Walk already exists")]
    #[case(StoreError::NotFound { kind: "Event", id: Uuid::nil() }, StatusCode::NOT_FOUND, "not_found", "Event not found")]
    #[case(StoreError::Backend("Walk store offline".into()), StatusCode::INTERNAL_SERVER_ERROR, "internal_error", "internal error")]
    fn it_should_map_store_errors(
        #[case] err: StoreError,
        #[case] status: StatusCode,
        #[case] code: &str,
        #[case] message: &str,
    ) {
        let api_error = ApiError::from(err);
        assert_eq!(api_error.status, status);
        assert_eq!(api_error.body.code, code);
        assert_eq!(api_error.body.message, message);
    }

    #[rstest]
    fn it_should_map_probe_errors_to_service_unavailable() {
        let api_error = ApiError::from(ProbeError::Unconfigured);
        assert_eq!(api_error.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(api_error.body.code, "transport_error");
        assert_eq!(api_error.body.message, "database is not configured");
    }
}
