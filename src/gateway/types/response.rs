//! API error type and transfer-error to HTTP-status mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::transfer::TransferError;

/// Caller-visible API error: a status code and a stable message.
///
/// Error responses all share the `{"error": "..."}` body shape.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

/// Exhaustive mapping from the transfer error taxonomy to HTTP status.
///
/// `TransferFailed` is the one non-operational kind: the cause goes to
/// the log, the caller gets a generic message.
impl From<TransferError> for ApiError {
    fn from(err: TransferError) -> Self {
        match &err {
            TransferError::InvalidAmount
            | TransferError::SelfTransfer
            | TransferError::IneligibleSource
            | TransferError::InsufficientFunds { .. } => Self::bad_request(err.to_string()),
            TransferError::AccountNotFound(_) | TransferError::TransferNotFound(_) => {
                Self::not_found(err.to_string())
            }
            TransferError::NotAuthorized => Self::forbidden(err.to_string()),
            TransferError::GateUnavailable => Self::service_unavailable(err.to_string()),
            TransferError::TransferFailed(cause) => {
                tracing::error!(error = %cause, "Ledger mutation failed");
                Self::internal("internal error, try again later")
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "Database query failed");
        Self::internal("internal error, try again later")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::AccountRole;
    use rust_decimal_macros::dec;

    fn status_of(err: TransferError) -> StatusCode {
        ApiError::from(err).status
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_of(TransferError::InvalidAmount), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(TransferError::SelfTransfer), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(TransferError::IneligibleSource),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(TransferError::InsufficientFunds {
                balance: dec!(50),
                requested: dec!(100)
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(TransferError::AccountNotFound(AccountRole::Payer)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(TransferError::TransferNotFound(7)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(TransferError::NotAuthorized), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(TransferError::GateUnavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(TransferError::TransferFailed(sqlx::Error::PoolClosed)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_does_not_leak_detail() {
        let api_err = ApiError::from(TransferError::TransferFailed(sqlx::Error::PoolClosed));
        assert!(!api_err.message.to_lowercase().contains("pool"));
    }
}
