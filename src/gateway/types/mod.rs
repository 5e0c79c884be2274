//! Gateway types module
//!
//! Types enforcing the API boundary:
//!
//! - [`StrictAmount`]: format-validated decimal for API input
//! - [`ApiError`] / [`ApiResult`]: error mapping to transport status
//! - [`ApiJson`]: JSON extractor that answers 400 (not 422) on bad bodies

pub mod money;
pub mod response;

pub use money::StrictAmount;
pub use response::{ApiError, ApiResult};

use axum::Json;
use axum::extract::{FromRequest, Request};

/// JSON body extractor with 400-on-rejection semantics.
///
/// The stock `Json` extractor answers 422 for deserialization errors;
/// this surface promises plain 400 with an `{"error": ...}` body for
/// missing or malformed fields.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}
