use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The bearer token was missing, malformed, expired, or forged, or the
    /// identity fields claimed in the request body did not match the verified
    /// token claims.
    ///
    /// The message never identifies which of those conditions occurred.
    /// Results in a 401 Unauthorized response.
    #[error("authentication failed")]
    Authentication,

    /// The caller is not entitled to the requested account or resource, or
    /// the target is not visible in the caller's scope.
    ///
    /// Covers "never existed", "soft-deleted", "disabled", and "not the
    /// owner" with one indistinguishable response so that account state is
    /// never leaked. Results in a 403 Forbidden response.
    #[error("forbidden")]
    Authorization,
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants map to uniform bodies: the response reveals that the
/// request was refused and nothing about why.
///
/// # Returns
/// - 401 Unauthorized - For `Authentication`
/// - 403 Forbidden - For `Authorization`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Authentication => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication failed.".to_string(),
                }),
            )
                .into_response(),
            Self::Authorization => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Forbidden.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
