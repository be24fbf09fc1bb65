use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AccountError {
    /// The identity provider rejected account creation because the email or
    /// display name already exists there.
    ///
    /// User-correctable. Results in a 409 Conflict response.
    #[error("identity provider rejected the account as already existing")]
    IdentityConflict,

    /// The local user store rejected the account on a uniqueness constraint
    /// after the identity provider had already accepted it.
    ///
    /// The two stores enforce uniqueness independently and are not guaranteed
    /// to agree, so this leaves an orphaned identity at the provider. The
    /// reconciliation service logs the orphaned uid at error level before
    /// surfacing this variant. Results in a 409 Conflict response with the
    /// same body as `IdentityConflict`.
    #[error("user store rejected the account as already existing")]
    StoreConflict,

    /// The identity provider could not be reached or failed at the transport
    /// level.
    ///
    /// Retryable by the caller; the service never retries automatically.
    /// Results in a 503 Service Unavailable response.
    #[error("identity provider unavailable")]
    ProviderUnavailable,

    /// The account deletion transaction failed at the store layer and was
    /// rolled back.
    ///
    /// No partial effects are visible. Results in a 500 Internal Server Error
    /// response with the underlying error logged server-side.
    #[error("account transaction failed")]
    Transaction(#[source] sea_orm::DbErr),
}

/// Converts account lifecycle errors into HTTP responses.
///
/// The two conflict variants share one response body: which store refused the
/// account is an operational detail (logged server-side), not something the
/// caller can act on differently.
///
/// # Returns
/// - 409 Conflict - For `IdentityConflict` and `StoreConflict`
/// - 503 Service Unavailable - For `ProviderUnavailable`
/// - 500 Internal Server Error - For `Transaction`
impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        match self {
            Self::IdentityConflict | Self::StoreConflict => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "An account with that email or display name already exists."
                        .to_string(),
                }),
            )
                .into_response(),
            Self::ProviderUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto {
                    error: "Sign-up is temporarily unavailable, please try again later."
                        .to_string(),
                }),
            )
                .into_response(),
            Self::Transaction(err) => {
                tracing::error!("Account transaction failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
