use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub display_name: String,
    pub last_seen_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Payload for account creation (sign-up).
///
/// The password is forwarded to the identity provider verbatim; no local
/// password policy is applied.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateAccountDto {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// Payload for sign-in, alongside the bearer token in the Authorization
/// header.
///
/// The body's `email` and `uid` must match the verified token's claims
/// exactly; a mismatch is rejected without saying which field differed.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct SignInDto {
    pub email: String,
    pub uid: String,
}
