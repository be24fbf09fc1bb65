use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    provider::IdentityProvider,
};

/// Guard resolving the current user from a bearer token.
///
/// Every protected request re-verifies its token with the identity provider
/// and re-reads the user store; no identity state is cached across requests.
/// The store lookup runs in the authentication-visible scope, so deleted and
/// disabled users fail exactly like users that never existed.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    provider: &'a dyn IdentityProvider,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, provider: &'a dyn IdentityProvider) -> Self {
        Self { db, provider }
    }

    /// Resolves the authenticated user for a request.
    ///
    /// # Arguments
    /// - `headers` - Request headers carrying the `Authorization: Bearer` token
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated, visible user
    /// - `Err(AuthError::Authentication)` - Token missing, malformed, or
    ///   rejected by the provider
    /// - `Err(AuthError::Authorization)` - Verified uid has no visible user
    pub async fn require(&self, headers: &HeaderMap) -> Result<User, AppError> {
        let Some(token) = bearer_token(headers) else {
            return Err(AuthError::Authentication.into());
        };

        let claims = self.provider.verify_token(token).await?;

        let Some(user) = UserRepository::new(self.db)
            .find_auth_by_external_uid(&claims.uid)
            .await?
        else {
            return Err(AuthError::Authorization.into());
        };

        Ok(user)
    }
}

/// Extracts the bearer token from an Authorization header, if present.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
