//! Account reconciliation service.
//!
//! Owns the consistency contract between the external identity provider and
//! the local user store. The provider is the system of record for
//! credentials; the store is the system of record for application users. The
//! two are not covered by a shared transaction, so sign-up is a fixed-order
//! two-step (provider first, store second) whose partial failure leaves an
//! orphaned identity at the provider rather than a half-created local user.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::user::UserRepository,
    error::{account::AccountError, auth::AuthError, AppError},
    model::user::{CreateAccountParam, CreateUserParam, SignInParam, User},
    provider::{IdentityProvider, NewIdentity},
};

/// Service reconciling external identities with local user rows.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
    provider: &'a dyn IdentityProvider,
}

impl<'a> AccountService<'a> {
    /// Creates a new AccountService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `provider` - Identity provider gateway
    ///
    /// # Returns
    /// - `AccountService` - New service instance
    pub fn new(db: &'a DatabaseConnection, provider: &'a dyn IdentityProvider) -> Self {
        Self { db, provider }
    }

    /// Creates an account at the provider and in the user store.
    ///
    /// The provider call is the step of record for credential custody: if it
    /// fails, no local row is created and the provider's conflict or
    /// availability error is surfaced. The local insert can still fail on the
    /// store's own uniqueness constraints even after the provider accepted
    /// the same values; when that happens the provider is left holding an
    /// orphaned identity, which is logged for out-of-band reconciliation and
    /// never rolled back synchronously (the provider exposes no transactional
    /// rollback). Retrying the same sign-up after such a partial failure
    /// fails at the provider with a conflict.
    ///
    /// # Arguments
    /// - `param` - Email, password, and display name from the sign-up request
    ///
    /// # Returns
    /// - `Ok(User)` - Account created in both stores under one uid
    /// - `Err(AccountError::IdentityConflict)` - Provider already holds the
    ///   email or display name
    /// - `Err(AccountError::StoreConflict)` - Store uniqueness violation
    ///   after provider success (orphaned identity)
    /// - `Err(AccountError::ProviderUnavailable)` - Provider unreachable
    pub async fn create_account(&self, param: CreateAccountParam) -> Result<User, AppError> {
        let email = param.email.trim().to_lowercase();
        let display_name = param.display_name.trim().to_string();

        let record = self
            .provider
            .create_identity(NewIdentity {
                email: email.clone(),
                password: param.password,
                display_name: display_name.clone(),
            })
            .await?;

        let user_repo = UserRepository::new(self.db);
        let inserted = user_repo
            .insert(CreateUserParam {
                email,
                external_uid: record.uid.clone(),
                display_name,
            })
            .await;

        match inserted {
            Ok(user) => Ok(user),
            Err(err) => {
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    tracing::error!(
                        uid = %record.uid,
                        "Orphaned identity: provider accepted sign-up but the user store \
                         rejected it on a uniqueness constraint"
                    );
                    Err(AccountError::StoreConflict.into())
                } else {
                    Err(err.into())
                }
            }
        }
    }

    /// Signs a user in from a bearer token and claimed identity.
    ///
    /// The token is re-verified with the provider on every call; no identity
    /// state is cached across requests. The claimed email and uid from the
    /// request body must match the verified claims exactly: a valid token
    /// for account A combined with a body describing account B fails closed,
    /// without revealing which field mismatched. The store lookup runs in the
    /// authentication-visible scope, so a deleted or disabled user produces
    /// the same outcome as one that never existed.
    ///
    /// # Arguments
    /// - `param` - Claimed email and uid plus the bearer token
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with `last_seen_at` freshly stamped
    /// - `Err(AuthError::Authentication)` - Token invalid or claims mismatch
    /// - `Err(AuthError::Authorization)` - No visible user for the verified
    ///   uid (never existed, deleted, or disabled; indistinguishable)
    pub async fn sign_in(&self, param: SignInParam) -> Result<User, AppError> {
        let claims = self.provider.verify_token(&param.token).await?;

        if claims.uid != param.claimed_uid
            || !claims.email.eq_ignore_ascii_case(&param.claimed_email)
        {
            return Err(AuthError::Authentication.into());
        }

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_auth_by_external_uid(&claims.uid).await? else {
            return Err(AuthError::Authorization.into());
        };

        let now = chrono::Utc::now();
        user_repo.touch_last_seen(user.id, now).await?;

        Ok(User {
            last_seen_at: Some(now),
            ..user
        })
    }
}
