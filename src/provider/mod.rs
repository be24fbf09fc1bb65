//! Identity provider gateway.
//!
//! The external identity provider is the system of record for credentials: it
//! hashes passwords, issues bearer tokens, and verifies them cryptographically.
//! This application never persists credentials; it keeps only the opaque `uid`
//! handle each identity is known by. The `IdentityProvider` trait is the typed
//! contract the reconciliation service consumes, and `HttpIdentityProvider` is
//! the production implementation over the provider's REST API.
//!
//! Errors cross this boundary as `ProviderError` values, never as raw
//! transport errors.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

pub mod http;

#[cfg(test)]
pub mod mock;

pub use http::HttpIdentityProvider;

/// An identity as the provider knows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    /// Opaque handle the provider assigns to the identity. The local user row
    /// stores this value as `external_uid`.
    pub uid: String,
    pub email: String,
    pub display_name: String,
}

/// Parameters for creating an identity at the provider.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub email: String,
    /// Forwarded verbatim; hashing and policy are owned by the provider.
    pub password: String,
    pub display_name: String,
}

/// Claims extracted from a cryptographically verified bearer token.
///
/// The sole source of truth for "is this caller who they claim to be".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedClaims {
    pub uid: String,
    pub email: String,
    pub issued_at: DateTime<Utc>,
}

#[derive(Error, Debug)]
pub enum ProviderError {
    /// The provider already holds an identity with the given email or
    /// display name.
    #[error("identity already exists at the provider")]
    Conflict,

    /// The token was expired, forged, or malformed. Carries no detail about
    /// which.
    #[error("token rejected by the provider")]
    InvalidToken,

    /// Transport or infrastructure failure reaching the provider. The
    /// underlying cause is logged by the gateway; callers only see that the
    /// provider could not answer.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),

    /// The provider answered with a body or status the gateway does not
    /// understand.
    #[error("unexpected provider response: {0}")]
    UnexpectedResponse(String),
}

/// Contract between the reconciliation service and the identity provider.
///
/// `create_identity` and `verify_token` are on the request-serving path.
/// `list_identities` and `delete_identities` are maintenance surface only:
/// they exist for bootstrap/seeding collaborators and for the out-of-band
/// orphan reconciliation job. An identity whose `uid` has no matching local
/// user row is an orphan awaiting cleanup. That job is not implemented here;
/// until it exists, orphans created by partial sign-up failures accumulate at
/// the provider and are only observable through `list_identities`.
// TODO: reconciliation job that lists provider identities lacking a local row
// and completes or discards them.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Creates an identity at the provider. This is the step of record for
    /// credential custody during sign-up.
    async fn create_identity(&self, identity: NewIdentity)
        -> Result<IdentityRecord, ProviderError>;

    /// Verifies a bearer token and returns its claims.
    async fn verify_token(&self, token: &str) -> Result<VerifiedClaims, ProviderError>;

    /// Lists every identity the provider holds. Maintenance surface, not on
    /// the request-serving path.
    async fn list_identities(&self) -> Result<Vec<IdentityRecord>, ProviderError>;

    /// Deletes the identities with the given uids. Maintenance surface, not
    /// on the request-serving path.
    async fn delete_identities(&self, uids: &[String]) -> Result<(), ProviderError>;
}
