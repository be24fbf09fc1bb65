use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::provider::{
    IdentityProvider, IdentityRecord, NewIdentity, ProviderError, VerifiedClaims,
};

/// Identity provider gateway over the provider's REST API.
///
/// Authenticates to the provider with a service API key sent as a bearer
/// header on every call. Each call carries the timeout configured on the
/// shared HTTP client; failures are propagated, never retried here.
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct CreateAccountBody<'a> {
    email: &'a str,
    password: &'a str,
    display_name: &'a str,
}

#[derive(Deserialize)]
struct AccountBody {
    uid: String,
    email: String,
    display_name: String,
}

#[derive(Serialize)]
struct VerifyTokenBody<'a> {
    token: &'a str,
}

#[derive(Deserialize)]
struct ClaimsBody {
    uid: String,
    email: String,
    issued_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct AccountListBody {
    accounts: Vec<AccountBody>,
}

#[derive(Serialize)]
struct BatchDeleteBody<'a> {
    uids: &'a [String],
}

impl From<AccountBody> for IdentityRecord {
    fn from(body: AccountBody) -> Self {
        Self {
            uid: body.uid,
            email: body.email,
            display_name: body.display_name,
        }
    }
}

impl HttpIdentityProvider {
    pub fn new(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Maps a transport failure to `Unavailable`, logging the cause the
    /// typed error does not carry.
    fn transport_err(err: reqwest::Error) -> ProviderError {
        tracing::warn!("Identity provider transport failure: {}", err);
        ProviderError::Unavailable(err.to_string())
    }

    fn unexpected_status(status: StatusCode) -> ProviderError {
        if status.is_server_error() {
            ProviderError::Unavailable(format!("provider returned {}", status))
        } else {
            ProviderError::UnexpectedResponse(format!("provider returned {}", status))
        }
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    /// POST /v1/accounts
    ///
    /// # Returns
    /// - `Ok(IdentityRecord)` - Identity created at the provider
    /// - `Err(ProviderError::Conflict)` - Email or display name already known
    ///   to the provider (409)
    /// - `Err(ProviderError::Unavailable)` - Transport failure or provider 5xx
    async fn create_identity(
        &self,
        identity: NewIdentity,
    ) -> Result<IdentityRecord, ProviderError> {
        let response = self
            .client
            .post(self.url("/v1/accounts"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&CreateAccountBody {
                email: &identity.email,
                password: &identity.password,
                display_name: &identity.display_name,
            })
            .send()
            .await
            .map_err(Self::transport_err)?;

        match response.status() {
            StatusCode::CREATED | StatusCode::OK => {
                let body = response
                    .json::<AccountBody>()
                    .await
                    .map_err(Self::transport_err)?;
                Ok(body.into())
            }
            StatusCode::CONFLICT => Err(ProviderError::Conflict),
            status => Err(Self::unexpected_status(status)),
        }
    }

    /// POST /v1/tokens/verify
    ///
    /// # Returns
    /// - `Ok(VerifiedClaims)` - Token cryptographically verified by the provider
    /// - `Err(ProviderError::InvalidToken)` - Token expired, forged, or
    ///   malformed (400/401)
    /// - `Err(ProviderError::Unavailable)` - Transport failure or provider 5xx
    async fn verify_token(&self, token: &str) -> Result<VerifiedClaims, ProviderError> {
        let response = self
            .client
            .post(self.url("/v1/tokens/verify"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&VerifyTokenBody { token })
            .send()
            .await
            .map_err(Self::transport_err)?;

        match response.status() {
            StatusCode::OK => {
                let body = response
                    .json::<ClaimsBody>()
                    .await
                    .map_err(Self::transport_err)?;
                Ok(VerifiedClaims {
                    uid: body.uid,
                    email: body.email,
                    issued_at: body.issued_at,
                })
            }
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => Err(ProviderError::InvalidToken),
            status => Err(Self::unexpected_status(status)),
        }
    }

    /// GET /v1/accounts
    async fn list_identities(&self) -> Result<Vec<IdentityRecord>, ProviderError> {
        let response = self
            .client
            .get(self.url("/v1/accounts"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(Self::transport_err)?;

        match response.status() {
            StatusCode::OK => {
                let body = response
                    .json::<AccountListBody>()
                    .await
                    .map_err(Self::transport_err)?;
                Ok(body.accounts.into_iter().map(IdentityRecord::from).collect())
            }
            status => Err(Self::unexpected_status(status)),
        }
    }

    /// POST /v1/accounts/batch-delete
    async fn delete_identities(&self, uids: &[String]) -> Result<(), ProviderError> {
        let response = self
            .client
            .post(self.url("/v1/accounts/batch-delete"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&BatchDeleteBody { uids })
            .send()
            .await
            .map_err(Self::transport_err)?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            status => Err(Self::unexpected_status(status)),
        }
    }
}
