//! In-memory identity provider for tests.
//!
//! Stands in for the external provider so reconciliation and lifecycle flows
//! can be exercised without a network. Tokens take the form
//! `mock-token:<uid>` and verify successfully as long as the provider still
//! holds the identity, mirroring the real provider's behavior of continuing
//! to honor tokens for identities the application has deleted locally.

use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Mutex,
};

use async_trait::async_trait;
use chrono::Utc;

use crate::provider::{
    IdentityProvider, IdentityRecord, NewIdentity, ProviderError, VerifiedClaims,
};

const TOKEN_PREFIX: &str = "mock-token:";

pub struct MockIdentityProvider {
    identities: Mutex<HashMap<String, IdentityRecord>>,
    next_uid: AtomicU64,
    unavailable: AtomicBool,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self {
            identities: Mutex::new(HashMap::new()),
            next_uid: AtomicU64::new(1),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent call fail with `ProviderError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Returns a token the mock verifies as belonging to `uid`.
    pub fn token_for(&self, uid: &str) -> String {
        format!("{}{}", TOKEN_PREFIX, uid)
    }

    pub fn identity_count(&self) -> usize {
        self.identities.lock().unwrap().len()
    }

    pub fn has_identity(&self, uid: &str) -> bool {
        self.identities.lock().unwrap().contains_key(uid)
    }

    fn check_available(&self) -> Result<(), ProviderError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ProviderError::Unavailable("mock provider offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn create_identity(
        &self,
        identity: NewIdentity,
    ) -> Result<IdentityRecord, ProviderError> {
        self.check_available()?;

        let mut identities = self.identities.lock().unwrap();
        let taken = identities
            .values()
            .any(|r| r.email == identity.email || r.display_name == identity.display_name);
        if taken {
            return Err(ProviderError::Conflict);
        }

        let uid = format!("uid-{}", self.next_uid.fetch_add(1, Ordering::SeqCst));
        let record = IdentityRecord {
            uid: uid.clone(),
            email: identity.email,
            display_name: identity.display_name,
        };
        identities.insert(uid, record.clone());

        Ok(record)
    }

    async fn verify_token(&self, token: &str) -> Result<VerifiedClaims, ProviderError> {
        self.check_available()?;

        let uid = token
            .strip_prefix(TOKEN_PREFIX)
            .ok_or(ProviderError::InvalidToken)?;

        let identities = self.identities.lock().unwrap();
        let record = identities.get(uid).ok_or(ProviderError::InvalidToken)?;

        Ok(VerifiedClaims {
            uid: record.uid.clone(),
            email: record.email.clone(),
            issued_at: Utc::now(),
        })
    }

    async fn list_identities(&self) -> Result<Vec<IdentityRecord>, ProviderError> {
        self.check_available()?;

        Ok(self.identities.lock().unwrap().values().cloned().collect())
    }

    async fn delete_identities(&self, uids: &[String]) -> Result<(), ProviderError> {
        self.check_available()?;

        let mut identities = self.identities.lock().unwrap();
        for uid in uids {
            identities.remove(uid);
        }
        Ok(())
    }
}
