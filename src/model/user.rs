//! User domain models and parameters.
//!
//! Provides the domain model for application users reconciled against the
//! external identity provider, plus parameter types for the account creation,
//! sign-in, and row insertion operations.

use chrono::{DateTime, Utc};

use crate::dto::user::UserDto;

/// Application user reconciled with an external identity.
///
/// Carries the provider handle (`external_uid`) alongside local profile and
/// lifecycle state. Rows with a set `deleted_at` never surface here through
/// the default repository scope; `disabled_at` does surface so administrative
/// views can distinguish suspended users.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Stored case-normalized (lowercase).
    pub email: String,
    /// Opaque handle into the identity provider.
    pub external_uid: String,
    pub display_name: String,
    /// Stamped on every successful sign-in; `None` until the first one.
    pub last_seen_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Administrative suspension marker; suspended users are invisible to the
    /// authentication scope but visible to administrative scopes.
    pub disabled_at: Option<DateTime<Utc>>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The provider handle and lifecycle markers stay server-side; the DTO
    /// carries only profile fields.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            display_name: self.display_name,
            last_seen_at: self.last_seen_at,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            external_uid: entity.external_uid,
            display_name: entity.display_name,
            last_seen_at: entity.last_seen_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            disabled_at: entity.disabled_at,
        }
    }
}

/// Parameters for inserting a user row after the provider accepted sign-up.
///
/// Rows are only ever created through the reconciliation service's account
/// creation flow, never speculatively.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    /// Case-normalized email, unique among all rows regardless of
    /// soft-delete state.
    pub email: String,
    /// Provider handle returned by `create_identity`.
    pub external_uid: String,
    /// Unique among all rows regardless of soft-delete state.
    pub display_name: String,
}

/// Parameters for the account creation (sign-up) flow.
#[derive(Debug, Clone)]
pub struct CreateAccountParam {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

/// Parameters for the sign-in flow.
///
/// `claimed_email` and `claimed_uid` come from the request body and are
/// cross-checked against the verified token claims; the token alone already
/// authenticates an identity, but a mismatching body must fail closed.
#[derive(Debug, Clone)]
pub struct SignInParam {
    pub claimed_email: String,
    pub claimed_uid: String,
    pub token: String,
}
