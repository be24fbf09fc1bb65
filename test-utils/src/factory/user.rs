//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern, including arranging the soft-deleted and disabled
//! lifecycle states.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("sailor@example.com")
///     .external_uid("uid-42")
///     .display_name("Sailor")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    external_uid: String,
    display_name: String,
    deleted: bool,
    disabled: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - external_uid: `"uid-{id}"`
    /// - display_name: `"User {id}"`
    /// - deleted: `false`
    /// - disabled: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            external_uid: format!("uid-{}", id),
            display_name: format!("User {}", id),
            deleted: false,
            disabled: false,
        }
    }

    /// Sets the email for the user.
    ///
    /// # Arguments
    /// - `email` - Email address (stored as given; production code normalizes)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the provider uid for the user.
    ///
    /// # Arguments
    /// - `external_uid` - Opaque provider handle
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn external_uid(mut self, external_uid: impl Into<String>) -> Self {
        self.external_uid = external_uid.into();
        self
    }

    /// Sets the display name for the user.
    ///
    /// # Arguments
    /// - `display_name` - Display name for the user
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Marks the user as soft-deleted.
    ///
    /// # Arguments
    /// - `deleted` - Whether `deleted_at` should be set
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Marks the user as administratively disabled.
    ///
    /// # Arguments
    /// - `disabled` - Whether `disabled_at` should be set
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            external_uid: ActiveValue::Set(self.external_uid),
            display_name: ActiveValue::Set(self.display_name),
            last_seen_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            disabled_at: ActiveValue::Set(self.disabled.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific provider uid.
///
/// Shorthand for `UserFactory::new(db).external_uid(uid).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `external_uid` - Opaque provider handle
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_uid(
    db: &DatabaseConnection,
    external_uid: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).external_uid(external_uid).build().await
}
