//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It owns the row-visibility scoping: application-facing queries exclude soft-deleted
//! rows by default, and the authentication-visible scope additionally excludes disabled
//! rows. Calling code never filters on the lifecycle columns itself, so deleted,
//! disabled, and never-existed users are structurally indistinguishable to it.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    Select,
};

use crate::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
///
/// Generic over the connection so the lifecycle service can run the same
/// operations inside its deletion transaction.
pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Default application-facing scope: excludes soft-deleted rows.
    fn visible() -> Select<entity::prelude::User> {
        entity::prelude::User::find().filter(entity::user::Column::DeletedAt.is_null())
    }

    /// Authentication-visible scope: additionally excludes disabled rows.
    fn auth_visible() -> Select<entity::prelude::User> {
        Self::visible().filter(entity::user::Column::DisabledAt.is_null())
    }

    /// Inserts a new user row.
    ///
    /// Called only from the account creation flow after the identity provider
    /// accepted the sign-up. The row starts with `last_seen_at` unset; it is
    /// stamped by the first successful sign-in.
    ///
    /// # Arguments
    /// - `param` - Email (case-normalized), provider uid, and display name
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert; uniqueness violations on
    ///   email, external uid, or display name surface here (uniqueness spans
    ///   all rows including soft-deleted ones)
    pub async fn insert(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            external_uid: ActiveValue::Set(param.external_uid),
            display_name: ActiveValue::Set(param.display_name),
            last_seen_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            disabled_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by provider uid in the authentication-visible scope.
    ///
    /// Soft-deleted and disabled rows are excluded, so to the caller they are
    /// indistinguishable from rows that never existed.
    ///
    /// # Arguments
    /// - `external_uid` - Provider uid from verified token claims
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Active, non-disabled user found
    /// - `Ok(None)` - No such user, or the user is soft-deleted or disabled
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_auth_by_external_uid(
        &self,
        external_uid: &str,
    ) -> Result<Option<User>, DbErr> {
        let entity = Self::auth_visible()
            .filter(entity::user::Column::ExternalUid.eq(external_uid))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by id in the default scope (soft-deleted rows excluded,
    /// disabled rows included).
    ///
    /// # Arguments
    /// - `id` - User id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Non-deleted user found
    /// - `Ok(None)` - No such user, or the user is soft-deleted
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = Self::visible()
            .filter(entity::user::Column::Id.eq(id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Stamps a user's last sign-in time.
    ///
    /// # Arguments
    /// - `id` - User id
    /// - `now` - Timestamp of the successful sign-in
    ///
    /// # Returns
    /// - `Ok(())` - Timestamp updated (or no matching row)
    /// - `Err(DbErr)` - Database error during update
    pub async fn touch_last_seen(&self, id: i32, now: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::LastSeenAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Soft-deletes a user row.
    ///
    /// Sets `deleted_at` on the row if it is not already set. The filter on
    /// `deleted_at IS NULL` means a concurrent deleter observes zero affected
    /// rows rather than a second successful delete.
    ///
    /// # Arguments
    /// - `id` - User id
    /// - `now` - Deletion timestamp
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows marked deleted (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: i32, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::DeletedAt.is_null())
            .col_expr(
                entity::user::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
