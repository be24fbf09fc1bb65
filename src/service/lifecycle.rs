//! Ownership lifecycle service.
//!
//! Owns account deletion: soft-deleting the user row and propagating the
//! deletion to owned resources according to each resource type's declared
//! detachment policy, all inside one store transaction. Either the user is
//! marked deleted and every dependent reference is detached together, or
//! nothing happens.

use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    data::{boat::BoatRepository, race::RaceRepository, trail::TrailRepository, user::UserRepository},
    error::{account::AccountError, auth::AuthError, AppError},
    model::lifecycle::{DetachPolicy, OwnedResource},
};

/// Service executing transactional account deletion.
pub struct LifecycleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LifecycleService<'a> {
    /// Creates a new LifecycleService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LifecycleService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes a user account and detaches everything it owns.
    ///
    /// Runs fetch, ownership check, soft-delete, and detachment inside one
    /// transaction. A target that does not exist, including one already
    /// soft-deleted, is treated as already satisfied and succeeds with no
    /// state change. A requester other than the target aborts with no
    /// visible effects. The transaction's isolation guarantees a concurrent
    /// deleter of the same row observes "not found" rather than a second
    /// successful delete.
    ///
    /// # Arguments
    /// - `requester_id` - Authenticated caller's user id
    /// - `target_id` - User id to delete
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted, or target was already gone
    /// - `Err(AuthError::Authorization)` - Requester is not the target
    /// - `Err(AccountError::Transaction)` - Store failure; everything rolled
    ///   back
    pub async fn delete_account(&self, requester_id: i32, target_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await.map_err(AccountError::Transaction)?;

        let user_repo = UserRepository::new(&txn);
        let target = user_repo
            .find_active_by_id(target_id)
            .await
            .map_err(AccountError::Transaction)?;

        // Deleting something already gone is not an error.
        let Some(target) = target else {
            txn.commit().await.map_err(AccountError::Transaction)?;
            return Ok(());
        };

        if requester_id != target.id {
            txn.rollback().await.map_err(AccountError::Transaction)?;
            return Err(AuthError::Authorization.into());
        }

        let now = Utc::now();
        user_repo
            .soft_delete(target.id, now)
            .await
            .map_err(AccountError::Transaction)?;

        for resource in OwnedResource::ALL {
            let rows = match resource.policy() {
                DetachPolicy::Detach => {
                    Self::null_owner_reference(&txn, resource, target.id, now).await
                }
                DetachPolicy::CascadeSoftDelete => {
                    Self::soft_delete_dependents(&txn, resource, target.id, now).await
                }
            }
            .map_err(AccountError::Transaction)?;

            tracing::debug!(?resource, rows, "Propagated account deletion");
        }

        txn.commit().await.map_err(AccountError::Transaction)?;

        Ok(())
    }

    /// Nulls the user reference on a detach-policy resource.
    ///
    /// # Arguments
    /// - `db` - The open deletion transaction
    /// - `resource` - Resource type declaring `DetachPolicy::Detach`
    /// - `user_id` - User id being deleted
    /// - `now` - Deletion timestamp
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows detached
    /// - `Err(DbErr)` - Database error during update
    async fn null_owner_reference<C: ConnectionTrait>(
        db: &C,
        resource: OwnedResource,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        match resource {
            OwnedResource::Race => RaceRepository::new(db).detach_organizer(user_id, now).await,
            OwnedResource::Trail => TrailRepository::new(db).detach_user(user_id).await,
            // Declares CascadeSoftDelete; never dispatched here.
            OwnedResource::BoatOwnership => Ok(0),
        }
    }

    /// Soft-deletes the rows of a cascade-policy resource.
    ///
    /// # Arguments
    /// - `db` - The open deletion transaction
    /// - `resource` - Resource type declaring `DetachPolicy::CascadeSoftDelete`
    /// - `user_id` - User id being deleted
    /// - `now` - Deletion timestamp
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows soft-deleted
    /// - `Err(DbErr)` - Database error during update
    async fn soft_delete_dependents<C: ConnectionTrait>(
        db: &C,
        resource: OwnedResource,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        match resource {
            OwnedResource::BoatOwnership => {
                BoatRepository::new(db)
                    .soft_delete_links_by_user(user_id, now)
                    .await
            }
            // Declare Detach; never dispatched here.
            OwnedResource::Race | OwnedResource::Trail => Ok(0),
        }
    }
}
