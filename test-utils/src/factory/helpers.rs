//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a boat they own.
///
/// Creates a user, a boat, and the ownership link between them, all with
/// default values. Use the individual factories if you need to customize
/// specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, boat))` - Tuple of the created user and boat
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_boat(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::boat::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let boat = crate::factory::boat::create_boat(db).await?;
    crate::factory::user_boat::create_ownership(db, user.id, boat.id).await?;

    Ok((user, boat))
}
