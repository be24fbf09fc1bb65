//! Ownership link factory for creating test user-boat links.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a live ownership link between a user and a boat.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user id
/// - `boat_id` - Boat id
///
/// # Returns
/// - `Ok(entity::user_boat::Model)` - Created ownership link
/// - `Err(DbErr)` - Database error during insert
pub async fn create_ownership(
    db: &DatabaseConnection,
    user_id: i32,
    boat_id: i32,
) -> Result<entity::user_boat::Model, DbErr> {
    entity::user_boat::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        boat_id: ActiveValue::Set(boat_id),
        created_at: ActiveValue::Set(Utc::now()),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
