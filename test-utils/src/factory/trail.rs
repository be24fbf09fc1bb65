//! Trail factory for creating test trail and trail point entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trails with customizable fields.
pub struct TrailFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    name: String,
    started_at: chrono::DateTime<Utc>,
    ended_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> TrailFactory<'a> {
    /// Creates a new TrailFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `None`
    /// - name: `"Trail {id}"` where id is auto-incremented
    /// - started_at: two hours ago
    /// - ended_at: one hour ago
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TrailFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            user_id: None,
            name: format!("Trail {}", id),
            started_at: now - Duration::hours(2),
            ended_at: Some(now - Duration::hours(1)),
        }
    }

    /// Sets the owning user for the trail.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Sets the name for the trail.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the trail entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::trail::Model)` - Created trail entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::trail::Model, DbErr> {
        entity::trail::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            started_at: ActiveValue::Set(self.started_at),
            ended_at: ActiveValue::Set(self.ended_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a trail owned by the given user.
///
/// Shorthand for `TrailFactory::new(db).user_id(..).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owning user id, or `None` for an anonymized trail
///
/// # Returns
/// - `Ok(entity::trail::Model)` - Created trail entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_trail(
    db: &DatabaseConnection,
    user_id: Option<i32>,
) -> Result<entity::trail::Model, DbErr> {
    let mut factory = TrailFactory::new(db);
    if let Some(user_id) = user_id {
        factory = factory.user_id(user_id);
    }
    factory.build().await
}

/// Creates a logged position on the given trail.
///
/// # Arguments
/// - `db` - Database connection
/// - `trail_id` - Trail the position belongs to
/// - `latitude` - Latitude in decimal degrees
/// - `longitude` - Longitude in decimal degrees
///
/// # Returns
/// - `Ok(entity::trail_point::Model)` - Created trail point entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_trail_point(
    db: &DatabaseConnection,
    trail_id: i32,
    latitude: f64,
    longitude: f64,
) -> Result<entity::trail_point::Model, DbErr> {
    entity::trail_point::ActiveModel {
        trail_id: ActiveValue::Set(trail_id),
        latitude: ActiveValue::Set(latitude),
        longitude: ActiveValue::Set(longitude),
        recorded_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
