//! Race factory for creating test race entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test races with customizable fields.
pub struct RaceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: String,
    description: Option<String>,
    starts_at: chrono::DateTime<Utc>,
    organizer_id: Option<i32>,
}

impl<'a> RaceFactory<'a> {
    /// Creates a new RaceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Race {id}"` where id is auto-incremented
    /// - location: `"Lake Geneva"`
    /// - description: `None`
    /// - starts_at: one week from now
    /// - organizer_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RaceFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Race {}", id),
            location: "Lake Geneva".to_string(),
            description: None,
            starts_at: Utc::now() + Duration::days(7),
            organizer_id: None,
        }
    }

    /// Sets the name for the race.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the organizer for the race.
    pub fn organizer_id(mut self, organizer_id: i32) -> Self {
        self.organizer_id = Some(organizer_id);
        self
    }

    /// Sets the start time for the race.
    pub fn starts_at(mut self, starts_at: chrono::DateTime<Utc>) -> Self {
        self.starts_at = starts_at;
        self
    }

    /// Builds and inserts the race entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::race::Model)` - Created race entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::race::Model, DbErr> {
        let now = Utc::now();
        entity::race::ActiveModel {
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            description: ActiveValue::Set(self.description),
            starts_at: ActiveValue::Set(self.starts_at),
            organizer_id: ActiveValue::Set(self.organizer_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a race with the given organizer.
///
/// Shorthand for `RaceFactory::new(db).organizer_id(..).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `organizer_id` - Organizing user id, or `None` for an unattributed race
///
/// # Returns
/// - `Ok(entity::race::Model)` - Created race entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_race(
    db: &DatabaseConnection,
    organizer_id: Option<i32>,
) -> Result<entity::race::Model, DbErr> {
    let mut factory = RaceFactory::new(db);
    if let Some(organizer_id) = organizer_id {
        factory = factory.organizer_id(organizer_id);
    }
    factory.build().await
}
