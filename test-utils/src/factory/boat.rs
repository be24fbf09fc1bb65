//! Boat factory for creating test boat entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test boats with customizable fields.
pub struct BoatFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    class: String,
    sail_number: String,
}

impl<'a> BoatFactory<'a> {
    /// Creates a new BoatFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Boat {id}"` where id is auto-incremented
    /// - class: `"Laser"`
    /// - sail_number: `"SUI-{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `BoatFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Boat {}", id),
            class: "Laser".to_string(),
            sail_number: format!("SUI-{}", id),
        }
    }

    /// Sets the name for the boat.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the class for the boat.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Sets the sail number for the boat.
    pub fn sail_number(mut self, sail_number: impl Into<String>) -> Self {
        self.sail_number = sail_number.into();
        self
    }

    /// Builds and inserts the boat entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::boat::Model)` - Created boat entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::boat::Model, DbErr> {
        entity::boat::ActiveModel {
            name: ActiveValue::Set(self.name),
            class: ActiveValue::Set(self.class),
            sail_number: ActiveValue::Set(self.sail_number),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a boat with default values.
///
/// Shorthand for `BoatFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::boat::Model)` - Created boat entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_boat(db: &DatabaseConnection) -> Result<entity::boat::Model, DbErr> {
    BoatFactory::new(db).build().await
}
