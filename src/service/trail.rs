//! Trail service for business logic.
//!
//! Orchestrates trail logging and queries between the controllers and the
//! trail repository.

use sea_orm::DatabaseConnection;

use crate::{
    data::trail::TrailRepository,
    error::AppError,
    model::trail::{LogTrailParam, Trail, TrailPoint},
};

/// Service providing business logic for trails.
pub struct TrailService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrailService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs a trail with its positions for the given user.
    ///
    /// # Arguments
    /// - `param` - Trail details, owner id, and positions
    ///
    /// # Returns
    /// - `Ok((Trail, Vec<TrailPoint>))` - The logged trail with its stored
    ///   positions in recorded order
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn log(&self, param: LogTrailParam) -> Result<(Trail, Vec<TrailPoint>), AppError> {
        let repo = TrailRepository::new(self.db);
        let trail = repo.create(param).await?;

        let stored = repo.find_by_id_with_points(trail.id).await?;
        stored.ok_or_else(|| AppError::NotFound("Trail not found".to_string()))
    }

    /// Retrieves a trail with its positions.
    ///
    /// # Arguments
    /// - `id` - Trail id
    ///
    /// # Returns
    /// - `Ok((Trail, Vec<TrailPoint>))` - Trail and positions in recorded order
    /// - `Err(AppError::NotFound)` - No trail with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<(Trail, Vec<TrailPoint>), AppError> {
        let trail = TrailRepository::new(self.db).find_by_id_with_points(id).await?;
        trail.ok_or_else(|| AppError::NotFound("Trail not found".to_string()))
    }

    /// Retrieves all trails owned by the given user, most recent first.
    ///
    /// # Arguments
    /// - `user_id` - Owning user id
    ///
    /// # Returns
    /// - `Ok(Vec<Trail>)` - Trails owned by that user
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user_trails(&self, user_id: i32) -> Result<Vec<Trail>, AppError> {
        let trails = TrailRepository::new(self.db).get_by_user(user_id).await?;
        Ok(trails)
    }
}
