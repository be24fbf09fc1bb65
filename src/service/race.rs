//! Race service for business logic.
//!
//! Orchestrates race creation, queries, and organizer-only updates between
//! the controllers and the race repository.

use sea_orm::DatabaseConnection;

use crate::{
    data::race::RaceRepository,
    error::{auth::AuthError, AppError},
    model::race::{CreateRaceParam, Race, UpdateRaceParam},
};

/// Service providing business logic for races.
pub struct RaceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RaceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a race organized by the given user.
    ///
    /// # Arguments
    /// - `param` - Race details and organizer id
    ///
    /// # Returns
    /// - `Ok(Race)` - The created race
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateRaceParam) -> Result<Race, AppError> {
        let race = RaceRepository::new(self.db).create(param).await?;
        Ok(race)
    }

    /// Retrieves all races, soonest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Race>)` - All races
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Race>, AppError> {
        let races = RaceRepository::new(self.db).get_all().await?;
        Ok(races)
    }

    /// Retrieves a race by id.
    ///
    /// # Arguments
    /// - `id` - Race id
    ///
    /// # Returns
    /// - `Ok(Race)` - The race
    /// - `Err(AppError::NotFound)` - No race with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Race, AppError> {
        let race = RaceRepository::new(self.db).find_by_id(id).await?;
        race.ok_or_else(|| AppError::NotFound("Race not found".to_string()))
    }

    /// Updates a race on behalf of its organizer.
    ///
    /// Only the recorded organizer may update a race; a race whose organizer
    /// reference was detached by an account deletion has no organizer and can
    /// no longer be updated through this path.
    ///
    /// # Arguments
    /// - `id` - Race id
    /// - `requester_id` - Authenticated caller's user id
    /// - `param` - New race details
    ///
    /// # Returns
    /// - `Ok(Race)` - The updated race
    /// - `Err(AppError::NotFound)` - No race with that id
    /// - `Err(AuthError::Authorization)` - Caller is not the organizer
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        id: i32,
        requester_id: i32,
        param: UpdateRaceParam,
    ) -> Result<Race, AppError> {
        let repo = RaceRepository::new(self.db);

        let Some(race) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Race not found".to_string()));
        };

        if race.organizer_id != Some(requester_id) {
            return Err(AuthError::Authorization.into());
        }

        let updated = repo.update(id, param).await?;
        updated.ok_or_else(|| AppError::NotFound("Race not found".to_string()))
    }
}
