//! Boat service for business logic.
//!
//! Orchestrates boat registration and ownership queries between the
//! controllers and the boat repository.

use sea_orm::DatabaseConnection;

use crate::{
    data::boat::BoatRepository,
    error::AppError,
    model::boat::{Boat, RegisterBoatParam},
};

/// Service providing business logic for boats and ownership.
pub struct BoatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a boat to a user.
    ///
    /// Creates the boat and its ownership link. Sail numbers identify boats
    /// globally, so a taken sail number rejects the registration.
    ///
    /// # Arguments
    /// - `param` - Boat details and the registering user's id
    ///
    /// # Returns
    /// - `Ok(Boat)` - The registered boat
    /// - `Err(AppError::BadRequest)` - Sail number already registered
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, param: RegisterBoatParam) -> Result<Boat, AppError> {
        let repo = BoatRepository::new(self.db);

        if repo.find_by_sail_number(&param.sail_number).await?.is_some() {
            return Err(AppError::BadRequest(
                "A boat with that sail number is already registered.".to_string(),
            ));
        }

        let boat = repo.create(param.name, param.class, param.sail_number).await?;
        repo.link_owner(param.owner_id, boat.id).await?;

        Ok(boat)
    }

    /// Retrieves all boats the given user owns.
    ///
    /// # Arguments
    /// - `user_id` - Owning user id
    ///
    /// # Returns
    /// - `Ok(Vec<Boat>)` - Boats linked to the user
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user_boats(&self, user_id: i32) -> Result<Vec<Boat>, AppError> {
        let boats = BoatRepository::new(self.db).get_boats_for_user(user_id).await?;
        Ok(boats)
    }
}
