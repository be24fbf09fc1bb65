//! Race data repository for database operations.
//!
//! Provides the `RaceRepository` for creating, querying, and updating races,
//! plus the detach operation the lifecycle service runs when an organizer's
//! account is deleted.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::race::{CreateRaceParam, Race, UpdateRaceParam};

/// Repository providing database operations for races.
pub struct RaceRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RaceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new race.
    ///
    /// # Arguments
    /// - `param` - Race details and the organizing user's id
    ///
    /// # Returns
    /// - `Ok(Race)` - The created race
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateRaceParam) -> Result<Race, DbErr> {
        let now = Utc::now();

        let entity = entity::race::ActiveModel {
            name: ActiveValue::Set(param.name),
            location: ActiveValue::Set(param.location),
            description: ActiveValue::Set(param.description),
            starts_at: ActiveValue::Set(param.starts_at),
            organizer_id: ActiveValue::Set(Some(param.organizer_id)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Race::from_entity(entity))
    }

    /// Finds a race by id.
    ///
    /// # Arguments
    /// - `id` - Race id
    ///
    /// # Returns
    /// - `Ok(Some(Race))` - Race found
    /// - `Ok(None)` - No race with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Race>, DbErr> {
        let entity = entity::prelude::Race::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Race::from_entity))
    }

    /// Gets all races ordered by start time.
    ///
    /// # Returns
    /// - `Ok(Vec<Race>)` - All races, soonest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Race>, DbErr> {
        let entities = entity::prelude::Race::find()
            .order_by_asc(entity::race::Column::StartsAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Race::from_entity).collect())
    }

    /// Gets all races organized by the given user, soonest first.
    ///
    /// # Arguments
    /// - `organizer_id` - User id of the organizer
    ///
    /// # Returns
    /// - `Ok(Vec<Race>)` - Races organized by that user
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_organizer(&self, organizer_id: i32) -> Result<Vec<Race>, DbErr> {
        let entities = entity::prelude::Race::find()
            .filter(entity::race::Column::OrganizerId.eq(organizer_id))
            .order_by_asc(entity::race::Column::StartsAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Race::from_entity).collect())
    }

    /// Updates a race's details.
    ///
    /// # Arguments
    /// - `id` - Race id
    /// - `param` - New race details
    ///
    /// # Returns
    /// - `Ok(Some(Race))` - The updated race
    /// - `Ok(None)` - No race with that id
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, id: i32, param: UpdateRaceParam) -> Result<Option<Race>, DbErr> {
        let Some(existing) = entity::prelude::Race::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::race::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.location = ActiveValue::Set(param.location);
        active.description = ActiveValue::Set(param.description);
        active.starts_at = ActiveValue::Set(param.starts_at);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Race::from_entity(entity)))
    }

    /// Nulls the organizer reference on every race organized by the given
    /// user.
    ///
    /// Runs inside the lifecycle service's deletion transaction; the races
    /// survive anonymized per their declared detachment policy.
    ///
    /// # Arguments
    /// - `organizer_id` - User id being deleted
    /// - `now` - Timestamp for the `updated_at` stamp
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of races detached
    /// - `Err(DbErr)` - Database error during update
    pub async fn detach_organizer(
        &self,
        organizer_id: i32,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Race::update_many()
            .filter(entity::race::Column::OrganizerId.eq(organizer_id))
            .col_expr(
                entity::race::Column::OrganizerId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .col_expr(
                entity::race::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
