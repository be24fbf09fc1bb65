//! Boat data repository for database operations.
//!
//! Provides the `BoatRepository` for the boat registry and the `user_boat`
//! ownership links, including the cascade soft-delete the lifecycle service
//! runs when an owner's account is deleted.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::boat::Boat;

/// Repository providing database operations for boats and ownership links.
pub struct BoatRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoatRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new boat in the registry.
    ///
    /// # Arguments
    /// - `name` - Boat name
    /// - `class` - Boat class designation
    /// - `sail_number` - Unique sail number
    ///
    /// # Returns
    /// - `Ok(Boat)` - The created boat
    /// - `Err(DbErr)` - Database error during insert; sail number uniqueness
    ///   violations surface here
    pub async fn create(&self, name: String, class: String, sail_number: String) -> Result<Boat, DbErr> {
        let entity = entity::boat::ActiveModel {
            name: ActiveValue::Set(name),
            class: ActiveValue::Set(class),
            sail_number: ActiveValue::Set(sail_number),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Boat::from_entity(entity))
    }

    /// Finds a boat by sail number.
    ///
    /// # Arguments
    /// - `sail_number` - Sail number to look up
    ///
    /// # Returns
    /// - `Ok(Some(Boat))` - Boat found
    /// - `Ok(None)` - No boat with that sail number
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_sail_number(&self, sail_number: &str) -> Result<Option<Boat>, DbErr> {
        let entity = entity::prelude::Boat::find()
            .filter(entity::boat::Column::SailNumber.eq(sail_number))
            .one(self.db)
            .await?;

        Ok(entity.map(Boat::from_entity))
    }

    /// Links a user to a boat as an owner.
    ///
    /// # Arguments
    /// - `user_id` - Owning user id
    /// - `boat_id` - Boat id
    ///
    /// # Returns
    /// - `Ok(())` - Link created
    /// - `Err(DbErr)` - Database error during insert; the (user, boat) pair
    ///   is unique
    pub async fn link_owner(&self, user_id: i32, boat_id: i32) -> Result<(), DbErr> {
        entity::user_boat::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            boat_id: ActiveValue::Set(boat_id),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Gets all boats the given user owns through live ownership links.
    ///
    /// Soft-deleted links are excluded, so boats whose link was cascaded away
    /// by an account deletion no longer appear.
    ///
    /// # Arguments
    /// - `user_id` - Owning user id
    ///
    /// # Returns
    /// - `Ok(Vec<Boat>)` - Boats linked to the user, by name
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_boats_for_user(&self, user_id: i32) -> Result<Vec<Boat>, DbErr> {
        let entities = entity::prelude::Boat::find()
            .join(JoinType::InnerJoin, entity::boat::Relation::UserBoat.def())
            .filter(entity::user_boat::Column::UserId.eq(user_id))
            .filter(entity::user_boat::Column::DeletedAt.is_null())
            .order_by_asc(entity::boat::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Boat::from_entity).collect())
    }

    /// Soft-deletes every ownership link held by the given user.
    ///
    /// Runs inside the lifecycle service's deletion transaction; ownership
    /// links have no meaning without their owner, so their declared policy is
    /// cascade soft-delete rather than detach.
    ///
    /// # Arguments
    /// - `user_id` - User id being deleted
    /// - `now` - Deletion timestamp
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of links soft-deleted
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete_links_by_user(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::UserBoat::update_many()
            .filter(entity::user_boat::Column::UserId.eq(user_id))
            .filter(entity::user_boat::Column::DeletedAt.is_null())
            .col_expr(
                entity::user_boat::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
