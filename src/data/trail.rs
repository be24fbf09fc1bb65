//! Trail data repository for database operations.
//!
//! Provides the `TrailRepository` for logged trails and their positions,
//! including the detach operation the lifecycle service runs when the owning
//! account is deleted.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::trail::{LogTrailParam, Trail, TrailPoint};

/// Repository providing database operations for trails.
pub struct TrailRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrailRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a trail with its logged positions.
    ///
    /// # Arguments
    /// - `param` - Trail details, owner id, and positions
    ///
    /// # Returns
    /// - `Ok(Trail)` - The created trail
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: LogTrailParam) -> Result<Trail, DbErr> {
        let trail = entity::trail::ActiveModel {
            user_id: ActiveValue::Set(Some(param.user_id)),
            name: ActiveValue::Set(param.name),
            started_at: ActiveValue::Set(param.started_at),
            ended_at: ActiveValue::Set(param.ended_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if !param.points.is_empty() {
            let points = param.points.into_iter().map(|p| entity::trail_point::ActiveModel {
                trail_id: ActiveValue::Set(trail.id),
                latitude: ActiveValue::Set(p.latitude),
                longitude: ActiveValue::Set(p.longitude),
                recorded_at: ActiveValue::Set(p.recorded_at),
                ..Default::default()
            });
            entity::prelude::TrailPoint::insert_many(points)
                .exec(self.db)
                .await?;
        }

        Ok(Trail::from_entity(trail))
    }

    /// Finds a trail by id together with its positions in recorded order.
    ///
    /// # Arguments
    /// - `id` - Trail id
    ///
    /// # Returns
    /// - `Ok(Some((Trail, Vec<TrailPoint>)))` - Trail and its positions
    /// - `Ok(None)` - No trail with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id_with_points(
        &self,
        id: i32,
    ) -> Result<Option<(Trail, Vec<TrailPoint>)>, DbErr> {
        let Some(trail) = entity::prelude::Trail::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let points = entity::prelude::TrailPoint::find()
            .filter(entity::trail_point::Column::TrailId.eq(id))
            .order_by_asc(entity::trail_point::Column::RecordedAt)
            .all(self.db)
            .await?;

        Ok(Some((
            Trail::from_entity(trail),
            points.into_iter().map(TrailPoint::from_entity).collect(),
        )))
    }

    /// Gets all trails owned by the given user, most recent first.
    ///
    /// # Arguments
    /// - `user_id` - Owning user id
    ///
    /// # Returns
    /// - `Ok(Vec<Trail>)` - Trails owned by that user
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Trail>, DbErr> {
        let entities = entity::prelude::Trail::find()
            .filter(entity::trail::Column::UserId.eq(user_id))
            .order_by_desc(entity::trail::Column::StartedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Trail::from_entity).collect())
    }

    /// Nulls the owner reference on every trail owned by the given user.
    ///
    /// Runs inside the lifecycle service's deletion transaction; the trails
    /// survive anonymized per their declared detachment policy.
    ///
    /// # Arguments
    /// - `user_id` - User id being deleted
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of trails detached
    /// - `Err(DbErr)` - Database error during update
    pub async fn detach_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Trail::update_many()
            .filter(entity::trail::Column::UserId.eq(user_id))
            .col_expr(
                entity::trail::Column::UserId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
