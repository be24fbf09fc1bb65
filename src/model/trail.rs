//! Trail domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::trail::{TrailDto, TrailPointDto};

/// A logged sailing trail.
///
/// `user_id` is `None` after the owning account was deleted; the trail
/// survives anonymized.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    pub id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Trail {
    pub fn into_dto(self, points: Vec<TrailPoint>) -> TrailDto {
        TrailDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            started_at: self.started_at,
            ended_at: self.ended_at,
            points: points.into_iter().map(TrailPoint::into_dto).collect(),
        }
    }

    pub fn from_entity(entity: entity::trail::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            started_at: entity.started_at,
            ended_at: entity.ended_at,
            created_at: entity.created_at,
        }
    }
}

/// A single logged position on a trail.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailPoint {
    pub id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: DateTime<Utc>,
}

impl TrailPoint {
    pub fn into_dto(self) -> TrailPointDto {
        TrailPointDto {
            latitude: self.latitude,
            longitude: self.longitude,
            recorded_at: self.recorded_at,
        }
    }

    pub fn from_entity(entity: entity::trail_point::Model) -> Self {
        Self {
            id: entity.id,
            latitude: entity.latitude,
            longitude: entity.longitude,
            recorded_at: entity.recorded_at,
        }
    }
}

/// Parameters for logging a trail with its positions.
#[derive(Debug, Clone)]
pub struct LogTrailParam {
    pub user_id: i32,
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub points: Vec<LogTrailPointParam>,
}

/// One position in a trail being logged.
#[derive(Debug, Clone)]
pub struct LogTrailPointParam {
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: DateTime<Utc>,
}
