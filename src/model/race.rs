//! Race domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::race::RaceDto;

/// A community race event.
///
/// `organizer_id` is `None` either because the race was created without an
/// organizer on record or because the organizer's account was deleted and the
/// race survived anonymized.
#[derive(Debug, Clone, PartialEq)]
pub struct Race {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub organizer_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Race {
    pub fn into_dto(self) -> RaceDto {
        RaceDto {
            id: self.id,
            name: self.name,
            location: self.location,
            description: self.description,
            starts_at: self.starts_at,
            organizer_id: self.organizer_id,
        }
    }

    pub fn from_entity(entity: entity::race::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            description: entity.description,
            starts_at: entity.starts_at,
            organizer_id: entity.organizer_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for creating a race.
#[derive(Debug, Clone)]
pub struct CreateRaceParam {
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub organizer_id: i32,
}

/// Parameters for updating a race's details.
#[derive(Debug, Clone)]
pub struct UpdateRaceParam {
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
}
