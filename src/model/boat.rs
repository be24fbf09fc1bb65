//! Boat domain models and parameters.

use chrono::{DateTime, Utc};

use crate::dto::boat::BoatDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Boat {
    pub id: i32,
    pub name: String,
    pub class: String,
    pub sail_number: String,
    pub created_at: DateTime<Utc>,
}

impl Boat {
    pub fn into_dto(self) -> BoatDto {
        BoatDto {
            id: self.id,
            name: self.name,
            class: self.class,
            sail_number: self.sail_number,
        }
    }

    pub fn from_entity(entity: entity::boat::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            class: entity.class,
            sail_number: entity.sail_number,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for registering a boat to a user.
#[derive(Debug, Clone)]
pub struct RegisterBoatParam {
    pub name: String,
    pub class: String,
    pub sail_number: String,
    pub owner_id: i32,
}
