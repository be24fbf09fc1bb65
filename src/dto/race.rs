use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RaceDto {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    /// `null` when the race has no attributed organizer, including after the
    /// organizer's account was deleted.
    pub organizer_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateRaceDto {
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateRaceDto {
    pub name: String,
    pub location: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
}
