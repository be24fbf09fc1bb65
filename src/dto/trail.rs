use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TrailDto {
    pub id: i32,
    /// `null` after the owning account was deleted.
    pub user_id: Option<i32>,
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub points: Vec<TrailPointDto>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TrailPointDto {
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LogTrailDto {
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub points: Vec<LogTrailPointDto>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LogTrailPointDto {
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: DateTime<Utc>,
}
