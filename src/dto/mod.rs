//! Request and response DTOs for the HTTP surface.
//!
//! DTOs are the wire shapes: serde for (de)serialization and utoipa schemas
//! for the OpenAPI document. Conversion to and from domain models happens at
//! the controller boundary.

pub mod api;
pub mod boat;
pub mod race;
pub mod trail;
pub mod user;
