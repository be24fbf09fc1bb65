//! HTTP request handlers.
//!
//! Controllers validate request shapes, resolve the current user through the
//! auth guard where required, convert DTOs to operation parameters, call the
//! service layer, and convert domain models back to DTOs.

pub mod account;
pub mod boat;
pub mod race;
pub mod trail;
