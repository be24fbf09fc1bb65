//! Domain models and operation-specific parameter types.
//!
//! Domain models are what the service and controller layers work with; entity
//! models stay behind the repository boundary. Parameter structs carry the
//! inputs of individual operations from controllers into services.

pub mod boat;
pub mod lifecycle;
pub mod race;
pub mod trail;
pub mod user;
