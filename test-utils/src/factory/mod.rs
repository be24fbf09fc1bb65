//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let race = factory::race::create_race(&db, Some(user.id)).await?;
//!
//!     // Create a user together with a registered boat
//!     let (user, boat) = factory::helpers::create_user_with_boat(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::user::UserFactory;
//!
//! let user = UserFactory::new(&db)
//!     .email("sailor@example.com")
//!     .display_name("Sailor")
//!     .disabled(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities, including soft-deleted and disabled ones
//! - `boat` - Create boat entities
//! - `user_boat` - Create user-boat ownership links
//! - `race` - Create race entities
//! - `trail` - Create trail and trail point entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod boat;
pub mod helpers;
pub mod race;
pub mod trail;
pub mod user;
pub mod user_boat;

// Re-export commonly used factory functions for concise usage
pub use boat::create_boat;
pub use race::create_race;
pub use trail::{create_trail, create_trail_point};
pub use user::create_user;
pub use user_boat::create_ownership;
