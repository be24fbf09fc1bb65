pub use super::boat::Entity as Boat;
pub use super::race::Entity as Race;
pub use super::trail::Entity as Trail;
pub use super::trail_point::Entity as TrailPoint;
pub use super::user::Entity as User;
pub use super::user_boat::Entity as UserBoat;
