use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct BoatDto {
    pub id: i32,
    pub name: String,
    pub class: String,
    pub sail_number: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RegisterBoatDto {
    pub name: String,
    pub class: String,
    pub sail_number: String,
}
