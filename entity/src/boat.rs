use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "boat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Boat class or model designation, e.g. "Laser" or "J/70".
    pub class: String,
    #[sea_orm(unique)]
    pub sail_number: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_boat::Entity")]
    UserBoat,
}

impl Related<super::user_boat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBoat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
