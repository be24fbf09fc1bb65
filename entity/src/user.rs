use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Stored lowercased; unique across all rows including soft-deleted ones.
    #[sea_orm(unique)]
    pub email: String,
    /// Opaque handle into the identity provider.
    #[sea_orm(unique)]
    pub external_uid: String,
    #[sea_orm(unique)]
    pub display_name: String,
    pub last_seen_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    /// Soft-delete marker; a set value is terminal.
    pub deleted_at: Option<DateTimeUtc>,
    /// Administrative suspension marker; reversible.
    pub disabled_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::race::Entity")]
    Race,
    #[sea_orm(has_many = "super::trail::Entity")]
    Trail,
    #[sea_orm(has_many = "super::user_boat::Entity")]
    UserBoat,
}

impl Related<super::race::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Race.def()
    }
}

impl Related<super::trail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trail.def()
    }
}

impl Related<super::user_boat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserBoat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
