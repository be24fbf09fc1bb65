use super::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use test_utils::factory;

/// Tests creating a boat and finding it by sail number.
///
/// Expected: Ok with the boat retrievable by its sail number
#[tokio::test]
async fn creates_and_finds_by_sail_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoatRepository::new(db);
    let boat = repo
        .create(
            "Wavedancer".to_string(),
            "J/70".to_string(),
            "GER-1234".to_string(),
        )
        .await?;

    let found = repo.find_by_sail_number("GER-1234").await?;

    assert_eq!(found.unwrap().id, boat.id);

    Ok(())
}

/// Tests looking up an unknown sail number.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_sail_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoatRepository::new(db);
    let found = repo.find_by_sail_number("XXX-0000").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests linking a user to a boat.
///
/// Expected: Ok with a live ownership link
#[tokio::test]
async fn links_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let boat = factory::create_boat(db).await?;

    let repo = BoatRepository::new(db);
    repo.link_owner(user.id, boat.id).await?;

    let link = entity::prelude::UserBoat::find()
        .filter(entity::user_boat::Column::UserId.eq(user.id))
        .filter(entity::user_boat::Column::BoatId.eq(boat.id))
        .one(db)
        .await?
        .unwrap();
    assert!(link.deleted_at.is_none());

    Ok(())
}
