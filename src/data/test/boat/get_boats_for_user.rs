use super::*;
use chrono::Utc;
use test_utils::factory;

/// Tests listing a user's boats through live ownership links.
///
/// Expected: Ok with only the boats linked to that user
#[tokio::test]
async fn returns_only_linked_boats() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, boat) = factory::helpers::create_user_with_boat(db).await?;
    let (_other_user, _other_boat) = factory::helpers::create_user_with_boat(db).await?;

    let repo = BoatRepository::new(db);
    let boats = repo.get_boats_for_user(user.id).await?;

    assert_eq!(boats.len(), 1);
    assert_eq!(boats[0].id, boat.id);

    Ok(())
}

/// Tests that soft-deleted ownership links are excluded.
///
/// Expected: Ok with an empty list after the links were cascaded away
#[tokio::test]
async fn excludes_soft_deleted_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _boat) = factory::helpers::create_user_with_boat(db).await?;

    let repo = BoatRepository::new(db);
    repo.soft_delete_links_by_user(user.id, Utc::now()).await?;

    let boats = repo.get_boats_for_user(user.id).await?;

    assert!(boats.is_empty());

    Ok(())
}
