use super::*;
use test_utils::factory;

/// Tests detaching a user from their trails.
///
/// Verifies that the trails survive anonymized with their positions intact
/// while other users' trails keep their attribution.
///
/// Expected: Ok(1) with the trail's owner nulled and points preserved
#[tokio::test]
async fn nulls_owner_and_keeps_trail() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let trail = factory::create_trail(db, Some(user.id)).await?;
    let other_trail = factory::create_trail(db, Some(other.id)).await?;
    factory::create_trail_point(db, trail.id, 54.32, 10.14).await?;

    let repo = TrailRepository::new(db);
    let detached = repo.detach_user(user.id).await?;

    assert_eq!(detached, 1);

    let (stored, points) = repo.find_by_id_with_points(trail.id).await?.unwrap();
    assert_eq!(stored.user_id, None);
    assert_eq!(points.len(), 1);

    let (stored_other, _) = repo.find_by_id_with_points(other_trail.id).await?.unwrap();
    assert_eq!(stored_other.user_id, Some(other.id));

    Ok(())
}

/// Tests that detached trails drop out of the owner's listing.
///
/// Expected: Ok with an empty list after detachment
#[tokio::test]
async fn detached_trails_leave_user_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_trail(db, Some(user.id)).await?;

    let repo = TrailRepository::new(db);
    repo.detach_user(user.id).await?;

    let trails = repo.get_by_user(user.id).await?;
    assert!(trails.is_empty());

    Ok(())
}
