use super::*;
use chrono::Utc;
use test_utils::factory;

/// Tests detaching an organizer from their races.
///
/// Verifies that every race organized by the user has its organizer nulled
/// while races organized by other users keep their attribution.
///
/// Expected: Ok(2) with only the target user's races anonymized
#[tokio::test]
async fn nulls_only_target_users_races() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let race_a = factory::create_race(db, Some(user.id)).await?;
    let race_b = factory::create_race(db, Some(user.id)).await?;
    let race_other = factory::create_race(db, Some(other.id)).await?;

    let repo = RaceRepository::new(db);
    let detached = repo.detach_organizer(user.id, Utc::now()).await?;

    assert_eq!(detached, 2);

    let stored_a = repo.find_by_id(race_a.id).await?.unwrap();
    let stored_b = repo.find_by_id(race_b.id).await?.unwrap();
    let stored_other = repo.find_by_id(race_other.id).await?.unwrap();

    assert_eq!(stored_a.organizer_id, None);
    assert_eq!(stored_b.organizer_id, None);
    assert_eq!(stored_other.organizer_id, Some(other.id));

    Ok(())
}
