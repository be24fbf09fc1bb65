use super::*;
use chrono::{Duration, Utc};
use test_utils::factory;

/// Tests updating a race's details.
///
/// Expected: Ok(Some(Race)) with the new values and the organizer unchanged
#[tokio::test]
async fn updates_race_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let race = factory::create_race(db, Some(user.id)).await?;

    let repo = RaceRepository::new(db);
    let result = repo
        .update(
            race.id,
            UpdateRaceParam {
                name: "Renamed Regatta".to_string(),
                location: "Palma".to_string(),
                description: None,
                starts_at: Utc::now() + Duration::days(30),
            },
        )
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap().unwrap();
    assert_eq!(updated.name, "Renamed Regatta");
    assert_eq!(updated.location, "Palma");
    assert_eq!(updated.organizer_id, Some(user.id));

    Ok(())
}

/// Tests updating a race that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_race() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RaceRepository::new(db);
    let result = repo
        .update(
            9999,
            UpdateRaceParam {
                name: "Ghost".to_string(),
                location: "Nowhere".to_string(),
                description: None,
                starts_at: Utc::now(),
            },
        )
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
