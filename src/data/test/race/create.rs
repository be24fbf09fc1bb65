use super::*;
use chrono::{Duration, Utc};
use test_utils::factory;

/// Tests creating a race with an organizer.
///
/// Expected: Ok with the race attributed to the organizer
#[tokio::test]
async fn creates_race_with_organizer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = RaceRepository::new(db);
    let result = repo
        .create(CreateRaceParam {
            name: "Spring Regatta".to_string(),
            location: "Kiel".to_string(),
            description: Some("Season opener".to_string()),
            starts_at: Utc::now() + Duration::days(14),
            organizer_id: user.id,
        })
        .await;

    assert!(result.is_ok());
    let race = result.unwrap();
    assert_eq!(race.name, "Spring Regatta");
    assert_eq!(race.organizer_id, Some(user.id));

    Ok(())
}
