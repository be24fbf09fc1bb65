use super::*;
use chrono::{Duration, Utc};
use test_utils::factory;

/// Tests logging a trail with positions.
///
/// Verifies that the trail and all its positions are stored and come back in
/// recorded order.
///
/// Expected: Ok with the trail and both positions
#[tokio::test]
async fn creates_trail_with_points() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let started = Utc::now() - Duration::hours(3);
    let repo = TrailRepository::new(db);
    let trail = repo
        .create(LogTrailParam {
            user_id: user.id,
            name: "Evening sail".to_string(),
            started_at: started,
            ended_at: Some(started + Duration::hours(2)),
            points: vec![
                LogTrailPointParam {
                    latitude: 54.32,
                    longitude: 10.14,
                    recorded_at: started,
                },
                LogTrailPointParam {
                    latitude: 54.35,
                    longitude: 10.18,
                    recorded_at: started + Duration::minutes(30),
                },
            ],
        })
        .await?;

    assert_eq!(trail.user_id, Some(user.id));

    let (stored, points) = repo.find_by_id_with_points(trail.id).await?.unwrap();
    assert_eq!(stored.name, "Evening sail");
    assert_eq!(points.len(), 2);
    assert!(points[0].recorded_at <= points[1].recorded_at);

    Ok(())
}

/// Tests logging a trail without positions.
///
/// Expected: Ok with an empty point list
#[tokio::test]
async fn creates_trail_without_points() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = TrailRepository::new(db);
    let trail = repo
        .create(LogTrailParam {
            user_id: user.id,
            name: "Short hop".to_string(),
            started_at: Utc::now(),
            ended_at: None,
            points: Vec::new(),
        })
        .await?;

    let (_, points) = repo.find_by_id_with_points(trail.id).await?.unwrap();
    assert!(points.is_empty());

    Ok(())
}
