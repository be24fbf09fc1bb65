use super::*;
use chrono::Utc;
use sea_orm::EntityTrait;
use test_utils::factory::user::create_user;

/// Tests soft-deleting a user row.
///
/// Verifies that the row is marked deleted rather than removed, preserving
/// it for referential integrity and audit.
///
/// Expected: Ok(1) with deleted_at set and the row still present
#[tokio::test]
async fn marks_row_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_user(db).await?;

    let now = Utc::now();
    let repo = UserRepository::new(db);
    let rows = repo.soft_delete(created.id, now).await?;

    assert_eq!(rows, 1);

    let stored = entity::prelude::User::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    let deleted_at = stored.deleted_at.unwrap();
    assert!((deleted_at - now).num_seconds().abs() < 1);

    Ok(())
}

/// Tests that deleting an already-deleted row affects nothing.
///
/// The `deleted_at IS NULL` filter means a second deleter observes zero
/// affected rows, never a second successful delete.
///
/// Expected: Ok(0) on the second call
#[tokio::test]
async fn second_delete_affects_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_user(db).await?;

    let repo = UserRepository::new(db);
    let first = repo.soft_delete(created.id, Utc::now()).await?;
    let second = repo.soft_delete(created.id, Utc::now()).await?;

    assert_eq!(first, 1);
    assert_eq!(second, 0);

    Ok(())
}
