use super::*;
use test_utils::factory::user::{create_user, UserFactory};

/// Tests finding a non-deleted user by id.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_non_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_active_by_id(created.id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().unwrap().id, created.id);

    Ok(())
}

/// Tests that disabled users remain visible in the default scope.
///
/// The deletion flow must be able to fetch a disabled target: the lifecycle
/// permits Disabled -> Deleted.
///
/// Expected: Ok(Some(User)) with disabled_at set
#[tokio::test]
async fn includes_disabled_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).disabled(true).build().await?;

    let repo = UserRepository::new(db);
    let result = repo.find_active_by_id(created.id).await;

    assert!(result.is_ok());
    let user = result.unwrap().unwrap();
    assert_eq!(user.id, created.id);
    assert!(user.disabled_at.is_some());

    Ok(())
}

/// Tests that soft-deleted users are excluded from the default scope.
///
/// Expected: Ok(None)
#[tokio::test]
async fn excludes_soft_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = UserFactory::new(db).deleted(true).build().await?;

    let repo = UserRepository::new(db);
    let result = repo.find_active_by_id(created.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
