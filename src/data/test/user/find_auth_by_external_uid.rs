use super::*;
use test_utils::factory::user::{create_user_with_uid, UserFactory};

/// Tests finding an active user in the authentication scope.
///
/// Verifies that a user that is neither deleted nor disabled is returned
/// when looked up by provider uid.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = create_user_with_uid(db, "uid-42").await?;

    let repo = UserRepository::new(db);
    let result = repo.find_auth_by_external_uid("uid-42").await;

    assert!(result.is_ok());
    let user = result.unwrap().unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.external_uid, "uid-42");

    Ok(())
}

/// Tests that soft-deleted users are invisible to the authentication scope.
///
/// Expected: Ok(None), same as a user that never existed
#[tokio::test]
async fn excludes_soft_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .external_uid("uid-deleted")
        .deleted(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_auth_by_external_uid("uid-deleted").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}

/// Tests that disabled users are invisible to the authentication scope.
///
/// Expected: Ok(None), same as a user that never existed
#[tokio::test]
async fn excludes_disabled_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .external_uid("uid-disabled")
        .disabled(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_auth_by_external_uid("uid-disabled").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}

/// Tests querying for a uid that was never registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_uid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_auth_by_external_uid("uid-unknown").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
