use super::*;
use sea_orm::SqlErr;
use test_utils::factory::user::UserFactory;

/// Tests inserting a new user row.
///
/// Verifies that the repository creates a row with the given email, provider
/// uid, and display name, and that `last_seen_at` starts unset.
///
/// Expected: Ok with user created and last_seen_at None
#[tokio::test]
async fn creates_user_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .insert(CreateUserParam {
            email: "sailor@example.com".to_string(),
            external_uid: "uid-1".to_string(),
            display_name: "Sailor".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.email, "sailor@example.com");
    assert_eq!(user.external_uid, "uid-1");
    assert_eq!(user.display_name, "Sailor");
    assert!(user.last_seen_at.is_none());

    Ok(())
}

/// Tests that display name uniqueness spans soft-deleted rows.
///
/// Verifies that inserting a user with a display name held by a soft-deleted
/// row still fails: uniqueness is not scoped to active rows.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_display_name_of_soft_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .display_name("Taken")
        .deleted(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .insert(CreateUserParam {
            email: "fresh@example.com".to_string(),
            external_uid: "uid-fresh".to_string(),
            display_name: "Taken".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that email uniqueness spans soft-deleted rows.
///
/// Verifies that re-signup with the email of a soft-deleted user fails.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_email_of_soft_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("gone@example.com")
        .deleted(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .insert(CreateUserParam {
            email: "gone@example.com".to_string(),
            external_uid: "uid-fresh".to_string(),
            display_name: "Fresh".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
