use super::*;
use crate::{data::user::UserRepository, provider::NewIdentity};
use chrono::Utc;
use test_utils::factory::user::UserFactory;

async fn sign_up(
    db: &sea_orm::DatabaseConnection,
    provider: &MockIdentityProvider,
    email: &str,
    display_name: &str,
) -> Result<crate::model::user::User, AppError> {
    AccountService::new(db, provider)
        .create_account(CreateAccountParam {
            email: email.to_string(),
            password: "hunter2hunter2".to_string(),
            display_name: display_name.to_string(),
        })
        .await
}

/// Tests the happy-path sign-in.
///
/// Verifies that a valid token with matching claims returns the user and
/// stamps `last_seen_at` no earlier than the call time.
///
/// Expected: Ok with last_seen_at set
#[tokio::test]
async fn returns_user_and_stamps_last_seen() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = MockIdentityProvider::new();

    let created = sign_up(db, &provider, "sailor@example.com", "Sailor").await?;
    assert!(created.last_seen_at.is_none());

    let before = Utc::now();
    let service = AccountService::new(db, &provider);
    let user = service
        .sign_in(SignInParam {
            claimed_email: "sailor@example.com".to_string(),
            claimed_uid: created.external_uid.clone(),
            token: provider.token_for(&created.external_uid),
        })
        .await?;

    let last_seen = user.last_seen_at.unwrap();
    assert!(last_seen >= before);

    let stored = UserRepository::new(db)
        .find_auth_by_external_uid(&created.external_uid)
        .await?
        .unwrap();
    assert!(stored.last_seen_at.is_some());

    Ok(())
}

/// Tests that a differently cased claimed email still matches.
///
/// Emails are stored normalized; the claim cross-check compares
/// case-insensitively rather than leaking a mismatch on casing alone.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_differently_cased_claimed_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = MockIdentityProvider::new();

    let created = sign_up(db, &provider, "sailor@example.com", "Sailor").await?;

    let service = AccountService::new(db, &provider);
    let result = service
        .sign_in(SignInParam {
            claimed_email: "Sailor@Example.COM".to_string(),
            claimed_uid: created.external_uid.clone(),
            token: provider.token_for(&created.external_uid),
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests the claim cross-check on the uid.
///
/// A valid token for account A combined with a body claiming account B's uid
/// must fail closed even though the token alone authenticates A.
///
/// Expected: Err(Authentication)
#[tokio::test]
async fn rejects_mismatched_claimed_uid() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = MockIdentityProvider::new();

    let a = sign_up(db, &provider, "a@example.com", "SailorA").await?;
    let b = sign_up(db, &provider, "b@example.com", "SailorB").await?;

    let service = AccountService::new(db, &provider);
    let result = service
        .sign_in(SignInParam {
            claimed_email: "a@example.com".to_string(),
            claimed_uid: b.external_uid.clone(),
            token: provider.token_for(&a.external_uid),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Authentication))
    ));

    Ok(())
}

/// Tests the claim cross-check on the email.
///
/// Expected: Err(Authentication), indistinguishable from the uid mismatch
#[tokio::test]
async fn rejects_mismatched_claimed_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = MockIdentityProvider::new();

    let a = sign_up(db, &provider, "a@example.com", "SailorA").await?;

    let service = AccountService::new(db, &provider);
    let result = service
        .sign_in(SignInParam {
            claimed_email: "someone-else@example.com".to_string(),
            claimed_uid: a.external_uid.clone(),
            token: provider.token_for(&a.external_uid),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Authentication))
    ));

    Ok(())
}

/// Tests sign-in with a token the provider rejects.
///
/// Expected: Err(Authentication)
#[tokio::test]
async fn rejects_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = MockIdentityProvider::new();

    let a = sign_up(db, &provider, "a@example.com", "SailorA").await?;

    let service = AccountService::new(db, &provider);
    let result = service
        .sign_in(SignInParam {
            claimed_email: "a@example.com".to_string(),
            claimed_uid: a.external_uid.clone(),
            token: "forged".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Authentication))
    ));

    Ok(())
}

/// Tests that deleted, disabled, and never-registered users all fail the
/// same way.
///
/// The store lookup runs in the authentication-visible scope, so all three
/// absences produce the same `Authorization` error with no distinguishing
/// detail.
///
/// Expected: Err(Authorization) in all three cases
#[tokio::test]
async fn uniform_forbidden_for_deleted_disabled_and_unknown() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = MockIdentityProvider::new();

    // Deleted: a signed-up user whose row was soft-deleted afterwards.
    let deleted = sign_up(db, &provider, "deleted@example.com", "Deleted").await?;
    UserRepository::new(db)
        .soft_delete(deleted.id, Utc::now())
        .await?;

    // Disabled: provider identity plus a local row arranged as suspended.
    let disabled_identity = provider
        .create_identity(NewIdentity {
            email: "disabled@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            display_name: "Disabled".to_string(),
        })
        .await
        .unwrap();
    UserFactory::new(db)
        .email("disabled@example.com")
        .external_uid(&disabled_identity.uid)
        .display_name("Disabled")
        .disabled(true)
        .build()
        .await?;

    // Unknown: provider identity with no local row at all.
    let unknown_identity = provider
        .create_identity(NewIdentity {
            email: "unknown@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            display_name: "Unknown".to_string(),
        })
        .await
        .unwrap();

    let service = AccountService::new(db, &provider);

    for (email, uid) in [
        ("deleted@example.com", deleted.external_uid.clone()),
        ("disabled@example.com", disabled_identity.uid.clone()),
        ("unknown@example.com", unknown_identity.uid.clone()),
    ] {
        let result = service
            .sign_in(SignInParam {
                claimed_email: email.to_string(),
                claimed_uid: uid.clone(),
                token: provider.token_for(&uid),
            })
            .await;

        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::Authorization))),
            "expected uniform forbidden for {}",
            email
        );
    }

    Ok(())
}
