use axum::http::{header, HeaderMap, HeaderValue};

use crate::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    provider::{mock::MockIdentityProvider, IdentityProvider, NewIdentity},
};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

async fn provider_identity(provider: &MockIdentityProvider, email: &str, name: &str) -> String {
    provider
        .create_identity(NewIdentity {
            email: email.to_string(),
            password: "hunter2hunter2".to_string(),
            display_name: name.to_string(),
        })
        .await
        .unwrap()
        .uid
}

/// Tests resolving the current user from a valid token.
///
/// Expected: Ok with the matching user
#[tokio::test]
async fn returns_user_for_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = MockIdentityProvider::new();

    let uid = provider_identity(&provider, "sailor@example.com", "Sailor").await;
    let created = UserFactory::new(db).external_uid(&uid).build().await?;

    let guard = AuthGuard::new(db, &provider);
    let user = guard
        .require(&bearer_headers(&provider.token_for(&uid)))
        .await?;

    assert_eq!(user.id, created.id);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(Authentication)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = MockIdentityProvider::new();

    let guard = AuthGuard::new(db, &provider);
    let result = guard.require(&HeaderMap::new()).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Authentication))
    ));

    Ok(())
}

/// Tests a verified identity with no visible local user.
///
/// Expected: Err(Authorization)
#[tokio::test]
async fn rejects_identity_without_local_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = MockIdentityProvider::new();

    let uid = provider_identity(&provider, "ghost@example.com", "Ghost").await;

    let guard = AuthGuard::new(db, &provider);
    let result = guard
        .require(&bearer_headers(&provider.token_for(&uid)))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Authorization))
    ));

    Ok(())
}

/// Tests that a disabled user is refused like a missing one.
///
/// Expected: Err(Authorization), same shape as the unknown-identity case
#[tokio::test]
async fn rejects_disabled_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = MockIdentityProvider::new();

    let uid = provider_identity(&provider, "suspended@example.com", "Suspended").await;
    UserFactory::new(db)
        .external_uid(&uid)
        .disabled(true)
        .build()
        .await?;

    let guard = AuthGuard::new(db, &provider);
    let result = guard
        .require(&bearer_headers(&provider.token_for(&uid)))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Authorization))
    ));

    Ok(())
}
