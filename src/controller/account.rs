use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ErrorDto,
        user::{CreateAccountDto, SignInDto, UserDto},
    },
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, AuthGuard},
    model::user::{CreateAccountParam, SignInParam},
    service::{account::AccountService, lifecycle::LifecycleService},
    state::AppState,
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

/// Create a new account (sign-up).
///
/// Creates the identity at the external provider first, then the local user
/// row. The password is forwarded to the provider and never stored or
/// inspected locally.
///
/// # Arguments
/// - `state` - Application state with database and provider gateway
/// - `payload` - Email, password, and display name
///
/// # Returns
/// - `201 Created` - Account created in both stores
/// - `400 Bad Request` - Malformed email or empty display name/password
/// - `409 Conflict` - Email or display name already in use
/// - `503 Service Unavailable` - Identity provider unreachable
#[utoipa::path(
    post,
    path = "/api/account/register",
    tag = ACCOUNT_TAG,
    request_body = CreateAccountDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid sign-up payload", body = ErrorDto),
        (status = 409, description = "Email or display name already in use", body = ErrorDto),
        (status = 503, description = "Identity provider unavailable", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CreateAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_sign_up(&payload)?;

    let service = AccountService::new(&state.db, state.provider.as_ref());
    let user = service
        .create_account(CreateAccountParam {
            email: payload.email,
            password: payload.password,
            display_name: payload.display_name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Sign in with a bearer token and claimed identity.
///
/// The Authorization header carries the provider-issued bearer token; the
/// body claims an email and uid that must match the verified token claims.
///
/// # Arguments
/// - `state` - Application state with database and provider gateway
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Claimed email and uid
///
/// # Returns
/// - `200 OK` - Authenticated user
/// - `401 Unauthorized` - Token invalid or claims mismatch
/// - `403 Forbidden` - No account for the verified identity
#[utoipa::path(
    post,
    path = "/api/account/sign-in",
    tag = ACCOUNT_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 401, description = "Authentication failed", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn sign_in(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SignInDto>,
) -> Result<impl IntoResponse, AppError> {
    let Some(token) = bearer_token(&headers) else {
        return Err(AuthError::Authentication.into());
    };

    let service = AccountService::new(&state.db, state.provider.as_ref());
    let user = service
        .sign_in(SignInParam {
            claimed_email: payload.email,
            claimed_uid: payload.uid,
            token: token.to_string(),
        })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete an account.
///
/// Only the account owner may delete it. Deleting an account that is already
/// gone succeeds with no effect.
///
/// # Arguments
/// - `state` - Application state with database and provider gateway
/// - `headers` - Request headers carrying the bearer token
/// - `user_id` - Target user id
///
/// # Returns
/// - `204 No Content` - Account deleted, or already gone
/// - `401 Unauthorized` - Token invalid
/// - `403 Forbidden` - Caller is not the account owner
#[utoipa::path(
    delete,
    path = "/api/account/{user_id}",
    tag = ACCOUNT_TAG,
    params(
        ("user_id" = i32, Path, description = "User id to delete")
    ),
    responses(
        (status = 204, description = "Account deleted or already gone"),
        (status = 401, description = "Authentication failed", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 500, description = "Deletion transaction failed", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn delete_account(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let requester = AuthGuard::new(&state.db, state.provider.as_ref())
        .require(&headers)
        .await?;

    LifecycleService::new(&state.db)
        .delete_account(requester.id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn validate_sign_up(payload: &CreateAccountDto) -> Result<(), AppError> {
    let email = payload.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::BadRequest(
            "A valid email address is required.".to_string(),
        ));
    }
    if payload.display_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Display name must not be empty.".to_string(),
        ));
    }
    if payload.password.is_empty() {
        return Err(AppError::BadRequest(
            "Password must not be empty.".to_string(),
        ));
    }
    Ok(())
}
