use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ErrorDto,
        boat::{BoatDto, RegisterBoatDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::boat::RegisterBoatParam,
    service::boat::BoatService,
    state::AppState,
};

/// Tag for grouping boat endpoints in OpenAPI documentation
pub static BOAT_TAG: &str = "boat";

/// Register a boat to the current user.
///
/// # Returns
/// - `201 Created` - Boat registered
/// - `400 Bad Request` - Invalid boat data or sail number taken
/// - `401 Unauthorized` / `403 Forbidden` - Caller not authenticated
#[utoipa::path(
    post,
    path = "/api/boats",
    tag = BOAT_TAG,
    request_body = RegisterBoatDto,
    responses(
        (status = 201, description = "Boat registered", body = BoatDto),
        (status = 400, description = "Invalid boat data", body = ErrorDto),
        (status = 401, description = "Authentication failed", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn register_boat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RegisterBoatDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.provider.as_ref())
        .require(&headers)
        .await?;

    if payload.sail_number.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Sail number must not be empty.".to_string(),
        ));
    }

    let boat = BoatService::new(&state.db)
        .register(RegisterBoatParam {
            name: payload.name,
            class: payload.class,
            sail_number: payload.sail_number,
            owner_id: user.id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(boat.into_dto())))
}

/// List the current user's boats.
///
/// # Returns
/// - `200 OK` - Boats owned by the caller
/// - `401 Unauthorized` / `403 Forbidden` - Caller not authenticated
#[utoipa::path(
    get,
    path = "/api/boats",
    tag = BOAT_TAG,
    responses(
        (status = 200, description = "Boats owned by the caller", body = Vec<BoatDto>),
        (status = 401, description = "Authentication failed", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_my_boats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.provider.as_ref())
        .require(&headers)
        .await?;

    let boats = BoatService::new(&state.db).get_user_boats(user.id).await?;

    let boats_dto: Vec<_> = boats.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(boats_dto)))
}
