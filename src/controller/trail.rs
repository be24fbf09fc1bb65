use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ErrorDto,
        trail::{LogTrailDto, TrailDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::trail::{LogTrailParam, LogTrailPointParam},
    service::trail::TrailService,
    state::AppState,
};

/// Tag for grouping trail endpoints in OpenAPI documentation
pub static TRAIL_TAG: &str = "trail";

/// Log a trail with its positions for the current user.
///
/// # Returns
/// - `201 Created` - Trail logged
/// - `400 Bad Request` - Invalid trail data
/// - `401 Unauthorized` / `403 Forbidden` - Caller not authenticated
#[utoipa::path(
    post,
    path = "/api/trails",
    tag = TRAIL_TAG,
    request_body = LogTrailDto,
    responses(
        (status = 201, description = "Trail logged", body = TrailDto),
        (status = 400, description = "Invalid trail data", body = ErrorDto),
        (status = 401, description = "Authentication failed", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn log_trail(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LogTrailDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.provider.as_ref())
        .require(&headers)
        .await?;

    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("Trail name must not be empty.".to_string()));
    }

    let (trail, points) = TrailService::new(&state.db)
        .log(LogTrailParam {
            user_id: user.id,
            name: payload.name,
            started_at: payload.started_at,
            ended_at: payload.ended_at,
            points: payload
                .points
                .into_iter()
                .map(|p| LogTrailPointParam {
                    latitude: p.latitude,
                    longitude: p.longitude,
                    recorded_at: p.recorded_at,
                })
                .collect(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(trail.into_dto(points))))
}

/// List the current user's trails, most recent first.
///
/// # Returns
/// - `200 OK` - Trails owned by the caller (without positions)
/// - `401 Unauthorized` / `403 Forbidden` - Caller not authenticated
#[utoipa::path(
    get,
    path = "/api/trails",
    tag = TRAIL_TAG,
    responses(
        (status = 200, description = "Trails owned by the caller", body = Vec<TrailDto>),
        (status = 401, description = "Authentication failed", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn get_my_trails(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.provider.as_ref())
        .require(&headers)
        .await?;

    let trails = TrailService::new(&state.db).get_user_trails(user.id).await?;

    let trails_dto: Vec<_> = trails
        .into_iter()
        .map(|t| t.into_dto(Vec::new()))
        .collect();

    Ok((StatusCode::OK, Json(trails_dto)))
}

/// Get a trail by id with its positions.
///
/// # Returns
/// - `200 OK` - The trail with positions in recorded order
/// - `404 Not Found` - No trail with that id
#[utoipa::path(
    get,
    path = "/api/trails/{trail_id}",
    tag = TRAIL_TAG,
    params(
        ("trail_id" = i32, Path, description = "Trail id")
    ),
    responses(
        (status = 200, description = "The trail", body = TrailDto),
        (status = 404, description = "Trail not found", body = ErrorDto)
    ),
)]
pub async fn get_trail(
    State(state): State<AppState>,
    Path(trail_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (trail, points) = TrailService::new(&state.db).get_by_id(trail_id).await?;

    Ok((StatusCode::OK, Json(trail.into_dto(points))))
}
