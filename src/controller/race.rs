use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    dto::{
        api::ErrorDto,
        race::{CreateRaceDto, RaceDto, UpdateRaceDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::race::{CreateRaceParam, UpdateRaceParam},
    service::race::RaceService,
    state::AppState,
};

/// Tag for grouping race endpoints in OpenAPI documentation
pub static RACE_TAG: &str = "race";

/// Create a new race organized by the current user.
///
/// # Returns
/// - `201 Created` - Race created
/// - `400 Bad Request` - Invalid race data
/// - `401 Unauthorized` / `403 Forbidden` - Caller not authenticated
#[utoipa::path(
    post,
    path = "/api/races",
    tag = RACE_TAG,
    request_body = CreateRaceDto,
    responses(
        (status = 201, description = "Race created", body = RaceDto),
        (status = 400, description = "Invalid race data", body = ErrorDto),
        (status = 401, description = "Authentication failed", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn create_race(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRaceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.provider.as_ref())
        .require(&headers)
        .await?;

    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("Race name must not be empty.".to_string()));
    }

    let race = RaceService::new(&state.db)
        .create(CreateRaceParam {
            name: payload.name,
            location: payload.location,
            description: payload.description,
            starts_at: payload.starts_at,
            organizer_id: user.id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(race.into_dto())))
}

/// List all races, soonest first.
///
/// # Returns
/// - `200 OK` - All races
#[utoipa::path(
    get,
    path = "/api/races",
    tag = RACE_TAG,
    responses(
        (status = 200, description = "All races", body = Vec<RaceDto>)
    ),
)]
pub async fn get_races(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let races = RaceService::new(&state.db).get_all().await?;

    let races_dto: Vec<_> = races.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(races_dto)))
}

/// Get a race by id.
///
/// # Returns
/// - `200 OK` - The race
/// - `404 Not Found` - No race with that id
#[utoipa::path(
    get,
    path = "/api/races/{race_id}",
    tag = RACE_TAG,
    params(
        ("race_id" = i32, Path, description = "Race id")
    ),
    responses(
        (status = 200, description = "The race", body = RaceDto),
        (status = 404, description = "Race not found", body = ErrorDto)
    ),
)]
pub async fn get_race(
    State(state): State<AppState>,
    Path(race_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let race = RaceService::new(&state.db).get_by_id(race_id).await?;

    Ok((StatusCode::OK, Json(race.into_dto())))
}

/// Update a race's details. Organizer only.
///
/// # Returns
/// - `200 OK` - Updated race
/// - `403 Forbidden` - Caller is not the organizer
/// - `404 Not Found` - No race with that id
#[utoipa::path(
    put,
    path = "/api/races/{race_id}",
    tag = RACE_TAG,
    params(
        ("race_id" = i32, Path, description = "Race id")
    ),
    request_body = UpdateRaceDto,
    responses(
        (status = 200, description = "Updated race", body = RaceDto),
        (status = 401, description = "Authentication failed", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Race not found", body = ErrorDto)
    ),
    security(("bearer_token" = []))
)]
pub async fn update_race(
    State(state): State<AppState>,
    Path(race_id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<UpdateRaceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, state.provider.as_ref())
        .require(&headers)
        .await?;

    let race = RaceService::new(&state.db)
        .update(
            race_id,
            user.id,
            UpdateRaceParam {
                name: payload.name,
                location: payload.location,
                description: payload.description,
                starts_at: payload.starts_at,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(race.into_dto())))
}
