use axum::{
    routing::{delete, get, post},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    controller::{
        account::{delete_account, register, sign_in},
        boat::{get_my_boats, register_boat},
        race::{create_race, get_race, get_races, update_race},
        trail::{get_my_trails, get_trail, log_trail},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/account/register", post(register))
        .route("/api/account/sign-in", post(sign_in))
        .route("/api/account/{user_id}", delete(delete_account))
        .route("/api/races", post(create_race).get(get_races))
        .route("/api/races/{race_id}", get(get_race).put(update_race))
        .route("/api/boats", post(register_boat).get(get_my_boats))
        .route("/api/trails", post(log_trail).get(get_my_trails))
        .route("/api/trails/{trail_id}", get(get_trail))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::controller::account::register,
        crate::controller::account::sign_in,
        crate::controller::account::delete_account,
        crate::controller::race::create_race,
        crate::controller::race::get_races,
        crate::controller::race::get_race,
        crate::controller::race::update_race,
        crate::controller::boat::register_boat,
        crate::controller::boat::get_my_boats,
        crate::controller::trail::log_trail,
        crate::controller::trail::get_my_trails,
        crate::controller::trail::get_trail,
    ),
    components(schemas(
        crate::dto::api::ErrorDto,
        crate::dto::user::UserDto,
        crate::dto::user::CreateAccountDto,
        crate::dto::user::SignInDto,
        crate::dto::race::RaceDto,
        crate::dto::race::CreateRaceDto,
        crate::dto::race::UpdateRaceDto,
        crate::dto::boat::BoatDto,
        crate::dto::boat::RegisterBoatDto,
        crate::dto::trail::TrailDto,
        crate::dto::trail::TrailPointDto,
        crate::dto::trail::LogTrailDto,
        crate::dto::trail::LogTrailPointDto,
    )),
    modifiers(&BearerTokenAddon)
)]
pub struct ApiDoc;

/// Registers the bearer token security scheme referenced by the protected
/// endpoints.
pub struct BearerTokenAddon;

impl Modify for BearerTokenAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_token",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}
