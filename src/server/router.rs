use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        plan::{
            CreatePlanDto, NewPlanDetailDto, PlanDetailDto, PlanDto, TimelineEntryDto,
            UpdatePlanDto,
        },
        trip::{CreateTripDto, DestCityDto, NewDestCityDto, TripDto, UpdateTripDto, ViewportDto},
        user::{LoginDto, RegisterUserDto, UserDto},
    },
    server::{
        controller::{
            auth::{self, get_user, login, logout},
            plan::{self, create_plan, delete_plan, get_plan, get_plans, update_plan},
            trip::{self, create_trip, delete_trip, get_trip, get_trips, update_trip},
            user::{self, register},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Itinerary API", description = "Trip and plan management"),
    paths(
        auth::login,
        auth::logout,
        auth::get_user,
        user::register,
        trip::get_trips,
        trip::create_trip,
        trip::get_trip,
        trip::update_trip,
        trip::delete_trip,
        plan::get_plans,
        plan::create_plan,
        plan::get_plan,
        plan::update_plan,
        plan::delete_plan,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        RegisterUserDto,
        LoginDto,
        TripDto,
        CreateTripDto,
        UpdateTripDto,
        DestCityDto,
        NewDestCityDto,
        ViewportDto,
        PlanDto,
        PlanDetailDto,
        NewPlanDetailDto,
        CreatePlanDto,
        UpdatePlanDto,
        TimelineEntryDto,
    )),
    tags(
        (name = "auth", description = "Session login and logout"),
        (name = "user", description = "Account registration"),
        (name = "trip", description = "Trips and their destination cities"),
        (name = "plan", description = "Plans and the trip timeline"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", get(health))
        .route("/api/openapi.json", get(openapi))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/users", post(register))
        .route("/api/trips", get(get_trips).post(create_trip))
        .route(
            "/api/trips/{trip_id}",
            get(get_trip).patch(update_trip).delete(delete_trip),
        )
        .route(
            "/api/trips/{trip_id}/plans",
            get(get_plans).post(create_plan),
        )
        .route(
            "/api/trips/{trip_id}/plans/{plan_id}",
            get(get_plan).patch(update_plan).delete(delete_plan),
        )
}

async fn health() -> &'static str {
    "Hello, world!"
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
