use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        trip::{CreateTripDto, TripDto, UpdateTripDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::trip::{CreateTripParams, Trip, UpdateTripParams},
        service::trip::TripService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping trip endpoints in OpenAPI documentation
pub static TRIP_TAG: &str = "trip";

/// List the caller's trips.
///
/// # Access Control
/// - Logged in user; only their own trips are listed
///
/// # Returns
/// - `200 OK` - Trips with destination cities
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/trips",
    tag = TRIP_TAG,
    responses(
        (status = 200, description = "Trips of the logged in user", body = Vec<TripDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trips(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let trips = TripService::new(&state.db).get_all(user.id).await?;

    let dtos: Vec<TripDto> = trips.into_iter().map(Trip::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a trip with its destination cities.
///
/// # Access Control
/// - Logged in user; the trip is owned by them
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Trip fields and destination cities
///
/// # Returns
/// - `201 Created` - Created trip, with `Location` set
/// - `400 Bad Request` - Missing field or start date after end date
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error; nothing was stored
#[utoipa::path(
    post,
    path = "/api/trips",
    tag = TRIP_TAG,
    request_body = CreateTripDto,
    responses(
        (status = 201, description = "Created trip", body = TripDto),
        (status = 400, description = "Invalid trip data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_trip(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTripDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateTripParams::from_dto(user.id, payload)?;

    let trip = TripService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/trips/{}", trip.id))],
        Json(trip.into_dto()),
    ))
}

/// Get a trip with its destination cities.
///
/// # Access Control
/// - `TripOwner` - Trips of other users resolve as missing
///
/// # Returns
/// - `200 OK` - Trip
/// - `400 Bad Request` - Malformed trip id
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Trip doesn't exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}",
    tag = TRIP_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID")
    ),
    responses(
        (status = 200, description = "Trip", body = TripDto),
        (status = 400, description = "Malformed trip id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Trip doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trip(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let trip_id = parse_id("trip", &trip_id)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripOwner(trip_id)])
        .await?;

    let trip = TripService::new(&state.db).get_by_id(trip_id).await?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

/// Update a trip.
///
/// Only supplied fields change. Supplying `dest_cities` replaces every destination city.
///
/// # Access Control
/// - `TripOwner`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `trip_id` - Trip to update
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Updated trip
/// - `400 Bad Request` - Malformed id, empty body, start date after end date, or new dates
///   leaving a plan outside the trip
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Trip doesn't exist
/// - `500 Internal Server Error` - Database error; nothing was changed
#[utoipa::path(
    patch,
    path = "/api/trips/{trip_id}",
    tag = TRIP_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID")
    ),
    request_body = UpdateTripDto,
    responses(
        (status = 200, description = "Updated trip", body = TripDto),
        (status = 400, description = "Invalid trip data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Trip doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_trip(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<String>,
    Json(payload): Json<UpdateTripDto>,
) -> Result<impl IntoResponse, AppError> {
    let trip_id = parse_id("trip", &trip_id)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripOwner(trip_id)])
        .await?;

    let params = UpdateTripParams::from_dto(trip_id, payload)?;

    let trip = TripService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(trip.into_dto())))
}

/// Delete a trip with its destination cities, plans and plan details.
///
/// # Access Control
/// - `TripOwner`
///
/// # Returns
/// - `204 No Content` - Trip deleted
/// - `400 Bad Request` - Malformed trip id
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Trip doesn't exist
/// - `500 Internal Server Error` - Database error; nothing was deleted
#[utoipa::path(
    delete,
    path = "/api/trips/{trip_id}",
    tag = TRIP_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID")
    ),
    responses(
        (status = 204, description = "Trip deleted"),
        (status = 400, description = "Malformed trip id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Trip doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_trip(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let trip_id = parse_id("trip", &trip_id)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripOwner(trip_id)])
        .await?;

    TripService::new(&state.db).delete(trip_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
