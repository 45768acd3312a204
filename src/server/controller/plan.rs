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
        plan::{CreatePlanDto, PlanDto, TimelineEntryDto, UpdatePlanDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::plan::{CreatePlanParams, UpdatePlanParams},
        service::plan::PlanService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping plan endpoints in OpenAPI documentation
pub static PLAN_TAG: &str = "plan";

fn parse_ids(trip_id: &str, plan_id: &str) -> Result<(i32, i32), AppError> {
    Ok((parse_id("trip", trip_id)?, parse_id("plan", plan_id)?))
}

/// Get a trip's timeline.
///
/// Each plan detail is one entry, and a plan without details is one entry. Entries are
/// ordered by `comparable_date`: closing sub-events ("Check out", "Drop off") at the plan's
/// end, everything else at its start.
///
/// # Access Control
/// - `TripOwner`
///
/// # Returns
/// - `200 OK` - Ordered timeline entries
/// - `400 Bad Request` - Malformed trip id
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Trip doesn't exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/plans",
    tag = PLAN_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID")
    ),
    responses(
        (status = 200, description = "Timeline entries", body = Vec<TimelineEntryDto>),
        (status = 400, description = "Malformed trip id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Trip doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plans(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let trip_id = parse_id("trip", &trip_id)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripOwner(trip_id)])
        .await?;

    let timeline = PlanService::new(&state.db).get_timeline(trip_id).await?;

    Ok((StatusCode::OK, Json(timeline)))
}

/// Create a plan with its details.
///
/// The trip's date range grows to cover the new plan.
///
/// # Access Control
/// - `TripOwner`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `trip_id` - Trip to add the plan to
/// - `payload` - Plan fields and details
///
/// # Returns
/// - `201 Created` - Created plan, with `Location` set
/// - `400 Bad Request` - Malformed id, missing field or end date before start date
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Trip doesn't exist
/// - `500 Internal Server Error` - Database error; nothing was stored
#[utoipa::path(
    post,
    path = "/api/trips/{trip_id}/plans",
    tag = PLAN_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID")
    ),
    request_body = CreatePlanDto,
    responses(
        (status = 201, description = "Created plan", body = PlanDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Trip doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_plan(
    State(state): State<AppState>,
    session: Session,
    Path(trip_id): Path<String>,
    Json(payload): Json<CreatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let trip_id = parse_id("trip", &trip_id)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripOwner(trip_id)])
        .await?;

    let params = CreatePlanParams::from_dto(trip_id, payload)?;

    let plan = PlanService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            format!("/api/trips/{}/plans/{}", trip_id, plan.id),
        )],
        Json(plan.into_dto()),
    ))
}

/// Get a plan with its details.
///
/// # Access Control
/// - `TripOwner`
///
/// # Returns
/// - `200 OK` - Plan
/// - `400 Bad Request` - Malformed trip or plan id
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Trip or plan doesn't exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/trips/{trip_id}/plans/{plan_id}",
    tag = PLAN_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("plan_id" = i32, Path, description = "Plan ID")
    ),
    responses(
        (status = 200, description = "Plan", body = PlanDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Trip or plan doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plan(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, plan_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let (trip_id, plan_id) = parse_ids(&trip_id, &plan_id)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripOwner(trip_id)])
        .await?;

    let plan = PlanService::new(&state.db).get_by_id(trip_id, plan_id).await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

/// Update a plan.
///
/// Only supplied fields change. Supplying `plan_details` replaces every detail. Changing
/// either date grows the trip's range when needed.
///
/// # Access Control
/// - `TripOwner`
///
/// # Returns
/// - `200 OK` - Updated plan
/// - `400 Bad Request` - Malformed id, empty body or end date before start date
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Trip or plan doesn't exist
/// - `500 Internal Server Error` - Database error; nothing was changed
#[utoipa::path(
    patch,
    path = "/api/trips/{trip_id}/plans/{plan_id}",
    tag = PLAN_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("plan_id" = i32, Path, description = "Plan ID")
    ),
    request_body = UpdatePlanDto,
    responses(
        (status = 200, description = "Updated plan", body = PlanDto),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Trip or plan doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_plan(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, plan_id)): Path<(String, String)>,
    Json(payload): Json<UpdatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let (trip_id, plan_id) = parse_ids(&trip_id, &plan_id)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripOwner(trip_id)])
        .await?;

    let params = UpdatePlanParams::from_dto(trip_id, plan_id, payload)?;

    let plan = PlanService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

/// Delete a plan and its details.
///
/// # Access Control
/// - `TripOwner`
///
/// # Returns
/// - `204 No Content` - Plan deleted
/// - `400 Bad Request` - Malformed trip or plan id
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Trip or plan doesn't exist
/// - `500 Internal Server Error` - Database error; nothing was deleted
#[utoipa::path(
    delete,
    path = "/api/trips/{trip_id}/plans/{plan_id}",
    tag = PLAN_TAG,
    params(
        ("trip_id" = i32, Path, description = "Trip ID"),
        ("plan_id" = i32, Path, description = "Plan ID")
    ),
    responses(
        (status = 204, description = "Plan deleted"),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Trip or plan doesn't exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_plan(
    State(state): State<AppState>,
    session: Session,
    Path((trip_id, plan_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let (trip_id, plan_id) = parse_ids(&trip_id, &plan_id)?;

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TripOwner(trip_id)])
        .await?;

    PlanService::new(&state.db).delete(trip_id, plan_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
