use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{RegisterUserDto, UserDto},
    },
    server::{
        error::AppError, middleware::session::AuthSession, model::user::RegisterUserParams,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new account.
///
/// Creates the user and logs them in.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session to store the new user in
/// - `payload` - User name, email and password
///
/// # Returns
/// - `201 Created` - Registered user, with `Location` set
/// - `400 Bad Request` - Missing field, invalid email, weak password or email already taken
/// - `500 Internal Server Error` - Database, hashing or session error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Registered user", body = UserDto),
        (status = 400, description = "Invalid registration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterUserParams::from_dto(payload)?;

    let user = UserService::new(&state.db).register(params).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, "/api/auth/user".to_string())],
        Json(user.into_dto()),
    ))
}
