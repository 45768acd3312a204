use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    ///
    /// The request did not come from a logged in client. Results in 401 Unauthorized.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in 401 Unauthorized.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email unknown or password mismatch during login.
    ///
    /// Both cases share one variant so the response does not reveal which emails are
    /// registered. Results in 401 Unauthorized.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Hashing or parsing a stored password hash failed.
    ///
    /// Results in 500 Internal Server Error.
    #[error("Password hash error: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For missing sessions, stale sessions and bad credentials
/// - 500 Internal Server Error - For password hashing failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized request".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Incorrect email or password".to_string(),
                }),
            )
                .into_response(),
            err @ Self::PasswordHash(_) => InternalServerError(err).into_response(),
        }
    }
}
