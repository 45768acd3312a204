//! Password hashing and login.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Verified against when the email is unknown, so both failure paths cost one hash.
const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=15000,t=2,p=1$\
    gZiV/M1gPc22ElAH/Jh1Hw$\
    CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

/// Hashes a password into a PHC string with a fresh salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let params =
        Params::new(15000, 2, 1, None).map_err(|e| AuthError::PasswordHash(e.to_string()))?;
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?
        .to_string();

    Ok(hash)
}

/// Checks a password against a stored PHC string.
///
/// # Returns
/// - `Ok(())` - Password matches
/// - `Err(AuthError::InvalidCredentials)` - Password does not match
/// - `Err(AuthError::PasswordHash)` - Stored hash could not be parsed
pub fn verify_password(expected_hash: &str, password: &str) -> Result<(), AuthError> {
    let expected = PasswordHash::new(expected_hash).map_err(|e| {
        tracing::error!("Failed to parse hash in PHC string format: {}", e);
        AuthError::PasswordHash(e.to_string())
    })?;

    Argon2::default()
        .verify_password(password.as_bytes(), &expected)
        .map_err(|_| AuthError::InvalidCredentials)
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the user owning an email and password pair.
    ///
    /// Unknown emails and wrong passwords fail the same way.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = UserRepository::new(self.db).find_by_email(email).await?;

        let expected_hash = user
            .as_ref()
            .map_or(DUMMY_PASSWORD_HASH, |u| u.password_hash.as_str());
        verify_password(expected_hash, password)?;

        user.ok_or_else(|| AuthError::InvalidCredentials.into())
    }
}
