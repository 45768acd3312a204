//! User domain models and parameters.
//!
//! Provides the domain model for registered users and the parameters used when registering.
//! The stored password hash never leaves this layer.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{LoginDto, RegisterUserDto, UserDto},
    server::{
        error::AppError,
        util::validate::{require_fields, validate_email, validate_password, RequiredField},
    },
};

/// Registered user owning zero or more trips.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub date_created: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_name: entity.user_name,
            email: entity.email,
            password_hash: entity.password,
            date_created: entity.date_created,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            user_name: self.user_name,
            email: self.email,
            date_created: self.date_created,
        }
    }
}

/// Validated registration input with the plain password still attached.
///
/// The service hashes the password before anything is stored.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserParams {
    /// Validates a registration body.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParams)` - All fields present and well-formed
    /// - `Err(AppError::Validation)` - Missing field, malformed email or weak password
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        require_fields(
            &dto,
            &[
                RequiredField::new("email", |d: &RegisterUserDto| d.email.is_some()),
                RequiredField::new("password", |d: &RegisterUserDto| d.password.is_some()),
                RequiredField::new("user_name", |d: &RegisterUserDto| d.user_name.is_some()),
            ],
        )?;

        let user_name = dto.user_name.unwrap_or_default();
        let email = dto.email.unwrap_or_default();
        let password = dto.password.unwrap_or_default();

        validate_email(&email)?;
        validate_password(&password)?;

        Ok(Self {
            user_name,
            email,
            password,
        })
    }
}

/// Login credentials, both present.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        require_fields(
            &dto,
            &[
                RequiredField::new("email", |d: &LoginDto| d.email.is_some()),
                RequiredField::new("password", |d: &LoginDto| d.password.is_some()),
            ],
        )?;

        Ok(Self {
            email: dto.email.unwrap_or_default(),
            password: dto.password.unwrap_or_default(),
        })
    }
}
