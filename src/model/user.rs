use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub date_created: DateTime<Utc>,
}

/// Registration body. Fields are optional so a missing one is reported by name.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct RegisterUserDto {
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}
