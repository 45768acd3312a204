use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{RegisterUserParams, User},
    service::auth::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - Account created
    /// - `Err(AppError::Validation)` - Email address already registered
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Validation(
                "Email address already taken".to_string(),
            ));
        }

        let password_hash = hash_password(&params.password)?;
        let user = repo
            .create(params.user_name, params.email, password_hash)
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.user_name);

        Ok(user)
    }

    /// Gets a user by id.
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }
}
