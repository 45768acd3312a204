use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{trip::TripRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

pub enum Permission {
    /// The user owns the trip with this id.
    TripOwner(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged in user and checks every permission in order.
    ///
    /// A trip owned by someone else is reported exactly like a missing trip.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged in user holding all permissions
    /// - `Err(AppError::AuthErr)` - No user in session, or user no longer exists
    /// - `Err(AppError::NotFound)` - `"Trip doesn't exist"` for a trip permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::TripOwner(trip_id) => {
                    let owned = TripRepository::new(self.db)
                        .find_entity(*trip_id)
                        .await?
                        .is_some_and(|trip| trip.user_id == user.id);

                    if !owned {
                        tracing::debug!(
                            "User {} denied access to trip {}",
                            user.id,
                            trip_id
                        );
                        return Err(AppError::NotFound("Trip doesn't exist".to_string()));
                    }
                }
            }
        }

        Ok(user)
    }
}
