use super::*;
use crate::server::{model::user::RegisterUserParams, service::user::UserService};

fn registration(email: &str) -> RegisterUserParams {
    RegisterUserParams {
        user_name: "traveller".to_string(),
        email: email.to_string(),
        password: fixture::user::DEFAULT_PASSWORD.to_string(),
    }
}

/// Tests registering a new account.
///
/// Expected: Ok with a hashed password stored
#[tokio::test]
async fn registers_user_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let user = service.register(registration("new@test.com")).await?;

    assert_eq!(user.email, "new@test.com");
    assert_ne!(user.password_hash, fixture::user::DEFAULT_PASSWORD);
    assert!(user.password_hash.starts_with("$argon2id$"));
    assert_eq!(
        service.get_by_id(user.id).await?.map(|u| u.email),
        Some("new@test.com".to_string())
    );

    Ok(())
}

/// Tests registering an email that is already in use.
///
/// Expected: Err(Validation("Email address already taken"))
#[tokio::test]
async fn rejects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .email("taken@test.com")
        .build()
        .await?;

    let result = UserService::new(db).register(registration("taken@test.com")).await;

    assert!(
        matches!(result, Err(AppError::Validation(msg)) if msg == "Email address already taken")
    );

    Ok(())
}
