use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with the stored hash and a creation timestamp
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "traveller".to_string(),
            "traveller@test.com".to_string(),
            "$argon2id$hash".to_string(),
        )
        .await?;

    assert_eq!(user.user_name, "traveller");
    assert_eq!(user.email, "traveller@test.com");
    assert_eq!(user.password_hash, "$argon2id$hash");

    Ok(())
}

/// Tests that a second account with the same email is rejected by the unique index.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create("a".to_string(), "same@test.com".to_string(), "h".to_string())
        .await?;
    let result = repo
        .create("b".to_string(), "same@test.com".to_string(), "h".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
