use super::*;

/// Tests finding a user by id, and missing ids.
///
/// Expected: Ok(Some) for the created user, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_by_id(created.id).await?.map(|u| u.email), Some(created.email));
    assert!(repo.find_by_id(created.id + 100).await?.is_none());

    Ok(())
}
