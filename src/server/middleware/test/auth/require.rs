use super::*;

/// Tests a request with no user in the session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user that was never stored.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_session_of_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(404).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(404)))
    ));

    Ok(())
}

/// Tests an empty permission list for a logged in user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(returned.id, user.id);

    Ok(())
}

/// Tests access to the user's own trip.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_owner_access_to_trip() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (user, trip) = factory::helpers::create_trip_with_dependencies(db).await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let returned = AuthGuard::new(db, session)
        .require(&[Permission::TripOwner(trip.id)])
        .await?;

    assert_eq!(returned.id, user.id);

    Ok(())
}

/// Tests that another user's trip looks like a missing one.
///
/// Expected: Err(NotFound("Trip doesn't exist")) for both cases
#[tokio::test]
async fn hides_trips_of_other_users() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, other_trip) = factory::helpers::create_trip_with_dependencies(db).await?;
    let user = factory::create_user(db).await?;

    AuthSession::new(session).set_user_id(user.id).await?;
    let guard = AuthGuard::new(db, session);

    let foreign = guard.require(&[Permission::TripOwner(other_trip.id)]).await;
    let missing = guard.require(&[Permission::TripOwner(other_trip.id + 50)]).await;

    assert!(matches!(foreign, Err(AppError::NotFound(msg)) if msg == "Trip doesn't exist"));
    assert!(matches!(missing, Err(AppError::NotFound(msg)) if msg == "Trip doesn't exist"));

    Ok(())
}
