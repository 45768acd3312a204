use super::*;

/// Tests that a trip still referenced by a destination city cannot be deleted first.
///
/// Expected: Err from the foreign key, trip 2 still present
#[tokio::test]
async fn refuses_delete_while_cities_remain() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::seed_trips_tables(db).await?;

    let repo = TripRepository::new(db);
    let result = repo.delete(2).await;

    assert!(result.is_err());
    assert!(repo.find_entity(2).await?.is_some());

    Ok(())
}

/// Tests deleting trip 2 after removing city 4.
///
/// Expected: Ok(true), city 4 and trip 2 gone
#[tokio::test]
async fn deletes_trip_after_its_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::seed_trips_tables(db).await?;

    let repo = TripRepository::new(db);

    assert_eq!(repo.delete_dest_cities(2).await?, 1);
    assert!(repo.delete(2).await?);
    assert!(entity::prelude::TripDestCity::find_by_id(4).one(db).await?.is_none());
    assert!(repo.get_by_id(2).await?.is_none());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TripRepository::new(db);

    assert!(!repo.delete(5).await?);

    Ok(())
}
