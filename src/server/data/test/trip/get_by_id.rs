use super::*;

/// Tests fetching a seeded trip with its cities.
///
/// Expected: Ok(Some) with trip 2 and city 4
#[tokio::test]
async fn gets_trip_with_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::seed_trips_tables(db).await?;

    let repo = TripRepository::new(db);
    let trip = repo.get_by_id(2).await?.unwrap();

    assert_eq!(trip.trip_name, "Family Trip 2020");
    assert_eq!(trip.start_date, fixture::trip::day(2019, 4, 30));
    assert_eq!(trip.dest_cities.len(), 1);
    assert_eq!(trip.dest_cities[0].id, 4);

    Ok(())
}

/// Tests fetching an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TripRepository::new(db);

    assert!(repo.get_by_id(42).await?.is_none());

    Ok(())
}
