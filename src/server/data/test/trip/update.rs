use super::*;

/// Tests that only supplied columns change and the modification stamp is set.
///
/// Expected: Ok(Some) with the new name, other columns unchanged
#[tokio::test]
async fn updates_supplied_columns_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::seed_trips_tables(db).await?;

    let repo = TripRepository::new(db);
    let updated = repo
        .update(&UpdateTripParams {
            id: 1,
            trip_name: Some("Mediterranean".to_string()),
            start_date: None,
            end_date: None,
            description: None,
            dest_cities: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.trip_name, "Mediterranean");
    assert_eq!(updated.start_date, fixture::trip::day(2019, 4, 1));
    assert_eq!(updated.end_date, fixture::trip::day(2019, 4, 14));
    assert!(updated.date_modified.is_some());

    let cities = repo.get_dest_cities(1).await?;
    assert_eq!(cities.len(), 3);

    Ok(())
}

/// Tests updating a trip that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TripRepository::new(db);
    let result = repo
        .update(&UpdateTripParams {
            id: 9,
            trip_name: Some("Nowhere".to_string()),
            start_date: None,
            end_date: None,
            description: None,
            dest_cities: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
