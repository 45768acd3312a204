use super::*;

/// Tests writing a new date range.
///
/// Expected: Ok with both dates replaced and the modification stamp set
#[tokio::test]
async fn writes_range_and_stamps_modification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, trip) = factory::helpers::create_trip_with_dependencies(db).await?;

    let repo = TripRepository::new(db);
    let updated = repo
        .update_range(
            trip,
            fixture::trip::day(2019, 3, 30),
            fixture::trip::day(2019, 4, 20),
        )
        .await?;

    assert_eq!(updated.start_date, fixture::trip::day(2019, 3, 30));
    assert_eq!(updated.end_date, fixture::trip::day(2019, 4, 20));
    assert!(updated.date_modified.is_some());

    Ok(())
}
