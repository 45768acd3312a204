use super::*;

/// Tests creating a trip together with its destination cities.
///
/// Expected: Ok with cities tagged with the new trip id, in input order
#[tokio::test]
async fn creates_trip_with_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = TripRepository::new(db);
    let trip = repo
        .create(CreateTripParams {
            user_id: user.id,
            trip_name: "Italy".to_string(),
            start_date: fixture::trip::day(2019, 4, 1),
            end_date: fixture::trip::day(2019, 4, 14),
            description: Some("Spring".to_string()),
            dest_cities: vec![
                city("Florence"),
                DestCityParams {
                    viewport: Some(Viewport {
                        ne_lat: 41.99,
                        ne_lng: 12.62,
                        sw_lat: 41.76,
                        sw_lng: 12.34,
                    }),
                    ..city("Rome")
                },
            ],
        })
        .await?;

    assert_eq!(trip.user_id, user.id);
    assert!(trip.date_modified.is_none());
    assert_eq!(trip.dest_cities.len(), 2);
    assert!(trip.dest_cities.iter().all(|c| c.trip_id == trip.id));
    assert_eq!(trip.dest_cities[0].city_name, "Florence");
    assert!(trip.dest_cities[0].viewport.is_none());
    assert_eq!(trip.dest_cities[1].viewport.map(|v| v.ne_lat), Some(41.99));

    let stored = repo.get_by_id(trip.id).await?.unwrap();
    assert_eq!(stored.dest_cities, trip.dest_cities);

    Ok(())
}

/// Tests creating a trip with no destination cities.
///
/// Expected: Ok with an empty city list
#[tokio::test]
async fn creates_trip_without_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = TripRepository::new(db);
    let trip = repo
        .create(CreateTripParams {
            user_id: user.id,
            trip_name: "Solo".to_string(),
            start_date: fixture::trip::start_date(),
            end_date: fixture::trip::end_date(),
            description: None,
            dest_cities: vec![],
        })
        .await?;

    assert!(trip.dest_cities.is_empty());

    Ok(())
}
