use super::*;

/// Tests listing the seeded trips of user 1.
///
/// Verifies that each trip carries only its own destination cities, in insertion order, and
/// that trips owned by other users are excluded.
///
/// Expected: Ok with trips 1 and 2
#[tokio::test]
async fn merges_cities_into_owned_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::seed_trips_tables(db).await?;

    let repo = TripRepository::new(db);
    let trips = repo.get_all_by_user(1).await?;

    assert_eq!(trips.len(), 2);
    assert_eq!(trips[0].id, 1);
    let names: Vec<&str> = trips[0]
        .dest_cities
        .iter()
        .map(|c| c.city_name.as_str())
        .collect();
    assert_eq!(names, vec!["Barcelona", "Florence", "Rome"]);
    assert_eq!(trips[1].id, 2);
    assert_eq!(trips[1].dest_cities.len(), 1);
    assert_eq!(trips[1].dest_cities[0].city_name, "Tokyo");

    Ok(())
}

/// Tests a trip with no cities and a user with no trips.
///
/// Expected: trip 3 with an empty city list; empty list for an unknown user
#[tokio::test]
async fn keeps_trips_without_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::seed_trips_tables(db).await?;

    let repo = TripRepository::new(db);
    let trips = repo.get_all_by_user(2).await?;

    assert_eq!(trips.len(), 1);
    assert_eq!(trips[0].trip_name, "Test Trip 2020");
    assert!(trips[0].dest_cities.is_empty());
    assert!(repo.get_all_by_user(99).await?.is_empty());

    Ok(())
}
