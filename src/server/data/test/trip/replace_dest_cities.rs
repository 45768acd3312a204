use super::*;

/// Tests replacing the seeded cities of trip 1.
///
/// Verifies that the old set is removed entirely and other trips keep their cities.
///
/// Expected: Ok with only the replacement cities on trip 1
#[tokio::test]
async fn replaces_whole_city_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::seed_trips_tables(db).await?;

    let repo = TripRepository::new(db);
    let inserted = repo
        .replace_dest_cities(1, vec![city("Lisbon"), city("Porto")])
        .await?;

    assert_eq!(inserted.len(), 2);
    let names: Vec<String> = repo
        .get_dest_cities(1)
        .await?
        .into_iter()
        .map(|c| c.city_name)
        .collect();
    assert_eq!(names, vec!["Lisbon", "Porto"]);
    assert_eq!(repo.get_dest_cities(2).await?.len(), 1);

    Ok(())
}
