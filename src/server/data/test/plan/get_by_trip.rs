use super::*;

/// Tests folding joined rows back into plans.
///
/// One plan has two details, the other none. The left join yields three rows; the plan
/// without details must come back once with an empty detail list.
///
/// Expected: Ok with two plans, details in insertion order
#[tokio::test]
async fn nests_details_under_their_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, trip) = factory::helpers::create_trip_with_dependencies(db).await?;

    let car = factory::plan::PlanFactory::new(db, trip.id)
        .plan_type("Car Rental")
        .start_date(fixture::plan::at(2019, 4, 3, 9))
        .end_date(Some(fixture::plan::at(2019, 4, 6, 17)))
        .build()
        .await?;
    factory::create_plan_detail(db, car.id, "Pick up").await?;
    factory::create_plan_detail(db, car.id, "Drop off").await?;
    let museum = factory::plan::PlanFactory::new(db, trip.id)
        .start_date(fixture::plan::at(2019, 4, 4, 10))
        .build()
        .await?;

    let repo = PlanRepository::new(db);
    let plans = repo.get_by_trip(trip.id).await?;

    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].id, car.id);
    assert_eq!(plans[0].plan_type, PlanType::CarRental);
    let subtypes: Vec<&str> = plans[0]
        .plan_details
        .iter()
        .map(|d| d.plan_subtype.as_str())
        .collect();
    assert_eq!(subtypes, vec!["Pick up", "Drop off"]);
    assert!(plans[0].plan_details.iter().all(|d| d.plan_id == car.id));
    assert_eq!(plans[1].id, museum.id);
    assert!(plans[1].plan_details.is_empty());

    Ok(())
}

/// Tests that plans of other trips are not returned.
///
/// Expected: Ok with only the requested trip's plan
#[tokio::test]
async fn scopes_plans_to_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, trip, plan) = factory::helpers::create_plan_with_dependencies(db).await?;
    let other_trip = factory::create_trip(db, user.id).await?;
    factory::create_plan(db, other_trip.id).await?;

    let repo = PlanRepository::new(db);
    let plans = repo.get_by_trip(trip.id).await?;

    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, plan.id);

    Ok(())
}
