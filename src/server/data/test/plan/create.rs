use super::*;

/// Tests creating a plan with details.
///
/// Expected: Ok with details tagged with the new plan id
#[tokio::test]
async fn creates_plan_with_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, trip) = factory::helpers::create_trip_with_dependencies(db).await?;

    let repo = PlanRepository::new(db);
    let plan = repo
        .create(CreatePlanParams {
            trip_id: trip.id,
            plan_type: PlanType::CarRental,
            plan_name: "Hertz".to_string(),
            plan_place_id: None,
            start_date: fixture::plan::at(2019, 4, 5, 9),
            end_date: Some(fixture::plan::at(2019, 4, 9, 17)),
            description: None,
            city_name: "Florence".to_string(),
            utc_offset_minutes: 120,
            plan_details: vec![detail("Pick up", "ABC"), detail("Drop off", "DEF")],
        })
        .await?;

    assert_eq!(plan.trip_id, trip.id);
    assert!(plan.date_modified.is_none());
    assert_eq!(plan.plan_details.len(), 2);
    assert!(plan.plan_details.iter().all(|d| d.plan_id == plan.id));

    let stored = repo.get_by_id(trip.id, plan.id).await?.unwrap();
    assert_eq!(stored.plan_type, PlanType::CarRental);
    assert_eq!(stored.plan_details, plan.plan_details);

    Ok(())
}
