use super::*;

/// Tests fetching one plan with its details.
///
/// Expected: Ok(Some) with both details
#[tokio::test]
async fn gets_plan_with_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, trip, plan) = factory::helpers::create_plan_with_dependencies(db).await?;
    factory::create_plan_detail(db, plan.id, "Check in").await?;
    factory::create_plan_detail(db, plan.id, "Check out").await?;

    let repo = PlanRepository::new(db);
    let found = repo.get_by_id(trip.id, plan.id).await?.unwrap();

    assert_eq!(found.plan_name, plan.plan_name);
    assert_eq!(found.plan_details.len(), 2);

    Ok(())
}

/// Tests that a plan is not visible through another trip's id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_plan_of_other_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _, plan) = factory::helpers::create_plan_with_dependencies(db).await?;
    let other_trip = factory::create_trip(db, user.id).await?;

    let repo = PlanRepository::new(db);

    assert!(repo.get_by_id(other_trip.id, plan.id).await?.is_none());
    assert!(repo.find_entity(other_trip.id, plan.id).await?.is_none());

    Ok(())
}
