use super::*;

/// Tests that a plan with details cannot be deleted before them.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn refuses_delete_while_details_remain() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, plan) = factory::helpers::create_plan_with_dependencies(db).await?;
    factory::create_plan_detail(db, plan.id, "Check in").await?;

    let repo = PlanRepository::new(db);

    assert!(repo.delete(plan.id).await.is_err());

    Ok(())
}

/// Tests deleting a plan after its details.
///
/// Expected: Ok(true) and the plan gone
#[tokio::test]
async fn deletes_plan_after_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, trip, plan) = factory::helpers::create_plan_with_dependencies(db).await?;
    factory::create_plan_detail(db, plan.id, "Check in").await?;

    let repo = PlanRepository::new(db);

    assert_eq!(repo.delete_details(plan.id).await?, 1);
    assert!(repo.delete(plan.id).await?);
    assert!(repo.get_by_id(trip.id, plan.id).await?.is_none());

    Ok(())
}

/// Tests clearing every plan of a trip, details first.
///
/// Expected: Ok with counts for both steps and no plans left
#[tokio::test]
async fn deletes_all_plans_of_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, trip, first) = factory::helpers::create_plan_with_dependencies(db).await?;
    let second = factory::create_plan(db, trip.id).await?;
    factory::create_plan_detail(db, first.id, "Pick up").await?;
    factory::create_plan_detail(db, second.id, "Check in").await?;
    factory::create_plan_detail(db, second.id, "Check out").await?;

    let repo = PlanRepository::new(db);

    assert_eq!(repo.delete_details_by_trip(trip.id).await?, 3);
    assert_eq!(repo.delete_by_trip(trip.id).await?, 2);
    assert!(repo.get_by_trip(trip.id).await?.is_empty());

    Ok(())
}
