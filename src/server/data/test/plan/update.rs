use super::*;

/// Tests that only supplied columns change and the modification stamp is set.
///
/// Expected: Ok(Some) with new end date, name unchanged
#[tokio::test]
async fn updates_supplied_columns_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, trip, plan) = factory::helpers::create_plan_with_dependencies(db).await?;

    let repo = PlanRepository::new(db);
    let new_end = fixture::plan::at(2019, 4, 3, 12);
    let updated = repo
        .update(&UpdatePlanParams {
            end_date: Some(new_end),
            ..empty_update(trip.id, plan.id)
        })
        .await?
        .unwrap();

    assert_eq!(updated.end_date, Some(new_end));
    assert_eq!(updated.plan_name, plan.plan_name);
    assert!(updated.date_modified.is_some());

    Ok(())
}

/// Tests replacing a plan's details.
///
/// Expected: Ok with only the replacement details stored
#[tokio::test]
async fn replaces_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, plan) = factory::helpers::create_plan_with_dependencies(db).await?;
    factory::create_plan_detail(db, plan.id, "Check in").await?;

    let repo = PlanRepository::new(db);
    repo.replace_details(plan.id, vec![detail("Pick up", "Airport")])
        .await?;

    let details = repo.get_details(plan.id).await?;
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].plan_subtype, "Pick up");
    assert_eq!(details[0].from_name.as_deref(), Some("Airport"));

    Ok(())
}

/// Tests updating a plan through the wrong trip.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_plan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, trip, plan) = factory::helpers::create_plan_with_dependencies(db).await?;

    let repo = PlanRepository::new(db);
    let result = repo
        .update(&UpdatePlanParams {
            plan_name: Some("Moved".to_string()),
            ..empty_update(trip.id + 1, plan.id)
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
