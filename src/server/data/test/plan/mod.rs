use crate::server::{
    data::plan::PlanRepository,
    model::plan::{CreatePlanParams, PlanDetailParams, PlanType, UpdatePlanParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, fixture};

mod create;
mod delete;
mod get_by_id;
mod get_by_trip;
mod update;

fn detail(plan_subtype: &str, from_name: &str) -> PlanDetailParams {
    PlanDetailParams {
        plan_subtype: plan_subtype.to_string(),
        from_name: Some(from_name.to_string()),
        from_place_id: None,
        from_utc_offset_minutes: None,
        to_name: None,
        to_place_id: None,
        to_utc_offset_minutes: None,
    }
}

fn empty_update(trip_id: i32, id: i32) -> UpdatePlanParams {
    UpdatePlanParams {
        id,
        trip_id,
        plan_type: None,
        plan_name: None,
        plan_place_id: None,
        start_date: None,
        end_date: None,
        description: None,
        city_name: None,
        utc_offset_minutes: None,
        plan_details: None,
    }
}
