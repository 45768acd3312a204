use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PlanDetailDto {
    pub id: i32,
    pub plan_id: i32,
    pub plan_subtype: String,
    pub from_name: Option<String>,
    pub from_place_id: Option<String>,
    pub from_utc_offset_minutes: Option<i32>,
    pub to_name: Option<String>,
    pub to_place_id: Option<String>,
    pub to_utc_offset_minutes: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct NewPlanDetailDto {
    pub plan_subtype: Option<String>,
    pub from_name: Option<String>,
    pub from_place_id: Option<String>,
    pub from_utc_offset_minutes: Option<i32>,
    pub to_name: Option<String>,
    pub to_place_id: Option<String>,
    pub to_utc_offset_minutes: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PlanDto {
    pub id: i32,
    pub trip_id: i32,
    pub plan_type: String,
    pub plan_name: String,
    pub plan_place_id: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub city_name: String,
    pub utc_offset_minutes: i32,
    pub date_created: DateTime<Utc>,
    pub date_modified: Option<DateTime<Utc>>,
    pub plan_details: Vec<PlanDetailDto>,
}

/// Body for creating a plan. Timestamps are RFC 3339.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct CreatePlanDto {
    pub plan_type: Option<String>,
    pub plan_name: Option<String>,
    pub plan_place_id: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub city_name: Option<String>,
    pub utc_offset_minutes: Option<i32>,
    pub plan_details: Option<Vec<NewPlanDetailDto>>,
}

/// Body for updating a plan. Supplying `plan_details` replaces the whole set.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct UpdatePlanDto {
    pub plan_type: Option<String>,
    pub plan_name: Option<String>,
    pub plan_place_id: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub city_name: Option<String>,
    pub utc_offset_minutes: Option<i32>,
    pub plan_details: Option<Vec<NewPlanDetailDto>>,
}

/// One sub-event on a trip's timeline.
///
/// Carries the owning plan's fields, the detail's fields when the entry comes from a plan
/// detail, and the instant the entry is ordered by.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TimelineEntryDto {
    pub id: i32,
    pub trip_id: i32,
    pub plan_type: String,
    pub plan_name: String,
    pub plan_place_id: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub city_name: String,
    pub utc_offset_minutes: i32,
    pub plan_detail_id: Option<i32>,
    pub plan_subtype: Option<String>,
    pub from_name: Option<String>,
    pub from_place_id: Option<String>,
    pub from_utc_offset_minutes: Option<i32>,
    pub to_name: Option<String>,
    pub to_place_id: Option<String>,
    pub to_utc_offset_minutes: Option<i32>,
    pub comparable_date: DateTime<Utc>,
}
