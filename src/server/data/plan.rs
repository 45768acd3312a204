//! Plan data repository for database operations.
//!
//! Plans are read with a single left join against their details. The joined rows are flat, one
//! per detail (or one with null detail columns), and are folded back into `Plan` aggregates by
//! the row denormalizer.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::{
    data::denormalize::{denormalize, FlatRow},
    model::plan::{CreatePlanParams, Plan, PlanDetailParams, UpdatePlanParams},
};

/// One row of the plan/detail left join.
#[derive(Debug, FromQueryResult)]
struct PlanRow {
    id: i32,
    trip_id: i32,
    plan_type: String,
    plan_name: String,
    plan_place_id: Option<String>,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    description: Option<String>,
    city_name: String,
    utc_offset_minutes: i32,
    date_created: DateTime<Utc>,
    date_modified: Option<DateTime<Utc>>,
    plan_detail_id: Option<i32>,
    plan_subtype: Option<String>,
    from_name: Option<String>,
    from_place_id: Option<String>,
    from_utc_offset_minutes: Option<i32>,
    to_name: Option<String>,
    to_place_id: Option<String>,
    to_utc_offset_minutes: Option<i32>,
}

impl FlatRow for PlanRow {
    type Key = i32;
    type Parent = entity::trip_plan::Model;
    type Child = entity::plan_detail::Model;

    fn key(&self) -> i32 {
        self.id
    }

    fn into_parts(self) -> (Self::Parent, Option<Self::Child>) {
        let detail = match (self.plan_detail_id, self.plan_subtype) {
            (Some(detail_id), Some(plan_subtype)) => Some(entity::plan_detail::Model {
                id: detail_id,
                plan_id: self.id,
                plan_subtype,
                from_name: self.from_name,
                from_place_id: self.from_place_id,
                from_utc_offset_minutes: self.from_utc_offset_minutes,
                to_name: self.to_name,
                to_place_id: self.to_place_id,
                to_utc_offset_minutes: self.to_utc_offset_minutes,
            }),
            _ => None,
        };

        let plan = entity::trip_plan::Model {
            id: self.id,
            trip_id: self.trip_id,
            plan_type: self.plan_type,
            plan_name: self.plan_name,
            plan_place_id: self.plan_place_id,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            city_name: self.city_name,
            utc_offset_minutes: self.utc_offset_minutes,
            date_created: self.date_created,
            date_modified: self.date_modified,
        };

        (plan, detail)
    }
}

pub struct PlanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every plan of a trip with its details.
    ///
    /// Plans come back ordered by start date, end date, then id. This is storage order only;
    /// the timeline applies its own ordering per sub-event.
    ///
    /// # Returns
    /// - `Ok(Vec<Plan>)` - Plans of the trip, empty if none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_trip(&self, trip_id: i32) -> Result<Vec<Plan>, DbErr> {
        let rows = Self::joined()
            .filter(entity::trip_plan::Column::TripId.eq(trip_id))
            .into_model::<PlanRow>()
            .all(self.db)
            .await?;

        Ok(Self::assemble(rows))
    }

    /// Gets a plan of a trip with its details.
    ///
    /// # Returns
    /// - `Ok(Some(Plan))` - Plan found in this trip
    /// - `Ok(None)` - No such plan, or it belongs to another trip
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, trip_id: i32, id: i32) -> Result<Option<Plan>, DbErr> {
        let rows = Self::joined()
            .filter(entity::trip_plan::Column::TripId.eq(trip_id))
            .filter(entity::trip_plan::Column::Id.eq(id))
            .into_model::<PlanRow>()
            .all(self.db)
            .await?;

        Ok(Self::assemble(rows).into_iter().next())
    }

    /// Gets the bare plan row of a trip, without details.
    pub async fn find_entity(
        &self,
        trip_id: i32,
        id: i32,
    ) -> Result<Option<entity::trip_plan::Model>, DbErr> {
        entity::prelude::TripPlan::find_by_id(id)
            .filter(entity::trip_plan::Column::TripId.eq(trip_id))
            .one(self.db)
            .await
    }

    /// Inserts a plan followed by its details.
    ///
    /// # Returns
    /// - `Ok(Plan)` - The created plan with the details as inserted
    /// - `Err(DbErr)` - Database error on any insert
    pub async fn create(&self, params: CreatePlanParams) -> Result<Plan, DbErr> {
        let plan = entity::trip_plan::ActiveModel {
            trip_id: ActiveValue::Set(params.trip_id),
            plan_type: ActiveValue::Set(params.plan_type.as_str().to_string()),
            plan_name: ActiveValue::Set(params.plan_name),
            plan_place_id: ActiveValue::Set(params.plan_place_id),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            description: ActiveValue::Set(params.description),
            city_name: ActiveValue::Set(params.city_name),
            utc_offset_minutes: ActiveValue::Set(params.utc_offset_minutes),
            date_created: ActiveValue::Set(Utc::now()),
            date_modified: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let details = self.insert_details(plan.id, params.plan_details).await?;

        Ok(Plan::from_entity(plan, details))
    }

    /// Updates the scalar columns supplied in `params` and stamps `date_modified`.
    ///
    /// Details are left untouched; see `replace_details`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated plan row
    /// - `Ok(None)` - Plan not found in this trip
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        params: &UpdatePlanParams,
    ) -> Result<Option<entity::trip_plan::Model>, DbErr> {
        let Some(plan) = self.find_entity(params.trip_id, params.id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::trip_plan::ActiveModel = plan.into();

        if let Some(plan_type) = &params.plan_type {
            active_model.plan_type = ActiveValue::Set(plan_type.as_str().to_string());
        }
        if let Some(plan_name) = &params.plan_name {
            active_model.plan_name = ActiveValue::Set(plan_name.clone());
        }
        if let Some(plan_place_id) = &params.plan_place_id {
            active_model.plan_place_id = ActiveValue::Set(Some(plan_place_id.clone()));
        }
        if let Some(start_date) = params.start_date {
            active_model.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = params.end_date {
            active_model.end_date = ActiveValue::Set(Some(end_date));
        }
        if let Some(description) = &params.description {
            active_model.description = ActiveValue::Set(Some(description.clone()));
        }
        if let Some(city_name) = &params.city_name {
            active_model.city_name = ActiveValue::Set(city_name.clone());
        }
        if let Some(utc_offset_minutes) = params.utc_offset_minutes {
            active_model.utc_offset_minutes = ActiveValue::Set(utc_offset_minutes);
        }
        active_model.date_modified = ActiveValue::Set(Some(Utc::now()));

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Gets a plan's details in insertion order.
    pub async fn get_details(&self, plan_id: i32) -> Result<Vec<entity::plan_detail::Model>, DbErr> {
        entity::prelude::PlanDetail::find()
            .filter(entity::plan_detail::Column::PlanId.eq(plan_id))
            .order_by_asc(entity::plan_detail::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every detail of a plan, then inserts the replacement set.
    pub async fn replace_details(
        &self,
        plan_id: i32,
        details: Vec<PlanDetailParams>,
    ) -> Result<Vec<entity::plan_detail::Model>, DbErr> {
        self.delete_details(plan_id).await?;

        self.insert_details(plan_id, details).await
    }

    /// Deletes every detail of a plan.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_details(&self, plan_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::PlanDetail::delete_many()
            .filter(entity::plan_detail::Column::PlanId.eq(plan_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the plan row. Its details must already be gone.
    ///
    /// # Returns
    /// - `Ok(true)` - Plan deleted
    /// - `Ok(false)` - No plan with this id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TripPlan::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes the details of every plan in a trip.
    pub async fn delete_details_by_trip(&self, trip_id: i32) -> Result<u64, DbErr> {
        let plan_ids: Vec<i32> = entity::prelude::TripPlan::find()
            .filter(entity::trip_plan::Column::TripId.eq(trip_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|plan| plan.id)
            .collect();

        if plan_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::PlanDetail::delete_many()
            .filter(entity::plan_detail::Column::PlanId.is_in(plan_ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every plan of a trip. Their details must already be gone.
    pub async fn delete_by_trip(&self, trip_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TripPlan::delete_many()
            .filter(entity::trip_plan::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    fn joined() -> Select<entity::trip_plan::Entity> {
        entity::prelude::TripPlan::find()
            .column_as(entity::plan_detail::Column::Id, "plan_detail_id")
            .column_as(entity::plan_detail::Column::PlanSubtype, "plan_subtype")
            .column_as(entity::plan_detail::Column::FromName, "from_name")
            .column_as(entity::plan_detail::Column::FromPlaceId, "from_place_id")
            .column_as(
                entity::plan_detail::Column::FromUtcOffsetMinutes,
                "from_utc_offset_minutes",
            )
            .column_as(entity::plan_detail::Column::ToName, "to_name")
            .column_as(entity::plan_detail::Column::ToPlaceId, "to_place_id")
            .column_as(
                entity::plan_detail::Column::ToUtcOffsetMinutes,
                "to_utc_offset_minutes",
            )
            .join(
                JoinType::LeftJoin,
                entity::trip_plan::Relation::PlanDetail.def(),
            )
            .order_by_asc(entity::trip_plan::Column::StartDate)
            .order_by_asc(entity::trip_plan::Column::EndDate)
            .order_by_asc(entity::trip_plan::Column::Id)
            .order_by_asc(entity::plan_detail::Column::Id)
    }

    fn assemble(rows: Vec<PlanRow>) -> Vec<Plan> {
        denormalize(rows)
            .into_iter()
            .map(|nested| Plan::from_entity(nested.parent, nested.children))
            .collect()
    }

    async fn insert_details(
        &self,
        plan_id: i32,
        details: Vec<PlanDetailParams>,
    ) -> Result<Vec<entity::plan_detail::Model>, DbErr> {
        let mut inserted = Vec::with_capacity(details.len());

        for detail in details {
            let model = entity::plan_detail::ActiveModel {
                plan_id: ActiveValue::Set(plan_id),
                plan_subtype: ActiveValue::Set(detail.plan_subtype),
                from_name: ActiveValue::Set(detail.from_name),
                from_place_id: ActiveValue::Set(detail.from_place_id),
                from_utc_offset_minutes: ActiveValue::Set(detail.from_utc_offset_minutes),
                to_name: ActiveValue::Set(detail.to_name),
                to_place_id: ActiveValue::Set(detail.to_place_id),
                to_utc_offset_minutes: ActiveValue::Set(detail.to_utc_offset_minutes),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            inserted.push(model);
        }

        Ok(inserted)
    }
}
