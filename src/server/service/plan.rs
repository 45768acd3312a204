//! Plan aggregate service.
//!
//! Plan writes share a transaction with the trip range synchronization they trigger, so a plan
//! is never stored outside its trip's dates.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::plan::TimelineEntryDto,
    server::{
        data::{plan::PlanRepository, trip::TripRepository},
        error::AppError,
        model::plan::{CreatePlanParams, Plan, UpdatePlanParams},
        service::{
            timeline::{order_timeline, TimelineEntry},
            trip_range::sync_trip_range,
        },
        util::validate::require_ordered,
    },
};

fn plan_not_found() -> AppError {
    AppError::NotFound("Plan doesn't exist".to_string())
}

fn trip_not_found() -> AppError {
    AppError::NotFound("Trip doesn't exist".to_string())
}

pub struct PlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the trip's timeline: one entry per plan detail, or per plan without details,
    /// ordered by comparable instant.
    pub async fn get_timeline(&self, trip_id: i32) -> Result<Vec<TimelineEntryDto>, AppError> {
        let plans = PlanRepository::new(self.db).get_by_trip(trip_id).await?;

        Ok(order_timeline(&plans)
            .into_iter()
            .map(TimelineEntry::into_dto)
            .collect())
    }

    /// Gets a plan of a trip with its details.
    ///
    /// # Returns
    /// - `Ok(Plan)` - Plan found
    /// - `Err(AppError::NotFound)` - `"Plan doesn't exist"`
    pub async fn get_by_id(&self, trip_id: i32, id: i32) -> Result<Plan, AppError> {
        PlanRepository::new(self.db)
            .get_by_id(trip_id, id)
            .await?
            .ok_or_else(plan_not_found)
    }

    /// Creates a plan with its details and widens the trip range to cover it.
    ///
    /// # Returns
    /// - `Ok(Plan)` - Created plan
    /// - `Err(AppError::NotFound)` - Trip doesn't exist
    pub async fn create(&self, params: CreatePlanParams) -> Result<Plan, AppError> {
        let txn = self.db.begin().await?;

        if TripRepository::new(&txn)
            .find_entity(params.trip_id)
            .await?
            .is_none()
        {
            return Err(trip_not_found());
        }

        let plan = PlanRepository::new(&txn).create(params).await?;
        sync_trip_range(&txn, plan.trip_id, plan.start_date, plan.end_date).await?;

        txn.commit().await?;

        tracing::debug!(
            "Created plan {} in trip {} with {} details",
            plan.id,
            plan.trip_id,
            plan.plan_details.len()
        );

        Ok(plan)
    }

    /// Updates a plan, replacing its details when a new set is supplied.
    ///
    /// The trip range is re-synchronized against the updated plan.
    ///
    /// # Returns
    /// - `Ok(Plan)` - Updated plan as stored after commit
    /// - `Err(AppError::NotFound)` - Plan doesn't exist in this trip
    /// - `Err(AppError::Validation)` - Resulting start date after end date
    pub async fn update(&self, params: UpdatePlanParams) -> Result<Plan, AppError> {
        let txn = self.db.begin().await?;
        let repo = PlanRepository::new(&txn);

        let existing = repo
            .find_entity(params.trip_id, params.id)
            .await?
            .ok_or_else(plan_not_found)?;
        let start_date = params.start_date.unwrap_or(existing.start_date);
        if let Some(end_date) = params.end_date.or(existing.end_date) {
            require_ordered(&start_date, &end_date)?;
        }

        if let Some(details) = params.plan_details.clone() {
            repo.replace_details(params.id, details).await?;
        }
        let updated = repo.update(&params).await?.ok_or_else(plan_not_found)?;

        sync_trip_range(&txn, updated.trip_id, updated.start_date, updated.end_date).await?;

        txn.commit().await?;

        self.get_by_id(params.trip_id, params.id).await
    }

    /// Deletes a plan and its details. The trip range is left as is.
    ///
    /// # Returns
    /// - `Ok(())` - Plan deleted
    /// - `Err(AppError::NotFound)` - Plan doesn't exist in this trip
    pub async fn delete(&self, trip_id: i32, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = PlanRepository::new(&txn);

        if repo.find_entity(trip_id, id).await?.is_none() {
            return Err(plan_not_found());
        }

        repo.delete_details(id).await?;
        repo.delete(id).await?;

        txn.commit().await?;

        Ok(())
    }
}
