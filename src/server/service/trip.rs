//! Trip aggregate service.
//!
//! Every write runs in one transaction. Returning early with `?` drops the transaction, which
//! rolls back whatever part of the aggregate was already written.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{plan::PlanRepository, trip::TripRepository},
    error::AppError,
    model::trip::{CreateTripParams, Trip, UpdateTripParams},
    service::trip_range::TripRange,
    util::validate::require_ordered,
};

fn trip_not_found() -> AppError {
    AppError::NotFound("Trip doesn't exist".to_string())
}

pub struct TripService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every trip of a user with destination cities.
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<Trip>, AppError> {
        Ok(TripRepository::new(self.db).get_all_by_user(user_id).await?)
    }

    /// Gets a trip with destination cities.
    ///
    /// # Returns
    /// - `Ok(Trip)` - Trip found
    /// - `Err(AppError::NotFound)` - `"Trip doesn't exist"`
    pub async fn get_by_id(&self, id: i32) -> Result<Trip, AppError> {
        TripRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(trip_not_found)
    }

    /// Creates a trip and its destination cities.
    pub async fn create(&self, params: CreateTripParams) -> Result<Trip, AppError> {
        let txn = self.db.begin().await?;

        let trip = TripRepository::new(&txn).create(params).await?;

        txn.commit().await?;

        tracing::debug!(
            "Created trip {} with {} destination cities",
            trip.id,
            trip.dest_cities.len()
        );

        Ok(trip)
    }

    /// Updates a trip, replacing its destination cities when a new set is supplied.
    ///
    /// Dates are checked against the stored values for whichever side is not supplied. The
    /// resulting range must still cover every plan of the trip.
    ///
    /// # Returns
    /// - `Ok(Trip)` - Updated trip as stored after commit
    /// - `Err(AppError::NotFound)` - Trip doesn't exist
    /// - `Err(AppError::Validation)` - Resulting start date after end date, or a plan outside
    ///   the resulting range
    pub async fn update(&self, params: UpdateTripParams) -> Result<Trip, AppError> {
        let txn = self.db.begin().await?;
        let repo = TripRepository::new(&txn);

        let existing = repo.find_entity(params.id).await?.ok_or_else(trip_not_found)?;
        let range = TripRange {
            start_date: params.start_date.unwrap_or(existing.start_date),
            end_date: params.end_date.unwrap_or(existing.end_date),
        };
        require_ordered(&range.start_date, &range.end_date)?;

        if params.start_date.is_some() || params.end_date.is_some() {
            let plans = PlanRepository::new(&txn).get_by_trip(params.id).await?;
            if let Some(plan) = plans
                .iter()
                .find(|plan| range.covering(plan.start_date, plan.end_date).is_some())
            {
                return Err(AppError::Validation(format!(
                    "Trip dates must cover plan '{}'",
                    plan.plan_name
                )));
            }
        }

        if let Some(cities) = params.dest_cities.clone() {
            repo.replace_dest_cities(params.id, cities).await?;
        }
        repo.update(&params).await?.ok_or_else(trip_not_found)?;

        txn.commit().await?;

        self.get_by_id(params.id).await
    }

    /// Deletes a trip with its destination cities, plans and plan details.
    ///
    /// Children are removed before their parents.
    ///
    /// # Returns
    /// - `Ok(())` - Aggregate deleted
    /// - `Err(AppError::NotFound)` - Trip doesn't exist
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let trip_repo = TripRepository::new(&txn);
        let plan_repo = PlanRepository::new(&txn);

        if trip_repo.find_entity(id).await?.is_none() {
            return Err(trip_not_found());
        }

        let cities = trip_repo.delete_dest_cities(id).await?;
        let details = plan_repo.delete_details_by_trip(id).await?;
        let plans = plan_repo.delete_by_trip(id).await?;
        trip_repo.delete(id).await?;

        txn.commit().await?;

        tracing::debug!(
            "Deleted trip {} ({} cities, {} plans, {} plan details)",
            id,
            cities,
            plans,
            details
        );

        Ok(())
    }
}
